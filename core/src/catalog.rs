use crate::model::classification::{ClassificationTable, MuscleMapping};

/// (exercise, primary muscle, secondary muscles)
const EXERCISES: &[(&str, &str, &[&str])] = &[
    // Quadriceps
    ("Barbell Back Squat", "Quadriceps", &["Hamstrings", "Glutes"]),
    ("Barbell Front Squat", "Quadriceps", &["Core"]),
    ("Bulgarian Split Squat", "Quadriceps", &["Glutes"]),
    ("Leg Press", "Quadriceps", &[]),
    ("Leg Extension", "Quadriceps", &[]),
    ("Hack Squat", "Quadriceps", &[]),
    // Hamstrings
    ("Romanian Deadlift", "Hamstrings", &["Back", "Glutes"]),
    ("Barbell Deadlift", "Hamstrings", &["Back", "Glutes"]),
    ("Sumo Deadlift", "Hamstrings", &["Back", "Glutes"]),
    ("Leg Curl", "Hamstrings", &[]),
    ("Nordic Hamstring Curl", "Hamstrings", &[]),
    ("Seated Back Extension", "Hamstrings", &["Back", "Glutes"]),
    // Calves
    ("Standing Calf Raise", "Calves", &[]),
    ("Seated Calf Raise", "Calves", &[]),
    ("Seated Machine Calf Press", "Calves", &[]),
    ("Calf Press", "Calves", &[]),
    // Glutes
    ("Machine Hip Adductor", "Glutes", &[]),
    ("Machine Hip Abductor", "Glutes", &[]),
    ("Glute Kickback Machine", "Glutes", &[]),
    // Chest
    ("Barbell Bench Press", "Chest", &["Triceps", "Shoulders"]),
    ("Barbell Incline Bench Press", "Chest", &["Triceps", "Shoulders"]),
    ("Dumbbell Bench Press", "Chest", &["Triceps", "Shoulders"]),
    ("Dumbbell Incline Bench Press", "Chest", &["Triceps", "Shoulders"]),
    ("Incline Dumbbell Bench Press", "Chest", &["Triceps", "Shoulders"]),
    ("Dumbbell Incline Fly", "Chest", &["Shoulders"]),
    ("Cable Chest Fly", "Chest", &["Shoulders"]),
    ("Pec Deck Machine", "Chest", &[]),
    // Back
    ("Bent Over Barbell Row", "Back", &["Biceps"]),
    ("Pendlay Row", "Back", &["Biceps"]),
    ("T-Bar Row", "Back", &["Biceps"]),
    ("Seated Cable Row", "Back", &["Biceps"]),
    ("Lat Pulldown", "Back", &["Biceps"]),
    ("Pull Up", "Back", &["Biceps"]),
    ("Barbell Shrug", "Back", &[]),
    ("Face Pull", "Back", &["Shoulders"]),
    // Shoulders
    ("Barbell Shoulder Press", "Shoulders", &["Triceps"]),
    ("Dumbbell Shoulder Press", "Shoulders", &["Triceps"]),
    ("Dumbbell Lateral Raise", "Shoulders", &[]),
    ("Cable Lateral Raise", "Shoulders", &[]),
    // Biceps
    ("Barbell Curl", "Biceps", &[]),
    ("Barbell Bicep Drag Curl", "Biceps", &[]),
    ("Incline Dumbbell Curl", "Biceps", &[]),
    ("Hammer Curl", "Biceps", &[]),
    ("Preacher Curl", "Biceps", &[]),
    // Triceps
    ("Cable Rope Overhead Triceps Extension", "Triceps", &[]),
    ("Overhead Triceps Extension", "Triceps", &[]),
    ("Cable Triceps Pushdown", "Triceps", &[]),
    ("Close-Grip Bench Press", "Triceps", &["Chest"]),
    ("Dip", "Triceps", &["Chest"]),
];

/// The built-in exercise classification.
pub fn default_classification() -> ClassificationTable {
    EXERCISES
        .iter()
        .map(|(exercise, primary, secondary)| {
            (exercise.to_string(), MuscleMapping::new(primary, secondary))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_classification_has_every_entry() {
        let table = default_classification();
        assert_eq!(table.len(), EXERCISES.len());
    }

    #[test]
    fn test_default_classification_lookup() {
        let table = default_classification();
        let squat = table.get("Barbell Back Squat").unwrap();
        assert_eq!(squat.primary_muscle, "Quadriceps");
        assert_eq!(squat.secondary_muscles, vec!["Hamstrings", "Glutes"]);
        assert_eq!(table.get("Barbell Front Squat").unwrap().secondary_muscles, vec!["Core"]);
        assert!(!table.contains("Zercher Squat"));
    }
}
