use std::collections::HashMap;

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MuscleMapping {
    #[serde(rename = "muscle")]
    pub primary_muscle: String,
    #[serde(rename = "secondary", default)]
    pub secondary_muscles: Vec<String>,
}

impl MuscleMapping {
    pub fn new(primary: &str, secondary: &[&str]) -> Self {
        Self {
            primary_muscle: primary.to_string(),
            secondary_muscles: secondary.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Lookup from exercise name to the muscles it trains.
///
/// Serializes as `{ "<exercise>": { "muscle": ..., "secondary": [...] } }`, the
/// same shape the summary document uses for its muscle fields.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(transparent)]
pub struct ClassificationTable {
    entries: HashMap<String, MuscleMapping>,
}

impl ClassificationTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, exercise: &str, primary: &str, secondary: &[&str]) -> Self {
        self.insert(exercise, MuscleMapping::new(primary, secondary));
        self
    }

    pub fn insert(&mut self, exercise: &str, mapping: MuscleMapping) {
        self.entries.insert(exercise.trim().to_string(), mapping);
    }

    pub fn get(&self, exercise: &str) -> Option<&MuscleMapping> {
        self.entries.get(exercise)
    }

    pub fn contains(&self, exercise: &str) -> bool {
        self.entries.contains_key(exercise)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, MuscleMapping)> for ClassificationTable {
    fn from_iter<I: IntoIterator<Item = (String, MuscleMapping)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (exercise, mapping) in iter {
            table.insert(&exercise, mapping);
        }
        table
    }
}
