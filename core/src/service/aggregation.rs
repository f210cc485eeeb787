use std::collections::btree_map::Entry;

use tracing::{debug, warn};

use crate::model::aggregate::{ExerciseAggregate, WorkoutAggregates};
use crate::model::classification::ClassificationTable;
use crate::model::set_record::SetRecord;
use crate::time::week_start;

/// What happened to a record handed to [`WeeklyAggregator::fold`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FoldOutcome {
    Counted,
    Warmup,
    UnknownExercise,
}

/// Folds working sets into per-exercise, per-week metrics.
///
/// One aggregator serves one log. Muscles are copied from the classification
/// table when an exercise is first seen and never re-read afterwards.
pub struct WeeklyAggregator<'a> {
    table: &'a ClassificationTable,
    state: WorkoutAggregates,
}

impl<'a> WeeklyAggregator<'a> {
    pub fn new(table: &'a ClassificationTable) -> Self {
        Self {
            table,
            state: WorkoutAggregates::default(),
        }
    }

    pub fn fold(&mut self, record: &SetRecord) -> FoldOutcome {
        if record.is_warmup {
            self.state.warmup_sets += 1;
            return FoldOutcome::Warmup;
        }

        let table = self.table;
        if !self.state.exercises.contains_key(&record.exercise) {
            let Some(mapping) = table.get(&record.exercise) else {
                self.skip_unknown(&record.exercise);
                return FoldOutcome::UnknownExercise;
            };
            self.state
                .exercises
                .insert(record.exercise.clone(), ExerciseAggregate::new(mapping));
        }

        if let Some(aggregate) = self.state.exercises.get_mut(&record.exercise) {
            aggregate
                .weeks
                .entry(week_start(record.date))
                .or_default()
                .fold(record);
        }

        FoldOutcome::Counted
    }

    pub fn finish(self) -> WorkoutAggregates {
        self.state
    }

    fn skip_unknown(&mut self, exercise: &str) {
        match self.state.unknown_exercises.entry(exercise.to_string()) {
            Entry::Vacant(entry) => {
                warn!(exercise, "unknown exercise, skipping its sets");
                entry.insert(1);
            }
            Entry::Occupied(mut entry) => {
                debug!(exercise, "unknown exercise, skipping set");
                *entry.get_mut() += 1;
            }
        }
    }
}

/// Aggregates a whole log against `table`.
pub fn aggregate<'r, I>(records: I, table: &ClassificationTable) -> WorkoutAggregates
where
    I: IntoIterator<Item = &'r SetRecord>,
{
    let mut aggregator = WeeklyAggregator::new(table);
    for record in records {
        aggregator.fold(record);
    }
    aggregator.finish()
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::model::aggregate::WeeklyMetric;

    const SQUAT: &str = "Barbell Back Squat";

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn table() -> ClassificationTable {
        ClassificationTable::new()
            .with(SQUAT, "Quadriceps", &["Hamstrings", "Glutes"])
            .with("Dumbbell Shoulder Press", "Shoulders", &["Triceps"])
    }

    fn warmup(exercise: &str, date: NaiveDate, weight: f64, reps: u32) -> SetRecord {
        SetRecord {
            is_warmup: true,
            ..SetRecord::working(exercise, date, weight, reps)
        }
    }

    fn sample_log() -> Vec<SetRecord> {
        let mut press = SetRecord::working("Dumbbell Shoulder Press", date(2025, 1, 8), 16.0, 12);
        press.multiplier = 2.0;
        vec![
            warmup(SQUAT, date(2025, 1, 6), 60.0, 8),
            SetRecord::working(SQUAT, date(2025, 1, 6), 100.0, 5),
            SetRecord::working(SQUAT, date(2025, 1, 8), 105.0, 5),
            press,
            warmup("Dumbbell Shoulder Press", date(2025, 1, 8), 10.0, 10),
            SetRecord::working(SQUAT, date(2025, 1, 13), 107.5, 3),
            SetRecord::working("Zercher Squat", date(2025, 1, 13), 80.0, 5),
        ]
    }

    #[test]
    fn test_two_sets_same_monday() {
        let records = vec![
            SetRecord::working(SQUAT, date(2025, 1, 6), 100.0, 5),
            SetRecord::working(SQUAT, date(2025, 1, 6), 105.0, 5),
        ];
        let result = aggregate(&records, &table());
        let week = result.get(SQUAT).unwrap().weeks[&date(2025, 1, 6)];

        assert_eq!(week.set_count, 2);
        assert_eq!(week.max_reps, 5);
        assert_approx_eq!(week.max_weight_kg, 105.0);
        assert_approx_eq!(week.total_load, 1025.0);
    }

    #[test]
    fn test_sunday_and_monday_split_weeks() {
        let records = vec![
            SetRecord::working(SQUAT, date(2025, 1, 5), 100.0, 5),
            SetRecord::working(SQUAT, date(2025, 1, 6), 100.0, 5),
        ];
        let result = aggregate(&records, &table());
        let weeks: Vec<_> = result.get(SQUAT).unwrap().weeks.keys().copied().collect();

        assert_eq!(weeks, vec![date(2024, 12, 30), date(2025, 1, 6)]);
    }

    #[test]
    fn test_single_set_load() {
        let records = vec![SetRecord::working(SQUAT, date(2025, 2, 3), 50.0, 10)];
        let result = aggregate(&records, &table());

        assert_approx_eq!(result.get(SQUAT).unwrap().weeks[&date(2025, 2, 3)].total_load, 500.0);
    }

    #[test]
    fn test_warmups_never_contribute() {
        let with_warmups = aggregate(&sample_log(), &table());
        let working: Vec<_> = sample_log().into_iter().filter(|r| !r.is_warmup).collect();
        let without_warmups = aggregate(&working, &table());

        assert_eq!(with_warmups.exercises, without_warmups.exercises);
        assert_eq!(with_warmups.warmup_sets, 2);
        assert_eq!(without_warmups.warmup_sets, 0);
    }

    #[test]
    fn test_warmup_only_exercise_is_absent() {
        let records = vec![warmup(SQUAT, date(2025, 1, 6), 60.0, 8)];
        let result = aggregate(&records, &table());

        assert!(result.is_empty());
        assert_eq!(result.warmup_sets, 1);
    }

    #[test]
    fn test_unknown_exercise_is_skipped_and_counted() {
        let mut records = sample_log();
        records.push(SetRecord::working("Zercher Squat", date(2025, 1, 14), 85.0, 5));
        let result = aggregate(&records, &table());

        assert!(result.get("Zercher Squat").is_none());
        assert_eq!(result.unknown_exercises.get("Zercher Squat"), Some(&2));
        assert_eq!(result.get(SQUAT).unwrap().total_sets(), 3);
    }

    #[test]
    fn test_fold_outcomes() {
        let table = table();
        let mut aggregator = WeeklyAggregator::new(&table);

        assert_eq!(
            aggregator.fold(&warmup(SQUAT, date(2025, 1, 6), 60.0, 8)),
            FoldOutcome::Warmup
        );
        assert_eq!(
            aggregator.fold(&SetRecord::working("Nope", date(2025, 1, 6), 1.0, 1)),
            FoldOutcome::UnknownExercise
        );
        assert_eq!(
            aggregator.fold(&SetRecord::working(SQUAT, date(2025, 1, 6), 100.0, 5)),
            FoldOutcome::Counted
        );
    }

    #[test]
    fn test_muscles_captured_on_first_set() {
        let result = aggregate(&sample_log(), &table());
        let squat = result.get(SQUAT).unwrap();

        assert_eq!(squat.primary_muscle, "Quadriceps");
        assert_eq!(squat.secondary_muscles, vec!["Hamstrings", "Glutes"]);
    }

    #[test]
    fn test_exercises_keep_first_appearance_order() {
        let result = aggregate(&sample_log(), &table());
        let names: Vec<_> = result.exercises.keys().cloned().collect();

        assert_eq!(names, vec![SQUAT.to_string(), "Dumbbell Shoulder Press".to_string()]);
    }

    #[test]
    fn test_multiplier_scales_load() {
        let result = aggregate(&sample_log(), &table());
        let press = result.get("Dumbbell Shoulder Press").unwrap().weeks[&date(2025, 1, 6)];

        assert_approx_eq!(press.max_weight_kg, 16.0);
        assert_approx_eq!(press.total_load, 384.0);
    }

    #[rstest]
    #[case::ascending(&[(100.0, 5), (105.0, 3), (110.0, 8)])]
    #[case::descending(&[(110.0, 8), (105.0, 3), (100.0, 5)])]
    #[case::mixed(&[(105.0, 3), (110.0, 8), (100.0, 5)])]
    fn test_maxima_non_decreasing_and_order_independent(#[case] sets: &[(f64, u32)]) {
        let mut metric = WeeklyMetric::default();
        let mut previous = metric;
        for (weight, reps) in sets {
            metric.fold(&SetRecord::working(SQUAT, date(2025, 1, 6), *weight, *reps));
            assert!(metric.max_weight_kg >= previous.max_weight_kg);
            assert!(metric.max_reps >= previous.max_reps);
            previous = metric;
        }

        assert_eq!(metric.set_count, 3);
        assert_eq!(metric.max_reps, 8);
        assert_approx_eq!(metric.max_weight_kg, 110.0);
        assert_approx_eq!(metric.total_load, 100.0 * 5.0 + 105.0 * 3.0 + 110.0 * 8.0);
    }

    #[test]
    fn test_record_order_does_not_matter() {
        let forward = aggregate(&sample_log(), &table());
        let mut reversed_log = sample_log();
        reversed_log.reverse();
        let reversed = aggregate(&reversed_log, &table());

        for (name, aggregate) in &forward.exercises {
            let other = reversed.get(name).unwrap();
            assert_eq!(
                aggregate.weeks.keys().collect::<Vec<_>>(),
                other.weeks.keys().collect::<Vec<_>>()
            );
            for (week, metric) in &aggregate.weeks {
                let other_metric = other.weeks[week];
                assert_eq!(metric.set_count, other_metric.set_count);
                assert_eq!(metric.max_reps, other_metric.max_reps);
                assert_approx_eq!(metric.max_weight_kg, other_metric.max_weight_kg);
                assert_approx_eq!(metric.total_load, other_metric.total_load);
            }
        }
    }
}
