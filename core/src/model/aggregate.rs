use std::collections::BTreeMap;

use chrono::NaiveDate;
use indexmap::IndexMap;

use crate::model::classification::MuscleMapping;
use crate::model::set_record::SetRecord;

/// Rolled-up metrics for one exercise in one week.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WeeklyMetric {
    pub max_weight_kg: f64,
    pub set_count: u32,
    pub max_reps: u32,
    /// Unrounded sum of `weight * reps * multiplier`.
    pub total_load: f64,
}

impl WeeklyMetric {
    pub fn fold(&mut self, record: &SetRecord) {
        self.max_weight_kg = self.max_weight_kg.max(record.weight_kg);
        self.set_count += 1;
        self.max_reps = self.max_reps.max(record.reps);
        self.total_load += record.load();
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseAggregate {
    pub primary_muscle: String,
    pub secondary_muscles: Vec<String>,
    pub weeks: BTreeMap<NaiveDate, WeeklyMetric>,
}

impl ExerciseAggregate {
    pub fn new(mapping: &MuscleMapping) -> Self {
        Self {
            primary_muscle: mapping.primary_muscle.clone(),
            secondary_muscles: mapping.secondary_muscles.clone(),
            weeks: BTreeMap::new(),
        }
    }

    #[cfg(test)]
    pub fn total_sets(&self) -> u32 {
        self.weeks.values().map(|w| w.set_count).sum()
    }
}

/// Final, read-only result of one aggregation run.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WorkoutAggregates {
    /// Exercises in order of their first contributing set.
    pub exercises: IndexMap<String, ExerciseAggregate>,
    pub warmup_sets: usize,
    /// Sets skipped because their exercise had no classification, by name.
    pub unknown_exercises: BTreeMap<String, usize>,
}

impl WorkoutAggregates {
    pub fn get(&self, exercise: &str) -> Option<&ExerciseAggregate> {
        self.exercises.get(exercise)
    }

    pub fn week_entries(&self) -> usize {
        self.exercises.values().map(|e| e.weeks.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }
}
