use std::collections::BTreeMap;

use anyhow::Result;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;

use crate::model::aggregate::{ExerciseAggregate, WeeklyMetric, WorkoutAggregates};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct WeekSummary {
    pub max: f64,
    pub sets: u32,
    #[serde(rename = "maxReps")]
    pub max_reps: u32,
    pub load: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ExerciseSummary {
    pub muscle: String,
    pub secondary: Vec<String>,
    /// Keyed by week-start date, `YYYY-MM-DD`.
    pub weeks: BTreeMap<String, WeekSummary>,
}

impl ExerciseSummary {
    pub fn total_sets(&self) -> u32 {
        self.weeks.values().map(|w| w.sets).sum()
    }
}

/// Dashboard-ready view of one archetype's aggregates.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(transparent)]
pub struct SummaryDocument {
    pub exercises: IndexMap<String, ExerciseSummary>,
}

impl SummaryDocument {
    pub fn week_entries(&self) -> usize {
        self.exercises.values().map(|e| e.weeks.len()).sum()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// JSON with four-space indentation, as embedded in dashboards.
    pub fn to_embedded_json(&self) -> Result<String> {
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut ser)?;
        Ok(String::from_utf8(buf)?)
    }
}

/// Rounds to one decimal from the exact binary value, ties to even:
/// `256.25` becomes `256.2` and `1.15` (stored just below) becomes `1.1`.
pub fn round_one_decimal(value: f64) -> f64 {
    format!("{value:.1}").parse().unwrap_or(value)
}

impl From<&WeeklyMetric> for WeekSummary {
    fn from(metric: &WeeklyMetric) -> Self {
        Self {
            max: metric.max_weight_kg,
            sets: metric.set_count,
            max_reps: metric.max_reps,
            load: round_one_decimal(metric.total_load),
        }
    }
}

impl From<&ExerciseAggregate> for ExerciseSummary {
    fn from(aggregate: &ExerciseAggregate) -> Self {
        Self {
            muscle: aggregate.primary_muscle.clone(),
            secondary: aggregate.secondary_muscles.clone(),
            weeks: aggregate
                .weeks
                .iter()
                .map(|(week, metric)| (week.format("%Y-%m-%d").to_string(), metric.into()))
                .collect(),
        }
    }
}

/// Renders aggregates into the summary document. Loads are rounded here and
/// nowhere else.
pub fn serialize(aggregates: &WorkoutAggregates) -> SummaryDocument {
    SummaryDocument {
        exercises: aggregates
            .exercises
            .iter()
            .map(|(name, aggregate)| (name.clone(), aggregate.into()))
            .collect(),
    }
}
