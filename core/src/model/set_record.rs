use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One row of an exported workout log, kept as text until it is parsed.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct RawRow {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Exercise")]
    pub exercise: String,
    #[serde(rename = "Reps")]
    pub reps: String,
    #[serde(rename = "Weight(kg)")]
    pub weight: String,
    #[serde(rename = "Duration(s)", default)]
    pub duration: String,
    #[serde(rename = "Distance(m)", default)]
    pub distance: String,
    #[serde(rename = "Incline", default)]
    pub incline: String,
    #[serde(rename = "Resistance", default)]
    pub resistance: String,
    #[serde(rename = "isWarmup")]
    pub is_warmup: String,
    #[serde(rename = "Note", default)]
    pub note: String,
    #[serde(rename = "multiplier")]
    pub multiplier: String,
}

/// A single logged set after validation.
#[derive(Debug, Clone, PartialEq)]
pub struct SetRecord {
    pub exercise: String,
    pub date: NaiveDate,
    pub weight_kg: f64,
    pub reps: u32,
    pub is_warmup: bool,
    pub multiplier: f64,
}

impl SetRecord {
    #[cfg(test)]
    pub fn working(exercise: &str, date: NaiveDate, weight_kg: f64, reps: u32) -> Self {
        Self {
            exercise: exercise.to_string(),
            date,
            weight_kg,
            reps,
            is_warmup: false,
            multiplier: 1.0,
        }
    }

    pub fn load(&self) -> f64 {
        self.weight_kg * f64::from(self.reps) * self.multiplier
    }
}
