use std::str::FromStr;

use crate::error::{MalformedRowError, RowField};
use crate::model::set_record::{RawRow, SetRecord};
use crate::time::parse_log_date;

/// Validates one raw log row into a [`SetRecord`].
pub fn parse_row(row: &RawRow) -> Result<SetRecord, MalformedRowError> {
    let exercise = row.exercise.trim();
    if exercise.is_empty() {
        return Err(MalformedRowError::new(RowField::Exercise, &row.exercise));
    }

    let date = parse_log_date(&row.date)?;
    let is_warmup = parse_warmup(&row.is_warmup)?;
    let reps: u32 = parse_number(RowField::Reps, &row.reps)?;

    let weight_kg: f64 = parse_number(RowField::Weight, &row.weight)?;
    if !weight_kg.is_finite() || weight_kg < 0.0 {
        return Err(MalformedRowError::new(RowField::Weight, &row.weight));
    }

    let multiplier: f64 = parse_number(RowField::Multiplier, &row.multiplier)?;
    if !multiplier.is_finite() || multiplier <= 0.0 {
        return Err(MalformedRowError::new(RowField::Multiplier, &row.multiplier));
    }

    Ok(SetRecord {
        exercise: exercise.to_string(),
        date,
        weight_kg,
        reps,
        is_warmup,
        multiplier,
    })
}

pub fn parse_warmup(input: &str) -> Result<bool, MalformedRowError> {
    match input.trim().to_lowercase().as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(MalformedRowError::new(RowField::IsWarmup, input)),
    }
}

fn parse_number<T: FromStr>(field: RowField, input: &str) -> Result<T, MalformedRowError> {
    input
        .trim()
        .parse()
        .map_err(|_| MalformedRowError::new(field, input))
}
