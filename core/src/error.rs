use std::fmt;
use std::path::PathBuf;

/// Column of a workout log row that failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowField {
    Date,
    Exercise,
    Reps,
    Weight,
    IsWarmup,
    Multiplier,
}

impl fmt::Display for RowField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RowField::Date => "Date",
            RowField::Exercise => "Exercise",
            RowField::Reps => "Reps",
            RowField::Weight => "Weight(kg)",
            RowField::IsWarmup => "isWarmup",
            RowField::Multiplier => "multiplier",
        };
        f.write_str(name)
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[error("malformed {field} value '{value}'")]
pub struct MalformedRowError {
    pub field: RowField,
    pub value: String,
}

impl MalformedRowError {
    pub fn new(field: RowField, value: &str) -> Self {
        Self {
            field,
            value: value.to_string(),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum PipelineError {
    #[error("workout log not found: {}", .0.display())]
    InputNotFound(PathBuf),
    #[error("row {row}: {source}")]
    MalformedRow {
        row: usize,
        #[source]
        source: MalformedRowError,
    },
    #[error("summary not found: {}", .0.display())]
    SummaryNotFound(PathBuf),
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum DashboardError {
    #[error("template has no `const WORKOUT_DATA = ...;` block")]
    MissingDataBlock,
}

#[derive(thiserror::Error, Debug, PartialEq)]
#[error("unknown archetype '{0}' (expected overwhelmed, self-doubt or time-constrained)")]
pub struct ArchetypeParseError(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_row_error_names_field_and_value() {
        let err = MalformedRowError::new(RowField::Weight, "heavy");
        assert_eq!(err.to_string(), "malformed Weight(kg) value 'heavy'");
    }

    #[test]
    fn test_pipeline_error_keeps_row_source() {
        let err = PipelineError::MalformedRow {
            row: 7,
            source: MalformedRowError::new(RowField::IsWarmup, "yes"),
        };
        assert_eq!(err.to_string(), "row 7: malformed isWarmup value 'yes'");
        assert!(matches!(
            std::error::Error::source(&err)
                .and_then(|s| s.downcast_ref::<MalformedRowError>()),
            Some(MalformedRowError { field: RowField::IsWarmup, .. })
        ));
    }
}
