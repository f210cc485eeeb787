use chrono::{DateTime, Datelike, Duration, FixedOffset, NaiveDate, NaiveDateTime};

use crate::error::{MalformedRowError, RowField};

/// Timestamp layout of exported logs, e.g. `2025-01-01 06:30:00 PM +0000`.
pub const LOG_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %I:%M:%S %p %z";

/// Parses a log timestamp and keeps only its calendar date in the log's own offset.
pub fn parse_log_date(input: &str) -> Result<NaiveDate, MalformedRowError> {
    DateTime::<FixedOffset>::parse_from_str(input.trim(), LOG_TIMESTAMP_FORMAT)
        .map(|dt| dt.date_naive())
        .map_err(|_| MalformedRowError::new(RowField::Date, input))
}

/// Formats a wall-clock time the way exported logs do. The offset is always UTC.
pub fn format_log_timestamp(dt: NaiveDateTime) -> String {
    dt.format("%Y-%m-%d %I:%M:%S %p +0000").to_string()
}

/// Monday of the Monday-to-Sunday week containing `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}
