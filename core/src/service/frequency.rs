use std::collections::BTreeSet;

use chrono::{Days, NaiveDate};

use crate::service::dto::SummaryDocument;

/// How well a weekly training frequency sits in the recommended range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrequencyBand {
    OnTarget,
    Borderline,
    Drifting,
    OffTarget,
}

impl FrequencyBand {
    pub fn from_value(value: f64) -> Self {
        let v = value.clamp(0.0, 3.0);
        if (0.75..=2.25).contains(&v) {
            FrequencyBand::OnTarget
        } else if (0.5..0.75).contains(&v) || (v > 2.25 && v <= 2.5) {
            FrequencyBand::Borderline
        } else if (0.25..0.5).contains(&v) || (v > 2.5 && v <= 2.75) {
            FrequencyBand::Drifting
        } else {
            FrequencyBand::OffTarget
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FrequencyBand::OnTarget => "on target",
            FrequencyBand::Borderline => "borderline",
            FrequencyBand::Drifting => "drifting",
            FrequencyBand::OffTarget => "off target",
        }
    }
}

fn parse_week(key: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(key, "%Y-%m-%d").ok()
}

/// Distinct active weeks for `muscle` since `since`, divided by the number of
/// weeks between the first and last of them (at least one).
pub fn muscle_frequency_per_week(
    document: &SummaryDocument,
    muscle: &str,
    since: NaiveDate,
) -> f64 {
    let weeks: BTreeSet<NaiveDate> = document
        .exercises
        .values()
        .filter(|e| e.muscle == muscle)
        .flat_map(|e| e.weeks.keys())
        .filter_map(|k| parse_week(k))
        .filter(|w| *w >= since)
        .collect();

    let (Some(first), Some(last)) = (weeks.first(), weeks.last()) else {
        return 0.0;
    };
    let span_days = (*last - *first).num_days().max(0) as f64;
    let span_weeks = (span_days / 7.0 + 1.0).max(1.0);

    weeks.len() as f64 / span_weeks
}

/// Primary muscles present in the document, sorted.
pub fn trained_muscles(document: &SummaryDocument) -> Vec<String> {
    document
        .exercises
        .values()
        .map(|e| e.muscle.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Oldest and most recent week start in the document.
pub fn date_range(document: &SummaryDocument) -> Option<(NaiveDate, NaiveDate)> {
    let weeks: BTreeSet<NaiveDate> = document
        .exercises
        .values()
        .flat_map(|e| e.weeks.keys())
        .filter_map(|k| parse_week(k))
        .collect();
    Some((*weeks.first()?, *weeks.last()?))
}

/// Start of a `days`-long window ending at the newest week in the document.
/// `None` for an empty document.
pub fn window_start(document: &SummaryDocument, days: u64) -> Option<NaiveDate> {
    let (oldest, newest) = date_range(document)?;
    Some(newest.checked_sub_days(Days::new(days)).unwrap_or(oldest))
}

/// Fixed-point formatting with trailing zeros dropped: `2.50` -> `2.5`, `2.0` -> `2`.
pub fn format_frequency(value: f64, decimals: usize) -> String {
    let fixed = format!("{value:.decimals$}");
    if !fixed.contains('.') {
        return fixed;
    }
    fixed.trim_end_matches('0').trim_end_matches('.').to_string()
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use assert_approx_eq::assert_approx_eq;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::service::dto::{ExerciseSummary, WeekSummary};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn exercise(muscle: &str, weeks: &[&str]) -> ExerciseSummary {
        ExerciseSummary {
            muscle: muscle.to_string(),
            secondary: vec![],
            weeks: weeks
                .iter()
                .map(|w| {
                    let summary = WeekSummary { max: 50.0, sets: 3, max_reps: 10, load: 1500.0 };
                    (w.to_string(), summary)
                })
                .collect::<BTreeMap<_, _>>(),
        }
    }

    fn document() -> SummaryDocument {
        let mut document = SummaryDocument::default();
        document.exercises.insert(
            "Barbell Back Squat".to_string(),
            exercise("Quadriceps", &["2025-01-06", "2025-01-13", "2025-01-27"]),
        );
        document
            .exercises
            .insert("Leg Press".to_string(), exercise("Quadriceps", &["2025-01-13", "2025-02-03"]));
        document
            .exercises
            .insert("Barbell Curl".to_string(), exercise("Biceps", &["2024-12-30"]));
        document
    }

    #[test]
    fn test_muscle_frequency_counts_distinct_weeks() {
        // 4 distinct weeks spanning 2025-01-06..2025-02-03 (5 weeks).
        let value = muscle_frequency_per_week(&document(), "Quadriceps", date(2024, 1, 1));
        assert_approx_eq!(value, 4.0 / 5.0);
    }

    #[test]
    fn test_muscle_frequency_respects_cutoff() {
        let value = muscle_frequency_per_week(&document(), "Quadriceps", date(2025, 1, 20));
        assert_approx_eq!(value, 2.0 / 2.0);
    }

    #[test]
    fn test_muscle_frequency_without_weeks() {
        assert_eq!(muscle_frequency_per_week(&document(), "Calves", date(2024, 1, 1)), 0.0);
    }

    #[test]
    fn test_trained_muscles_and_date_range() {
        assert_eq!(trained_muscles(&document()), vec!["Biceps", "Quadriceps"]);
        assert_eq!(date_range(&document()), Some((date(2024, 12, 30), date(2025, 2, 3))));
        assert_eq!(date_range(&SummaryDocument::default()), None);
    }

    #[rstest]
    #[case(90, date(2024, 11, 5))]
    #[case(14, date(2025, 1, 20))]
    #[case(0, date(2025, 2, 3))]
    fn test_window_start_anchors_on_newest_week(#[case] days: u64, #[case] expected: NaiveDate) {
        assert_eq!(window_start(&document(), days), Some(expected));
    }

    #[test]
    fn test_window_keeps_old_logs_on_target() {
        let since = window_start(&document(), 28).unwrap();
        let value = muscle_frequency_per_week(&document(), "Quadriceps", since);

        assert_eq!(since, date(2025, 1, 6));
        assert_approx_eq!(value, 4.0 / 5.0);
        assert_eq!(window_start(&SummaryDocument::default(), 28), None);
    }

    #[rstest]
    #[case(0.0, FrequencyBand::OffTarget)]
    #[case(0.3, FrequencyBand::Drifting)]
    #[case(0.6, FrequencyBand::Borderline)]
    #[case(0.75, FrequencyBand::OnTarget)]
    #[case(2.25, FrequencyBand::OnTarget)]
    #[case(2.4, FrequencyBand::Borderline)]
    #[case(2.7, FrequencyBand::Drifting)]
    #[case(2.9, FrequencyBand::OffTarget)]
    #[case(7.0, FrequencyBand::OffTarget)]
    fn test_frequency_band(#[case] value: f64, #[case] expected: FrequencyBand) {
        assert_eq!(FrequencyBand::from_value(value), expected);
    }

    #[rstest]
    #[case(2.0, 1, "2")]
    #[case(2.5, 1, "2.5")]
    #[case(0.8, 2, "0.8")]
    #[case(1.333, 2, "1.33")]
    #[case(10.0, 0, "10")]
    fn test_format_frequency(#[case] value: f64, #[case] decimals: usize, #[case] expected: &str) {
        assert_eq!(format_frequency(value, decimals), expected);
    }
}
