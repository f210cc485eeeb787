use anyhow::Result;

use crate::error::DashboardError;
use crate::model::archetype::Archetype;
use crate::service::dto::SummaryDocument;

pub const DEFAULT_TEMPLATE: &str = include_str!("../../templates/dashboard.html");

const DATA_MARKER: &str = "const WORKOUT_DATA = ";
const DATA_TERMINATOR: &str = ";\n";

/// Fills a dashboard template with an archetype's copy and summary data.
///
/// Text placeholders are `{{title}}`, `{{version}}`, `{{subtitle}}`,
/// `{{tagline}}` and `{{footer}}`. Whatever follows `const WORKOUT_DATA = `
/// up to the next `;` line ending is replaced by the document, so templates
/// may ship with sample data of their own.
pub fn render_dashboard(
    template: &str,
    archetype: Archetype,
    document: &SummaryDocument,
) -> Result<String> {
    let start = template
        .find(DATA_MARKER)
        .ok_or(DashboardError::MissingDataBlock)?
        + DATA_MARKER.len();
    let end = template[start..]
        .find(DATA_TERMINATOR)
        .map(|offset| start + offset)
        .ok_or(DashboardError::MissingDataBlock)?;

    let data = document.to_embedded_json()?;
    let html = format!("{}{}{}", &template[..start], data, &template[end..]);

    Ok(fill_placeholders(&html, archetype))
}

fn fill_placeholders(html: &str, archetype: Archetype) -> String {
    let title = format!("Liftlog Training Dashboard - {}", archetype.version_label());
    let footer = format!(
        "{} archetype data • {}: {}",
        archetype.year_label(),
        archetype.version_label(),
        archetype.subtitle()
    );

    [
        ("{{title}}", title.as_str()),
        ("{{version}}", archetype.version_label()),
        ("{{subtitle}}", archetype.subtitle()),
        ("{{tagline}}", archetype.tagline()),
        ("{{footer}}", footer.as_str()),
    ]
    .into_iter()
    .fold(html.to_string(), |acc, (placeholder, value)| acc.replace(placeholder, value))
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::service::dto::{ExerciseSummary, WeekSummary};

    fn document() -> SummaryDocument {
        let mut document = SummaryDocument::default();
        document.exercises.insert(
            "Pull Up".to_string(),
            ExerciseSummary {
                muscle: "Back".to_string(),
                secondary: vec!["Biceps".to_string()],
                weeks: BTreeMap::from([(
                    "2025-01-06".to_string(),
                    WeekSummary { max: 0.0, sets: 2, max_reps: 8, load: 0.0 },
                )]),
            },
        );
        document
    }

    #[test]
    fn test_render_default_template() {
        let html =
            render_dashboard(DEFAULT_TEMPLATE, Archetype::TimeConstrained, &document()).unwrap();

        assert!(!html.contains("{{"));
        let title = "<title>Liftlog Training Dashboard - Archetype 3: Time-Constrained</title>";
        let subtitle = "<div class=\"subtitle\">Pattern: Efficient, minimal, consistent training</div>";
        assert!(html.contains(title));
        assert!(html.contains(subtitle));
        assert!(html.contains("2025-2026 archetype data • Archetype 3: Time-Constrained"));
        assert!(html.contains("const WORKOUT_DATA = {\n    \"Pull Up\": {"));
        assert!(html.contains("\"maxReps\": 8"));
    }

    #[test]
    fn test_render_replaces_sample_data() {
        let template = "<script>\nconst WORKOUT_DATA = {\"Old\": 1};\nrender();\n</script>";
        let document = SummaryDocument::default();
        let html = render_dashboard(template, Archetype::Overwhelmed, &document).unwrap();

        assert_eq!(html, "<script>\nconst WORKOUT_DATA = {};\nrender();\n</script>");
    }

    #[test]
    fn test_render_without_data_block() {
        let err = render_dashboard("<html>{{title}}</html>", Archetype::SelfDoubt, &document())
            .unwrap_err();
        assert_eq!(err.downcast_ref::<DashboardError>(), Some(&DashboardError::MissingDataBlock));
    }
}
