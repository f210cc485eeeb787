use std::fs;
use std::path::Path;

use anyhow::Result;
use tracing::info;

use crate::model::archetype::Archetype;
use crate::repository::SummaryRepository;
use crate::service::dashboard::render_dashboard;

/// Renders one archetype's stored summary into `output` and returns the
/// number of exercises shown.
pub fn build_dashboard<S: SummaryRepository>(
    archetype: Archetype,
    summary_repo: &S,
    template: &str,
    output: &Path,
) -> Result<usize> {
    let document = summary_repo.load()?;
    let html = render_dashboard(template, archetype, &document)?;
    if let Some(parent) = output.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(output, html)?;
    info!(archetype = archetype.slug(), path = %output.display(), "dashboard written");
    Ok(document.exercises.len())
}
