use anyhow::Result;
use rand::Rng;
use tracing::info;

use crate::generator::generate;
use crate::model::archetype::Archetype;
use crate::repository::WorkoutLogRepository;

/// Writes a synthetic log for one archetype and returns the number of rows.
pub fn generate_log<L, R>(archetype: Archetype, log_repo: &L, rng: &mut R) -> Result<usize>
where
    L: WorkoutLogRepository,
    R: Rng + ?Sized,
{
    let rows = generate(archetype, rng);
    log_repo.write_rows(&rows)?;
    info!(archetype = archetype.slug(), rows = rows.len(), "generated workout log");
    Ok(rows.len())
}
