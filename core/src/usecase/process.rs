use std::collections::BTreeMap;

use anyhow::Result;
use tracing::{debug, info, warn};

use crate::error::PipelineError;
use crate::input::parse_row;
use crate::model::classification::ClassificationTable;
use crate::repository::{SummaryRepository, WorkoutLogRepository};
use crate::service::aggregation::WeeklyAggregator;
use crate::service::dto::{serialize, SummaryDocument};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProcessReport {
    pub rows: usize,
    pub warmup_sets: usize,
    pub exercises: usize,
    pub week_entries: usize,
    pub unknown_exercises: BTreeMap<String, usize>,
}

/// Reads one archetype's log, aggregates it and stores the summary.
pub struct ProcessLogUseCase<'a, L: WorkoutLogRepository, S: SummaryRepository> {
    log_repo: &'a L,
    summary_repo: &'a S,
    table: &'a ClassificationTable,
}

impl<'a, L: WorkoutLogRepository, S: SummaryRepository> ProcessLogUseCase<'a, L, S> {
    pub fn new(log_repo: &'a L, summary_repo: &'a S, table: &'a ClassificationTable) -> Self {
        Self {
            log_repo,
            summary_repo,
            table,
        }
    }

    /// Builds the summary without storing it. Any malformed row aborts the run.
    pub fn summarize(&self) -> Result<(SummaryDocument, ProcessReport)> {
        let rows = self.log_repo.read_rows()?;
        debug!(rows = rows.len(), "read workout log");

        let mut aggregator = WeeklyAggregator::new(self.table);
        for (idx, row) in rows.iter().enumerate() {
            let record = parse_row(row)
                .map_err(|source| PipelineError::MalformedRow { row: idx + 1, source })?;
            aggregator.fold(&record);
        }
        let aggregates = aggregator.finish();

        let report = ProcessReport {
            rows: rows.len(),
            warmup_sets: aggregates.warmup_sets,
            exercises: aggregates.exercises.len(),
            week_entries: aggregates.week_entries(),
            unknown_exercises: aggregates.unknown_exercises.clone(),
        };
        if aggregates.is_empty() {
            warn!("no working sets with known exercises in log");
        }

        Ok((serialize(&aggregates), report))
    }

    pub fn execute(&self) -> Result<ProcessReport> {
        let (document, report) = self.summarize()?;
        self.summary_repo.save(&document)?;
        info!(
            exercises = report.exercises,
            week_entries = report.week_entries,
            "summary written"
        );
        Ok(report)
    }
}
