pub mod catalog;
pub mod config;
pub mod error;
pub mod generator;
pub mod input;
pub mod model;
pub mod repository;
pub mod service;
pub mod time;
pub mod usecase;

pub use catalog::default_classification;
pub use config::Workspace;
pub use error::{ArchetypeParseError, DashboardError, MalformedRowError, PipelineError, RowField};
pub use input::parse_row;
pub use model::aggregate::{ExerciseAggregate, WeeklyMetric, WorkoutAggregates};
pub use model::archetype::Archetype;
pub use model::classification::{ClassificationTable, MuscleMapping};
pub use model::set_record::{RawRow, SetRecord};
pub use repository::{
    load_classification, FileSummaryRepository, FileWorkoutLogRepository, SummaryRepository,
    WorkoutLogRepository,
};
pub use service::aggregation::{aggregate, WeeklyAggregator};
pub use service::dto::{serialize, ExerciseSummary, SummaryDocument, WeekSummary};
pub use time::week_start;
pub use usecase::process::{ProcessLogUseCase, ProcessReport};
