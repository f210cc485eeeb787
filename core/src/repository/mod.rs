pub mod classification;
pub mod csv_log;
pub mod summary;
pub mod traits;

pub use classification::load_classification;
pub use csv_log::FileWorkoutLogRepository;
pub use summary::FileSummaryRepository;
pub use traits::{SummaryRepository, WorkoutLogRepository};
