use anyhow::Result;

use crate::model::set_record::RawRow;
use crate::service::dto::SummaryDocument;

pub trait WorkoutLogRepository {
    fn read_rows(&self) -> Result<Vec<RawRow>>;
    fn write_rows(&self, rows: &[RawRow]) -> Result<()>;
}

pub trait SummaryRepository {
    fn load(&self) -> Result<SummaryDocument>;
    fn save(&self, document: &SummaryDocument) -> Result<()>;
}
