use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::error::PipelineError;
use crate::model::set_record::RawRow;
use crate::repository::traits::WorkoutLogRepository;

/// A workout log exported as CSV with a header row.
#[derive(Clone, Debug)]
pub struct FileWorkoutLogRepository {
    file_path: PathBuf,
}

impl FileWorkoutLogRepository {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }
}

impl WorkoutLogRepository for FileWorkoutLogRepository {
    fn read_rows(&self) -> Result<Vec<RawRow>> {
        if !self.file_path.exists() {
            return Err(PipelineError::InputNotFound(self.file_path.clone()).into());
        }

        let file = File::open(&self.file_path)?;
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::Headers)
            .from_reader(BufReader::new(file));

        let rows = reader.deserialize().collect::<Result<Vec<RawRow>, _>>()?;
        Ok(rows)
    }

    fn write_rows(&self, rows: &[RawRow]) -> Result<()> {
        if let Some(parent) = self.file_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let file = File::create(&self.file_path)?;
        let mut writer = csv::Writer::from_writer(BufWriter::new(file));
        for row in rows {
            writer.serialize(row)?;
        }
        writer.flush()?;
        Ok(())
    }
}
