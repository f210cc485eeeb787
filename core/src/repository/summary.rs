use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::error::PipelineError;
use crate::repository::traits::SummaryRepository;
use crate::service::dto::SummaryDocument;

/// Summary document stored as indented JSON.
#[derive(Clone, Debug)]
pub struct FileSummaryRepository {
    file_path: PathBuf,
}

impl FileSummaryRepository {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }
}

impl SummaryRepository for FileSummaryRepository {
    fn load(&self) -> Result<SummaryDocument> {
        if !self.file_path.exists() {
            return Err(PipelineError::SummaryNotFound(self.file_path.clone()).into());
        }
        let reader = BufReader::new(File::open(&self.file_path)?);
        let document = serde_json::from_reader(reader)?;
        Ok(document)
    }

    fn save(&self, document: &SummaryDocument) -> Result<()> {
        if let Some(parent) = self.file_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut writer = BufWriter::new(File::create(&self.file_path)?);
        serde_json::to_writer_pretty(&mut writer, document)?;
        writer.flush()?;
        Ok(())
    }
}
