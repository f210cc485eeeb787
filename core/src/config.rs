use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};

use crate::model::archetype::Archetype;

const DEFAULT_DIR_NAME: &str = ".liftlog";
const LOG_DIR: &str = "logs";
const DATA_DIR: &str = "data";
const DASHBOARD_DIR: &str = "dashboards";

/// Directory layout for generated logs, summaries and dashboards.
#[derive(Clone, Debug)]
pub struct Workspace {
    base_dir: PathBuf,
}

impl Workspace {
    /// Uses `base_dir`, or `~/.liftlog` when none is given, creating the
    /// subdirectories as needed.
    pub fn new(base_dir: Option<PathBuf>) -> Result<Self> {
        let base_dir = match base_dir {
            Some(dir) => dir,
            None => {
                let home_dir = dirs::home_dir()
                    .ok_or_else(|| anyhow!("Could not determine home directory"))?;
                home_dir.join(DEFAULT_DIR_NAME)
            }
        };
        for sub in [LOG_DIR, DATA_DIR, DASHBOARD_DIR] {
            fs::create_dir_all(base_dir.join(sub))?;
        }
        Ok(Self { base_dir })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn log_path(&self, archetype: Archetype) -> PathBuf {
        self.base_dir.join(LOG_DIR).join(archetype.log_file_name())
    }

    pub fn summary_path(&self, archetype: Archetype) -> PathBuf {
        self.base_dir.join(DATA_DIR).join(archetype.summary_file_name())
    }

    pub fn dashboard_path(&self, archetype: Archetype) -> PathBuf {
        self.base_dir.join(DASHBOARD_DIR).join(archetype.dashboard_file_name())
    }
}
