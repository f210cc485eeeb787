use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{anyhow, Result};

use crate::model::classification::ClassificationTable;

/// Reads an alternate classification table, shaped like
/// `{ "<exercise>": { "muscle": "...", "secondary": [...] } }`.
pub fn load_classification(path: &Path) -> Result<ClassificationTable> {
    let file = File::open(path)
        .map_err(|e| anyhow!("Could not open classification table {}: {}", path.display(), e))?;
    let table: ClassificationTable = serde_json::from_reader(BufReader::new(file))?;
    if table.is_empty() {
        return Err(anyhow!("Classification table {} is empty", path.display()));
    }
    Ok(table)
}
