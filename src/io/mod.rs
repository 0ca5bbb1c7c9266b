pub mod output;

pub use output::{create_writer, JsonWriter, OutputFormat, OutputWriter, TerminalWriter};

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::core::errors::{Error, Result};
use crate::core::ProgramRecord;

/// Read program records from a JSON array file.
///
/// Records are taken as-is; field contracts are the producer's concern.
pub fn read_records(path: &Path) -> Result<Vec<ProgramRecord>> {
    let contents = fs::read_to_string(path).map_err(|e| Error::file_system_io(path, e))?;
    let records: Vec<ProgramRecord> = serde_json::from_str(&contents)?;
    debug!("Read {} records from {}", records.len(), path.display());
    Ok(records)
}

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| Error::file_system_io(path, e))
}
