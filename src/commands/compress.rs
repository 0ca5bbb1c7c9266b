use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

use crate::compression::{compress_records, EncodingStore};
use crate::io::{read_records, OutputWriter};

/// Encode every record in input order through a fresh store.
pub fn compress(records_path: &Path, enabled: bool, writer: &mut dyn OutputWriter) -> Result<()> {
    let records = read_records(records_path)
        .with_context(|| format!("reading records from {}", records_path.display()))?;

    let store = EncodingStore::new();
    let report = compress_records(&store, &records, enabled);
    info!(
        "Encoded {} records, {} dictionary entries",
        report.entries.len(),
        report.stats.entry_count
    );

    writer.write_compression(&report)
}
