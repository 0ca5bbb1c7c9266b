use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

use crate::analytics;
use crate::io::{read_records, OutputWriter};
use crate::scoring::MetricsCalculator;

pub fn rank(
    records_path: &Path,
    limit: usize,
    calculator: &MetricsCalculator,
    writer: &mut dyn OutputWriter,
) -> Result<()> {
    let records = read_records(records_path)
        .with_context(|| format!("reading records from {}", records_path.display()))?;
    let ranked = analytics::rank(calculator, &records, limit);
    info!("Ranked {} of {} programs", ranked.len(), records.len());
    writer.write_ranked(&ranked)
}

/// Metrics for one record, with growth against the same program's prior record.
pub fn metrics(
    records_path: &Path,
    id: u64,
    calculator: &MetricsCalculator,
    writer: &mut dyn OutputWriter,
) -> Result<()> {
    let records = read_records(records_path)
        .with_context(|| format!("reading records from {}", records_path.display()))?;
    let metrics = analytics::metrics_with_history(calculator, &records, id)
        .with_context(|| format!("no program record with id {id}"))?;
    writer.write_metrics(&metrics)
}

pub fn summary(
    records_path: &Path,
    calculator: &MetricsCalculator,
    writer: &mut dyn OutputWriter,
) -> Result<()> {
    let records = read_records(records_path)
        .with_context(|| format!("reading records from {}", records_path.display()))?;
    writer.write_summary(&analytics::summarize(calculator, &records))
}

pub fn trends(records_path: &Path, writer: &mut dyn OutputWriter) -> Result<()> {
    let records = read_records(records_path)
        .with_context(|| format!("reading records from {}", records_path.display()))?;
    writer.write_trends(&analytics::trends(&records))
}
