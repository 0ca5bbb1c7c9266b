use crate::core::{ImpactMetrics, ProgramRecord};
use crate::scoring::MetricsCalculator;

/// Beneficiaries of the closest earlier record for the same program.
///
/// "Earlier" means a smaller id; the closest is the largest such id.
pub fn previous_beneficiaries(records: &[ProgramRecord], record: &ProgramRecord) -> Option<i64> {
    records
        .iter()
        .filter(|r| r.program_name == record.program_name && r.id < record.id)
        .max_by_key(|r| r.id)
        .map(|r| r.beneficiaries)
}

/// Metrics for the record with `id`, with growth against its prior period.
pub fn metrics_with_history(
    calculator: &MetricsCalculator,
    records: &[ProgramRecord],
    id: u64,
) -> Option<ImpactMetrics> {
    let record = records.iter().find(|r| r.id == id)?;
    let previous = previous_beneficiaries(records, record);
    Some(calculator.compute_program_metrics(record, previous))
}
