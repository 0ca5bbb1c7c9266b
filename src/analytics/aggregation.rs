use tracing::debug;

use crate::core::{AnalyticsSummary, ProgramRecord, ProgramTrend};
use crate::scoring::{round_to, MetricsCalculator};

/// Totals and averages across all records.
///
/// Composite scores are computed without a prior period. An empty collection
/// yields an all-zero summary.
pub fn summarize(calculator: &MetricsCalculator, records: &[ProgramRecord]) -> AnalyticsSummary {
    if records.is_empty() {
        return AnalyticsSummary::default();
    }

    let total_beneficiaries: i64 = records.iter().map(|r| r.beneficiaries).sum();
    let total_cost: f64 = records.iter().map(|r| r.cost).sum();

    let (score_sum, improvement_sum) = records
        .iter()
        .map(|record| calculator.compute_program_metrics(record, None))
        .fold((0.0, 0.0), |(scores, improvements), m| {
            (
                scores + m.composite_impact_score,
                improvements + m.outcome_improvement,
            )
        });

    let count = records.len() as f64;
    let summary = AnalyticsSummary {
        total_programs: records.len(),
        total_beneficiaries,
        average_impact_score: round_to(score_sum / count, 2),
        total_cost: round_to(total_cost, 2),
        average_outcome_improvement: round_to(improvement_sum / count, 2),
    };
    debug!("Summary over {} programs: {:?}", records.len(), summary);
    summary
}

/// Trend points ordered by creation time.
///
/// Records without a timestamp come first; equal keys keep input order.
pub fn trends(records: &[ProgramRecord]) -> Vec<ProgramTrend> {
    let mut ordered: Vec<&ProgramRecord> = records.iter().collect();
    ordered.sort_by_key(|record| record.created_at);
    ordered.into_iter().map(ProgramTrend::from).collect()
}
