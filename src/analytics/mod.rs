//! Collection-level compositions over the metrics calculator.

pub mod aggregation;
pub mod history;

pub use aggregation::{summarize, trends};
pub use history::{metrics_with_history, previous_beneficiaries};

use crate::core::{ImpactMetrics, ProgramRecord};
use crate::scoring::MetricsCalculator;

pub const DEFAULT_RANK_LIMIT: usize = 10;

pub fn rank(
    calculator: &MetricsCalculator,
    records: &[ProgramRecord],
    limit: usize,
) -> Vec<ImpactMetrics> {
    calculator.rank(records, limit)
}
