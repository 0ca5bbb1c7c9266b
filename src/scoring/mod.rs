pub mod metrics_calculator;
pub mod score_normalizer;

pub use metrics_calculator::{MetricsCalculator, ScoreBreakdown};
pub use score_normalizer::{normalize, round_to, NEUTRAL_SCORE};
