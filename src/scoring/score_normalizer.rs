use crate::config::MetricRange;

/// Score assigned when a range carries no discriminating information.
pub const NEUTRAL_SCORE: f64 = 50.0;

/// Linear min-max scaling of `value` onto 0-100, clamped.
///
/// Degenerate ranges (`max == min`) return [`NEUTRAL_SCORE`].
pub fn normalize(value: f64, min: f64, max: f64) -> f64 {
    if max == min {
        return NEUTRAL_SCORE;
    }

    let normalized = (value - min) / (max - min) * 100.0;
    normalized.clamp(0.0, 100.0)
}

pub fn normalize_in(value: f64, range: MetricRange) -> f64 {
    normalize(value, range.min, range.max)
}

/// Flip a 0-100 score so that lower raw values score higher.
pub fn invert(score: f64) -> f64 {
    100.0 - score
}

/// Round to `decimals` places, breaking exact ties to even.
///
/// Works on the exact binary value, so `0.125` is a tie but `2.675` (stored
/// as 2.67499...) is not. Float formatting already rounds this way.
pub fn round_to(value: f64, decimals: usize) -> f64 {
    if !value.is_finite() {
        return value;
    }

    format!("{:.*}", decimals, value)
        .parse::<f64>()
        .unwrap_or(value)
}
