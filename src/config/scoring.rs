//! Scoring configuration for composite impact scores
//!
//! This module contains the weight and normalization range types consumed by
//! the metrics calculator:
//! - Weights for outcome improvement, cost efficiency and growth rate
//! - Expected value ranges used for min-max normalization

use serde::{Deserialize, Serialize};

/// Scoring weights configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    /// Weight for outcome improvement (0.0-1.0)
    #[serde(default = "default_outcome_weight")]
    pub outcome: f64,

    /// Weight for inverted cost per beneficiary (0.0-1.0)
    #[serde(default = "default_cost_weight")]
    pub cost: f64,

    /// Weight for beneficiary growth rate (0.0-1.0)
    #[serde(default = "default_growth_weight")]
    pub growth: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            outcome: default_outcome_weight(),
            cost: default_cost_weight(),
            growth: default_growth_weight(),
        }
    }
}

impl ScoringWeights {
    // Pure function: Check if a weight is in valid range
    pub fn is_valid_weight(weight: f64) -> bool {
        (0.0..=1.0).contains(&weight)
    }

    // Pure function: Validate a single weight with name
    pub fn validate_weight(weight: f64, name: &str) -> Result<(), String> {
        if Self::is_valid_weight(weight) {
            Ok(())
        } else {
            Err(format!("{} weight must be between 0.0 and 1.0", name))
        }
    }

    pub fn sum(&self) -> f64 {
        self.outcome + self.cost + self.growth
    }

    /// Validate that every weight is in range and that they sum to 1.0
    /// (with small tolerance for floating point)
    pub fn validate(&self) -> Result<(), String> {
        Self::validate_weight(self.outcome, "Outcome")?;
        Self::validate_weight(self.cost, "Cost")?;
        Self::validate_weight(self.growth, "Growth")?;

        let sum = self.sum();
        if (sum - 1.0).abs() > 0.001 {
            return Err(format!(
                "Scoring weights (outcome, cost, growth) must sum to 1.0, but sum to {:.3}",
                sum
            ));
        }

        Ok(())
    }

    /// Normalize weights to ensure they sum to exactly 1.0
    pub fn normalize(&mut self) {
        let sum = self.sum();
        if sum > 0.0 && sum != 1.0 {
            self.outcome /= sum;
            self.cost /= sum;
            self.growth /= sum;
        }
    }
}

pub fn default_outcome_weight() -> f64 {
    0.40
}
pub fn default_cost_weight() -> f64 {
    0.35
}
pub fn default_growth_weight() -> f64 {
    0.25
}

/// Closed interval a raw metric is expected to fall in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricRange {
    pub min: f64,
    pub max: f64,
}

impl MetricRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Equal bounds are accepted; scoring treats them as "no information".
    pub fn validate(&self, name: &str) -> Result<(), String> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(format!("{} range bounds must be finite", name));
        }
        if self.min > self.max {
            return Err(format!(
                "{} range min ({}) must not exceed max ({})",
                name, self.min, self.max
            ));
        }
        Ok(())
    }
}

/// Score normalization ranges
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizationRanges {
    /// Expected range for outcome improvement (default: 0..100)
    #[serde(default = "default_outcome_range")]
    pub outcome_improvement: MetricRange,

    /// Expected range for cost per beneficiary (default: 0..1000)
    #[serde(default = "default_cost_range")]
    pub cost_per_beneficiary: MetricRange,

    /// Expected range for growth rate, -100% to 200% (default: -1..2)
    #[serde(default = "default_growth_range")]
    pub growth_rate: MetricRange,
}

impl Default for NormalizationRanges {
    fn default() -> Self {
        Self {
            outcome_improvement: default_outcome_range(),
            cost_per_beneficiary: default_cost_range(),
            growth_rate: default_growth_range(),
        }
    }
}

impl NormalizationRanges {
    pub fn validate(&self) -> Result<(), String> {
        self.outcome_improvement.validate("Outcome improvement")?;
        self.cost_per_beneficiary.validate("Cost per beneficiary")?;
        self.growth_rate.validate("Growth rate")?;
        Ok(())
    }
}

pub fn default_outcome_range() -> MetricRange {
    MetricRange::new(0.0, 100.0)
}

pub fn default_cost_range() -> MetricRange {
    MetricRange::new(0.0, 1000.0)
}

pub fn default_growth_range() -> MetricRange {
    MetricRange::new(-1.0, 2.0)
}
