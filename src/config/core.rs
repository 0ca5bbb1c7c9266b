use serde::{Deserialize, Serialize};

use super::scoring::{NormalizationRanges, ScoringWeights};

/// Root configuration structure for impact-tracker
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ImpactConfig {
    /// Composite score weights
    #[serde(default)]
    pub scoring: Option<ScoringWeights>,

    /// Normalization ranges for each scored metric
    #[serde(default)]
    pub normalization: Option<NormalizationRanges>,

    /// Record encoding settings
    #[serde(default)]
    pub compression: Option<CompressionConfig>,
}

impl ImpactConfig {
    /// Scoring weights, falling back to the defaults when not configured.
    pub fn scoring_weights(&self) -> ScoringWeights {
        self.scoring.unwrap_or_default()
    }

    /// Normalization ranges, falling back to the defaults when not configured.
    pub fn normalization_ranges(&self) -> NormalizationRanges {
        self.normalization.unwrap_or_default()
    }

    pub fn compression_enabled(&self) -> bool {
        self.compression
            .as_ref()
            .map(|c| c.enabled)
            .unwrap_or_else(default_compression_enabled)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CompressionConfig {
    /// When false, names and counts pass through unencoded
    #[serde(default = "default_compression_enabled")]
    pub enabled: bool,
}

impl Default for CompressionConfig {
    fn default() -> Self {
        Self {
            enabled: default_compression_enabled(),
        }
    }
}

pub fn default_compression_enabled() -> bool {
    true
}
