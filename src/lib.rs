// Export modules for library usage
pub mod analytics;
pub mod cli;
pub mod commands;
pub mod compression;
pub mod config;
pub mod core;
pub mod io;
pub mod scoring;

// Re-export commonly used types
pub use crate::core::errors::{Error, Result};
pub use crate::core::{AnalyticsSummary, ImpactMetrics, ProgramRecord, ProgramTrend};

pub use crate::compression::{
    CompressedProgram, CompressionReport, CompressionStats, DeltaEncoded, EncodingStore,
};

pub use crate::config::{ImpactConfig, MetricRange, NormalizationRanges, ScoringWeights};

pub use crate::scoring::{MetricsCalculator, ScoreBreakdown};
