mod core;
mod loader;
mod scoring;

pub use scoring::{
    default_cost_range, default_cost_weight, default_growth_range, default_growth_weight,
    default_outcome_range, default_outcome_weight, MetricRange, NormalizationRanges,
    ScoringWeights,
};

pub use self::core::{default_compression_enabled, CompressionConfig, ImpactConfig};

pub use loader::{
    directory_ancestors, load_config, load_config_from, load_config_from_path,
    parse_and_validate_config, CONFIG_FILE_NAME,
};
