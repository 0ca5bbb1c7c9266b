//! Setup and initialization functions for CLI

use std::path::Path;

use tracing_subscriber::EnvFilter;

use crate::config::{load_config, load_config_from_path, ImpactConfig};
use crate::core::errors::Result;

/// Map `-v` occurrences to a default log directive.
pub fn default_log_level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    }
}

/// Install the global tracing subscriber. `RUST_LOG` wins over `-v`.
pub fn init_logging(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_log_level(verbosity)));

    // Already initialized (e.g. in tests) - keep the existing subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Explicit config files must load; otherwise search from the working directory.
pub fn resolve_config(explicit: Option<&Path>) -> Result<ImpactConfig> {
    match explicit {
        Some(path) => load_config_from_path(path),
        None => Ok(load_config()),
    }
}
