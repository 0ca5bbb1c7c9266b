use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use super::core::ImpactConfig;
use super::scoring::ScoringWeights;
use crate::core::errors::{Error, Result};

pub const CONFIG_FILE_NAME: &str = ".impact-tracker.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Pure function to read config file contents
pub(crate) fn read_config_file(path: &Path) -> std::result::Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Parse and validate config from a TOML string.
///
/// Invalid weights are replaced by the defaults with a warning; weights that
/// are valid are rescaled to sum to exactly 1.0. Invalid normalization ranges
/// are rejected.
pub fn parse_and_validate_config(contents: &str) -> Result<ImpactConfig> {
    let mut config = toml::from_str::<ImpactConfig>(contents)?;

    if let Some(ref mut scoring) = config.scoring {
        if let Err(e) = scoring.validate() {
            warn!("Invalid scoring weights: {}. Using defaults.", e);
            config.scoring = Some(ScoringWeights::default());
        } else {
            scoring.normalize();
        }
    }

    if let Some(ref ranges) = config.normalization {
        ranges.validate().map_err(Error::Configuration)?;
    }

    Ok(config)
}

/// Load and validate an explicit config file, propagating every failure.
pub fn load_config_from_path(path: &Path) -> Result<ImpactConfig> {
    let contents = read_config_file(path).map_err(|e| Error::file_system_io(path, e))?;
    let config = parse_and_validate_config(&contents)?;
    info!("Loaded config from {}", path.display());
    Ok(config)
}

/// Try loading config from a specific path, returning None on any failure
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<ImpactConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            warn!("{}: {}. Using defaults.", config_path.display(), e);
            None
        }
    }
}

/// Handle file read errors with appropriate logging
pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // Only log actual errors, not "file not found"
    if error.kind() != std::io::ErrorKind::NotFound {
        warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// Pure function to generate directory ancestors up to a depth limit
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Search for a config file starting at `start` and walking up the tree.
pub fn load_config_from(start: PathBuf) -> ImpactConfig {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            ImpactConfig::default()
        })
}

pub fn load_config() -> ImpactConfig {
    match std::env::current_dir() {
        Ok(dir) => load_config_from(dir),
        Err(e) => {
            warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            ImpactConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::scoring::MetricRange;
    use indoc::indoc;
    use tempfile::TempDir;

    #[test]
    fn test_parse_full_config() {
        let config = parse_and_validate_config(indoc! {r#"
            [scoring]
            outcome = 0.5
            cost = 0.3
            growth = 0.2

            [normalization.cost_per_beneficiary]
            min = 0.0
            max = 250.0

            [compression]
            enabled = false
        "#})
        .unwrap();

        let weights = config.scoring_weights();
        assert!((weights.outcome - 0.5).abs() < 1e-9);
        assert_eq!(
            config.normalization_ranges().cost_per_beneficiary,
            MetricRange::new(0.0, 250.0)
        );
        assert!(!config.compression_enabled());
    }

    #[test]
    fn test_invalid_weights_fall_back_to_defaults() {
        let config = parse_and_validate_config(indoc! {r#"
            [scoring]
            outcome = 0.9
            cost = 0.9
            growth = 0.9
        "#})
        .unwrap();

        assert_eq!(config.scoring, Some(ScoringWeights::default()));
    }

    #[test]
    fn test_inverted_range_is_an_error() {
        let result = parse_and_validate_config(indoc! {r#"
            [normalization.growth_rate]
            min = 2.0
            max = -1.0
        "#});

        assert!(matches!(result, Err(Error::Configuration(_))));
    }

    #[test]
    fn test_malformed_toml_is_an_error() {
        let result = parse_and_validate_config("[scoring\noutcome = ");
        assert!(matches!(result, Err(Error::TomlParse(_))));
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = parse_and_validate_config("").unwrap();
        assert_eq!(config, ImpactConfig::default());
        assert!(config.compression_enabled());
    }

    #[test]
    fn test_load_config_from_walks_up_directories() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join(CONFIG_FILE_NAME),
            "[compression]\nenabled = false\n",
        )
        .unwrap();
        let nested = temp.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        let config = load_config_from(nested);
        assert!(!config.compression_enabled());
    }

    #[test]
    fn test_load_config_from_path_missing_file() {
        let temp = TempDir::new().unwrap();
        let result = load_config_from_path(&temp.path().join("nope.toml"));
        assert!(matches!(result, Err(Error::FileSystem { .. })));
    }

    #[test]
    fn test_directory_ancestors_respects_depth() {
        let dirs: Vec<_> = directory_ancestors(PathBuf::from("/a/b/c/d"), 2).collect();
        assert_eq!(dirs, vec![PathBuf::from("/a/b/c/d"), PathBuf::from("/a/b/c")]);
    }
}
