use crate::config::CONFIG_FILE_NAME;
use crate::io;
use anyhow::Result;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG: &str = r#"# Impact Tracker Configuration

# Composite score weights; must sum to 1.0
[scoring]
outcome = 0.40
cost = 0.35
growth = 0.25

# Expected ranges used to normalize each metric onto 0-100
[normalization.outcome_improvement]
min = 0.0
max = 100.0

[normalization.cost_per_beneficiary]
min = 0.0
max = 1000.0

[normalization.growth_rate]
min = -1.0
max = 2.0

[compression]
enabled = true
"#;

pub fn init_config(force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);
    write_default_config(&config_path, force)?;
    println!("Created {} configuration file", CONFIG_FILE_NAME);
    Ok(())
}

pub fn write_default_config(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    io::write_file(config_path, DEFAULT_CONFIG)?;
    Ok(())
}
