pub mod compress;
pub mod init;
pub mod report;

use anyhow::Result;

use crate::cli::setup::resolve_config;
use crate::cli::{Cli, Commands};
use crate::config::ImpactConfig;
use crate::io::create_writer;
use crate::scoring::MetricsCalculator;

/// Dispatch a parsed command line.
pub fn run(cli: Cli) -> Result<()> {
    let config_path = cli.config;
    let load_config = || -> Result<ImpactConfig> { Ok(resolve_config(config_path.as_deref())?) };

    match cli.command {
        Commands::Init { force } => init::init_config(force),
        Commands::Rank {
            records,
            limit,
            format,
        } => {
            let calculator = MetricsCalculator::from_config(&load_config()?);
            report::rank(&records, limit, &calculator, create_writer(format.into()).as_mut())
        }
        Commands::Metrics {
            records,
            id,
            format,
        } => {
            let calculator = MetricsCalculator::from_config(&load_config()?);
            report::metrics(&records, id, &calculator, create_writer(format.into()).as_mut())
        }
        Commands::Summary { records, format } => {
            let calculator = MetricsCalculator::from_config(&load_config()?);
            report::summary(&records, &calculator, create_writer(format.into()).as_mut())
        }
        Commands::Trends { records, format } => {
            report::trends(&records, create_writer(format.into()).as_mut())
        }
        Commands::Compress { records, format } => {
            let config = load_config()?;
            compress::compress(
                &records,
                config.compression_enabled(),
                create_writer(format.into()).as_mut(),
            )
        }
    }
}
