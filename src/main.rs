use anyhow::Result;
use clap::Parser;
use impact_tracker::cli::setup::init_logging;
use impact_tracker::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    impact_tracker::commands::run(cli)
}
