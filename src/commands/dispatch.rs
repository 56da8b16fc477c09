//! Command dispatch logic for transit

use std::time::Instant;

use crate::cli::{Cli, Commands};
use crate::commands;
use transit_core::error::{Result, TransitError};
use transit_core::network::NetworkConfig;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    // Resolve the network description: explicit file or built-in default
    let config = match &cli.network {
        Some(path) => NetworkConfig::load(path)?,
        None => NetworkConfig::default(),
    };

    if cli.verbose {
        eprintln!("load_network: {:?}", start.elapsed());
    }

    match &cli.command {
        None => Err(TransitError::UsageError(
            "no command given (try --help)".to_string(),
        )),

        Some(Commands::Analyze) => commands::analyze::run(cli, &config),

        Some(Commands::Path { from, to, algo }) => {
            commands::path::run(cli, &config, from, to, *algo)
        }

        Some(Commands::Compare { from, to }) => commands::compare::run(cli, &config, from, to),

        Some(Commands::Stations) => commands::stations::run(cli, &config),
    }
}
