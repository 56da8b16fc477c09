//! `transit stations` - list configured lines and stations

use serde::Serialize;

use crate::cli::Cli;
use transit_core::error::Result;
use transit_core::format::OutputFormat;
use transit_core::network::{LineConfig, NetworkConfig};

#[derive(Debug, Serialize)]
struct StationList<'a> {
    lines: &'a [LineConfig],
}

pub fn run(cli: &Cli, config: &NetworkConfig) -> Result<()> {
    match cli.format {
        OutputFormat::Json => {
            let list = StationList {
                lines: &config.lines,
            };
            println!("{}", serde_json::to_string(&list)?);
        }
        OutputFormat::Human => {
            for line in &config.lines {
                println!("{} ({} stations)", line.name, line.stations.len());
                if !cli.quiet {
                    for station in &line.stations {
                        println!("  {}", station);
                    }
                }
            }
        }
    }

    Ok(())
}
