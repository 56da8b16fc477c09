//! `transit analyze` - descriptive network statistics

use crate::cli::Cli;
use transit_core::error::Result;
use transit_core::format::OutputFormat;
use transit_core::network::NetworkConfig;

pub fn run(cli: &Cli, config: &NetworkConfig) -> Result<()> {
    let graph = config.build()?;
    let summary = graph.summary();

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string(&summary)?);
        }
        OutputFormat::Human => {
            println!("Network analysis:");
            println!("  Stations:    {}", summary.station_count);
            println!("  Connections: {}", summary.connection_count);
            if !cli.quiet {
                println!("Station degrees:");
                for entry in &summary.degrees {
                    println!("  {}: {}", entry.station, entry.degree);
                }
            }
        }
    }

    Ok(())
}
