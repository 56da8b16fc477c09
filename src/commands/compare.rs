//! `transit compare` - run all three search algorithms for one pair

use serde::Serialize;

use crate::cli::Cli;
use crate::commands::path::{query, render_human};
use transit_core::error::Result;
use transit_core::format::OutputFormat;
use transit_core::graph::types::{Algorithm, PathResult};
use transit_core::network::NetworkConfig;

#[derive(Debug, Serialize)]
struct Comparison {
    dfs: PathResult,
    bfs: PathResult,
    shortest: PathResult,
}

pub fn run(cli: &Cli, config: &NetworkConfig, from: &str, to: &str) -> Result<()> {
    let graph = config.build()?;

    let comparison = Comparison {
        dfs: query(&graph, from, to, Algorithm::Dfs)?,
        bfs: query(&graph, from, to, Algorithm::Bfs)?,
        shortest: query(&graph, from, to, Algorithm::Shortest)?,
    };

    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string(&comparison)?),
        OutputFormat::Human => {
            for result in [&comparison.dfs, &comparison.bfs, &comparison.shortest] {
                println!("[{}]", result.algorithm);
                render_human(result, cli.quiet);
            }
        }
    }

    Ok(())
}
