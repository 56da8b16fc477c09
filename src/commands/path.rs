//! `transit path` - route query between two stations

use crate::cli::Cli;
use transit_core::error::Result;
use transit_core::format::OutputFormat;
use transit_core::graph::algos::{bfs_path, dfs_path, shortest_path};
use transit_core::graph::types::{Algorithm, PathResult};
use transit_core::graph::StationGraph;
use transit_core::network::NetworkConfig;

pub fn query(graph: &StationGraph, from: &str, to: &str, algo: Algorithm) -> Result<PathResult> {
    match algo {
        Algorithm::Dfs => dfs_path(graph, from, to),
        Algorithm::Bfs => bfs_path(graph, from, to),
        Algorithm::Shortest => shortest_path(graph, from, to),
    }
}

pub fn render_human(result: &PathResult, quiet: bool) {
    if !result.found {
        println!("no path between {} and {}", result.from, result.to);
        return;
    }
    println!("{}", result.stations.join(" -> "));
    if !quiet {
        if let Some(weight) = result.total_weight {
            println!("{} stops, total weight {}", result.hops, weight);
        }
    }
}

pub fn run(cli: &Cli, config: &NetworkConfig, from: &str, to: &str, algo: Algorithm) -> Result<()> {
    let graph = config.build()?;
    let result = query(&graph, from, to, algo)?;

    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string(&result)?),
        OutputFormat::Human => render_human(&result, cli.quiet),
    }

    Ok(())
}
