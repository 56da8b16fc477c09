//! CLI argument parsing for transit
//!
//! Uses clap for argument parsing. Global flags: --network, --format,
//! --quiet, --verbose, --log-level, --log-json

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use transit_core::format::OutputFormat;
use transit_core::graph::types::Algorithm;

/// Transit - weighted transit-network path finding (DFS, BFS, Dijkstra)
#[derive(Parser, Debug)]
#[command(name = "transit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to a TOML network description (defaults to the built-in Kyiv metro)
    #[arg(long, global = true, env = "TRANSIT_NETWORK")]
    pub network: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_parser = parse_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Verbose logging (transit=debug)
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Explicit log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON to stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Summarize the network: station count, connections, per-station degree
    Analyze,

    /// Find a route between two stations
    Path {
        /// Start station name
        from: String,

        /// Destination station name
        to: String,

        /// Search algorithm
        #[arg(long, default_value = "shortest", value_parser = parse_algorithm)]
        algo: Algorithm,
    },

    /// Run DFS, BFS, and shortest-path side by side for one station pair
    Compare {
        /// Start station name
        from: String,

        /// Destination station name
        to: String,
    },

    /// List the configured lines and their stations
    Stations,
}

fn parse_format(s: &str) -> Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

fn parse_algorithm(s: &str) -> Result<Algorithm, String> {
    s.parse::<Algorithm>().map_err(|e| e.to_string())
}
