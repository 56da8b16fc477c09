//! Transit Core Library
//!
//! Core domain logic for the transit path-finding CLI: the weighted
//! undirected station graph, its traversal and shortest-path algorithms,
//! and the network configuration that builds the reference Kyiv metro.

pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
pub mod network;
