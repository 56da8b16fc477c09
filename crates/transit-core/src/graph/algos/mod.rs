//! Search algorithms over [`StationGraph`](crate::graph::StationGraph):
//! depth-first, breadth-first, and Dijkstra shortest path.
//!
//! All three validate that both endpoints exist and fail fast with
//! `UnknownStation`; a disconnected pair is a `found: false` result,
//! not an error.

pub mod bfs;
pub mod dfs;
pub mod dijkstra;

pub use bfs::bfs_path;
pub use dfs::dfs_path;
pub use dijkstra::shortest_path;
