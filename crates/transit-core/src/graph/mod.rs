//! Weighted undirected station graph and its search algorithms.
//!
//! The graph is built once (see [`crate::network`]) and then queried;
//! no mutation happens after construction, so a built graph can be
//! shared read-only without locking.

pub mod algos;
mod path;
pub mod types;

use std::collections::HashMap;

use crate::error::{Result, TransitError};
use types::{NetworkSummary, StationDegree, Weight};

/// Internal station index into the adjacency table
pub(crate) type StationId = usize;

/// An undirected, weighted graph over named stations.
///
/// Stations are interned to indices; each station keeps its neighbor
/// list in **edge insertion order**, which is the deterministic
/// iteration order the DFS/BFS tie-breaking contract documents.
/// Symmetry invariant: every edge appears in both endpoints' lists
/// with the same weight.
#[derive(Debug, Default, Clone)]
pub struct StationGraph {
    /// Station names in insertion order
    stations: Vec<String>,
    index: HashMap<String, StationId>,
    /// Per-station neighbor list, insertion-ordered
    adj: Vec<Vec<(StationId, Weight)>>,
    /// Undirected edge count (each pair counted once)
    connections: usize,
}

impl StationGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a station if absent, returning its id
    fn intern(&mut self, name: &str) -> StationId {
        if let Some(&id) = self.index.get(name) {
            return id;
        }
        let id = self.stations.len();
        self.stations.push(name.to_string());
        self.index.insert(name.to_string(), id);
        self.adj.push(Vec::new());
        id
    }

    /// Add an undirected edge between `u` and `v`.
    ///
    /// Missing stations are created. Re-adding an existing pair
    /// overwrites the weight (last write wins) without changing the
    /// connection count. Self-loops are rejected, as are negative or
    /// non-finite weights.
    pub fn add_edge(&mut self, u: &str, v: &str, weight: f64) -> Result<()> {
        if u == v {
            return Err(TransitError::SelfLoop {
                station: u.to_string(),
            });
        }
        let weight = Weight::checked(weight)?;
        let u_id = self.intern(u);
        let v_id = self.intern(v);

        let existing = match self.adj[u_id].iter_mut().find(|(id, _)| *id == v_id) {
            Some(entry) => {
                entry.1 = weight;
                true
            }
            None => false,
        };
        if existing {
            // Symmetry invariant: the reverse entry always exists
            if let Some(back) = self.adj[v_id].iter_mut().find(|(id, _)| *id == u_id) {
                back.1 = weight;
            }
        } else {
            self.adj[u_id].push((v_id, weight));
            self.adj[v_id].push((u_id, weight));
            self.connections += 1;
        }
        tracing::trace!(from = u, to = v, weight = weight.value(), "add_edge");
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Number of stations
    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    /// Number of undirected connections (each edge counted once)
    pub fn connection_count(&self) -> usize {
        self.connections
    }

    /// Station names in insertion order
    pub fn stations(&self) -> impl Iterator<Item = &str> {
        self.stations.iter().map(String::as_str)
    }

    /// Number of distinct neighbors of `name`
    pub fn degree(&self, name: &str) -> Result<usize> {
        let id = self.require(name)?;
        Ok(self.adj[id].len())
    }

    /// Neighbors of `name` with edge weights, in edge insertion order
    pub fn neighbors(&self, name: &str) -> Result<Vec<(&str, Weight)>> {
        let id = self.require(name)?;
        Ok(self.adj[id]
            .iter()
            .map(|&(n, w)| (self.stations[n].as_str(), w))
            .collect())
    }

    /// Weight of the edge between `u` and `v`, if both exist and are connected
    pub fn weight(&self, u: &str, v: &str) -> Option<Weight> {
        let u_id = *self.index.get(u)?;
        let v_id = *self.index.get(v)?;
        self.adj[u_id]
            .iter()
            .find(|(id, _)| *id == v_id)
            .map(|&(_, w)| w)
    }

    /// Descriptive summary: counts plus per-station degree
    pub fn summary(&self) -> NetworkSummary {
        NetworkSummary {
            station_count: self.station_count(),
            connection_count: self.connection_count(),
            degrees: self
                .stations
                .iter()
                .enumerate()
                .map(|(id, name)| StationDegree {
                    station: name.clone(),
                    degree: self.adj[id].len(),
                })
                .collect(),
        }
    }

    pub(crate) fn require(&self, name: &str) -> Result<StationId> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| TransitError::unknown_station(name))
    }

    pub(crate) fn adjacency(&self, id: StationId) -> &[(StationId, Weight)] {
        &self.adj[id]
    }

    pub(crate) fn station_name(&self, id: StationId) -> &str {
        &self.stations[id]
    }

    /// Sum of edge weights along a station-id path
    pub(crate) fn path_weight(&self, ids: &[StationId]) -> Weight {
        ids.windows(2).fold(Weight::ZERO, |acc, pair| {
            let w = self.adj[pair[0]]
                .iter()
                .find(|(id, _)| *id == pair[1])
                .map(|&(_, w)| w)
                .unwrap_or(Weight::ZERO);
            acc + w
        })
    }
}
