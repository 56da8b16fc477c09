//! Path reconstruction utilities for graph search

use std::collections::HashMap;

use crate::graph::{StationGraph, StationId};

/// Rebuild the station-id path from a predecessor map by walking
/// backward from `to` until `from`, then reversing.
///
/// Callers guarantee the predecessor chain is complete: every vertex
/// recorded points at the vertex it was discovered from.
pub(crate) fn reconstruct(
    from: StationId,
    to: StationId,
    predecessors: &HashMap<StationId, StationId>,
) -> Vec<StationId> {
    let mut ids = vec![to];
    let mut current = to;
    while current != from {
        match predecessors.get(&current) {
            Some(&pred) => {
                ids.push(pred);
                current = pred;
            }
            None => break,
        }
    }
    ids.reverse();
    ids
}

/// Resolve a station-id path to owned station names
pub(crate) fn to_names(graph: &StationGraph, ids: &[StationId]) -> Vec<String> {
    ids.iter()
        .map(|&id| graph.station_name(id).to_string())
        .collect()
}
