use std::collections::{HashMap, VecDeque};

use crate::error::Result;
use crate::graph::path;
use crate::graph::types::{Algorithm, PathResult, Weight};
use crate::graph::{StationGraph, StationId};

/// Find a minimum-hop path from `from` to `to` by breadth-first search.
///
/// Level-order traversal over a FIFO frontier. A neighbor is marked
/// visited the moment it is enqueued, never when dequeued, so no
/// station enters the queue twice. Among equally short paths the one
/// discovered first under edge insertion order wins.
#[tracing::instrument(skip(graph), fields(from = %from, to = %to))]
pub fn bfs_path(graph: &StationGraph, from: &str, to: &str) -> Result<PathResult> {
    let start = graph.require(from)?;
    let end = graph.require(to)?;

    if start == end {
        return Ok(PathResult::found(
            Algorithm::Bfs,
            vec![from.to_string()],
            Weight::ZERO,
        ));
    }

    let mut visited = vec![false; graph.station_count()];
    let mut predecessors: HashMap<StationId, StationId> = HashMap::new();
    let mut queue: VecDeque<StationId> = VecDeque::new();

    visited[start] = true;
    queue.push_back(start);
    let mut found = false;

    'search: while let Some(current) = queue.pop_front() {
        for &(neighbor, _) in graph.adjacency(current) {
            if visited[neighbor] {
                continue;
            }
            visited[neighbor] = true;
            predecessors.insert(neighbor, current);
            if neighbor == end {
                found = true;
                break 'search;
            }
            queue.push_back(neighbor);
        }
    }

    if !found {
        tracing::debug!("bfs frontier drained without reaching target");
        return Ok(PathResult::not_found(Algorithm::Bfs, from, to));
    }

    let ids = path::reconstruct(start, end, &predecessors);
    let total = graph.path_weight(&ids);
    Ok(PathResult::found(
        Algorithm::Bfs,
        path::to_names(graph, &ids),
        total,
    ))
}
