use crate::error::Result;
use crate::graph::path;
use crate::graph::types::{Algorithm, PathResult, Weight};
use crate::graph::{StationGraph, StationId};

/// A node on the DFS stack plus the next neighbor to try
struct Frame {
    station: StationId,
    cursor: usize,
}

/// Find a path from `from` to `to` by depth-first search.
///
/// Iterative with an explicit stack, so deep graphs cannot exhaust the
/// call stack. Neighbors are expanded in edge insertion order, and the
/// visited set is shared across branches (a station entered on one
/// branch is never re-entered on another), so the returned path is the
/// first complete path a recursive first-success DFS would find. It is
/// a discovery-order path, not guaranteed shortest in hops or weight.
#[tracing::instrument(skip(graph), fields(from = %from, to = %to))]
pub fn dfs_path(graph: &StationGraph, from: &str, to: &str) -> Result<PathResult> {
    let start = graph.require(from)?;
    let end = graph.require(to)?;

    if start == end {
        return Ok(PathResult::found(
            Algorithm::Dfs,
            vec![from.to_string()],
            Weight::ZERO,
        ));
    }

    let mut visited = vec![false; graph.station_count()];
    let mut stack = vec![Frame {
        station: start,
        cursor: 0,
    }];
    visited[start] = true;
    let mut found = false;

    while let Some(top) = stack.len().checked_sub(1) {
        let station = stack[top].station;
        let cursor = stack[top].cursor;
        let adjacency = graph.adjacency(station);

        if cursor >= adjacency.len() {
            // Neighbors exhausted: backtrack. The visited mark stays,
            // matching first-success DFS semantics.
            stack.pop();
            continue;
        }
        stack[top].cursor += 1;

        let (next, _) = adjacency[cursor];
        if visited[next] {
            continue;
        }
        visited[next] = true;
        stack.push(Frame {
            station: next,
            cursor: 0,
        });
        if next == end {
            found = true;
            break;
        }
    }

    if !found {
        tracing::debug!("dfs exhausted without reaching target");
        return Ok(PathResult::not_found(Algorithm::Dfs, from, to));
    }

    let ids: Vec<StationId> = stack.iter().map(|f| f.station).collect();
    let total = graph.path_weight(&ids);
    Ok(PathResult::found(
        Algorithm::Dfs,
        path::to_names(graph, &ids),
        total,
    ))
}
