use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use crate::error::Result;
use crate::graph::path;
use crate::graph::types::{Algorithm, PathResult, Weight};
use crate::graph::{StationGraph, StationId};

/// Wrapper for BinaryHeap to use as min-heap, ordered by accumulated
/// cost with a discovery sequence number as deterministic tie-break
#[derive(Debug, Clone)]
pub struct HeapEntry {
    pub station: StationId,
    pub accumulated: Weight,
    /// Monotonic counter assigned at push time; equal-cost entries pop
    /// in discovery order so results are reproducible run to run
    pub seq: u64,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.accumulated.value() == other.accumulated.value() && self.seq == other.seq
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.accumulated
            .value()
            .partial_cmp(&other.accumulated.value())
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// Find the minimum-total-weight path from `from` to `to` with
/// Dijkstra's algorithm.
///
/// Distances start unknown (infinite) everywhere but `from`; the heap
/// holds unsettled stations keyed by best-known distance. Stale heap
/// entries (superseded by a later relaxation) are skipped on pop
/// rather than removed. The loop exits early once `to` is settled;
/// unreachable stations never enter the heap, so exhaustion of the
/// heap means `to` is unreachable.
///
/// The reported `total_weight` is the settled distance of `to`, which
/// by construction equals the sum of the reconstructed path's edge
/// weights. Non-negative weights are guaranteed at `add_edge`.
#[tracing::instrument(skip(graph), fields(from = %from, to = %to))]
pub fn shortest_path(graph: &StationGraph, from: &str, to: &str) -> Result<PathResult> {
    let start = graph.require(from)?;
    let end = graph.require(to)?;

    if start == end {
        return Ok(PathResult::found(
            Algorithm::Shortest,
            vec![from.to_string()],
            Weight::ZERO,
        ));
    }

    let mut distances: Vec<Option<Weight>> = vec![None; graph.station_count()];
    let mut settled = vec![false; graph.station_count()];
    let mut predecessors: HashMap<StationId, StationId> = HashMap::new();
    let mut heap: BinaryHeap<Reverse<HeapEntry>> = BinaryHeap::new();
    let mut seq: u64 = 0;

    distances[start] = Some(Weight::ZERO);
    heap.push(Reverse(HeapEntry {
        station: start,
        accumulated: Weight::ZERO,
        seq,
    }));

    let mut reached = false;
    while let Some(Reverse(HeapEntry {
        station: current,
        accumulated,
        ..
    })) = heap.pop()
    {
        if settled[current] {
            // Stale entry: a shorter route to this station already settled it
            continue;
        }
        settled[current] = true;

        if current == end {
            reached = true;
            break;
        }

        for &(neighbor, weight) in graph.adjacency(current) {
            if settled[neighbor] {
                continue;
            }
            let candidate = accumulated + weight;
            let improves = match distances[neighbor] {
                Some(best) => candidate < best,
                None => true,
            };
            if improves {
                distances[neighbor] = Some(candidate);
                predecessors.insert(neighbor, current);
                seq += 1;
                heap.push(Reverse(HeapEntry {
                    station: neighbor,
                    accumulated: candidate,
                    seq,
                }));
            }
        }
    }

    if !reached {
        tracing::debug!("target never settled, unreachable");
        return Ok(PathResult::not_found(Algorithm::Shortest, from, to));
    }

    let ids = path::reconstruct(start, end, &predecessors);
    let total = distances[end].unwrap_or(Weight::ZERO);
    debug_assert_eq!(graph.path_weight(&ids).value(), total.value());
    Ok(PathResult::found(
        Algorithm::Shortest,
        path::to_names(graph, &ids),
        total,
    ))
}
