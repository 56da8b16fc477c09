use serde::{Deserialize, Serialize};

use crate::error::{Result, TransitError};

/// Represents the cost of traversing a single edge or a whole route.
///
/// Wraps an `f64` so that edge weights cannot be silently mixed with
/// other numeric quantities. Construction through [`Weight::checked`]
/// enforces the Dijkstra precondition (finite, non-negative) at the
/// graph boundary instead of discovering it later as a wrong answer.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Weight(f64);

impl Weight {
    pub const ZERO: Weight = Weight(0.0);

    /// Wrap a raw weight without validation (internal use, test fixtures)
    pub fn new(value: f64) -> Self {
        Weight(value)
    }

    /// Validate and wrap a weight supplied by a caller
    pub fn checked(value: f64) -> Result<Self> {
        if !value.is_finite() || value < 0.0 {
            return Err(TransitError::InvalidWeight { value });
        }
        Ok(Weight(value))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Default for Weight {
    fn default() -> Self {
        Self::ZERO
    }
}

impl std::ops::Add for Weight {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Weight(self.0 + other.0)
    }
}

impl From<f64> for Weight {
    fn from(value: f64) -> Self {
        Weight(value)
    }
}

impl std::fmt::Display for Weight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which search algorithm produced a path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Depth-first search: first discovered path, not necessarily short
    Dfs,
    /// Breadth-first search: fewest hops
    Bfs,
    /// Dijkstra: minimum total weight
    Shortest,
}

impl std::str::FromStr for Algorithm {
    type Err = TransitError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "dfs" => Ok(Algorithm::Dfs),
            "bfs" => Ok(Algorithm::Bfs),
            "shortest" | "dijkstra" => Ok(Algorithm::Shortest),
            other => Err(TransitError::UnknownAlgorithm(other.to_string())),
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Algorithm::Dfs => write!(f, "dfs"),
            Algorithm::Bfs => write!(f, "bfs"),
            Algorithm::Shortest => write!(f, "shortest"),
        }
    }
}

/// Result of a path query between two stations.
///
/// A disconnected pair is reported as `found: false`, never as an error.
#[derive(Debug, Clone, Serialize)]
pub struct PathResult {
    pub from: String,
    pub to: String,
    pub algorithm: Algorithm,
    pub found: bool,
    /// Ordered station sequence, `from` through `to` inclusive (empty when not found)
    pub stations: Vec<String>,
    /// Number of edges traversed
    pub hops: usize,
    /// Sum of traversed edge weights
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_weight: Option<Weight>,
}

impl PathResult {
    pub fn found(
        algorithm: Algorithm,
        stations: Vec<String>,
        total_weight: Weight,
    ) -> Self {
        debug_assert!(!stations.is_empty());
        PathResult {
            from: stations.first().cloned().unwrap_or_default(),
            to: stations.last().cloned().unwrap_or_default(),
            algorithm,
            found: true,
            hops: stations.len().saturating_sub(1),
            stations,
            total_weight: Some(total_weight),
        }
    }

    pub fn not_found(algorithm: Algorithm, from: &str, to: &str) -> Self {
        PathResult {
            from: from.to_string(),
            to: to.to_string(),
            algorithm,
            found: false,
            stations: Vec::new(),
            hops: 0,
            total_weight: None,
        }
    }
}

/// Per-station degree entry in a network summary
#[derive(Debug, Clone, Serialize)]
pub struct StationDegree {
    pub station: String,
    pub degree: usize,
}

/// Descriptive statistics for a station graph
#[derive(Debug, Clone, Serialize)]
pub struct NetworkSummary {
    pub station_count: usize,
    pub connection_count: usize,
    /// One entry per station, in station insertion order
    pub degrees: Vec<StationDegree>,
}
