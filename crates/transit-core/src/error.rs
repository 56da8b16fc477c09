//! Error types and exit codes for transit
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (unknown station, invalid network config)
//!
//! "No path between two stations" is deliberately NOT an error: path
//! queries return a [`PathResult`](crate::graph::types::PathResult) with
//! `found: false`, so callers can tell a disconnected pair apart from a
//! misspelled station name.

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes per transit CLI contract
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - unknown station, invalid network (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during transit operations
#[derive(Error, Debug)]
pub enum TransitError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("unknown algorithm: {0} (expected: dfs, bfs, or shortest)")]
    UnknownAlgorithm(String),

    #[error("{0}")]
    UsageError(String),

    // Data errors (exit code 3)
    #[error("unknown station: {name}")]
    UnknownStation { name: String },

    #[error("invalid edge weight: {value} (weights must be finite and non-negative)")]
    InvalidWeight { value: f64 },

    #[error("self-loop not allowed: {station}")]
    SelfLoop { station: String },

    #[error("invalid network: {reason}")]
    InvalidNetwork { reason: String },

    #[error("network file not found: {path:?}")]
    NetworkFileNotFound { path: PathBuf },

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl TransitError {
    /// Create an unknown-station error
    pub fn unknown_station(name: impl Into<String>) -> Self {
        TransitError::UnknownStation { name: name.into() }
    }

    /// Create an invalid-network error
    pub fn invalid_network(reason: impl Into<String>) -> Self {
        TransitError::InvalidNetwork {
            reason: reason.into(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            // Usage errors
            TransitError::UnknownFormat(_)
            | TransitError::UnknownAlgorithm(_)
            | TransitError::UsageError(_) => ExitCode::Usage,

            // Data errors
            TransitError::UnknownStation { .. }
            | TransitError::InvalidWeight { .. }
            | TransitError::SelfLoop { .. }
            | TransitError::InvalidNetwork { .. }
            | TransitError::NetworkFileNotFound { .. }
            | TransitError::Toml(_) => ExitCode::Data,

            // Generic failures
            TransitError::Io(_) | TransitError::Json(_) | TransitError::Other(_) => {
                ExitCode::Failure
            }
        }
    }

    /// Stable machine-readable error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            TransitError::UnknownFormat(_) => "unknown_format",
            TransitError::UnknownAlgorithm(_) => "unknown_algorithm",
            TransitError::UsageError(_) => "usage_error",
            TransitError::UnknownStation { .. } => "unknown_station",
            TransitError::InvalidWeight { .. } => "invalid_weight",
            TransitError::SelfLoop { .. } => "self_loop",
            TransitError::InvalidNetwork { .. } => "invalid_network",
            TransitError::NetworkFileNotFound { .. } => "network_file_not_found",
            TransitError::Toml(_) => "toml_error",
            TransitError::Io(_) => "io_error",
            TransitError::Json(_) => "json_error",
            TransitError::Other(_) => "other",
        }
    }

    /// Structured JSON envelope for `--format json` error reporting
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "code": self.exit_code() as i32,
            "type": self.error_type(),
            "message": self.to_string(),
        })
    }
}

/// Result type for transit operations
pub type Result<T> = std::result::Result<T, TransitError>;
