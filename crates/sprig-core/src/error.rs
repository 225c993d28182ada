//! Error types and exit codes for sprig
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (missing or malformed graph file, out-of-range vertex)

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes reported by the sprig CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - missing graph file, malformed edge list (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during sprig operations
#[derive(Error, Debug)]
pub enum SprigError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    // Data errors (exit code 3)
    #[error("graph file not found: {path:?}")]
    GraphNotFound { path: PathBuf },

    #[error("invalid edge list in {path:?} (line {line}): {reason}")]
    InvalidEdgeList {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    #[error("vertex {vertex} out of range (graph has {vertex_count} vertices)")]
    VertexOutOfRange { vertex: usize, vertex_count: usize },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl SprigError {
    /// Create an error for a malformed edge-list line
    pub fn invalid_edge_list(
        path: impl Into<PathBuf>,
        line: usize,
        reason: impl Into<String>,
    ) -> Self {
        SprigError::InvalidEdgeList {
            path: path.into(),
            line,
            reason: reason.into(),
        }
    }

    /// Create an error for a vertex outside `[0, vertex_count)`
    pub fn vertex_out_of_range(vertex: usize, vertex_count: usize) -> Self {
        SprigError::VertexOutOfRange {
            vertex,
            vertex_count,
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            // Usage errors
            SprigError::UnknownFormat(_) | SprigError::UsageError(_) => ExitCode::Usage,

            // Data errors
            SprigError::GraphNotFound { .. }
            | SprigError::InvalidEdgeList { .. }
            | SprigError::VertexOutOfRange { .. } => ExitCode::Data,

            // Generic failures
            SprigError::Io(_) | SprigError::Json(_) | SprigError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            SprigError::UnknownFormat(_) => "unknown_format",
            SprigError::UsageError(_) => "usage_error",
            SprigError::GraphNotFound { .. } => "graph_not_found",
            SprigError::InvalidEdgeList { .. } => "invalid_edge_list",
            SprigError::VertexOutOfRange { .. } => "vertex_out_of_range",
            SprigError::Io(_) => "io_error",
            SprigError::Json(_) => "json_error",
            SprigError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for sprig operations
pub type Result<T> = std::result::Result<T, SprigError>;
