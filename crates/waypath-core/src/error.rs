//! Error types and exit codes for waypath
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure (I/O, unreadable graph document)
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (duplicate/unknown node, invalid weight, duplicate edge)

use std::path::PathBuf;
use thiserror::Error;

/// Process exit codes used by the waypath CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Graph data error (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors raised while building, loading or querying a graph
#[derive(Error, Debug)]
pub enum GraphError {
    // Graph data errors (exit code 3)
    #[error("node already exists: {id}")]
    DuplicateNode { id: String },

    #[error("unknown node: {id}")]
    UnknownNode { id: String },

    #[error("invalid weight {weight} on edge {from} -> {to} (weights must be non-negative)")]
    InvalidWeight { from: String, to: String, weight: f64 },

    #[error("edge already exists: {from} -> {to}")]
    DuplicateEdge { from: String, to: String },

    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("unsupported graph document {path:?} (expected .toml, .json, .yaml or .yml)")]
    UnsupportedFormat { path: PathBuf },

    #[error("{0}")]
    UsageError(String),

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl GraphError {
    /// Create an error for a node id that is already registered
    pub fn duplicate_node(id: impl std::fmt::Display) -> Self {
        GraphError::DuplicateNode { id: id.to_string() }
    }

    /// Create an error for a node id that is not in the graph
    pub fn unknown_node(id: impl std::fmt::Display) -> Self {
        GraphError::UnknownNode { id: id.to_string() }
    }

    /// Create an error for a negative or NaN edge weight
    pub fn invalid_weight(
        from: impl std::fmt::Display,
        to: impl std::fmt::Display,
        weight: f64,
    ) -> Self {
        GraphError::InvalidWeight {
            from: from.to_string(),
            to: to.to_string(),
            weight,
        }
    }

    /// Create an error for a second edge between the same endpoints
    pub fn duplicate_edge(from: impl std::fmt::Display, to: impl std::fmt::Display) -> Self {
        GraphError::DuplicateEdge {
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            GraphError::UnknownFormat(_)
            | GraphError::UnsupportedFormat { .. }
            | GraphError::UsageError(_) => ExitCode::Usage,

            GraphError::DuplicateNode { .. }
            | GraphError::UnknownNode { .. }
            | GraphError::InvalidWeight { .. }
            | GraphError::DuplicateEdge { .. } => ExitCode::Data,

            GraphError::Io(_)
            | GraphError::Yaml(_)
            | GraphError::Json(_)
            | GraphError::Toml(_)
            | GraphError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the stable error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            GraphError::DuplicateNode { .. } => "duplicate_node",
            GraphError::UnknownNode { .. } => "unknown_node",
            GraphError::InvalidWeight { .. } => "invalid_weight",
            GraphError::DuplicateEdge { .. } => "duplicate_edge",
            GraphError::UnknownFormat(_) => "unknown_format",
            GraphError::UnsupportedFormat { .. } => "unsupported_format",
            GraphError::UsageError(_) => "usage_error",
            GraphError::Io(_) => "io_error",
            GraphError::Yaml(_) => "yaml_error",
            GraphError::Json(_) => "json_error",
            GraphError::Toml(_) => "toml_error",
            GraphError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
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

/// Result type alias for waypath operations
pub type Result<T> = std::result::Result<T, GraphError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graph_data_errors_map_to_data_exit_code() {
        assert_eq!(GraphError::duplicate_node("A").exit_code(), ExitCode::Data);
        assert_eq!(GraphError::unknown_node("Z").exit_code(), ExitCode::Data);
        assert_eq!(
            GraphError::invalid_weight("A", "B", -3.0).exit_code(),
            ExitCode::Data
        );
        assert_eq!(
            GraphError::duplicate_edge("A", "B").exit_code(),
            ExitCode::Data
        );
    }

    #[test]
    fn test_usage_errors_map_to_usage_exit_code() {
        let err = GraphError::UnknownFormat("xml".to_string());
        assert_eq!(err.exit_code(), ExitCode::Usage);
        assert_eq!(i32::from(err.exit_code()), 2);
    }

    #[test]
    fn test_invalid_weight_message() {
        let err = GraphError::invalid_weight("A", "B", -3.0);
        assert_eq!(
            err.to_string(),
            "invalid weight -3 on edge A -> B (weights must be non-negative)"
        );
    }

    #[test]
    fn test_to_json_envelope() {
        let json = GraphError::unknown_node("Z").to_json();
        assert_eq!(json["error"]["code"], 3);
        assert_eq!(json["error"]["type"], "unknown_node");
        assert_eq!(json["error"]["message"], "unknown node: Z");
    }
}
