//! Error types for the gp-app service layer.

use std::path::PathBuf;

/// Application error type shared by the CLI and any other front end.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Failed to read {path}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Script error: {0}")]
    Script(String),

    #[error("Unknown label: {0}")]
    UnknownLabel(String),

    #[error("Label already in use: {0}")]
    DuplicateLabel(String),

    #[error("Label {label} names a {found}, expected a {expected}")]
    WrongTarget {
        label: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("Network integrity error: {0}")]
    Graph(String),

    #[error("Serialization error: {0}")]
    Serialize(String),

    #[error("Session closed")]
    SessionClosed,
}

/// Result type for gp-app operations.
pub type AppResult<T> = Result<T, AppError>;

impl From<gp_graph::GraphError> for AppError {
    fn from(err: gp_graph::GraphError) -> Self {
        AppError::Graph(err.to_string())
    }
}

impl From<gp_core::GpError> for AppError {
    fn from(err: gp_core::GpError) -> Self {
        AppError::Graph(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialize(err.to_string())
    }
}
