//! Graph-specific error types.

use gp_core::{ConnectionId, ElementId, GpError};
use thiserror::Error;

pub type GraphResult<T> = Result<T, GraphError>;

/// Structural integrity violations detected by [`crate::validate_network`].
///
/// The mutation API never produces these; they exist so callers (and tests)
/// can assert the invariants explicitly.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("Connection {connection} refers to missing element {element}")]
    DanglingEndpoint {
        connection: ConnectionId,
        element: ElementId,
    },

    #[error("Connection {connection} joins element {element} to itself")]
    SelfLoop {
        connection: ConnectionId,
        element: ElementId,
    },

    #[error("{what} order lists {listed} entries but {stored} are stored")]
    OrderMismatch {
        what: &'static str,
        listed: usize,
        stored: usize,
    },

    #[error("{what} order contains stale handle {handle}")]
    StaleOrderEntry { what: &'static str, handle: String },
}

impl From<GraphError> for GpError {
    fn from(err: GraphError) -> Self {
        GpError::Invariant {
            what: err.to_string(),
        }
    }
}
