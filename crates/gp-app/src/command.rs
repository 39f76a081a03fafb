//! Graph commands and their outcomes.
//!
//! Every change a front end makes to the network is expressed as a
//! [`Command`] and executed by a [`crate::Session`], which keeps all
//! mutation and simulation on one writer.

use gp_core::{ConnectionId, ElementId, Point};
use gp_graph::ElementKind;
use gp_sim::FlowReport;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Create an element; `at: None` uses the session's grid placement.
    AddElement {
        kind: ElementKind,
        at: Option<Point>,
    },
    /// Join two elements with a pipeline.
    Connect { a: ElementId, b: ElementId },
    /// Delete an element together with its pipelines.
    DeleteElement(ElementId),
    DeleteConnection(ConnectionId),
    /// Flip a switch.
    Toggle(ElementId),
    Move { element: ElementId, to: Point },
    /// Recompute gas annotations.
    Simulate,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    ElementAdded(ElementId),
    Connected(ConnectionId),
    ElementDeleted { cascaded: usize },
    ConnectionDeleted,
    Toggled { is_on: bool },
    Moved,
    Simulated(FlowReport),
    /// The command named something absent, or was otherwise a no-op
    /// (self-connection, toggling a non-switch).
    Ignored,
}

impl Outcome {
    pub fn is_ignored(&self) -> bool {
        matches!(self, Outcome::Ignored)
    }
}
