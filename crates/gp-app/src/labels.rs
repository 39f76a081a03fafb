//! Human-readable names for elements and connections.

use std::collections::HashMap;

use gp_core::{ConnectionId, ElementId};

use crate::error::{AppError, AppResult};

/// What a label refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    Element(ElementId),
    Connection(ConnectionId),
}

impl Target {
    pub fn describe(self) -> &'static str {
        match self {
            Target::Element(_) => "element",
            Target::Connection(_) => "connection",
        }
    }
}

/// Bidirectional label table.
///
/// Labels outlive the things they name: a label for a deleted element still
/// resolves to its (now stale) handle, which the network treats as absent.
#[derive(Debug, Clone, Default)]
pub struct Labels {
    by_label: HashMap<String, Target>,
    by_target: HashMap<Target, String>,
}

impl Labels {
    pub fn insert(&mut self, label: impl Into<String>, target: Target) -> AppResult<()> {
        let label = label.into();
        if self.by_label.contains_key(&label) {
            return Err(AppError::DuplicateLabel(label));
        }
        self.by_target.insert(target, label.clone());
        self.by_label.insert(label, target);
        Ok(())
    }

    pub fn resolve(&self, label: &str) -> AppResult<Target> {
        self.by_label
            .get(label)
            .copied()
            .ok_or_else(|| AppError::UnknownLabel(label.to_string()))
    }

    pub fn element(&self, label: &str) -> AppResult<ElementId> {
        match self.resolve(label)? {
            Target::Element(id) => Ok(id),
            other => Err(AppError::WrongTarget {
                label: label.to_string(),
                expected: "element",
                found: other.describe(),
            }),
        }
    }

    /// Label of an element, falling back to its handle.
    pub fn element_name(&self, id: ElementId) -> String {
        self.by_target
            .get(&Target::Element(id))
            .cloned()
            .unwrap_or_else(|| id.to_string())
    }

    /// Label of a connection, falling back to its handle.
    pub fn connection_name(&self, id: ConnectionId) -> String {
        self.by_target
            .get(&Target::Connection(id))
            .cloned()
            .unwrap_or_else(|| id.to_string())
    }
}
