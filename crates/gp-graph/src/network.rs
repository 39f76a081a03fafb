//! The mutable pipeline network.
//!
//! `Network` is the only way to create or destroy elements and connections.
//! Deleting an element always deletes its connections in the same call, and
//! connection endpoints cannot be re-pointed afterwards, so a live connection
//! always joins two live, distinct elements.

use gp_core::{ConnectionId, ElementId, Point};
use tracing::debug;

use crate::arena::Arena;
use crate::config::NetworkConfig;
use crate::connection::Connection;
use crate::element::{Element, ElementKind};
use crate::hit_test;

#[derive(Debug, Clone, Default)]
pub struct Network {
    config: NetworkConfig,
    elements: Arena<Element>,
    connections: Arena<Connection>,
    /// Live elements in creation order (later entries are drawn on top).
    element_order: Vec<ElementId>,
    /// Live connections in creation order.
    connection_order: Vec<ConnectionId>,
}

impl Network {
    pub fn new(config: NetworkConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &NetworkConfig {
        &self.config
    }

    /// Add an element at `position` and return its handle.
    pub fn add_element(&mut self, kind: ElementKind, position: Point) -> ElementId {
        let element = Element::new(kind, position, &self.config);
        let id = ElementId::from_raw(self.elements.insert(element));
        self.element_order.push(id);
        debug!(element = %id, kind = kind.label(), x = position.x, y = position.y, "added element");
        id
    }

    /// Remove an element and every connection touching it.
    ///
    /// Absent or stale handles are a no-op.
    pub fn remove_element(&mut self, id: ElementId) -> Option<Element> {
        let element = self.elements.remove(id.raw())?;
        self.element_order.retain(|&e| e != id);

        let incident: Vec<ConnectionId> = self.connections_of(id).collect();
        for &conn in &incident {
            self.connections.remove(conn.raw());
        }
        self.connection_order.retain(|c| !incident.contains(c));

        debug!(element = %id, cascaded = incident.len(), "removed element");
        Some(element)
    }

    /// Join two distinct live elements with a new connection.
    ///
    /// Returns `None` (and adds nothing) when `a == b` or either handle is not live.
    pub fn connect(&mut self, a: ElementId, b: ElementId) -> Option<ConnectionId> {
        if a == b || !self.contains_element(a) || !self.contains_element(b) {
            debug!(start = %a, end = %b, "rejected connection");
            return None;
        }
        let connection = Connection::new(a, b, self.config.pipeline.color);
        let id = ConnectionId::from_raw(self.connections.insert(connection));
        self.connection_order.push(id);
        debug!(connection = %id, start = %a, end = %b, "added connection");
        Some(id)
    }

    /// Remove a single connection. Absent or stale handles are a no-op.
    pub fn remove_connection(&mut self, id: ConnectionId) -> Option<Connection> {
        let connection = self.connections.remove(id.raw())?;
        self.connection_order.retain(|&c| c != id);
        debug!(connection = %id, "removed connection");
        Some(connection)
    }

    /// Flip a switch. Returns the new state, or `None` if `id` is not a live switch.
    pub fn toggle(&mut self, id: ElementId) -> Option<bool> {
        let config = &self.config;
        let state = self.elements.get_mut(id.raw())?.toggle(config)?;
        debug!(element = %id, is_on = state, "toggled switch");
        Some(state)
    }

    /// Move an element. Returns `false` if `id` is not live.
    pub fn move_element(&mut self, id: ElementId, position: Point) -> bool {
        match self.elements.get_mut(id.raw()) {
            Some(element) => {
                element.set_position(position);
                true
            }
            None => false,
        }
    }

    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(id.raw())
    }

    /// Mutable access to an element's annotation state.
    pub fn element_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.elements.get_mut(id.raw())
    }

    pub fn connection(&self, id: ConnectionId) -> Option<&Connection> {
        self.connections.get(id.raw())
    }

    /// Mutable access to a connection's annotation state.
    pub fn connection_mut(&mut self, id: ConnectionId) -> Option<&mut Connection> {
        self.connections.get_mut(id.raw())
    }

    pub fn contains_element(&self, id: ElementId) -> bool {
        self.elements.contains(id.raw())
    }

    pub fn contains_connection(&self, id: ConnectionId) -> bool {
        self.connections.contains(id.raw())
    }

    /// Live element handles in creation order.
    pub fn element_ids(&self) -> &[ElementId] {
        &self.element_order
    }

    /// Live connection handles in creation order.
    pub fn connection_ids(&self) -> &[ConnectionId] {
        &self.connection_order
    }

    pub fn elements(&self) -> impl Iterator<Item = (ElementId, &Element)> + '_ {
        self.element_order
            .iter()
            .filter_map(|&id| self.element(id).map(|e| (id, e)))
    }

    pub fn connections(&self) -> impl Iterator<Item = (ConnectionId, &Connection)> + '_ {
        self.connection_order
            .iter()
            .filter_map(|&id| self.connection(id).map(|c| (id, c)))
    }

    /// Connections with `element` as an endpoint, in creation order.
    pub fn connections_of(&self, element: ElementId) -> impl Iterator<Item = ConnectionId> + '_ {
        self.connections()
            .filter(move |(_, c)| c.is_connected_to(element))
            .map(|(id, _)| id)
    }

    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.element_count() == 0
    }

    /// Upper bound on element slot indices, for slot-indexed scratch buffers.
    pub fn element_slot_capacity(&self) -> usize {
        self.elements.slot_capacity()
    }

    /// Attachment point of an element's pipelines.
    pub fn element_center(&self, id: ElementId) -> Option<Point> {
        self.element(id).map(|e| e.center(&self.config))
    }

    /// Topmost element whose footprint contains `point`.
    pub fn element_at(&self, point: Point) -> Option<ElementId> {
        hit_test::element_at(self, point)
    }

    /// First connection whose pipe passes within the hit distance of `point`.
    pub fn connection_at(&self, point: Point) -> Option<ConnectionId> {
        hit_test::connection_at(self, point)
    }
}
