//! Compact element -> connection incidence for traversal.
//!
//! Scanning every connection for each visited element is O(V·E); the index
//! turns a simulation pass into O(V + E) per source.

use gp_core::{ConnectionId, ElementId};

use crate::network::Network;

/// Incidence lists keyed by element slot.
///
/// Built from a snapshot of the network; it must be rebuilt after any
/// structural mutation (element or connection added/removed).
#[derive(Debug, Clone, Default)]
pub struct IncidenceIndex {
    /// Slot i's connections are in `incident[offsets[i]..offsets[i + 1]]`.
    offsets: Vec<usize>,
    /// Flat list of connection handles, creation order within each slot.
    incident: Vec<ConnectionId>,
}

impl IncidenceIndex {
    pub fn from_network(network: &Network) -> Self {
        let slots = network.element_slot_capacity();

        let mut counts = vec![0usize; slots];
        for (_, conn) in network.connections() {
            for end in conn.endpoints() {
                counts[end.slot() as usize] += 1;
            }
        }

        let mut offsets = Vec::with_capacity(slots + 1);
        offsets.push(0);
        let mut total = 0;
        for count in &counts {
            total += count;
            offsets.push(total);
        }

        // Fill each slot's range front to back, preserving connection order.
        let mut cursor = offsets[..slots].to_vec();
        let mut incident = vec![None; total];
        for (id, conn) in network.connections() {
            for end in conn.endpoints() {
                let at = &mut cursor[end.slot() as usize];
                incident[*at] = Some(id);
                *at += 1;
            }
        }

        Self {
            offsets,
            incident: incident.into_iter().flatten().collect(),
        }
    }

    /// Connections incident to `element`; empty for unknown slots.
    pub fn incident(&self, element: ElementId) -> &[ConnectionId] {
        let idx = element.slot() as usize;
        if idx + 1 >= self.offsets.len() {
            return &[];
        }
        &self.incident[self.offsets[idx]..self.offsets[idx + 1]]
    }

    /// Number of element slots covered.
    pub fn slot_count(&self) -> usize {
        self.offsets.len().saturating_sub(1)
    }

    /// Total incidences (twice the connection count).
    pub fn incidence_count(&self) -> usize {
        self.incident.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::ElementKind;
    use gp_core::Point;

    #[test]
    fn incidence_matches_connections_of() {
        let mut net = Network::default();
        let a = net.add_element(ElementKind::GasSource, Point::ORIGIN);
        let b = net.add_element(ElementKind::Connector, Point::ORIGIN);
        let c = net.add_element(ElementKind::Switch, Point::ORIGIN);
        let ab = net.connect(a, b).unwrap();
        let bc = net.connect(b, c).unwrap();
        let ca = net.connect(c, a).unwrap();

        let idx = IncidenceIndex::from_network(&net);
        assert_eq!(idx.slot_count(), 3);
        assert_eq!(idx.incidence_count(), 6);
        assert_eq!(idx.incident(a), &[ab, ca]);
        assert_eq!(idx.incident(b), &[ab, bc]);
        assert_eq!(idx.incident(c), &[bc, ca]);

        for id in [a, b, c] {
            let expected: Vec<_> = net.connections_of(id).collect();
            assert_eq!(idx.incident(id), expected.as_slice());
        }
    }

    #[test]
    fn removed_elements_have_no_incidence() {
        let mut net = Network::default();
        let a = net.add_element(ElementKind::GasSource, Point::ORIGIN);
        let b = net.add_element(ElementKind::Connector, Point::ORIGIN);
        net.connect(a, b).unwrap();
        net.remove_element(b);

        let idx = IncidenceIndex::from_network(&net);
        assert!(idx.incident(a).is_empty());
        assert!(idx.incident(b).is_empty());
        assert_eq!(idx.incidence_count(), 0);
    }

    #[test]
    fn empty_network() {
        let idx = IncidenceIndex::from_network(&Network::default());
        assert_eq!(idx.slot_count(), 0);
        assert_eq!(idx.incidence_count(), 0);
    }
}
