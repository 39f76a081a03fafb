//! Flow propagation.
//!
//! One pass:
//! 1. reset every non-source element and every connection to "no gas"
//! 2. for each gas source, in network order, walk depth-first over the
//!    connections, marking everything reached
//!
//! A closed switch still receives gas at its body but none of its
//! connections are activated from it. Walks from different sources are
//! unioned; nothing is reset between them.

use gp_core::ElementId;
use gp_graph::{IncidenceIndex, Network};
use serde::Serialize;
use tracing::{debug, info, trace};

/// Summary of one simulation pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FlowReport {
    /// Gas sources walked.
    pub sources: usize,
    /// Elements popped past the visited guard, summed over all source walks.
    pub visits: usize,
    /// Non-source elements carrying gas after the pass.
    pub energized_elements: usize,
    /// Connections carrying gas after the pass.
    pub energized_connections: usize,
}

/// Reusable traversal state.
///
/// Keeping one of these around avoids reallocating the visited set and stack
/// on every pass; results are identical to [`simulate`].
#[derive(Debug, Clone, Default)]
pub struct FlowSimulation {
    visited: Vec<bool>,
    stack: Vec<ElementId>,
}

impl FlowSimulation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute every gas annotation in `network`.
    pub fn run(&mut self, network: &mut Network) -> FlowReport {
        reset(network);

        let index = IncidenceIndex::from_network(network);
        let sources: Vec<ElementId> = network
            .elements()
            .filter(|(_, e)| e.is_source())
            .map(|(id, _)| id)
            .collect();

        let mut report = FlowReport {
            sources: sources.len(),
            ..FlowReport::default()
        };
        for source in sources {
            let visits = self.walk(network, &index, source);
            debug!(source = %source, visits, "propagated from source");
            report.visits += visits;
        }

        report.energized_elements = network
            .elements()
            .filter(|(_, e)| !e.is_source() && e.has_gas())
            .count();
        report.energized_connections = network.connections().filter(|(_, c)| c.has_gas()).count();

        info!(
            sources = report.sources,
            elements = report.energized_elements,
            connections = report.energized_connections,
            "flow simulation complete"
        );
        report
    }

    /// Depth-first walk from one source; returns the number of elements visited.
    fn walk(&mut self, network: &mut Network, index: &IncidenceIndex, source: ElementId) -> usize {
        let active = network.config().pipeline.active_color;

        self.visited.clear();
        self.visited.resize(network.element_slot_capacity(), false);
        self.stack.clear();
        self.stack.push(source);

        let mut visits = 0;
        while let Some(current) = self.stack.pop() {
            let slot = current.slot() as usize;
            if self.visited[slot] {
                continue;
            }
            self.visited[slot] = true;
            visits += 1;

            let Some(element) = network.element_mut(current) else {
                continue;
            };
            element.set_has_gas(true);
            if element.blocks_flow() {
                trace!(element = %current, "closed switch halts propagation");
                continue;
            }

            for &conn_id in index.incident(current) {
                let Some(conn) = network.connection_mut(conn_id) else {
                    continue;
                };
                conn.mark(true, active);
                if let Some(next) = conn.opposite(current) {
                    if !self.visited[next.slot() as usize] {
                        self.stack.push(next);
                    }
                }
            }
            trace!(element = %current, "visited");
        }
        visits
    }
}

/// Recompute every gas annotation in `network` with fresh traversal state.
pub fn simulate(network: &mut Network) -> FlowReport {
    FlowSimulation::new().run(network)
}

fn reset(network: &mut Network) {
    let inactive = network.config().pipeline.color;

    let elements = network.element_ids().to_vec();
    for id in elements {
        if let Some(element) = network.element_mut(id) {
            element.set_has_gas(false);
        }
    }

    let connections = network.connection_ids().to_vec();
    for id in connections {
        if let Some(conn) = network.connection_mut(id) {
            conn.mark(false, inactive);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gp_core::Point;
    use gp_graph::ElementKind;

    #[test]
    fn empty_network_is_untouched() {
        let mut net = Network::default();
        assert_eq!(simulate(&mut net), FlowReport::default());
    }

    #[test]
    fn lone_source_stays_gas_present() {
        let mut net = Network::default();
        let s = net.add_element(ElementKind::GasSource, Point::ORIGIN);
        let report = simulate(&mut net);
        assert!(net.element(s).unwrap().has_gas());
        assert_eq!(report.sources, 1);
        assert_eq!(report.visits, 1);
        assert_eq!(report.energized_elements, 0);
    }

    #[test]
    fn active_pipes_are_recolored() {
        let mut net = Network::default();
        let s = net.add_element(ElementKind::GasSource, Point::ORIGIN);
        let c = net.add_element(ElementKind::Connector, Point::ORIGIN);
        let lone = net.add_element(ElementKind::Connector, Point::ORIGIN);
        let lit = net.connect(s, c).unwrap();
        let dark = net.connect(c, lone).unwrap();
        net.remove_element(s);
        let s2 = net.add_element(ElementKind::GasSource, Point::ORIGIN);
        let lit2 = net.connect(s2, lone).unwrap();

        simulate(&mut net);
        let cfg = net.config().clone();
        assert!(net.connection(lit).is_none());
        assert_eq!(net.connection(lit2).unwrap().color(), cfg.pipeline.active_color);
        assert_eq!(net.connection(dark).unwrap().color(), cfg.pipeline.active_color);

        net.remove_connection(lit2);
        simulate(&mut net);
        assert_eq!(net.connection(dark).unwrap().color(), cfg.pipeline.color);
        assert!(!net.connection(dark).unwrap().has_gas());
        assert!(!net.element(c).unwrap().has_gas());
    }

    #[test]
    fn reusable_state_matches_fresh_run() {
        let mut net = Network::default();
        let s = net.add_element(ElementKind::GasSource, Point::ORIGIN);
        let v = net.add_element(ElementKind::Switch, Point::ORIGIN);
        let c = net.add_element(ElementKind::Connector, Point::ORIGIN);
        net.connect(s, v);
        net.connect(v, c);

        let mut sim = FlowSimulation::new();
        let first = sim.run(&mut net);
        net.toggle(v);
        let second = sim.run(&mut net);
        assert_ne!(first, second);
        assert_eq!(second, simulate(&mut net));
    }
}
