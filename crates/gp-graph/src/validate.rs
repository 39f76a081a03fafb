//! Structural integrity checks.

use std::collections::HashSet;

use crate::error::{GraphError, GraphResult};
use crate::network::Network;

/// Check that the network upholds its structural invariants:
/// order lists mirror the stores, and every connection joins two distinct
/// live elements.
pub fn validate_network(network: &Network) -> GraphResult<()> {
    if network.element_ids().len() != network.element_count() {
        return Err(GraphError::OrderMismatch {
            what: "element",
            listed: network.element_ids().len(),
            stored: network.element_count(),
        });
    }
    if network.connection_ids().len() != network.connection_count() {
        return Err(GraphError::OrderMismatch {
            what: "connection",
            listed: network.connection_ids().len(),
            stored: network.connection_count(),
        });
    }

    let mut seen = HashSet::new();
    for &id in network.element_ids() {
        if !network.contains_element(id) || !seen.insert(id) {
            return Err(GraphError::StaleOrderEntry {
                what: "element",
                handle: id.to_string(),
            });
        }
    }

    for &id in network.connection_ids() {
        let Some(conn) = network.connection(id) else {
            return Err(GraphError::StaleOrderEntry {
                what: "connection",
                handle: id.to_string(),
            });
        };
        if conn.start() == conn.end() {
            return Err(GraphError::SelfLoop {
                connection: id,
                element: conn.start(),
            });
        }
        for end in conn.endpoints() {
            if !network.contains_element(end) {
                return Err(GraphError::DanglingEndpoint {
                    connection: id,
                    element: end,
                });
            }
        }
    }

    Ok(())
}
