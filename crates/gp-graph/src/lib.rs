//! gp-graph: graph/model layer for the gas pipeline network.
//!
//! Provides:
//! - Element and connection data structures (gas sources, switches, connectors, pipelines)
//! - A single mutation API (`Network`) that keeps connections from dangling
//! - Compact incidence indexing for traversal
//! - Hit testing and grid placement for an interactive front end
//!
//! # Example
//!
//! ```
//! use gp_core::Point;
//! use gp_graph::{ElementKind, Network};
//!
//! let mut network = Network::default();
//! let source = network.add_element(ElementKind::GasSource, Point::new(100.0, 100.0));
//! let valve = network.add_element(ElementKind::Switch, Point::new(200.0, 120.0));
//! let pipe = network.connect(source, valve).unwrap();
//!
//! assert!(network.connect(valve, valve).is_none());
//! network.remove_element(valve);
//! assert!(network.connection(pipe).is_none());
//! ```

mod arena;
pub mod config;
pub mod connection;
pub mod element;
pub mod error;
pub mod indexing;
pub mod network;
pub mod placement;
pub mod validate;

// Re-exports for ergonomics
pub use config::{
    ConnectorStyle, GasSourceStyle, GridLayout, NetworkConfig, PipelineStyle, SwitchStyle,
};
pub use connection::Connection;
pub use element::{Element, ElementKind};
pub use error::{GraphError, GraphResult};
pub use indexing::IncidenceIndex;
pub use network::Network;
pub use placement::Placement;
pub use validate::validate_network;
