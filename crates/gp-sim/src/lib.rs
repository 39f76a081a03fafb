//! Gas reachability simulation over a pipeline network.
//!
//! Provides:
//! - Reset of every derived gas annotation
//! - Depth-first propagation from each gas source, halted by closed switches
//! - A per-pass report of what was energized

pub mod flow;

pub use flow::{FlowReport, FlowSimulation, simulate};
