//! Shared application service layer for the gas pipeline network.
//!
//! This crate sits between a front end (CLI, canvas UI) and the core crates:
//! it owns the network inside a single-writer session, turns pointer input
//! into graph commands, runs scripted scenarios, and captures reports.

pub mod command;
pub mod config;
pub mod error;
pub mod interaction;
pub mod labels;
pub mod report;
pub mod script;
pub mod session;

// Re-export key types for convenience
pub use command::{Command, Outcome};
pub use config::{AppConfig, load_config};
pub use error::{AppError, AppResult};
pub use interaction::{ConnectionPreview, Interaction};
pub use labels::{Labels, Target};
pub use report::{ConnectionReport, ElementReport, NetworkReport};
pub use script::{Script, ScriptRun, Step, load_script, parse_script, run_script};
pub use session::{Session, SessionHandle};
