//! gp-core: stable foundation for the gas pipeline workspace.
//!
//! Contains:
//! - ids (generational handles for elements and connections)
//! - geometry (canvas points + distance helpers)
//! - color (hex RGB display colors)
//! - error (shared error types)

pub mod color;
pub mod error;
pub mod geometry;
pub mod ids;

// Re-exports: nice ergonomics for downstream crates
pub use color::Rgb;
pub use error::{GpError, GpResult};
pub use geometry::*;
pub use ids::*;
