use thiserror::Error;

pub type GpResult<T> = Result<T, GpError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GpError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Invalid color literal: {literal:?} (expected #rrggbb)")]
    InvalidColor { literal: String },

    #[error("Invariant violated: {what}")]
    Invariant { what: String },
}
