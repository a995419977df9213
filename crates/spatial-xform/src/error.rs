//! Error types for spatial-xform.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpatialError {
    #[error("Precondition failed: {0}")]
    Precondition(&'static str),

    #[error("Degenerate input: {0}")]
    DegenerateInput(&'static str),

    #[error("Not implemented: {0}")]
    NotImplemented(&'static str),

    #[error("Unbound symbol: {0}")]
    UnboundSymbol(String),
}

pub type Result<T> = std::result::Result<T, SpatialError>;
