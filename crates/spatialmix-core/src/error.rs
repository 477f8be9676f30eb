//! Error types for the core crate.

use thiserror::Error;

/// Core error type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The named Euler composition order is not one we know.
    #[error("Unknown Euler order: {0}")]
    UnknownEulerOrder(String),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
