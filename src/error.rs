//! Error types for construction and configuration.
//!
//! Stepping never fails: every error here is raised at a boundary where a
//! caller hands the crate arrays or configuration values.

use thiserror::Error;

/// Errors raised while building entities or validating configuration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PendulumError {
    /// One of the state arrays handed to a matrix does not have the grid shape.
    #[error("shape mismatch for {name}: expected {expected:?}, got {actual:?}")]
    ShapeMismatch {
        name: &'static str,
        expected: (usize, usize),
        actual: (usize, usize),
    },

    /// Time step is zero, negative or not finite.
    #[error("invalid time step: {0}")]
    InvalidTimestep(f64),

    /// A physical parameter is outside its meaningful range.
    #[error("invalid parameter {name}: {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    /// Any other configuration problem.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl PendulumError {
    /// Create an invalid config error.
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Create an invalid parameter error.
    pub fn invalid_parameter(name: &'static str, value: f64) -> Self {
        Self::InvalidParameter { name, value }
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, PendulumError>;
