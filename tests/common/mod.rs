//! Common utilities for integration tests
#![allow(dead_code, unused_imports)]

pub mod mock_models;
pub mod test_helpers;

// Re-export commonly used items
pub use mock_models::LinearOscillator;
pub use test_helpers::{cell_vector, relative_error, single_cell_grid};
