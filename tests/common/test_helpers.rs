//! Helper functions for integration tests

use nalgebra::Vector4;
use ndarray::Array2;
use pendulum_rs::physics::GridState;

/// Compute relative error: |actual - expected| / |expected|
pub fn relative_error(actual: f64, expected: f64) -> f64 {
    if expected.abs() < 1e-10 {
        (actual - expected).abs()
    } else {
        (actual - expected).abs() / expected.abs()
    }
}

/// Cell (i, j) of a grid in the scalar state order (θ1, ω1, θ2, ω2)
pub fn cell_vector(grid: &GridState, i: usize, j: usize) -> Vector4<f64> {
    let [theta1, omega1, theta2, omega2] = grid
        .cell(i, j)
        .unwrap_or_else(|| panic!("cell ({}, {}) out of range", i, j));
    Vector4::new(theta1, omega1, theta2, omega2)
}

/// A 1 × 1 grid holding a scalar (θ1, ω1, θ2, ω2) state
pub fn single_cell_grid(state: &Vector4<f64>) -> GridState {
    let cell = |value: f64| Array2::from_elem((1, 1), value);
    GridState::try_new(cell(state[0]), cell(state[2]), cell(state[1]), cell(state[3]))
        .expect("1 × 1 channels always match")
}
