//! Numerical integration
//!
//! This module provides the integrator interface, the RK4 method and the
//! run configuration.
//!
//! # The Architecture (WHAT vs HOW)
//!
//! 1. **Model** (`PendulumModel`) - WHAT evolves
//!    - equations of motion, energy, geometry
//!
//! 2. **Configuration** (`TimeEvolution`) - HOW LONG
//!    - fixed step `dt` and number of steps
//!
//! 3. **Integrator** (`Integrator` trait) - HOW
//!    - advances any state by one step
//!    - independent of physics
//!
//! # Module Organization
//!
//! - **`traits`**: `Integrator` trait and `TimeEvolution`
//! - **`methods`**: concrete integrators (`Rk4`)
//!
//! # Error Handling
//!
//! Stepping never fails and never inspects its output. Only
//! [`TimeEvolution::validate`] returns an error, for a non-positive step or
//! an empty run. A blown-up state (NaN, ±∞) keeps propagating; callers that
//! care can check [`GridState::count_non_finite`](crate::physics::GridState::count_non_finite)
//! or [`Pendulum::is_finite`](crate::simulation::Pendulum::is_finite).

// =================================================================================================
// Module Declarations
// =================================================================================================

mod methods;
mod traits;

// =================================================================================================
// Parallel Execution Threshold
// =================================================================================================
//
// A pendulum grid above this many cells evaluates its derivative on the
// rayon pool. Every cell runs the same scalar kernel either way, so the
// value only decides where the work happens, never what it computes.
// Without the `parallel` feature it is never read.
// =================================================================================================

use std::sync::atomic::{AtomicUsize, Ordering};

/// Cells (N · M) a grid must exceed before its derivative is split across
/// threads. Below roughly a 32 × 32 grid the dispatch costs more than it saves.
const DEFAULT_PARALLEL_THRESHOLD: usize = 999;

static PARALLEL_THRESHOLD: AtomicUsize = AtomicUsize::new(DEFAULT_PARALLEL_THRESHOLD);

/// Current cell count above which grids step in parallel
///
/// # Example
///
/// ```rust
/// use pendulum_rs::solver::parallel_threshold;
///
/// assert!(parallel_threshold() > 0);
/// ```
pub fn parallel_threshold() -> usize {
    PARALLEL_THRESHOLD.load(Ordering::Relaxed)
}

/// Change the cell count above which grids step in parallel
///
/// Takes effect on the next derivative evaluation of every grid in the
/// process.
///
/// # Panics
///
/// Panics when `cells == 0`.
///
/// # Example
///
/// ```rust
/// use pendulum_rs::solver::{parallel_threshold, set_parallel_threshold};
///
/// let previous = parallel_threshold();
/// set_parallel_threshold(64 * 64);
/// assert_eq!(parallel_threshold(), 4096);
///
/// set_parallel_threshold(previous);
/// ```
pub fn set_parallel_threshold(cells: usize) {
    assert!(cells > 0, "parallel threshold must be at least 1");
    PARALLEL_THRESHOLD.store(cells, Ordering::Relaxed);
}

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use methods::Rk4;
pub use traits::{Integrator, TimeEvolution};

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DoublePendulumParams;
    use crate::physics::GridState;
    use ndarray::Array2;

    #[test]
    fn test_default_threshold_value() {
        assert_eq!(DEFAULT_PARALLEL_THRESHOLD, 999);
    }

    #[test]
    #[should_panic(expected = "parallel threshold must be at least 1")]
    fn test_zero_threshold_panics() {
        set_parallel_threshold(0);
    }

    // Only test in the crate that writes the threshold
    #[test]
    fn test_threshold_moves_work_without_changing_results() {
        let params = DoublePendulumParams::default();
        let state = GridState::try_new(
            Array2::from_elem((40, 40), 2.0),
            Array2::zeros((40, 40)),
            Array2::zeros((40, 40)),
            Array2::from_elem((40, 40), -1.5),
        )
        .unwrap();

        let before = parallel_threshold();

        set_parallel_threshold(usize::MAX);
        assert_eq!(parallel_threshold(), usize::MAX);
        let sequential = params.grid_derivative(&state);

        set_parallel_threshold(1);
        assert_eq!(parallel_threshold(), 1);
        let maybe_parallel = params.grid_derivative(&state);

        set_parallel_threshold(before);
        assert_eq!(parallel_threshold(), before);
        assert_eq!(sequential, maybe_parallel);
    }
}
