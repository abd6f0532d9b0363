//! Vectorized pendulum matrix
//!
//! N × M independent double pendulums stored as four arrays and advanced
//! together. One RK4 step is four whole-grid derivative evaluations, with
//! no per-cell objects and no cross-cell coupling.
//!
//! # Equivalence with the scalar path
//!
//! Cell (i, j) goes through exactly the floating-point operations a lone
//! [`DoublePendulumSystem`](crate::simulation::DoublePendulumSystem) with the
//! same parameters and γ = 0 would, so the two agree bit for bit.

use ndarray::Array2;
use tracing::debug;

use crate::error::{PendulumError, Result};
use crate::models::DoublePendulumParams;
use crate::physics::GridState;
use crate::simulation::angles::theta_to_index;
use crate::solver::{Integrator, Rk4, TimeEvolution};

/// Sweep limits of the angle factory (rad)
const ANGLE_RANGE: (f64, f64) = (-std::f64::consts::PI, std::f64::consts::PI);

/// Sweep limits of the speed factory (rad/s)
const SPEED_RANGE: (f64, f64) = (-6.0, 6.0);

/// Grid of undamped double pendulums sharing one parameter set
///
/// # Example
///
/// ```rust
/// use pendulum_rs::simulation::PendulumMatrix;
///
/// let mut matrix = PendulumMatrix::different_angles(20, 30);
/// for _ in 0..10 {
///     matrix.step(1e-3);
/// }
///
/// assert_eq!(matrix.shape(), (20, 30));
/// assert_eq!(matrix.theta2().dim(), (20, 30));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PendulumMatrix {
    state: GridState,
    params: DoublePendulumParams,
}

impl PendulumMatrix {

    // ======================================= constructors =======================================

    /// Build an `n × m` matrix from four arrays, with default parameters
    ///
    /// # Errors
    ///
    /// [`PendulumError::ShapeMismatch`] naming the first channel that differs
    /// from `theta1`, or `theta1` itself when the common shape is not `(n, m)`.
    pub fn new(
        n: usize,
        m: usize,
        theta1: Array2<f64>,
        theta2: Array2<f64>,
        omega1: Array2<f64>,
        omega2: Array2<f64>,
    ) -> Result<Self> {
        let state = GridState::try_new(theta1, theta2, omega1, omega2)?;
        if state.shape() != (n, m) {
            return Err(PendulumError::ShapeMismatch {
                name: "theta1",
                expected: (n, m),
                actual: state.shape(),
            });
        }

        debug!(rows = n, columns = m, bytes = state.memory(), "PendulumMatrix created");

        Ok(Self::from_state(state))
    }

    /// Wrap an existing grid state, with default parameters
    ///
    /// A [`GridState`] can only be built with matching channel shapes, so
    /// the matrix shape is whatever the state reports.
    pub fn from_state(state: GridState) -> Self {
        Self {
            state,
            params: DoublePendulumParams::default(),
        }
    }

    /// Replace the physical parameters shared by every cell
    pub fn with_params(mut self, params: DoublePendulumParams) -> Self {
        self.params = params;
        self
    }

    /// θ1 swept over [−π, π] down the rows, θ2 over [−π, π] across the
    /// columns, all velocities zero
    pub fn different_angles(n: usize, m: usize) -> Self {
        let (low, high) = ANGLE_RANGE;
        let (theta1, theta2) = sweep(n, m, low, high);

        debug!(rows = n, columns = m, "PendulumMatrix factory: different angles");
        Self::from_state(GridState {
            theta1,
            theta2,
            omega1: Array2::zeros((n, m)),
            omega2: Array2::zeros((n, m)),
        })
    }

    /// ω1 swept over [−6, 6] down the rows, ω2 over [−6, 6] across the
    /// columns, all angles zero
    pub fn different_speeds(n: usize, m: usize) -> Self {
        let (low, high) = SPEED_RANGE;
        let (omega1, omega2) = sweep(n, m, low, high);

        debug!(rows = n, columns = m, "PendulumMatrix factory: different speeds");
        Self::from_state(GridState {
            theta1: Array2::zeros((n, m)),
            theta2: Array2::zeros((n, m)),
            omega1,
            omega2,
        })
    }

    // ====================================== time stepping ======================================

    /// Advance every cell by one RK4 step of size `dt`
    ///
    /// The shape never changes. Non-finite cells keep propagating and do
    /// not affect their neighbours.
    pub fn step(&mut self, dt: f64) {
        let params = &self.params;
        self.state = Rk4.step(&self.state, dt, |grid| params.grid_derivative(grid));
    }

    /// Run `evolution.time_steps` steps of `evolution.dt`
    pub fn advance(&mut self, evolution: &TimeEvolution) {
        for _ in 0..evolution.time_steps {
            self.step(evolution.dt);
        }
    }

    // ======================================== accessors ========================================

    /// (N, M)
    pub fn shape(&self) -> (usize, usize) {
        self.state.shape()
    }

    pub fn state(&self) -> &GridState {
        &self.state
    }

    pub fn params(&self) -> &DoublePendulumParams {
        &self.params
    }

    pub fn theta1(&self) -> &Array2<f64> {
        &self.state.theta1
    }

    pub fn theta2(&self) -> &Array2<f64> {
        &self.state.theta2
    }

    pub fn omega1(&self) -> &Array2<f64> {
        &self.state.omega1
    }

    pub fn omega2(&self) -> &Array2<f64> {
        &self.state.omega2
    }

    /// Colour-map bucket of every cell
    ///
    /// Cell (i, j) maps to (`theta_to_index(θ1, N)`, `theta_to_index(θ2, M)`).
    pub fn color_indices(&self) -> Array2<(usize, usize)> {
        let (n, m) = self.shape();
        let mut indices = Array2::from_elem((n, m), (0, 0));

        ndarray::Zip::from(&mut indices)
            .and(&self.state.theta1)
            .and(&self.state.theta2)
            .for_each(|index, &t1, &t2| {
                *index = (theta_to_index(t1, n), theta_to_index(t2, m));
            });

        indices
    }
}

/// Evenly spaced values in [low, high], inclusive, like a linspace
pub(crate) fn linspace(low: f64, high: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![low],
        _ => {
            let step = (high - low) / (count - 1) as f64;
            (0..count).map(|k| low + k as f64 * step).collect()
        }
    }
}

/// Two `n × m` arrays: the first varies down the rows, the second across the columns
fn sweep(n: usize, m: usize, low: f64, high: f64) -> (Array2<f64>, Array2<f64>) {
    let rows = linspace(low, high, n);
    let columns = linspace(low, high, m);

    let first = Array2::from_shape_fn((n, m), |(i, _)| rows[i]);
    let second = Array2::from_shape_fn((n, m), |(_, j)| columns[j]);
    (first, second)
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;
    use std::f64::consts::PI;

    #[test]
    fn test_new_rejects_wrong_shape() {
        let ok = Array2::<f64>::zeros((2, 3));
        let err = PendulumMatrix::new(2, 3, ok.clone(), ok.clone(), Array2::zeros((3, 2)), ok.clone())
            .unwrap_err();

        assert_eq!(
            err,
            PendulumError::ShapeMismatch {
                name: "omega1",
                expected: (2, 3),
                actual: (3, 2)
            }
        );
    }

    #[test]
    fn test_new_rejects_shape_other_than_declared() {
        let a = Array2::<f64>::zeros((2, 2));
        let err =
            PendulumMatrix::new(3, 3, a.clone(), a.clone(), a.clone(), a).unwrap_err();
        assert!(matches!(err, PendulumError::ShapeMismatch { name: "theta1", .. }));
    }

    #[test]
    fn test_new_reports_channel_mismatch_before_declared_shape() {
        let a = Array2::<f64>::zeros((2, 2));
        let err = PendulumMatrix::new(2, 2, a.clone(), Array2::zeros((3, 3)), a.clone(), a).unwrap_err();

        assert_eq!(
            err,
            PendulumError::ShapeMismatch {
                name: "theta2",
                expected: (2, 2),
                actual: (3, 3)
            }
        );
    }

    #[test]
    fn test_from_state_shape_matches_every_channel() {
        let state = GridState::try_new(
            array![[0.3, 0.1, -0.2]],
            array![[1.0, 0.0, 2.0]],
            Array2::zeros((1, 3)),
            Array2::zeros((1, 3)),
        )
        .unwrap();
        let mut matrix = PendulumMatrix::from_state(state);
        matrix.step(1e-3);

        assert_eq!(matrix.shape(), (1, 3));
        for array in [matrix.theta1(), matrix.theta2(), matrix.omega1(), matrix.omega2()] {
            assert_eq!(array.dim(), (1, 3));
        }
    }

    #[test]
    fn test_different_angles_layout() {
        let matrix = PendulumMatrix::different_angles(3, 5);
        assert_eq!(matrix.shape(), (3, 5));

        assert_relative_eq!(matrix.theta1()[[0, 4]], -PI);
        assert_relative_eq!(matrix.theta1()[[1, 0]], 0.0);
        assert_relative_eq!(matrix.theta1()[[2, 2]], PI);

        assert_relative_eq!(matrix.theta2()[[1, 0]], -PI);
        assert_relative_eq!(matrix.theta2()[[1, 2]], 0.0, epsilon = 1e-15);
        assert_relative_eq!(matrix.theta2()[[0, 4]], PI);

        assert!(matrix.omega1().iter().all(|&w| w == 0.0));
        assert!(matrix.omega2().iter().all(|&w| w == 0.0));
    }

    #[test]
    fn test_different_speeds_layout() {
        let matrix = PendulumMatrix::different_speeds(4, 2);
        assert_eq!(matrix.shape(), (4, 2));

        assert_eq!(matrix.omega1()[[0, 1]], -6.0);
        assert_relative_eq!(matrix.omega1()[[3, 0]], 6.0);
        assert_eq!(matrix.omega2()[[2, 0]], -6.0);
        assert_relative_eq!(matrix.omega2()[[2, 1]], 6.0);
        assert!(matrix.theta1().iter().all(|&t| t == 0.0));
    }

    #[test]
    fn test_linspace_edges() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(-6.0, 6.0, 1), vec![-6.0]);
        assert_eq!(linspace(0.0, 1.0, 5), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn test_resting_grid_stays_at_rest() {
        let mut matrix = PendulumMatrix::from_state(GridState::zeros(3, 3));
        matrix.advance(&TimeEvolution::new(1e-2, 10));
        assert!(matrix.state().theta1.iter().all(|&t| t == 0.0));
    }

    #[test]
    fn test_step_keeps_cells_independent() {
        // A NaN cell must not leak into its neighbour
        let matrix = PendulumMatrix::new(
            1,
            2,
            array![[f64::NAN, 1.0]],
            array![[0.0, 1.0]],
            array![[0.0, 0.0]],
            array![[0.0, 0.0]],
        );
        let mut matrix = matrix.unwrap();
        matrix.step(1e-3);

        assert!(matrix.theta1()[[0, 0]].is_nan());
        assert!(matrix.theta1()[[0, 1]].is_finite());
        assert_eq!(matrix.state().count_non_finite(), 4);
    }

    #[test]
    fn test_with_params_changes_dynamics() {
        let base = PendulumMatrix::different_angles(2, 2);
        let mut light = base.clone();
        let mut heavy = base.with_params(DoublePendulumParams { g: 20.0, ..Default::default() });

        light.step(1e-2);
        heavy.step(1e-2);

        assert_eq!(heavy.params().g, 20.0);
        assert_ne!(light.state(), heavy.state());
    }

    #[test]
    fn test_color_indices() {
        let matrix = PendulumMatrix::new(
            1,
            2,
            array![[0.1, -0.1]],
            array![[PI + 0.1, 0.1]],
            Array2::zeros((1, 2)),
            Array2::zeros((1, 2)),
        )
        .unwrap();

        // θ1 buckets over N = 1, θ2 buckets over M = 2
        let indices = matrix.color_indices();
        assert_eq!(indices[[0, 0]], (0, 1));
        assert_eq!(indices[[0, 1]], (0, 0));
    }
}
