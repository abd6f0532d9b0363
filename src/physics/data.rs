//! Grid state: struct-of-arrays storage for many independent pendulums
//!
//! A vectorized matrix of double pendulums does not hold one object per
//! trajectory. It holds four same-shaped arrays, one per state channel,
//! and the position (i, j) in those arrays is the only identity a
//! trajectory has.
//!
//! # Memory Layout
//!
//! ```text
//! theta1 [N × M]   angle of rod 1 (rad)
//! theta2 [N × M]   angle of rod 2 (rad)
//! omega1 [N × M]   angular velocity of rod 1 (rad/s)
//! omega2 [N × M]   angular velocity of rod 2 (rad/s)
//! ```
//!
//! Total: 4 · 8 · N · M bytes. A 100 × 100 grid is 320 kB.
//!
//! # Arithmetic
//!
//! `GridState` implements `Add` and `Mul<f64>` channel by channel, which is
//! all the RK4 stepper needs (see [`IntegrationState`](crate::physics::IntegrationState)).
//! Each element goes through exactly the same floating-point operations as
//! the matching component of a scalar `Vector4` state.

use std::fmt;

use ndarray::Array2;

use crate::error::{PendulumError, Result};

/// Angles and angular velocities of an N × M grid of double pendulums
///
/// # Examples
///
/// ```rust
/// use pendulum_rs::physics::GridState;
///
/// let state = GridState::zeros(3, 4);
/// assert_eq!(state.shape(), (3, 4));
/// assert_eq!(state.len(), 12);
/// ```
///
/// The channels are only reachable through [`try_new`](Self::try_new),
/// [`zeros`](Self::zeros) and the read accessors, so the four arrays always
/// share one shape:
///
/// ```compile_fail
/// use ndarray::Array2;
/// use pendulum_rs::physics::GridState;
///
/// let state = GridState {
///     theta1: Array2::zeros((2, 2)),
///     theta2: Array2::zeros((3, 3)),
///     omega1: Array2::zeros((2, 2)),
///     omega2: Array2::zeros((2, 2)),
/// };
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GridState {
    /// Angle of rod 1 from the downward vertical (rad)
    pub(crate) theta1: Array2<f64>,

    /// Angle of rod 2 from the downward vertical (rad)
    pub(crate) theta2: Array2<f64>,

    /// Angular velocity of rod 1 (rad/s)
    pub(crate) omega1: Array2<f64>,

    /// Angular velocity of rod 2 (rad/s)
    pub(crate) omega2: Array2<f64>,
}

impl GridState {

    // ======================================= constructors =======================================

    /// Build a grid state from four arrays that must share one shape
    ///
    /// The shape of `theta1` is the reference; any other channel that
    /// differs is reported by name.
    pub fn try_new(
        theta1: Array2<f64>,
        theta2: Array2<f64>,
        omega1: Array2<f64>,
        omega2: Array2<f64>,
    ) -> Result<Self> {
        let expected = theta1.dim();

        for (name, array) in [("theta2", &theta2), ("omega1", &omega1), ("omega2", &omega2)] {
            if array.dim() != expected {
                return Err(PendulumError::ShapeMismatch {
                    name,
                    expected,
                    actual: array.dim(),
                });
            }
        }

        Ok(Self { theta1, theta2, omega1, omega2 })
    }

    /// All channels at rest, hanging straight down
    pub fn zeros(rows: usize, columns: usize) -> Self {
        Self {
            theta1: Array2::zeros((rows, columns)),
            theta2: Array2::zeros((rows, columns)),
            omega1: Array2::zeros((rows, columns)),
            omega2: Array2::zeros((rows, columns)),
        }
    }

    // ========================================== Queries ==========================================

    pub fn theta1(&self) -> &Array2<f64> {
        &self.theta1
    }

    pub fn theta2(&self) -> &Array2<f64> {
        &self.theta2
    }

    pub fn omega1(&self) -> &Array2<f64> {
        &self.omega1
    }

    pub fn omega2(&self) -> &Array2<f64> {
        &self.omega2
    }

    /// Grid shape (N, M)
    pub fn shape(&self) -> (usize, usize) {
        self.theta1.dim()
    }

    /// Number of trajectories in the grid
    pub fn len(&self) -> usize {
        self.theta1.len()
    }

    /// Check emptiness
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Estimate memory usage in bytes
    pub fn memory(&self) -> usize {
        4 * 8 * self.len()
    }

    /// Scalar state (θ1, ω1, θ2, ω2) of the trajectory at (i, j)
    ///
    /// Returns `None` when the index is out of bounds.
    pub fn cell(&self, i: usize, j: usize) -> Option<[f64; 4]> {
        Some([
            *self.theta1.get((i, j))?,
            *self.omega1.get((i, j))?,
            *self.theta2.get((i, j))?,
            *self.omega2.get((i, j))?,
        ])
    }

    /// Number of NaN or infinite values across all four channels
    ///
    /// Purely diagnostic. Stepping never looks at this; blown-up cells keep
    /// propagating their values.
    pub fn count_non_finite(&self) -> usize {
        [&self.theta1, &self.theta2, &self.omega1, &self.omega2]
            .iter()
            .map(|channel| channel.iter().filter(|x| !x.is_finite()).count())
            .sum()
    }
}

// ================================== Simple arithmetic functions ==================================

impl std::ops::Add for GridState {
    type Output = GridState;

    fn add(mut self, rhs: Self) -> Self::Output {
        assert_eq!(self.shape(), rhs.shape(), "Grid shapes must match");

        self.theta1 += &rhs.theta1;
        self.theta2 += &rhs.theta2;
        self.omega1 += &rhs.omega1;
        self.omega2 += &rhs.omega2;
        self
    }
}

impl std::ops::Mul<f64> for GridState {
    type Output = GridState;

    fn mul(mut self, scalar: f64) -> Self::Output {
        self.theta1 *= scalar;
        self.theta2 *= scalar;
        self.omega1 *= scalar;
        self.omega2 *= scalar;
        self
    }
}

impl std::ops::Mul<GridState> for f64 {
    type Output = GridState;

    fn mul(self, rhs: GridState) -> Self::Output {
        rhs * self
    }
}

// ======================== Display ============================

impl fmt::Display for GridState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (rows, columns) = self.shape();
        write!(f, "GridState [{} * {}]", rows, columns)
    }
}

// ==================== Tests ====================
