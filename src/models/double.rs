//! Double pendulum: two massless rigid rods with point masses
//!
//! # Mathematical Model
//!
//! With Δ = θ₁ − θ₂ and the pivot fixed at the origin, the Lagrangian
//! equations of motion solved for the angular accelerations are:
//!
//! ```text
//! α₁ = [ m₂·g·sin θ₂·cos Δ − m₂·sin Δ·(l₁·ω₁²·cos Δ + l₂·ω₂²) − (m₁+m₂)·g·sin θ₁ ]
//!      / [ l₁·(m₁ + m₂·sin² Δ) ]
//!
//! α₂ = [ (m₁+m₂)·(l₁·ω₁²·sin Δ − g·sin θ₂ + g·sin θ₁·cos Δ) + m₂·l₂·ω₂²·sin Δ·cos Δ ]
//!      / [ l₂·(m₁ + m₂·sin² Δ) ]
//! ```
//!
//! The single-pendulum path subtracts a linear drag γ·ω from each α.
//! The grid path has no damping term.
//!
//! # Singularities
//!
//! `m₁ + m₂·sin² Δ > 0` whenever both masses are positive, so the equations
//! are regular for every Δ. Zero or negative masses and lengths are not
//! rejected; they give non-physical or infinite accelerations which then
//! propagate through the integration unchanged.
//!
//! # Energy
//!
//! ```text
//! KE₁ = ½·m₁·(l₁·ω₁)²
//! KE₂ = ½·m₂·((l₁·ω₁)² + (l₂·ω₂)² + 2·l₁·l₂·ω₁·ω₂·cos(θ₁−θ₂))
//! PE  = m₁·g·y₁ + m₂·g·y₂
//! ```

use nalgebra::{Point2, Vector4};
use ndarray::{Array2, Zip};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{PendulumError, Result};
use crate::physics::{GridState, PendulumModel};

// =================================================================================================
// Physical Parameters
// =================================================================================================

/// Masses, rod lengths and gravity of a double pendulum
///
/// Passed explicitly into every derivative evaluation, so two grids with
/// different parameters never share hidden state.
///
/// Defaults: m₁ = m₂ = l₁ = l₂ = 1, g = 9.81.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DoublePendulumParams {
    /// Mass of bob 1 (kg)
    pub m1: f64,
    /// Mass of bob 2 (kg)
    pub m2: f64,
    /// Length of rod 1 (m)
    pub l1: f64,
    /// Length of rod 2 (m)
    pub l2: f64,
    /// Gravitational acceleration (m/s²)
    pub g: f64,
}

impl Default for DoublePendulumParams {
    fn default() -> Self {
        Self {
            m1: 1.0,
            m2: 1.0,
            l1: 1.0,
            l2: 1.0,
            g: 9.81,
        }
    }
}

impl DoublePendulumParams {
    /// Create a parameter set
    pub fn new(l1: f64, m1: f64, l2: f64, m2: f64, g: f64) -> Self {
        Self { m1, m2, l1, l2, g }
    }

    /// Check that masses and lengths are strictly positive and gravity is finite
    ///
    /// Never called by the integrator; this is for callers that want to
    /// reject non-physical input before stepping.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [("m1", self.m1), ("m2", self.m2), ("l1", self.l1), ("l2", self.l2)] {
            if !(value.is_finite() && value > 0.0) {
                return Err(PendulumError::invalid_parameter(name, value));
            }
        }
        if !self.g.is_finite() {
            return Err(PendulumError::invalid_parameter("g", self.g));
        }
        Ok(())
    }

    /// Undamped angular accelerations (α₁, α₂)
    ///
    /// This scalar kernel is the single source of the equations of motion.
    /// The single pendulum calls it once per evaluation and the grid calls
    /// it once per cell, which keeps both paths bit-for-bit identical.
    #[inline]
    pub fn accelerations(&self, theta1: f64, theta2: f64, omega1: f64, omega2: f64) -> (f64, f64) {
        let Self { m1, m2, l1, l2, g } = *self;

        let delta = theta1 - theta2;
        let sin_delta = delta.sin();
        let cos_delta = delta.cos();
        let denominator = m1 + m2 * sin_delta * sin_delta;

        let alpha1_num = m2 * g * theta2.sin() * cos_delta
            - m2 * sin_delta * (l1 * omega1 * omega1 * cos_delta + l2 * omega2 * omega2)
            - (m1 + m2) * g * theta1.sin();
        let alpha1 = alpha1_num / (l1 * denominator);

        let alpha2_num = (m1 + m2)
            * (l1 * omega1 * omega1 * sin_delta - g * theta2.sin() + g * theta1.sin() * cos_delta)
            + m2 * l2 * omega2 * omega2 * sin_delta * cos_delta;
        let alpha2 = alpha2_num / (l2 * denominator);

        (alpha1, alpha2)
    }

    /// Time derivative of a whole grid, cell by cell
    ///
    /// Returns (dθ₁, dθ₂, dω₁, dω₂) = (ω₁, ω₂, α₁, α₂) as a [`GridState`].
    /// With the `parallel` feature, grids larger than
    /// [`parallel_threshold()`](crate::solver::parallel_threshold) are
    /// evaluated on the rayon pool; each cell still runs the same kernel.
    pub fn grid_derivative(&self, state: &GridState) -> GridState {
        let shape = state.shape();
        let mut alpha1 = Array2::zeros(shape);
        let mut alpha2 = Array2::zeros(shape);

        let zip = Zip::from(&mut alpha1)
            .and(&mut alpha2)
            .and(&state.theta1)
            .and(&state.theta2)
            .and(&state.omega1)
            .and(&state.omega2);

        let kernel = |a1: &mut f64, a2: &mut f64, &t1: &f64, &t2: &f64, &w1: &f64, &w2: &f64| {
            (*a1, *a2) = self.accelerations(t1, t2, w1, w2);
        };

        #[cfg(feature = "parallel")]
        {
            if state.len() > crate::solver::parallel_threshold() {
                zip.par_for_each(kernel);
            } else {
                zip.for_each(kernel);
            }
        }
        #[cfg(not(feature = "parallel"))]
        zip.for_each(kernel);

        GridState {
            theta1: state.omega1.clone(),
            theta2: state.omega2.clone(),
            omega1: alpha1,
            omega2: alpha2,
        }
    }
}

// =================================================================================================
// Double Pendulum Model
// =================================================================================================

/// Damped double pendulum
///
/// State vector: (θ₁, ω₁, θ₂, ω₂), angles in radians from the downward
/// vertical.
///
/// # Example
///
/// ```rust
/// use nalgebra::Vector4;
/// use pendulum_rs::models::DoublePendulum;
/// use pendulum_rs::physics::PendulumModel;
///
/// let model = DoublePendulum::default();
/// let [bob1, bob2] = model.cartesian(&Vector4::zeros());
///
/// assert_eq!((bob1.x, bob1.y), (0.0, -1.0));
/// assert_eq!((bob2.x, bob2.y), (0.0, -2.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DoublePendulum {
    /// Masses, lengths and gravity
    pub params: DoublePendulumParams,

    /// Linear damping coefficient applied to each angular velocity (1/s)
    pub gamma: f64,
}

impl DoublePendulum {
    /// Create a double pendulum from its physical parameters
    pub fn new(params: DoublePendulumParams, gamma: f64) -> Self {
        Self { params, gamma }
    }
}

impl PendulumModel for DoublePendulum {
    type State = Vector4<f64>;
    type Coords = [Point2<f64>; 2];

    fn derivative(&self, state: &Vector4<f64>) -> Vector4<f64> {
        let (theta1, omega1, theta2, omega2) = (state[0], state[1], state[2], state[3]);

        let (alpha1, alpha2) = self.params.accelerations(theta1, theta2, omega1, omega2);

        Vector4::new(
            omega1,
            alpha1 - self.gamma * omega1,
            omega2,
            alpha2 - self.gamma * omega2,
        )
    }

    fn energy(&self, state: &Vector4<f64>) -> f64 {
        let (theta1, omega1, theta2, omega2) = (state[0], state[1], state[2], state[3]);
        let DoublePendulumParams { m1, m2, l1, l2, g } = self.params;

        let v1 = l1 * omega1;
        let v2 = l2 * omega2;
        let ke_1 = 0.5 * m1 * v1 * v1;
        let ke_2 = 0.5 * m2 * (v1 * v1 + v2 * v2 + 2.0 * l1 * l2 * omega1 * omega2 * (theta1 - theta2).cos());

        let [bob1, bob2] = self.cartesian(state);
        let pe_1 = m1 * g * bob1.y;
        let pe_2 = m2 * g * bob2.y;

        ke_1 + ke_2 + pe_1 + pe_2
    }

    fn cartesian(&self, state: &Vector4<f64>) -> [Point2<f64>; 2] {
        let (theta1, theta2) = (state[0], state[2]);
        let DoublePendulumParams { l1, l2, .. } = self.params;

        let x1 = l1 * theta1.sin();
        let y1 = -l1 * theta1.cos();
        let x2 = x1 + l2 * theta2.sin();
        let y2 = y1 - l2 * theta2.cos();

        [Point2::new(x1, y1), Point2::new(x2, y2)]
    }

    fn is_finite(&self, state: &Self::State) -> bool {
        state.iter().all(|x| x.is_finite())
    }

    fn gravity(&self) -> f64 {
        self.params.g
    }

    fn set_gravity(&mut self, g: f64) {
        self.params.g = g;
    }

    fn gamma(&self) -> f64 {
        self.gamma
    }

    fn set_gamma(&mut self, gamma: f64) {
        self.gamma = gamma;
    }

    fn name(&self) -> &str {
        "Double Pendulum"
    }
}

// =================================================================================================
// Tests
// =================================================================================================
