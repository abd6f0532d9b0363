//! Runge-Kutta 4 (RK4) fixed-step integrator
//!
//! # Mathematical Background
//!
//! The classical fourth-order Runge-Kutta method uses a weighted average of
//! four slope estimates over one step:
//!
//! ```text
//! k₁ = f(yₙ)
//! k₂ = f(yₙ + dt/2 · k₁)
//! k₃ = f(yₙ + dt/2 · k₂)
//! k₄ = f(yₙ + dt · k₃)
//!
//! yₙ₊₁ = yₙ + dt/6 · (k₁ + 2k₂ + 2k₃ + k₄)
//! ```
//!
//! The pendulum equations are autonomous, so the stage times are not passed
//! to `f`.
//!
//! # Characteristics
//!
//! - **Order**: fourth-order accurate (global error ~ O(dt⁴))
//! - **Cost**: 4 derivative evaluations per step
//! - **Energy**: not symplectic. Undamped energy drifts slowly; at
//!   dt = 1 ms the relative drift over one second of chaotic double-pendulum
//!   motion stays well under 10⁻³.
//!
//! # One Formula, Any Container
//!
//! The stepper is generic over [`IntegrationState`]. The same code advances a
//! `Vector2` (simple pendulum), a `Vector4` (double pendulum) and a
//! [`GridState`](crate::physics::GridState) holding thousands of independent
//! trajectories. Since every container combines its elements one by one with
//! the same operations in the same order, a cell of a grid and a lone
//! pendulum starting from the same state stay numerically identical.

use crate::physics::IntegrationState;
use crate::solver::Integrator;

// =================================================================================================
// RK4 Integrator
// =================================================================================================

/// Classical fourth-order Runge-Kutta integrator
///
/// Stateless; a single value can drive any number of entities.
///
/// # Example
///
/// ```rust
/// use nalgebra::Vector2;
/// use pendulum_rs::models::SimplePendulum;
/// use pendulum_rs::physics::PendulumModel;
/// use pendulum_rs::solver::{Integrator, Rk4};
///
/// let model = SimplePendulum::default();
/// let mut state = Vector2::new(0.1, 0.0);
///
/// for _ in 0..100 {
///     state = Rk4.step(&state, 0.01, |y| model.derivative(y));
/// }
///
/// // Half a period (≈ 1 s) later the bob is on the other side
/// assert!(state[0] < 0.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rk4;

impl Rk4 {
    /// Create a new RK4 integrator
    ///
    /// # Example
    ///
    /// ```rust
    /// use pendulum_rs::solver::{Integrator, Rk4};
    ///
    /// let rk4 = Rk4::new();
    /// assert_eq!(rk4.name(), "Runge Kutta (RK4)");
    /// ```
    pub fn new() -> Self {
        Self
    }
}

impl Integrator for Rk4 {
    fn step<S, F>(&self, state: &S, dt: f64, derivative: F) -> S
    where
        S: IntegrationState,
        F: Fn(&S) -> S,
    {
        let half_dt = dt / 2.0;

        // Slope at the beginning of the interval
        let k1 = derivative(state);

        // Slope at the midpoint, predicted with k₁
        let k2 = derivative(&(state.clone() + k1.clone() * half_dt));

        // Slope at the midpoint, predicted with k₂
        let k3 = derivative(&(state.clone() + k2.clone() * half_dt));

        // Slope at the end, predicted with k₃
        let k4 = derivative(&(state.clone() + k3.clone() * dt));

        // Simpson weights 1/6, 2/6, 2/6, 1/6
        let weighted_slope = k1 + k2 * 2.0 + k3 * 2.0 + k4;

        state.clone() + weighted_slope * (dt / 6.0)
    }

    fn evaluations_per_step(&self) -> usize {
        4
    }

    fn name(&self) -> &'static str {
        "Runge Kutta (RK4)"
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::Vector2;
    use std::cell::Cell;

    // ====== Creation ======

    #[test]
    fn test_rk4_creation() {
        let rk4 = Rk4::new();
        assert_eq!(rk4.name(), "Runge Kutta (RK4)");
        assert_eq!(rk4.evaluations_per_step(), 4);
        assert_eq!(Rk4::default(), rk4);
    }

    // ====== Numerical accuracy ======

    #[test]
    fn test_rk4_constant_slope_is_exact() {
        // dy/dt = c → y(t) = y₀ + c·t
        let mut y = Vector2::new(1.0, -2.0);
        for _ in 0..100 {
            y = Rk4.step(&y, 0.1, |_| Vector2::new(2.0, 0.5));
        }

        assert_relative_eq!(y[0], 21.0, epsilon = 1e-10);
        assert_relative_eq!(y[1], 3.0, epsilon = 1e-10);
    }

    #[test]
    fn test_rk4_exponential_decay_single_step() {
        // dy/dt = −y: one RK4 step multiplies by 1 − h + h²/2 − h³/6 + h⁴/24
        let h = 0.1;
        let y = Rk4.step(&Vector2::new(1.0, 0.0), h, |y| -*y);
        let expected = 1.0 - h + h * h / 2.0 - h.powi(3) / 6.0 + h.powi(4) / 24.0;

        assert_relative_eq!(y[0], expected, epsilon = 1e-14);
        assert_eq!(y[1], 0.0);
    }

    #[test]
    fn test_rk4_harmonic_oscillator() {
        // y'' = −y with y(0) = 1, y'(0) = 0 → y(t) = cos t
        let mut y = Vector2::new(1.0, 0.0);
        let dt = 0.01;
        for _ in 0..628 {
            y = Rk4.step(&y, dt, |s| Vector2::new(s[1], -s[0]));
        }

        assert_relative_eq!(y[0], (6.28f64).cos(), epsilon = 1e-8);
        assert_relative_eq!(y[1], -(6.28f64).sin(), epsilon = 1e-8);
    }

    #[test]
    fn test_rk4_four_evaluations() {
        let calls = Cell::new(0);
        let _ = Rk4.step(&Vector2::new(0.0, 0.0), 0.1, |s| {
            calls.set(calls.get() + 1);
            *s
        });
        assert_eq!(calls.get(), 4);
    }

    #[test]
    fn test_rk4_propagates_nan() {
        let y = Rk4.step(&Vector2::new(f64::NAN, 1.0), 0.1, |s| Vector2::new(s[1], -s[0]));
        assert!(y[0].is_nan());
        assert!(y[1].is_nan());
    }
}
