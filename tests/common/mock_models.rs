//! Mock pendulum models for testing
//!
//! These models have known analytical solutions, making them
//! ideal for validating integrator accuracy.

use nalgebra::{Point2, Vector2};
use pendulum_rs::physics::PendulumModel;

// =================================================================================================
// Linear Oscillator: θ'' = −k·θ
// =================================================================================================

/// Small-angle pendulum with unit length and mass: θ'' = −k·θ
///
/// Analytical solution from (θ₀, 0): θ(t) = θ₀·cos(√k·t)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearOscillator {
    pub stiffness: f64, // k = g / l
}

impl LinearOscillator {
    pub fn new(stiffness: f64) -> Self {
        Self { stiffness }
    }

    /// (θ, ω) at time t, starting from (θ₀, 0)
    pub fn analytical_solution(&self, t: f64, theta0: f64) -> Vector2<f64> {
        let w = self.stiffness.sqrt();
        Vector2::new(theta0 * (w * t).cos(), -theta0 * w * (w * t).sin())
    }
}

impl PendulumModel for LinearOscillator {
    type State = Vector2<f64>;
    type Coords = Point2<f64>;

    fn derivative(&self, state: &Vector2<f64>) -> Vector2<f64> {
        Vector2::new(state[1], -self.stiffness * state[0])
    }

    fn energy(&self, state: &Vector2<f64>) -> f64 {
        0.5 * (state[1] * state[1] + self.stiffness * state[0] * state[0])
    }

    fn cartesian(&self, state: &Vector2<f64>) -> Point2<f64> {
        Point2::new(state[0], -1.0)
    }

    fn is_finite(&self, state: &Vector2<f64>) -> bool {
        state.iter().all(|x| x.is_finite())
    }

    fn gravity(&self) -> f64 {
        self.stiffness
    }

    fn set_gravity(&mut self, g: f64) {
        self.stiffness = g;
    }

    fn gamma(&self) -> f64 {
        0.0
    }

    fn set_gamma(&mut self, _gamma: f64) {}

    fn name(&self) -> &str {
        "Linear Oscillator"
    }
}
