//! Simple pendulum: one massless rod with a point mass
//!
//! ```text
//! dθ/dt = ω
//! dω/dt = −(g/l)·sin θ − γ·ω
//! ```
//!
//! Energy is ½·m·(l·ω)² + m·g·y with y = −l·cos θ.

use nalgebra::{Point2, Vector2};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{PendulumError, Result};
use crate::physics::PendulumModel;

/// Damped simple pendulum
///
/// State vector: (θ, ω).
///
/// Defaults: l = 1 m, m = 1 kg, g = 9.81 m/s², γ = 0.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SimplePendulum {
    /// Rod length (m)
    pub l: f64,
    /// Bob mass (kg)
    pub m: f64,
    /// Gravitational acceleration (m/s²)
    pub g: f64,
    /// Linear damping coefficient (1/s)
    pub gamma: f64,
}

impl Default for SimplePendulum {
    fn default() -> Self {
        Self {
            l: 1.0,
            m: 1.0,
            g: 9.81,
            gamma: 0.0,
        }
    }
}

impl SimplePendulum {
    /// Create a simple pendulum
    pub fn new(l: f64, m: f64, g: f64, gamma: f64) -> Self {
        Self { l, m, g, gamma }
    }

    /// Check that length and mass are strictly positive
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [("l", self.l), ("m", self.m)] {
            if !(value.is_finite() && value > 0.0) {
                return Err(PendulumError::invalid_parameter(name, value));
            }
        }
        if !(self.gamma.is_finite() && self.gamma >= 0.0) {
            return Err(PendulumError::invalid_parameter("gamma", self.gamma));
        }
        Ok(())
    }

    /// Small-angle period 2π·√(l/g)
    pub fn small_angle_period(&self) -> f64 {
        std::f64::consts::TAU * (self.l / self.g).sqrt()
    }
}

impl PendulumModel for SimplePendulum {
    type State = Vector2<f64>;
    type Coords = Point2<f64>;

    fn derivative(&self, state: &Vector2<f64>) -> Vector2<f64> {
        let (theta, omega) = (state[0], state[1]);
        let d_omega = -(self.g / self.l) * theta.sin() - self.gamma * omega;
        Vector2::new(omega, d_omega)
    }

    fn energy(&self, state: &Vector2<f64>) -> f64 {
        let v = self.l * state[1];
        let kinetic = 0.5 * self.m * v * v;
        let potential = self.m * self.g * self.cartesian(state).y;
        kinetic + potential
    }

    fn cartesian(&self, state: &Vector2<f64>) -> Point2<f64> {
        let theta = state[0];
        Point2::new(self.l * theta.sin(), -self.l * theta.cos())
    }

    fn is_finite(&self, state: &Self::State) -> bool {
        state.iter().all(|x| x.is_finite())
    }

    fn gravity(&self) -> f64 {
        self.g
    }

    fn set_gravity(&mut self, g: f64) {
        self.g = g;
    }

    fn gamma(&self) -> f64 {
        self.gamma
    }

    fn set_gamma(&mut self, gamma: f64) {
        self.gamma = gamma;
    }

    fn name(&self) -> &str {
        "Simple Pendulum"
    }
}
