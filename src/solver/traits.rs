//! Integrator trait and time-evolution configuration
//!
//! # Design Philosophy
//!
//! - `Integrator` advances ANY [`IntegrationState`] by one fixed step, given
//!   a derivative closure. It knows nothing about pendulums.
//! - `TimeEvolution` describes a run: a fixed step `dt` and a step count.
//!
//! # Stability Guarantee
//!
//! - `Integrator` trait: stable, methods will not be removed
//! - `TimeEvolution`: fields will not be removed

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{PendulumError, Result};
use crate::physics::IntegrationState;

// =================================================================================================
// Integrator Trait
// =================================================================================================

/// Fixed-step explicit time integrator
///
/// # Contract
///
/// `step` returns the state one step `dt` after `state`, using only
/// `derivative` evaluations and the `Add`/`Mul<f64>` operations of the
/// state. It is deterministic given (state, dt, derivative) and does not
/// check for NaN or infinities: whatever the derivative returns is
/// propagated.
///
/// # Examples
///
/// ```rust
/// use nalgebra::Vector2;
/// use pendulum_rs::solver::{Integrator, Rk4};
///
/// // dy/dt = (1, 0): RK4 is exact for a constant slope
/// let next = Rk4.step(&Vector2::new(0.0, 5.0), 3.0, |_| Vector2::new(1.0, 0.0));
/// assert_eq!(next, Vector2::new(3.0, 5.0));
/// ```
pub trait Integrator {
    /// Advance `state` by one step of size `dt`
    fn step<S, F>(&self, state: &S, dt: f64, derivative: F) -> S
    where
        S: IntegrationState,
        F: Fn(&S) -> S;

    /// Number of derivative evaluations per step
    fn evaluations_per_step(&self) -> usize;

    /// Name of the method
    fn name(&self) -> &'static str;
}

// =================================================================================================
// Time Evolution Configuration
// =================================================================================================

/// A run of `time_steps` fixed steps of size `dt`
///
/// # Examples
///
/// ```rust
/// use pendulum_rs::solver::TimeEvolution;
///
/// let run = TimeEvolution::new(1e-3, 1000);
/// assert!(run.validate().is_ok());
/// assert!((run.total_time() - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TimeEvolution {
    /// Fixed step size (s)
    pub dt: f64,

    /// Number of steps
    pub time_steps: usize,
}

impl Default for TimeEvolution {
    /// One second at 1 ms, the physics step used for interactive runs
    fn default() -> Self {
        Self::new(1e-3, 1000)
    }
}

impl TimeEvolution {
    /// Create a run from a step size and a step count
    pub fn new(dt: f64, time_steps: usize) -> Self {
        Self { dt, time_steps }
    }

    /// Create a run covering `total_time` with step `dt`
    ///
    /// The step count is `floor(total_time / dt)`, so a total time that is
    /// not a multiple of `dt` is truncated rather than overshot.
    pub fn from_total_time(total_time: f64, dt: f64) -> Self {
        let steps = (total_time / dt).floor();
        let time_steps = if steps.is_finite() && steps > 0.0 { steps as usize } else { 0 };
        Self { dt, time_steps }
    }

    /// Simulated time covered by the run
    pub fn total_time(&self) -> f64 {
        self.dt * self.time_steps as f64
    }

    /// Validate that parameters are meaningful
    pub fn validate(&self) -> Result<()> {
        if !self.dt.is_finite() || self.dt <= 0.0 {
            return Err(PendulumError::InvalidTimestep(self.dt));
        }
        if self.time_steps == 0 {
            return Err(PendulumError::invalid_config("TimeSteps must be greater than 0"));
        }
        Ok(())
    }
}
