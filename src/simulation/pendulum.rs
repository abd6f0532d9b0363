//! Single-pendulum entity
//!
//! A [`Pendulum`] owns one state vector, its initial conditions and a model.
//! Stepping delegates to the model's derivative and the RK4 stepper.
//!
//! # Lifecycle
//!
//! ```text
//! new / from_degrees ──► step(dt) ──► step(dt) ──► ...
//!        ▲                                    │
//!        └────────────── reset() ◄────────────┘
//! ```
//!
//! `reset` copies the initial conditions back into the state and zeroes the
//! elapsed time. Parameters (lengths, masses, gravity, damping) are left as
//! they are.

use nalgebra::{Vector2, Vector4};
use tracing::debug;

use crate::models::{DoublePendulum, DoublePendulumParams, SimplePendulum};
use crate::physics::PendulumModel;
use crate::solver::{Integrator, Rk4, TimeEvolution};

/// Default release angle for both variants (degrees)
const DEFAULT_ANGLE_DEG: f64 = 120.0;

/// One pendulum of any variant, advanced with RK4
///
/// # Example
///
/// ```rust
/// use pendulum_rs::simulation::DoublePendulumSystem;
///
/// let mut pendulum = DoublePendulumSystem::from_degrees(
///     1.0, 1.0, 1.0, 1.0, 9.81, // l1, m1, l2, m2, g
///     120.0, 0.0, 120.0, 0.0,   // θ1 (deg), ω1, θ2 (deg), ω2
///     0.0,                      // γ
/// );
///
/// let e0 = pendulum.energy();
/// for _ in 0..1000 {
///     pendulum.step(1e-3);
/// }
///
/// assert!(((pendulum.energy() - e0) / e0).abs() < 1e-3);
/// assert!((pendulum.time_elapsed() - 1.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone)]
pub struct Pendulum<M: PendulumModel> {
    model: M,
    state: M::State,
    y0: M::State,
    time_elapsed: f64,
}

/// Double pendulum entity
pub type DoublePendulumSystem = Pendulum<DoublePendulum>;

/// Simple pendulum entity
pub type SimplePendulumSystem = Pendulum<SimplePendulum>;

impl<M: PendulumModel> Pendulum<M> {
    /// Create an entity starting (and resetting) to `state`
    pub fn new(model: M, state: M::State) -> Self {
        debug!(model = model.name(), initial = ?state, "Pendulum created");

        Self {
            model,
            y0: state.clone(),
            state,
            time_elapsed: 0.0,
        }
    }

    // ====================================== time stepping ======================================

    /// Advance by one RK4 step of size `dt`
    ///
    /// Never fails and never inspects the result: NaN and infinities
    /// propagate into every later step.
    pub fn step(&mut self, dt: f64) {
        let next = Rk4.step(&self.state, dt, |y| self.model.derivative(y));
        self.state = next;
        self.time_elapsed += dt;
    }

    /// Run `evolution.time_steps` steps of `evolution.dt`
    pub fn advance(&mut self, evolution: &TimeEvolution) {
        for _ in 0..evolution.time_steps {
            self.step(evolution.dt);
        }
    }

    /// Restore the initial conditions and zero the elapsed time
    pub fn reset(&mut self) {
        self.state = self.y0.clone();
        self.time_elapsed = 0.0;
    }

    /// Replace the stored initial conditions
    ///
    /// The current state is untouched; call [`reset`](Self::reset) to jump
    /// to the new initial conditions.
    pub fn set_initial_conditions(&mut self, y0: M::State) {
        self.y0 = y0;
    }

    // ======================================== accessors ========================================

    pub fn state(&self) -> &M::State {
        &self.state
    }

    pub fn initial_conditions(&self) -> &M::State {
        &self.y0
    }

    /// Simulated time since creation or the last reset (s)
    pub fn time_elapsed(&self) -> f64 {
        self.time_elapsed
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    /// Bob positions, pivot at the origin, downward is −y
    pub fn cartesian_coords(&self) -> M::Coords {
        self.model.cartesian(&self.state)
    }

    /// Total mechanical energy of the current state
    pub fn energy(&self) -> f64 {
        self.model.energy(&self.state)
    }

    /// `true` while no component of the state has blown up
    pub fn is_finite(&self) -> bool {
        self.model.is_finite(&self.state)
    }

    // ======================================== setters ==========================================
    //
    // None of the setters validate. Zero or negative values are accepted.

    pub fn set_gravity(&mut self, g: f64) {
        self.model.set_gravity(g);
    }

    pub fn set_gamma(&mut self, gamma: f64) {
        self.model.set_gamma(gamma);
    }
}

// =================================================================================================
// Double Pendulum
// =================================================================================================

impl Pendulum<DoublePendulum> {
    /// Create a double pendulum with angles given in degrees
    ///
    /// The state is (θ1, ω1, θ2, ω2) with the angles converted to radians.
    #[allow(clippy::too_many_arguments)]
    pub fn from_degrees(
        l1: f64,
        m1: f64,
        l2: f64,
        m2: f64,
        g: f64,
        theta1_deg: f64,
        omega1: f64,
        theta2_deg: f64,
        omega2: f64,
        gamma: f64,
    ) -> Self {
        let params = DoublePendulumParams::new(l1, m1, l2, m2, g);
        let state = Vector4::new(theta1_deg.to_radians(), omega1, theta2_deg.to_radians(), omega2);
        Self::new(DoublePendulum::new(params, gamma), state)
    }

    /// Current (θ1, ω1, θ2, ω2)
    pub fn angles_and_velocities(&self) -> (f64, f64, f64, f64) {
        (self.state[0], self.state[1], self.state[2], self.state[3])
    }

    pub fn params(&self) -> &DoublePendulumParams {
        &self.model.params
    }

    pub fn set_l1(&mut self, l1: f64) {
        self.model.params.l1 = l1;
    }

    pub fn set_m1(&mut self, m1: f64) {
        self.model.params.m1 = m1;
    }

    pub fn set_l2(&mut self, l2: f64) {
        self.model.params.l2 = l2;
    }

    pub fn set_m2(&mut self, m2: f64) {
        self.model.params.m2 = m2;
    }
}

impl Default for Pendulum<DoublePendulum> {
    /// Unit rods and masses, g = 9.81, both rods at 120°, at rest, undamped
    fn default() -> Self {
        Self::from_degrees(1.0, 1.0, 1.0, 1.0, 9.81, DEFAULT_ANGLE_DEG, 0.0, DEFAULT_ANGLE_DEG, 0.0, 0.0)
    }
}

// =================================================================================================
// Simple Pendulum
// =================================================================================================

impl Pendulum<SimplePendulum> {
    /// Create a simple pendulum with its angle given in degrees
    pub fn from_degrees(l: f64, m: f64, g: f64, theta_deg: f64, omega: f64, gamma: f64) -> Self {
        Self::new(
            SimplePendulum::new(l, m, g, gamma),
            Vector2::new(theta_deg.to_radians(), omega),
        )
    }

    pub fn set_length(&mut self, l: f64) {
        self.model.l = l;
    }

    pub fn set_mass(&mut self, m: f64) {
        self.model.m = m;
    }
}

impl Default for Pendulum<SimplePendulum> {
    /// l = 1, m = 1, g = 9.81, released at 120° from rest, undamped
    fn default() -> Self {
        Self::from_degrees(1.0, 1.0, 9.81, DEFAULT_ANGLE_DEG, 0.0, 0.0)
    }
}

// =================================================================================================
// Tests
// =================================================================================================
