//! Pendulum model traits
//!
//! This module defines the core API shared by every pendulum variant:
//! - `IntegrationState`: anything the RK4 stepper can combine linearly
//! - `PendulumModel`: the equations of motion, energy and geometry of a variant

use std::fmt::Debug;
use std::ops::{Add, Mul};

// =================================================================================================
// Integration State
// =================================================================================================

/// State that a fixed-step integrator can advance
///
/// An integrator only ever needs two operations on a state:
/// - element-wise addition of two states (`y + k`)
/// - scaling by a scalar (`k * dt`)
///
/// Both a scalar-per-axis vector (`nalgebra::Vector4<f64>`) and the
/// struct-of-arrays [`GridState`](crate::physics::GridState) satisfy this,
/// so the same stepper formula drives a single pendulum and a whole grid.
///
/// The trait is blanket-implemented; there is nothing to implement by hand.
///
/// # Example
/// ```
/// use nalgebra::Vector2;
/// use pendulum_rs::physics::IntegrationState;
///
/// fn halfway<S: IntegrationState>(a: S, b: S) -> S {
///     (a + b) * 0.5
/// }
///
/// let mid = halfway(Vector2::new(0.0, 2.0), Vector2::new(2.0, 4.0));
/// assert_eq!(mid, Vector2::new(1.0, 3.0));
/// ```
pub trait IntegrationState: Clone + Add<Output = Self> + Mul<f64, Output = Self> {}

impl<T> IntegrationState for T where T: Clone + Add<Output = T> + Mul<f64, Output = T> {}

// =================================================================================================
// Pendulum Model Trait
// =================================================================================================

/// Capability shared by pendulum variants
///
/// # Responsibility
/// A model owns the physical parameters of one variant and knows:
/// - its equations of motion (`derivative`)
/// - its total mechanical energy (`energy`)
/// - where its bobs are (`cartesian`)
///
/// It does NOT advance time. That is the integrator's job, and the
/// entity ([`Pendulum`](crate::simulation::Pendulum)) ties the two together.
///
/// # Parameters
/// Gravity and damping are common to every variant and have setters here.
/// Variant specific parameters (lengths, masses) live on the concrete types.
/// No setter validates its input: zero or negative values are accepted and
/// give arithmetically defined, physically meaningless dynamics.
pub trait PendulumModel: Send + Sync {
    /// State vector of this variant, e.g. (θ, ω) or (θ1, ω1, θ2, ω2)
    type State: IntegrationState + Debug + PartialEq + Send + Sync;

    /// Bob positions in the plane, pivot at the origin, downward is −y
    type Coords;

    /// Time derivative of `state`
    ///
    /// Pure: no side effects, no internal state. NaN and infinities in the
    /// input propagate to the output unchanged.
    fn derivative(&self, state: &Self::State) -> Self::State;

    /// Total mechanical energy (kinetic + potential) of `state`
    fn energy(&self, state: &Self::State) -> f64;

    /// Cartesian coordinates of each bob for `state`
    fn cartesian(&self, state: &Self::State) -> Self::Coords;

    /// `true` when every component of `state` is finite
    ///
    /// Diagnostic only; nothing in the crate acts on it.
    fn is_finite(&self, state: &Self::State) -> bool;

    /// Gravitational acceleration (m/s²)
    fn gravity(&self) -> f64;

    /// Replace the gravitational acceleration
    fn set_gravity(&mut self, g: f64);

    /// Linear damping coefficient (1/s)
    fn gamma(&self) -> f64;

    /// Replace the damping coefficient
    fn set_gamma(&mut self, gamma: f64);

    /// Name of the model (used to display and logging)
    fn name(&self) -> &str;
}

// =================================================================================================
// Tests
// =================================================================================================
