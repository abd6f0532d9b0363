//! Pendulum models
//!
//! All models implement the [`PendulumModel`](crate::physics::PendulumModel) trait.
//! Models are responsible for the physics (equations of motion, energy,
//! geometry), the integrator for the time stepping.
//!
//! # Available Models
//!
//! ## [`SimplePendulum`]: one rod
//!
//! State (θ, ω). Useful as a reference: its small-angle period is known in
//! closed form and its energy is easy to check by hand.
//!
//! ## [`DoublePendulum`]: two rods
//!
//! State (θ₁, ω₁, θ₂, ω₂). Chaotic for large initial angles. Its undamped
//! acceleration kernel lives on [`DoublePendulumParams`] and is shared with
//! the vectorized grid, so a 1 × 1 grid and a single pendulum with the same
//! parameters produce the same numbers.

// =================================================================================================
// Module Declarations
// =================================================================================================

pub mod double;
pub mod simple;

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use double::{DoublePendulum, DoublePendulumParams};
pub use simple::SimplePendulum;
