//! Simulation entities
//!
//! Models describe the physics, the solver advances states; this module
//! owns the states and exposes the operations callers drive:
//!
//! - [`Pendulum`]: one pendulum of any variant (step, reset, setters,
//!   energy, coordinates)
//! - [`PendulumMatrix`]: N × M double pendulums as four arrays, stepped in
//!   one whole-grid RK4 update
//! - [`PendulumCellMatrix`]: N × M pendulum objects stepped one by one, with
//!   per-cell colour indices
//! - [`BifurcationConfig`]: θ2 sampling over a sweep of initial ω2
//!
//! Every entity is synchronous: `step` returns once the full update is done.
//! Entities share nothing, so distinct entities can live on distinct
//! threads; a single entity must not be stepped concurrently.

mod angles;
mod bifurcation;
mod cell_matrix;
mod matrix;
mod pendulum;

pub use angles::{index_to_theta, theta_to_index};
pub use bifurcation::{wrap_degrees, BifurcationConfig, BifurcationDiagram};
pub use cell_matrix::PendulumCellMatrix;
pub use matrix::PendulumMatrix;
pub use pendulum::{DoublePendulumSystem, Pendulum, SimplePendulumSystem};
