//! Pendulum physics
//!
//! This module provides the traits and state containers that every pendulum
//! variant and every integrator agree on.
//!
//! # Core Concepts
//!
//! - **Pendulum Model**: equations of motion, energy and geometry of a variant
//! - **Integration State**: anything an integrator can add and scale
//! - **Grid State**: four (N, M) arrays holding θ1, θ2, ω1, ω2 for a whole grid
//!
//! # Architecture
//!
//! Physical models are **separate from numerical integrators**:
//! - The model provides the **equations** (physics)
//! - The integrator provides the **method** to advance them (numerics)
//!
//! The RK4 stepper is therefore written once and reused for the simple
//! pendulum, the double pendulum and the vectorized grid.
//!
//! # Example
//!
//! ```rust
//! use nalgebra::Vector4;
//! use pendulum_rs::models::DoublePendulum;
//! use pendulum_rs::physics::PendulumModel;
//!
//! let model = DoublePendulum::default();
//!
//! // Hanging straight down at rest: nothing moves
//! let rest = Vector4::zeros();
//! assert_eq!(model.derivative(&rest), Vector4::zeros());
//! ```

pub mod data;
pub mod traits;

pub use data::GridState;
pub use traits::{IntegrationState, PendulumModel};
