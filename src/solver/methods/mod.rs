//! Numerical methods for advancing pendulum states
//!
//! This module contains concrete implementations of the
//! [`Integrator`](crate::solver::Integrator) trait.
//!
//! # Available Methods
//!
//! - **[`Rk4`]**: classical fourth-order Runge-Kutta
//!   - Order: fourth-order O(dt⁴)
//!   - Cost: 4 derivative evaluations per step
//!   - Fixed step only; there is no error control
//!
//! # Example
//!
//! ```rust
//! use nalgebra::Vector4;
//! use pendulum_rs::models::DoublePendulum;
//! use pendulum_rs::physics::PendulumModel;
//! use pendulum_rs::solver::{Integrator, Rk4};
//!
//! let model = DoublePendulum::default();
//! let start = Vector4::new(1.0, 0.0, 1.0, 0.0);
//! let next = Rk4.step(&start, 1e-3, |y| model.derivative(y));
//!
//! // Released from rest, the first rod starts swinging back down
//! assert!(next[1] < 0.0);
//! ```

mod rk4;

pub use rk4::Rk4;
