//! pendulum-rs: Double Pendulum Integration Engine
//!
//! Fixed-step RK4 integration of single pendulums and of large grids of
//! independent double pendulums, for chaos and bifurcation studies.
//!
//! # Architecture
//!
//! pendulum-rs is built on two core principles:
//!
//! 1. **Separation of Physics and Numerics**
//!    - Models define the equations of motion (what to solve)
//!    - The integrator provides the method (how to solve)
//!
//! 2. **One stepper, any container**
//!    - RK4 is written once against [`physics::IntegrationState`]
//!    - The same formula advances a `Vector2`, a `Vector4` or a whole
//!      [`physics::GridState`], so a grid cell and a lone pendulum agree
//!      bit for bit
//!
//! # Quick Start
//!
//! ```rust
//! use pendulum_rs::prelude::*;
//!
//! // A single double pendulum, angles in degrees
//! let mut pendulum = DoublePendulumSystem::from_degrees(
//!     1.0, 1.0, 1.0, 1.0, 9.81, 180.0, 0.0, 185.0, 0.0, 0.0,
//! );
//! pendulum.advance(&TimeEvolution::new(1e-3, 100));
//! let [_bob1, bob2] = pendulum.cartesian_coords();
//! assert!(bob2.y.is_finite());
//!
//! // A 64 × 64 sweep of initial angles, stepped as one array update
//! let mut matrix = PendulumMatrix::different_angles(64, 64);
//! for _ in 0..10 {
//!     matrix.step(1e-3);
//! }
//! assert_eq!(matrix.shape(), (64, 64));
//! ```
//!
//! # Numerical anomalies
//!
//! Inputs are trusted. Zero or negative masses and lengths are accepted and
//! NaN or infinite values propagate through every later step. Use
//! [`Pendulum::is_finite`](simulation::Pendulum::is_finite) or
//! [`GridState::count_non_finite`](physics::GridState::count_non_finite) to
//! detect blow-up.
//!
//! # Features
//!
//! - `parallel`: evaluate large grids on the rayon pool
//! - `serde`: `Serialize`/`Deserialize` for parameter and config structs
//!
//! # Modules
//!
//! - [`physics`]: capability traits and grid state
//! - [`models`]: simple and double pendulum
//! - [`solver`]: RK4 and run configuration
//! - [`simulation`]: single, vectorized and per-cell entities, bifurcation sampling
//! - [`error`]: error type for construction and configuration

// Core modules
pub mod error;
pub mod physics;

pub mod models;
pub mod simulation;
pub mod solver;

pub use error::{PendulumError, Result};

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //! use pendulum_rs::prelude::*;
    //! ```
    pub use crate::error::{PendulumError, Result};
    pub use crate::models::{DoublePendulum, DoublePendulumParams, SimplePendulum};
    pub use crate::physics::{GridState, IntegrationState, PendulumModel};
    pub use crate::simulation::{
        BifurcationConfig,
        BifurcationDiagram,
        DoublePendulumSystem,
        Pendulum,
        PendulumCellMatrix,
        PendulumMatrix,
        SimplePendulumSystem,
    };
    pub use crate::solver::{Integrator, Rk4, TimeEvolution};
}
