//! Bifurcation sampling
//!
//! Sweeps the initial ω2 of a column of double pendulums, integrates them
//! together as an (n_omega2 × 1) [`PendulumMatrix`], discards a transient
//! and then samples θ2 at a fixed interval. Only data is produced; plotting
//! is left to the caller.
//!
//! # Sampling schedule
//!
//! ```text
//! n_steps    = floor(T / dt)
//! transient  = floor(n_steps · transient_ratio)
//! interval   = (n_steps − transient) / samples_per_branch   (integer division)
//!
//! after step k (0-based): sample if k ≥ transient and (k − transient) % interval == 0
//! ```
//!
//! At most `samples_per_branch` samples are kept per branch.

use ndarray::Array2;
use tracing::{info, warn};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{PendulumError, Result};
use crate::models::DoublePendulumParams;
use crate::simulation::matrix::{PendulumMatrix, linspace};

/// Parameters of a bifurcation sweep
///
/// # Example
///
/// ```rust
/// use pendulum_rs::simulation::BifurcationConfig;
///
/// let diagram = BifurcationConfig::default()
///     .with_omega2_range(0.0, 10.0, 5)
///     .with_duration(1.0, 1e-3)
///     .with_samples_per_branch(10)
///     .run()
///     .unwrap();
///
/// assert_eq!(diagram.omega2_init.len(), 5);
/// assert!(diagram.theta2_samples.iter().all(|branch| branch.len() == 10));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BifurcationConfig {
    /// Lowest initial ω2 (rad/s)
    pub omega2_min: f64,
    /// Highest initial ω2 (rad/s)
    pub omega2_max: f64,
    /// Number of branches between the two, inclusive
    pub n_omega2: usize,
    /// Simulated time (s)
    pub total_time: f64,
    /// Fixed step (s)
    pub dt: f64,
    /// Samples kept per branch
    pub samples_per_branch: usize,
    /// Share of the run discarded before sampling, in [0, 1)
    pub transient_ratio: f64,
    /// Wrap sampled angles to [−180°, 180°)
    pub theta_wrap: bool,
    /// Physical parameters shared by every branch
    pub params: DoublePendulumParams,
}

impl Default for BifurcationConfig {
    fn default() -> Self {
        Self {
            omega2_min: 0.0,
            omega2_max: 25.0,
            n_omega2: 600,
            total_time: 25.0,
            dt: 1e-3,
            samples_per_branch: 150,
            transient_ratio: 0.85,
            theta_wrap: true,
            params: DoublePendulumParams::default(),
        }
    }
}

/// Result of a sweep: one θ2 sample vector (degrees) per initial ω2
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BifurcationDiagram {
    /// Initial ω2 of each branch (rad/s)
    pub omega2_init: Vec<f64>,
    /// Sampled θ2 of each branch (degrees)
    pub theta2_samples: Vec<Vec<f64>>,
}

impl BifurcationDiagram {
    /// Flatten into (ω2, θ2) scatter points
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.omega2_init
            .iter()
            .zip(&self.theta2_samples)
            .flat_map(|(&omega2, samples)| samples.iter().map(move |&theta2| (omega2, theta2)))
    }
}

impl BifurcationConfig {
    pub fn with_omega2_range(mut self, min: f64, max: f64, count: usize) -> Self {
        self.omega2_min = min;
        self.omega2_max = max;
        self.n_omega2 = count;
        self
    }

    pub fn with_duration(mut self, total_time: f64, dt: f64) -> Self {
        self.total_time = total_time;
        self.dt = dt;
        self
    }

    pub fn with_samples_per_branch(mut self, samples: usize) -> Self {
        self.samples_per_branch = samples;
        self
    }

    pub fn with_transient_ratio(mut self, ratio: f64) -> Self {
        self.transient_ratio = ratio;
        self
    }

    pub fn with_theta_wrap(mut self, wrap: bool) -> Self {
        self.theta_wrap = wrap;
        self
    }

    pub fn with_params(mut self, params: DoublePendulumParams) -> Self {
        self.params = params;
        self
    }

    /// Number of integration steps, `floor(T / dt)`
    pub fn n_steps(&self) -> usize {
        let steps = (self.total_time / self.dt).floor();
        if steps.is_finite() && steps > 0.0 { steps as usize } else { 0 }
    }

    /// Steps discarded before sampling starts
    pub fn transient_steps(&self) -> usize {
        (self.n_steps() as f64 * self.transient_ratio).floor() as usize
    }

    /// Steps between two samples
    pub fn sample_interval(&self) -> usize {
        match self.samples_per_branch {
            0 => 0,
            samples => self.n_steps().saturating_sub(self.transient_steps()) / samples,
        }
    }

    /// Check that the sweep can run
    ///
    /// # Errors
    ///
    /// - [`PendulumError::InvalidTimestep`] for a non-positive or non-finite `dt`
    /// - [`PendulumError::InvalidConfig`] for an empty sweep, a transient ratio
    ///   outside [0, 1) or a zero sampling interval (run too short for the
    ///   requested sample count)
    pub fn validate(&self) -> Result<()> {
        if !self.dt.is_finite() || self.dt <= 0.0 {
            return Err(PendulumError::InvalidTimestep(self.dt));
        }
        if self.n_omega2 == 0 {
            return Err(PendulumError::invalid_config("n_omega2 must be greater than 0"));
        }
        if self.samples_per_branch == 0 {
            return Err(PendulumError::invalid_config("samples_per_branch must be greater than 0"));
        }
        if !(0.0..1.0).contains(&self.transient_ratio) {
            return Err(PendulumError::invalid_config(format!(
                "transient_ratio must be in [0, 1), got {}",
                self.transient_ratio
            )));
        }
        if self.sample_interval() == 0 {
            return Err(PendulumError::invalid_config(format!(
                "sampling interval is zero: {} post-transient steps for {} samples",
                self.n_steps().saturating_sub(self.transient_steps()),
                self.samples_per_branch
            )));
        }
        Ok(())
    }

    /// Run the sweep
    ///
    /// Non-finite samples are returned as they are; a warning reports how
    /// many there were.
    pub fn run(&self) -> Result<BifurcationDiagram> {
        self.validate()?;

        let n_steps = self.n_steps();
        let transient = self.transient_steps();
        let interval = self.sample_interval();
        let branches = self.n_omega2;

        info!(
            branches,
            n_steps,
            transient,
            interval,
            samples = self.samples_per_branch,
            "Bifurcation sweep started"
        );

        let omega2_init = linspace(self.omega2_min, self.omega2_max, branches);
        let at_rest = || Array2::zeros((branches, 1));
        let omega2 = Array2::from_shape_fn((branches, 1), |(i, _)| omega2_init[i]);

        let mut matrix = PendulumMatrix::new(branches, 1, at_rest(), at_rest(), at_rest(), omega2)?
            .with_params(self.params);
        let mut theta2_samples = vec![Vec::with_capacity(self.samples_per_branch); branches];

        for step in 0..n_steps {
            matrix.step(self.dt);

            if step < transient || (step - transient) % interval != 0 {
                continue;
            }
            if theta2_samples[0].len() >= self.samples_per_branch {
                break;
            }

            for (branch, &theta2) in theta2_samples.iter_mut().zip(matrix.theta2().column(0)) {
                let degrees = theta2.to_degrees();
                branch.push(if self.theta_wrap { wrap_degrees(degrees) } else { degrees });
            }
        }

        let non_finite = theta2_samples.iter().flatten().filter(|x| !x.is_finite()).count();
        if non_finite > 0 {
            warn!(non_finite, "Bifurcation sweep produced non-finite θ2 samples");
        }

        info!(branches, "Bifurcation sweep finished");

        Ok(BifurcationDiagram {
            omega2_init,
            theta2_samples,
        })
    }
}

/// Wrap an angle in degrees to [−180, 180)
pub fn wrap_degrees(degrees: f64) -> f64 {
    (degrees + 180.0).rem_euclid(360.0) - 180.0
}
