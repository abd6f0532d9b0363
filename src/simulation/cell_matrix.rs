//! Per-cell pendulum matrix
//!
//! One [`DoublePendulumSystem`] object per cell, stepped in a nested loop,
//! plus a colour-map index per cell that is re-bucketed from the current
//! angles on demand. Same mathematics as
//! [`PendulumMatrix`](crate::simulation::PendulumMatrix); use that one for
//! anything beyond a few dozen cells.

use ndarray::Array2;
use tracing::debug;

use crate::models::DoublePendulumParams;
use crate::simulation::angles::{index_to_theta, theta_to_index};
use crate::simulation::pendulum::DoublePendulumSystem;
use crate::solver::TimeEvolution;

/// Grid of independent double-pendulum objects with per-cell colour indices
#[derive(Debug, Clone)]
pub struct PendulumCellMatrix {
    cells: Array2<DoublePendulumSystem>,
    colors: Array2<(usize, usize)>,
}

impl PendulumCellMatrix {
    /// Build an `n × m` grid
    ///
    /// Cell (i, j) starts at θ1 = i·2π/n − π, θ2 = j·2π/m − π, at rest,
    /// undamped, with colour index (i, j).
    ///
    /// # Example
    ///
    /// ```rust
    /// use pendulum_rs::models::DoublePendulumParams;
    /// use pendulum_rs::simulation::PendulumCellMatrix;
    ///
    /// let mut grid = PendulumCellMatrix::generate(4, 3, DoublePendulumParams::default());
    /// assert_eq!(grid.color_indices()[[2, 1]], (2, 1));
    ///
    /// grid.step(1e-3);
    /// grid.update_colors();
    /// assert_eq!(grid.shape(), (4, 3));
    /// ```
    pub fn generate(n: usize, m: usize, params: DoublePendulumParams) -> Self {
        let DoublePendulumParams { m1, m2, l1, l2, g } = params;

        let cells = Array2::from_shape_fn((n, m), |(i, j)| {
            let theta1 = index_to_theta(i, n) - std::f64::consts::PI;
            let theta2 = index_to_theta(j, m) - std::f64::consts::PI;
            DoublePendulumSystem::from_degrees(
                l1,
                m1,
                l2,
                m2,
                g,
                theta1.to_degrees(),
                0.0,
                theta2.to_degrees(),
                0.0,
                0.0,
            )
        });
        let colors = Array2::from_shape_fn((n, m), |index| index);

        debug!(rows = n, columns = m, "PendulumCellMatrix generated");
        Self { cells, colors }
    }

    /// (N, M)
    pub fn shape(&self) -> (usize, usize) {
        self.cells.dim()
    }

    /// Step every cell by `dt`, row by row
    pub fn step(&mut self, dt: f64) {
        for mut row in self.cells.rows_mut() {
            for cell in row.iter_mut() {
                cell.step(dt);
            }
        }
    }

    /// Run `evolution.time_steps` steps of `evolution.dt`
    pub fn advance(&mut self, evolution: &TimeEvolution) {
        for _ in 0..evolution.time_steps {
            self.step(evolution.dt);
        }
    }

    /// Re-bucket every cell's colour index from its current angles
    ///
    /// θ1 is bucketed over N and θ2 over M.
    pub fn update_colors(&mut self) {
        let (n, m) = self.shape();

        ndarray::Zip::from(&mut self.colors)
            .and(&self.cells)
            .for_each(|color, cell| {
                let (theta1, _, theta2, _) = cell.angles_and_velocities();
                *color = (theta_to_index(theta1, n), theta_to_index(theta2, m));
            });
    }

    /// Colour-map index of every cell, as of the last `update_colors`
    pub fn color_indices(&self) -> &Array2<(usize, usize)> {
        &self.colors
    }

    pub fn cell(&self, i: usize, j: usize) -> Option<&DoublePendulumSystem> {
        self.cells.get((i, j))
    }

    pub fn cells(&self) -> &Array2<DoublePendulumSystem> {
        &self.cells
    }
}
