//! Convergence tests for the RK4 integrator
//!
//! These tests verify that RK4 exhibits fourth-order convergence
//! when refining the time step, on scalar and grid states alike.

use pendulum_rs::models::DoublePendulumParams;
use pendulum_rs::physics::GridState;
use pendulum_rs::simulation::{Pendulum, PendulumMatrix};
use pendulum_rs::solver::TimeEvolution;
use nalgebra::Vector2;
use ndarray::{Array2, array};

mod common;
use common::LinearOscillator;

#[test]
fn test_rk4_fourth_order_convergence() {
    // RK4 should have fourth-order convergence: error ~ O(dt⁴)
    // When dt → dt/2, error should → error/16

    let model = LinearOscillator::new(4.0);
    let theta0 = 0.5;
    let total_time = 1.0;
    let exact = model.analytical_solution(total_time, theta0);

    let steps_list = [20, 40, 80, 160];
    let mut errors = Vec::new();

    for &steps in &steps_list {
        let mut pendulum = Pendulum::new(model, Vector2::new(theta0, 0.0));
        pendulum.advance(&TimeEvolution::new(total_time / steps as f64, steps));

        let error = (pendulum.state() - exact).norm();
        errors.push(error);
    }

    for i in 0..errors.len() - 1 {
        let ratio = errors[i] / errors[i + 1];
        println!("RK4 convergence ratio {}->{}: {}", i, i + 1, ratio);

        // Should be close to 16 for fourth-order
        assert!(
            ratio > 13.0 && ratio < 19.0,
            "Convergence ratio {} not fourth-order",
            ratio
        );
    }
}

#[test]
fn test_rk4_accuracy_at_fine_step() {
    let model = LinearOscillator::new(1.0);
    let mut pendulum = Pendulum::new(model, Vector2::new(1.0, 0.0));
    pendulum.advance(&TimeEvolution::new(1e-3, 2000));

    let exact = model.analytical_solution(2.0, 1.0);
    assert!((pendulum.state() - exact).norm() < 1e-12);
}

#[test]
fn test_grid_self_convergence() {
    // No closed form for the double pendulum: compare against a much finer run.
    // Short horizon so chaos does not amplify the differences.
    let run = |steps: usize| {
        let mut matrix = PendulumMatrix::new(
            2,
            2,
            array![[0.5, 1.2], [2.0, -1.0]],
            array![[0.1, -0.7], [1.5, 2.5]],
            Array2::zeros((2, 2)),
            Array2::zeros((2, 2)),
        )
        .unwrap()
        .with_params(DoublePendulumParams::default());
        matrix.advance(&TimeEvolution::new(0.2 / steps as f64, steps));
        matrix.state().clone()
    };

    let reference = run(1600);
    let max_diff = |grid: &GridState| {
        (grid.theta1() - reference.theta1())
            .iter()
            .chain((grid.theta2() - reference.theta2()).iter())
            .fold(0.0f64, |acc, x| acc.max(x.abs()))
    };

    let coarse = max_diff(&run(50));
    let fine = max_diff(&run(100));

    assert!(coarse > 0.0);
    let ratio = coarse / fine;
    assert!(ratio > 10.0 && ratio < 22.0, "Grid convergence ratio {} not fourth-order", ratio);
}
