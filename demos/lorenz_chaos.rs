//! Example: Lorenz attractor - sensitivity to initial conditions
//!
//! Integrates two Lorenz trajectories that start 1e-8 apart, prints how the
//! gap opens, then estimates the largest Lyapunov exponent with Benettin's
//! method and compares the RK4 and Euler integrators.
//!
//! **Physical System**:
//! - σ = 10, ρ = 28, β = 8/3 (classical chaotic regime)
//! - Start: (1, 1, 1)
//!
//! Expected: λ ≈ 0.9 for RK4 with enough epochs.

use chaos_rs::{
    lyapunov::{LyapunovConfig, LyapunovEstimator},
    models::Lorenz,
    physics::{state, VectorField},
    solver::{EulerIntegrator, IntegrationConfig, RK4Integrator},
};

use std::time::Instant;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("═══════════════════════════════════════════════════════");
    println!("  Lorenz System - Divergence and Lyapunov Exponent");
    println!("═══════════════════════════════════════════════════════\n");

    let lorenz = Lorenz::default();
    let params = lorenz.parameters();
    println!("{}: σ = {}, ρ = {}, β = {:.4}", lorenz.name(), params.sigma, params.rho, params.beta);
    for point in lorenz.fixed_points() {
        println!("  fixed point {}", point.transpose());
    }

    // ====== Two nearby trajectories ======

    let config = IntegrationConfig::from_duration(30.0, 0.001)?;
    let rk4 = RK4Integrator::new();

    let a = config.run(&rk4, &state(&[1.0, 1.0, 1.0]), &lorenz)?;
    let b = config.run(&rk4, &state(&[1.0 + 1e-8, 1.0, 1.0]), &lorenz)?;

    println!("\n    t        |a - b|");
    for step in (0..=config.step_count).step_by(3000) {
        let gap = (&a[step] - &b[step]).norm();
        println!("  {:>5.1}   {:>12.4e}", step as f64 * config.dt, gap);
    }

    // ====== Benettin estimate ======

    println!();
    let config = LyapunovConfig::lorenz();

    let start = Instant::now();
    let rk4 = LyapunovEstimator::new(config)?.estimate(&lorenz, &state(&[1.0, 1.0, 1.0]))?;
    println!("RK4   : λ = {:.4}  ({:.2?})", rk4.exponent, start.elapsed());

    let start = Instant::now();
    let euler = LyapunovEstimator::with_integrator(config, EulerIntegrator::new())?
        .estimate(&lorenz, &state(&[1.0, 1.0, 1.0]))?;
    println!("Euler : λ = {:.4}  ({:.2?})", euler.exponent, start.elapsed());

    // ====== Convergence of the running estimate ======

    println!("\nRunning RK4 estimate:");
    let running = rk4.running_estimates();
    for k in [9, 99, 499, running.len() - 1] {
        println!("  after {:>5} epochs : {:.4}", k + 1, running[k]);
    }

    Ok(())
}
