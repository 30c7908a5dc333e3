//! Example: Double pendulum chaos map
//!
//! Scans the starting angles `(θ1, θ2)` of a heavy double pendulum over
//! `[0, 2π)²` and prints the largest Lyapunov exponent of every cell as a
//! text heatmap.
//!
//! **Physical System**:
//! - Masses: m1 = 10 kg, m2 = 20 kg
//! - Arms: L1 = 10 m, L2 = 20 m
//! - Released at rest
//!
//! **Estimator**:
//! - dt = 0.01 s, epochs of 0.5 s, 200 epochs (100 s per cell)
//!
//! Usage: `cargo run --release --example pendulum_grid [n_theta]`

use chaos_rs::{
    grid::{GridResult, GridScanner, ScanControl},
    lyapunov::LyapunovConfig,
    models::PendulumParameters,
};

use std::time::Instant;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("═══════════════════════════════════════════════════════");
    println!("  Double Pendulum - Lyapunov Exponent Grid");
    println!("═══════════════════════════════════════════════════════\n");

    // ====== Parameters ======

    let n_theta: usize = match std::env::args().nth(1) {
        Some(arg) => arg.parse()?,
        None => 16,
    };

    let params = PendulumParameters::new([10.0, 20.0], [10.0, 20.0])?;
    let config = LyapunovConfig::double_pendulum();

    println!("Pendulum:");
    println!("  m1, m2 : {} kg, {} kg", params.m1, params.m2);
    println!("  L1, L2 : {} m, {} m", params.l1, params.l2);
    println!("  g      : {} m/s²", params.g);
    println!("Estimator:");
    println!("  dt     : {} s", config.dt);
    println!("  epochs : {} × {} s", config.epoch_count, config.epoch_duration);
    println!("Grid     : {n_theta} × {n_theta}\n");

    // ====== Scan ======

    let step = (n_theta * n_theta / 10).max(1);
    let control = ScanControl::new().with_progress(move |progress| {
        if progress.completed % step == 0 {
            println!("  {:>5.1}%", 100.0 * progress.fraction());
        }
    });

    let start = Instant::now();
    let grid = GridScanner::new(params, n_theta, config).scan_with(&control)?;
    println!("\nScan finished in {:.2?}\n", start.elapsed());

    // ====== Heatmap ======

    print_heatmap(&grid);

    if let Some((low, high)) = grid.finite_range() {
        println!("\nλ range : [{low:.4}, {high:.4}]");
    }
    println!("NaN/Inf : {} cells", grid.degenerate_cells());

    Ok(())
}

/// Rows are θ1, columns θ2; shades follow `GridResult::COLOR_SCALE`
fn print_heatmap(grid: &GridResult) {
    const SHADES: [char; 5] = [' ', '░', '▒', '▓', '█'];
    let (low, high) = GridResult::COLOR_SCALE;

    println!("θ1 \\ θ2  (' ' ≤ {low}, '█' ≥ {high}, '?' = NaN)");
    for (i, row) in grid.exponents.rows().into_iter().enumerate() {
        let line: String = row
            .iter()
            .map(|&lambda| {
                if !lambda.is_finite() {
                    return '?';
                }
                let level = ((lambda - low) / (high - low)).clamp(0.0, 1.0);
                SHADES[(level * (SHADES.len() - 1) as f64).round() as usize]
            })
            .collect();
        println!("{:>6.3}  {}", grid.theta1[i], line);
    }
}
