//! Initial-condition grid scans
//!
//! Sweeps the double pendulum's starting angles `(θ1, θ2)` over
//! `[0, 2π) × [0, 2π)` and stores one Lyapunov exponent per cell. The result
//! is the raw material of a chaos heatmap: regular regions show λ ≈ 0,
//! chaotic regions λ > 0.
//!
//! # Module Organization
//!
//! - **`scanner`**: `GridScanner` and the angle axis
//! - **`control`**: `ScanControl` (cancellation, progress), `CancelHandle` and `ScanProgress`
//! - **`result`**: `GridResult`, the exponent matrix and its axes
//!
//! # Parallelism
//!
//! With the `parallel` feature (default) cells run on the rayon global pool.
//! Each task owns its trajectories and writes one scalar; results are
//! gathered in cell order, so parallel and sequential scans are bit-identical.
//!
//! # Example
//!
//! ```rust
//! use chaos_rs::grid::{GridScanner, ScanControl};
//! use chaos_rs::lyapunov::LyapunovConfig;
//! use chaos_rs::models::PendulumParameters;
//!
//! let params = PendulumParameters::new([10.0, 20.0], [10.0, 20.0]).unwrap();
//! let config = LyapunovConfig::double_pendulum().with_epoch_count(10);
//! let scanner = GridScanner::new(params, 4, config);
//!
//! let control = ScanControl::new().with_progress(|progress| {
//!     assert!(progress.completed <= progress.total);
//! });
//!
//! let grid = scanner.scan_with(&control).unwrap();
//! assert_eq!(grid.exponents.shape(), &[4, 4]);
//! ```

mod control;
mod result;
mod scanner;

pub use control::{CancelHandle, ScanControl, ScanProgress};
pub use result::GridResult;
pub use scanner::{GridScanner, theta_axis};
