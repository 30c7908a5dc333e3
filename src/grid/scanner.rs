//! Double pendulum initial-angle scan

use std::f64::consts::TAU;
use std::sync::atomic::{AtomicUsize, Ordering};

use ndarray::Array2;

use crate::error::ChaosError;
use crate::grid::{GridResult, ScanControl, ScanProgress};
use crate::lyapunov::{LyapunovConfig, LyapunovEstimator};
use crate::models::{DoublePendulum, PendulumParameters};

/// `n` evenly spaced angles covering `[0, 2π)`: `θ_k = 2π·k / n`
pub fn theta_axis(n: usize) -> Vec<f64> {
    (0..n).map(|k| TAU * k as f64 / n as f64).collect()
}

/// Lyapunov exponent of the double pendulum over a grid of starting angles
///
/// Every cell starts at rest, `[θ1_i, θ2_j, 0, 0]`, and runs one full
/// estimate. Cells are independent and read only the scanner's parameters.
///
/// # Example
///
/// ```rust
/// use chaos_rs::grid::GridScanner;
/// use chaos_rs::lyapunov::LyapunovConfig;
/// use chaos_rs::models::PendulumParameters;
///
/// let config = LyapunovConfig::double_pendulum().with_epoch_count(10);
/// let scanner = GridScanner::new(PendulumParameters::default(), 3, config);
///
/// let grid = scanner.scan().unwrap();
/// assert_eq!(grid.exponents.dim(), (3, 3));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridScanner {
    pub parameters: PendulumParameters,
    pub n_theta: usize,
    pub config: LyapunovConfig,
}

impl GridScanner {
    pub fn new(parameters: PendulumParameters, n_theta: usize, config: LyapunovConfig) -> Self {
        Self { parameters, n_theta, config }
    }

    /// Angles used along both axes
    pub fn axis(&self) -> Vec<f64> {
        theta_axis(self.n_theta)
    }

    /// Number of cells, `n_theta²`
    pub fn cell_count(&self) -> usize {
        self.n_theta * self.n_theta
    }

    /// # Errors
    ///
    /// `EmptyGrid`, `InvalidParameter`, or any [`LyapunovConfig`] error.
    pub fn validate(&self) -> Result<(), ChaosError> {
        if self.n_theta == 0 {
            return Err(ChaosError::EmptyGrid);
        }
        self.parameters.validate()?;
        self.config.validate()
    }

    /// Run every cell
    pub fn scan(&self) -> Result<GridResult, ChaosError> {
        self.scan_with(&ScanControl::new())
    }

    /// Run every cell under a cancellation / progress handle
    ///
    /// # Errors
    ///
    /// Configuration errors before any cell runs, `Cancelled` when `control`
    /// stopped the scan before the last cell.
    pub fn scan_with(&self, control: &ScanControl) -> Result<GridResult, ChaosError> {
        self.validate()?;

        let n = self.n_theta;
        let total = self.cell_count();
        let axis = self.axis();
        let pendulum = DoublePendulum::new(self.parameters);
        let estimator = LyapunovEstimator::new(self.config)?;
        let completed = AtomicUsize::new(0);

        log::info!(
            "Scanning {}x{} grid ({} epochs of {} s, dt = {})",
            n, n, self.config.epoch_count, self.config.epoch_duration, self.config.dt
        );

        // Cell k maps to row k / n, column k % n. `None` marks a skipped cell.
        let run_cell = |cell: usize| -> Result<Option<f64>, ChaosError> {
            if control.is_cancelled() {
                return Ok(None);
            }

            let initial = DoublePendulum::at_rest(axis[cell / n], axis[cell % n]);
            let exponent = estimator.estimate(&pendulum, &initial)?.exponent;

            let done = completed.fetch_add(1, Ordering::Relaxed) + 1;
            control.report(ScanProgress { completed: done, total });

            Ok(Some(exponent))
        };

        #[cfg(feature = "parallel")]
        let cells: Vec<Option<f64>> = {
            use rayon::prelude::*;

            (0..total)
                .into_par_iter()
                .map(run_cell)
                .collect::<Result<_, _>>()?
        };

        #[cfg(not(feature = "parallel"))]
        let cells: Vec<Option<f64>> = (0..total)
            .map(run_cell)
            .collect::<Result<_, _>>()?;

        let Some(values) = cells.into_iter().collect::<Option<Vec<f64>>>() else {
            let completed = completed.into_inner();
            log::info!("Grid scan cancelled after {completed} of {total} cells");
            return Err(ChaosError::Cancelled { completed, total });
        };

        let result = GridResult {
            theta1: axis.clone(),
            theta2: axis,
            exponents: Array2::from_shape_fn((n, n), |(i, j)| values[i * n + j]),
        };

        let degenerate = result.degenerate_cells();
        if degenerate > 0 {
            log::warn!("{degenerate} of {total} cells have a non-finite exponent");
        }
        match result.finite_range() {
            Some((low, high)) => log::info!("Grid scan done, λ in [{low:.4}, {high:.4}]"),
            None => log::info!("Grid scan done, no finite exponent"),
        }

        Ok(result)
    }
}

// =================================================================================================
// Tests
// =================================================================================================
