//! Estimator output

/// Largest Lyapunov exponent of one run, with its per-epoch log growth
///
/// # Invariants
///
/// - `log_growth.len()` equals the number of epochs executed
/// - `exponent == mean(log_growth) / epoch_duration`
#[derive(Debug, Clone, PartialEq)]
pub struct LyapunovRunResult {
    /// Estimated largest Lyapunov exponent λ [1/time]
    pub exponent: f64,

    /// `ln(dₖ / d₀)` recorded at each epoch boundary
    pub log_growth: Vec<f64>,

    /// Time integrated between renormalizations
    pub epoch_duration: f64,
}

impl LyapunovRunResult {
    /// Build a result from the recorded log growth
    pub fn from_log_growth(log_growth: Vec<f64>, epoch_duration: f64) -> Self {
        let total: f64 = log_growth.iter().sum();
        let exponent = total / (log_growth.len() as f64 * epoch_duration);

        Self { exponent, log_growth, epoch_duration }
    }

    /// Number of epochs executed
    pub fn epoch_count(&self) -> usize {
        self.log_growth.len()
    }

    /// Time covered by the run
    pub fn total_time(&self) -> f64 {
        self.log_growth.len() as f64 * self.epoch_duration
    }

    /// Estimate after each epoch
    ///
    /// Entry `k` is the exponent that a run stopped after `k + 1` epochs
    /// would have returned. The last entry equals [`exponent`](Self::exponent).
    /// A flat tail indicates a converged estimate.
    pub fn running_estimates(&self) -> Vec<f64> {
        let mut total = 0.0;
        self.log_growth
            .iter()
            .enumerate()
            .map(|(k, log)| {
                total += log;
                total / ((k + 1) as f64 * self.epoch_duration)
            })
            .collect()
    }

    /// True when the exponent is NaN or infinite
    pub fn is_degenerate(&self) -> bool {
        !self.exponent.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_exponent_is_mean_over_epoch_duration() {
        let result = LyapunovRunResult::from_log_growth(vec![0.1, 0.3, 0.2], 0.5);

        assert_eq!(result.epoch_count(), 3);
        assert_relative_eq!(result.exponent, 0.6 / 1.5, epsilon = 1e-15);
        assert_relative_eq!(result.total_time(), 1.5);
        assert!(!result.is_degenerate());
    }

    #[test]
    fn test_running_estimates() {
        let result = LyapunovRunResult::from_log_growth(vec![1.0, 0.0, 2.0], 1.0);
        let running = result.running_estimates();

        assert_eq!(running.len(), 3);
        assert_relative_eq!(running[0], 1.0);
        assert_relative_eq!(running[1], 0.5);
        assert_relative_eq!(running[2], 1.0);
        assert_relative_eq!(*running.last().unwrap(), result.exponent);
    }

    #[test]
    fn test_nan_epoch_makes_result_degenerate() {
        let result = LyapunovRunResult::from_log_growth(vec![0.1, f64::NAN], 0.1);
        assert!(result.is_degenerate());
        assert!(result.exponent.is_nan());
    }
}
