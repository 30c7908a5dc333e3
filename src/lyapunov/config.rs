//! Estimator configuration
//!
//! # Design
//!
//! A plain value with recognized defaults per system, builder-style setters,
//! and a `validate()` that every estimator runs once at construction.

use crate::error::ChaosError;
use crate::solver::check_time_step;

/// Default initial (and target) separation d₀
pub const DEFAULT_SEPARATION: f64 = 1e-6;

/// Parameters of a Benettin run
///
/// | Field                | Meaning                                       |
/// |----------------------|-----------------------------------------------|
/// | `separation_epsilon` | initial and renormalized separation d₀        |
/// | `epoch_duration`     | time between two renormalizations             |
/// | `epoch_count`        | number of renormalizations                    |
/// | `dt`                 | integration step inside each epoch            |
///
/// # Examples
///
/// ```rust
/// use chaos_rs::lyapunov::LyapunovConfig;
///
/// let config = LyapunovConfig::lorenz().with_epoch_count(200);
/// assert_eq!(config.dt, 0.001);
/// assert_eq!(config.steps_per_epoch(), 100);
/// assert!((config.total_time() - 20.0).abs() < 1e-12);
/// config.validate().unwrap();
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LyapunovConfig {
    pub separation_epsilon: f64,
    pub epoch_duration: f64,
    pub epoch_count: usize,
    pub dt: f64,
}

impl LyapunovConfig {
    /// Create a validated configuration
    pub fn new(
        separation_epsilon: f64,
        epoch_duration: f64,
        epoch_count: usize,
        dt: f64,
    ) -> Result<Self, ChaosError> {
        let config = Self { separation_epsilon, epoch_duration, epoch_count, dt };
        config.validate()?;
        Ok(config)
    }

    /// Defaults for the Lorenz system
    ///
    /// `dt = 0.001`, epochs of 0.1 time units, 1000 epochs (100 time units).
    pub fn lorenz() -> Self {
        Self {
            separation_epsilon: DEFAULT_SEPARATION,
            epoch_duration: 0.1,
            epoch_count: 1000,
            dt: 0.001,
        }
    }

    /// Defaults for the double pendulum
    ///
    /// `dt = 0.01`, epochs of 0.5 s, 200 epochs (100 s).
    pub fn double_pendulum() -> Self {
        Self {
            separation_epsilon: DEFAULT_SEPARATION,
            epoch_duration: 0.5,
            epoch_count: 200,
            dt: 0.01,
        }
    }

    pub fn with_separation(mut self, separation_epsilon: f64) -> Self {
        self.separation_epsilon = separation_epsilon;
        self
    }

    pub fn with_epoch_duration(mut self, epoch_duration: f64) -> Self {
        self.epoch_duration = epoch_duration;
        self
    }

    pub fn with_epoch_count(mut self, epoch_count: usize) -> Self {
        self.epoch_count = epoch_count;
        self
    }

    pub fn with_dt(mut self, dt: f64) -> Self {
        self.dt = dt;
        self
    }

    /// Integration steps per epoch, `round(epoch_duration / dt)`
    pub fn steps_per_epoch(&self) -> usize {
        (self.epoch_duration / self.dt).round() as usize
    }

    /// Time actually integrated per epoch, `steps_per_epoch() · dt`
    ///
    /// Differs from `epoch_duration` when the epoch is not a whole number of
    /// steps. The exponent is normalized by this value.
    pub fn effective_epoch_duration(&self) -> f64 {
        self.steps_per_epoch() as f64 * self.dt
    }

    /// Time covered by all epochs
    pub fn total_time(&self) -> f64 {
        self.effective_epoch_duration() * self.epoch_count as f64
    }

    /// Validate configuration
    ///
    /// # Errors
    ///
    /// - `NonPositiveTimeStep` for `dt <= 0`
    /// - `EmptyEpoch` for `epoch_duration <= 0`
    /// - `ZeroEpochCount` for `epoch_count == 0`
    /// - `InvalidSeparation` for `separation_epsilon <= 0`
    /// - `EpochShorterThanStep` when an epoch rounds to zero steps
    pub fn validate(&self) -> Result<(), ChaosError> {
        check_time_step(self.dt)?;

        if !(self.epoch_duration.is_finite() && self.epoch_duration > 0.0) {
            return Err(ChaosError::EmptyEpoch { epoch_duration: self.epoch_duration });
        }
        if self.epoch_count == 0 {
            return Err(ChaosError::ZeroEpochCount);
        }
        if !(self.separation_epsilon.is_finite() && self.separation_epsilon > 0.0) {
            return Err(ChaosError::InvalidSeparation { epsilon: self.separation_epsilon });
        }
        if self.steps_per_epoch() == 0 {
            return Err(ChaosError::EpochShorterThanStep {
                epoch_duration: self.epoch_duration,
                dt: self.dt,
            });
        }

        Ok(())
    }
}

impl Default for LyapunovConfig {
    fn default() -> Self {
        Self::lorenz()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_defaults_are_valid() {
        assert!(LyapunovConfig::lorenz().validate().is_ok());
        assert!(LyapunovConfig::double_pendulum().validate().is_ok());
        assert_eq!(LyapunovConfig::default(), LyapunovConfig::lorenz());
        assert_eq!(LyapunovConfig::double_pendulum().steps_per_epoch(), 50);
    }

    #[test]
    fn test_rejects_zero_epoch_count() {
        let config = LyapunovConfig::lorenz().with_epoch_count(0);
        assert_eq!(config.validate().unwrap_err(), ChaosError::ZeroEpochCount);
    }

    #[test]
    fn test_rejects_empty_epoch() {
        let config = LyapunovConfig::lorenz().with_epoch_duration(0.0);
        assert_eq!(
            config.validate().unwrap_err(),
            ChaosError::EmptyEpoch { epoch_duration: 0.0 }
        );
    }

    #[test]
    fn test_rejects_non_positive_dt() {
        let config = LyapunovConfig::lorenz().with_dt(-0.001);
        assert!(matches!(config.validate(), Err(ChaosError::NonPositiveTimeStep { .. })));
    }

    #[test]
    fn test_rejects_bad_separation() {
        for epsilon in [0.0, -1e-6, f64::NAN] {
            let config = LyapunovConfig::lorenz().with_separation(epsilon);
            assert!(matches!(config.validate(), Err(ChaosError::InvalidSeparation { .. })));
        }
    }

    #[test]
    fn test_rejects_epoch_shorter_than_step() {
        let config = LyapunovConfig::lorenz().with_dt(0.1).with_epoch_duration(0.04);
        assert!(matches!(config.validate(), Err(ChaosError::EpochShorterThanStep { .. })));
    }

    #[test]
    fn test_effective_epoch_duration() {
        let config = LyapunovConfig::new(1e-6, 0.15, 20, 0.1).unwrap();
        assert_eq!(config.steps_per_epoch(), 1);
        assert!((config.effective_epoch_duration() - 0.1).abs() < 1e-15);
        assert!((config.total_time() - 2.0).abs() < 1e-12);

        let config = LyapunovConfig::lorenz();
        assert!((config.effective_epoch_duration() - config.epoch_duration).abs() < 1e-15);
    }

    #[test]
    fn test_new_validates() {
        assert!(LyapunovConfig::new(1e-6, 0.1, 10, 0.01).is_ok());
        assert!(LyapunovConfig::new(1e-6, 0.1, 0, 0.01).is_err());
    }
}
