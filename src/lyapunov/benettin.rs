//! Benettin renormalization
//!
//! # Algorithm
//!
//! Two trajectories, a reference `S` and a perturbed copy `S + offset` with
//! `‖offset‖₂ = d₀`, are integrated side by side for one epoch of duration τ.
//! At the epoch boundary:
//!
//! ```text
//! delta    = S_pert_next − S_next
//! d        = ‖delta‖₂
//! record     ln(d / d₀)
//! offset   = delta · d₀ / d          (renormalize, keep direction)
//! S        = S_next
//! ```
//!
//! After K epochs, `λ = Σ ln(dₖ / d₀) / (K · τ)`, where τ is the time actually
//! integrated per epoch, `round(epoch_duration / dt) · dt`.
//!
//! Renormalizing every epoch keeps the separation in the linear regime: it
//! can neither overflow (chaotic growth is exponential) nor sink into the
//! rounding noise floor (contracting directions). The offset direction starts
//! along the first coordinate and aligns with the fastest-growing direction
//! within a few epochs.
//!
//! # Degenerate epochs
//!
//! - `d == 0` (separation underflow): the offset is left unchanged for the
//!   next epoch, and the log is computed with a `1e-12` guard so it stays
//!   finite.
//! - `d` non-finite (NaN/Inf from the field): the offset is left unchanged,
//!   the NaN/Inf is recorded, and the exponent comes out non-finite.
//!
//! Neither case is an error.
//!
//! # Units
//!
//! The separation is the plain Euclidean norm of the state difference. For
//! the double pendulum this mixes radians and rad/s in one norm; estimates are
//! comparable with other runs of this crate, not with unit-scaled variants.

use crate::error::ChaosError;
use crate::lyapunov::{LyapunovConfig, LyapunovRunResult};
use crate::physics::state::{axis_offset, check_dimension};
use crate::physics::{StateVector, VectorField};
use crate::solver::{Integrator, RK4Integrator, propagate};

/// Guard added to the growth ratio so that an exact-zero separation gives a
/// finite log
pub const LOG_GUARD: f64 = 1e-12;

// =================================================================================================
// Estimator
// =================================================================================================

/// Largest Lyapunov exponent estimator (Benettin's method)
///
/// The configuration is validated once, at construction. The estimator is
/// stateless afterwards and can run any number of estimates concurrently.
///
/// # Example
///
/// ```rust
/// use chaos_rs::lyapunov::{LyapunovConfig, LyapunovEstimator};
/// use chaos_rs::models::Lorenz;
/// use chaos_rs::physics::state;
///
/// let config = LyapunovConfig::lorenz().with_epoch_count(100);
/// let estimator = LyapunovEstimator::new(config).unwrap();
///
/// let result = estimator.estimate(&Lorenz::default(), &state(&[1.0, 1.0, 1.0])).unwrap();
/// assert_eq!(result.log_growth.len(), 100);
/// ```
#[derive(Debug, Clone)]
pub struct LyapunovEstimator<I: Integrator = RK4Integrator> {
    config: LyapunovConfig,
    integrator: I,
}

impl LyapunovEstimator<RK4Integrator> {
    /// Estimator driven by RK4
    ///
    /// # Errors
    /// Any configuration error reported by [`LyapunovConfig::validate`].
    pub fn new(config: LyapunovConfig) -> Result<Self, ChaosError> {
        Self::with_integrator(config, RK4Integrator::new())
    }
}

impl<I: Integrator> LyapunovEstimator<I> {
    /// Estimator driven by a custom integrator
    pub fn with_integrator(config: LyapunovConfig, integrator: I) -> Result<Self, ChaosError> {
        config.validate()?;

        let effective = config.effective_epoch_duration();
        if (effective - config.epoch_duration).abs() > 1e-9 * config.epoch_duration {
            log::debug!(
                "epoch of {} is not a whole number of steps of {}, integrating {} per epoch",
                config.epoch_duration, config.dt, effective
            );
        }

        Ok(Self { config, integrator })
    }

    /// Configuration in use
    pub fn config(&self) -> &LyapunovConfig {
        &self.config
    }

    /// Integrator in use
    pub fn integrator(&self) -> &I {
        &self.integrator
    }

    /// Run every epoch and return the exponent
    ///
    /// # Errors
    /// `DimensionMismatch` when `initial` does not match `field`.
    pub fn estimate(
        &self,
        field: &dyn VectorField,
        initial: &StateVector,
    ) -> Result<LyapunovRunResult, ChaosError> {
        let log_growth: Vec<f64> = self
            .epochs(field, initial)?
            .map(|record| record.log_growth)
            .collect();

        let result = LyapunovRunResult::from_log_growth(
            log_growth,
            self.config.effective_epoch_duration(),
        );

        if result.is_degenerate() {
            log::debug!(
                "{}: degenerate Lyapunov estimate ({}) from {}",
                field.name(), result.exponent, initial.transpose()
            );
        }

        Ok(result)
    }

    /// Lazy epoch-by-epoch view of the same computation
    ///
    /// Yields exactly `epoch_count` records. Useful to observe the
    /// renormalization or stop a run early.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chaos_rs::lyapunov::{LyapunovConfig, LyapunovEstimator};
    /// use chaos_rs::models::Lorenz;
    /// use chaos_rs::physics::state;
    ///
    /// let config = LyapunovConfig::lorenz().with_epoch_count(20);
    /// let estimator = LyapunovEstimator::new(config).unwrap();
    ///
    /// for record in estimator.epochs(&Lorenz::default(), &state(&[1.0, 1.0, 1.0])).unwrap() {
    ///     assert!((record.offset.norm() - 1e-6).abs() < 1e-15);
    /// }
    /// ```
    pub fn epochs<'a>(
        &'a self,
        field: &'a dyn VectorField,
        initial: &StateVector,
    ) -> Result<EpochIter<'a, I>, ChaosError> {
        check_dimension(initial, field)?;

        Ok(EpochIter {
            integrator: &self.integrator,
            field,
            config: self.config,
            steps: self.config.steps_per_epoch(),
            reference: initial.clone(),
            offset: axis_offset(initial.len(), 0, self.config.separation_epsilon),
            index: 0,
        })
    }
}

// =================================================================================================
// Epoch iteration
// =================================================================================================

/// State of the estimator at one epoch boundary
#[derive(Debug, Clone, PartialEq)]
pub struct EpochRecord {
    /// Epoch number, from 0
    pub index: usize,

    /// Separation ‖S_pert_next − S_next‖₂ before renormalization
    pub distance: f64,

    /// `ln(distance / d₀ + LOG_GUARD)`
    pub log_growth: f64,

    /// Offset after renormalization, seeds the next epoch
    pub offset: StateVector,

    /// Reference state at the end of the epoch
    pub reference: StateVector,
}

/// Iterator over the epochs of one Benettin run
///
/// Created by [`LyapunovEstimator::epochs`].
pub struct EpochIter<'a, I: Integrator> {
    integrator: &'a I,
    field: &'a dyn VectorField,
    config: LyapunovConfig,
    steps: usize,
    reference: StateVector,
    offset: StateVector,
    index: usize,
}

impl<I: Integrator> EpochIter<'_, I> {
    /// Current separation vector
    pub fn offset(&self) -> &StateVector {
        &self.offset
    }

    /// Current reference state
    pub fn reference(&self) -> &StateVector {
        &self.reference
    }
}

impl<I: Integrator> Iterator for EpochIter<'_, I> {
    type Item = EpochRecord;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.config.epoch_count {
            return None;
        }

        let epsilon = self.config.separation_epsilon;
        let dt = self.config.dt;

        // ====== Integrate both trajectories over one epoch ======

        let perturbed = &self.reference + &self.offset;
        let reference_next = propagate(self.integrator, self.reference.clone(), dt, self.steps, self.field);
        let perturbed_next = propagate(self.integrator, perturbed, dt, self.steps, self.field);

        // ====== Measure and renormalize ======

        let delta = perturbed_next - &reference_next;
        let distance = delta.norm();
        let log_growth = (distance / epsilon + LOG_GUARD).ln();

        if distance > 0.0 && distance.is_finite() {
            self.offset = delta * (epsilon / distance);
        } else {
            log::debug!(
                "{}: separation {} at epoch {}, keeping previous offset",
                self.field.name(), distance, self.index
            );
        }

        self.reference = reference_next;

        let record = EpochRecord {
            index: self.index,
            distance,
            log_growth,
            offset: self.offset.clone(),
            reference: self.reference.clone(),
        };
        self.index += 1;

        Some(record)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.config.epoch_count - self.index;
        (remaining, Some(remaining))
    }
}

impl<I: Integrator> ExactSizeIterator for EpochIter<'_, I> {}

// =================================================================================================
// Tests
// =================================================================================================
