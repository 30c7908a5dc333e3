//! Integrator traits and configuration
//!
//! # Design Philosophy
//!
//! - `Integrator` trait: one required method, `step`. Trajectory generation is
//!   written once, as provided methods, and reused by every scheme.
//! - `IntegrationConfig`: validated pair `(dt, step_count)` for callers that
//!   prefer to think in total duration.
//!
//! All integrators are stateless: the same instance can drive any number of
//! runs, on any number of threads.

use crate::error::ChaosError;
use crate::physics::state::check_dimension;
use crate::physics::{StateVector, VectorField};
use crate::solver::{Trajectory, check_time_step, propagate};

// =================================================================================================
// Integrator Trait
// =================================================================================================

/// Fixed-step explicit integrator for autonomous vector fields
///
/// # Responsibility
///
/// Advances a state by a fixed time step. No error control: stability and
/// accuracy are the caller's responsibility (choose `dt` small enough).
///
/// # Failure modes
///
/// Only configuration errors are raised, at entry. Numeric overflow to
/// Inf/NaN is a valid (degenerate) output and is propagated silently.
///
/// # Example
///
/// ```rust
/// use chaos_rs::models::Lorenz;
/// use chaos_rs::physics::state;
/// use chaos_rs::solver::{Integrator, RK4Integrator};
///
/// let trajectory = RK4Integrator::new()
///     .integrate(&state(&[1.0, 1.0, 1.0]), 0.001, 1000, &Lorenz::default())
///     .unwrap();
///
/// assert_eq!(trajectory.len(), 1001);
/// ```
pub trait Integrator: Send + Sync {

    /// Advance `state` by one step of size `dt`
    ///
    /// Produces a new state; the input is never modified.
    fn step(&self, state: &StateVector, dt: f64, field: &dyn VectorField) -> StateVector;

    /// Integrate `step_count` steps and keep every state
    ///
    /// # Returns
    ///
    /// A trajectory of length `step_count + 1`. Index 0 is `initial`.
    ///
    /// # Errors
    ///
    /// - `NonPositiveTimeStep` if `dt` is not strictly positive and finite
    /// - `DimensionMismatch` if `initial` does not match the field
    fn integrate(
        &self,
        initial: &StateVector,
        dt: f64,
        step_count: usize,
        field: &dyn VectorField,
    ) -> Result<Trajectory, ChaosError> {
        check_time_step(dt)?;
        check_dimension(initial, field)?;

        // Reserve exact capacity to avoid reallocation during integration
        let mut states = Vec::with_capacity(step_count + 1);
        states.push(initial.clone());

        let mut reported = false;
        for index in 0..step_count {
            let next = self.step(&states[index], dt, field);

            if !reported && next.iter().any(|x| !x.is_finite()) {
                log::debug!(
                    "{} on {}: non-finite state at step {} (dt = {})",
                    self.name(), field.name(), index + 1, dt
                );
                reported = true;
            }

            states.push(next);
        }

        Ok(Trajectory::new(states, dt))
    }

    /// Integrate `step_count` steps and return only the final state
    ///
    /// Same arithmetic as [`integrate`](Integrator::integrate), without
    /// storing the intermediate states.
    fn advance(
        &self,
        initial: &StateVector,
        dt: f64,
        step_count: usize,
        field: &dyn VectorField,
    ) -> Result<StateVector, ChaosError> {
        check_time_step(dt)?;
        check_dimension(initial, field)?;

        Ok(propagate(self, initial.clone(), dt, step_count, field))
    }

    /// Number of vector field evaluations per step
    fn stages(&self) -> usize;

    /// Name of the method (used for display and logging)
    fn name(&self) -> &str;
}

// =================================================================================================
// Integration configuration
// =================================================================================================

/// Time discretization of one integration run
///
/// # Examples
///
/// ```rust
/// use chaos_rs::solver::IntegrationConfig;
///
/// // 30 time units at dt = 0.01
/// let config = IntegrationConfig::from_duration(30.0, 0.01).unwrap();
/// assert_eq!(config.step_count, 3000);
/// assert!((config.duration() - 30.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntegrationConfig {
    /// Step size
    pub dt: f64,

    /// Number of steps
    pub step_count: usize,
}

impl IntegrationConfig {
    /// Create a validated configuration
    pub fn new(dt: f64, step_count: usize) -> Result<Self, ChaosError> {
        let config = Self { dt, step_count };
        config.validate()?;
        Ok(config)
    }

    /// Cover `total_time` with steps of `dt`
    ///
    /// The step count is rounded to the nearest integer, so the covered
    /// duration may differ from `total_time` by up to `dt / 2`.
    pub fn from_duration(total_time: f64, dt: f64) -> Result<Self, ChaosError> {
        check_time_step(dt)?;
        if !(total_time.is_finite() && total_time >= 0.0) {
            return Err(ChaosError::InvalidParameter { name: "total_time", value: total_time });
        }
        Self::new(dt, (total_time / dt).round() as usize)
    }

    /// Time covered by the run
    pub fn duration(&self) -> f64 {
        self.dt * self.step_count as f64
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ChaosError> {
        check_time_step(self.dt)
    }

    /// Run `integrator` on `field` with this discretization
    pub fn run<I: Integrator + ?Sized>(
        &self,
        integrator: &I,
        initial: &StateVector,
        field: &dyn VectorField,
    ) -> Result<Trajectory, ChaosError> {
        integrator.integrate(initial, self.dt, self.step_count, field)
    }
}
