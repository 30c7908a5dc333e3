//! Numerical integrators
//!
//! This module provides the trait and implementations for fixed-step explicit
//! time integration of a [`VectorField`](crate::physics::VectorField).
//!
//! # Core Concepts
//!
//! ## The Architecture (WHAT vs HOW)
//!
//! 1. **Vector field** (`VectorField`) - WHAT to integrate
//!    - Equations of motion bound to physical constants
//!
//! 2. **Integrator** (`Integrator` trait) - HOW to integrate
//!    - One `step` per scheme (RK4, Euler)
//!    - Shared `integrate` / `advance` loops
//!
//! 3. **Trajectory** (`Trajectory`) - The solution
//!    - `step_count + 1` states, index 0 is the initial condition
//!
//! # Module Organization
//!
//! - **`traits`**: `Integrator` trait and `IntegrationConfig`
//! - **`trajectory`**: `Trajectory` result structure
//! - **`methods`**: `RK4Integrator`, `EulerIntegrator`
//!
//! # Workflow Diagram
//!
//! ```text
//! ┌─────────────────┐
//! │  Vector Field   │  (equations + parameters)
//! └────────┬────────┘
//!          │
//! ┌────────▼────────────┐
//! │ Integrator          │ ← The method (RK4, Euler)
//! │ step / integrate    │
//! └────────┬────────────┘
//!          │
//! ┌────────▼────────────┐
//! │ Trajectory          │ ← The solution
//! │ (states + dt)       │
//! └─────────────────────┘
//! ```
//!
//! # Quick Start Example
//!
//! ```rust
//! use chaos_rs::models::Lorenz;
//! use chaos_rs::physics::state;
//! use chaos_rs::solver::{IntegrationConfig, RK4Integrator};
//!
//! let config = IntegrationConfig::from_duration(10.0, 0.001).unwrap();
//! let trajectory = config
//!     .run(&RK4Integrator::new(), &state(&[1.0, 1.0, 1.0]), &Lorenz::default())
//!     .unwrap();
//!
//! assert_eq!(trajectory.step_count(), 10_000);
//! ```
//!
//! # Error Handling
//!
//! Integrators only fail on configuration errors (non-positive `dt`, state
//! length that does not match the field). NaN or Inf produced by the field
//! are written into the trajectory as they are: callers that need finite
//! output check [`Trajectory::is_finite`].

// =================================================================================================
// Module Declarations
// =================================================================================================
mod traits;
mod trajectory;
mod methods;

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use traits::{IntegrationConfig, Integrator};
pub use trajectory::Trajectory;
pub use methods::{EulerIntegrator, RK4Integrator};

// =================================================================================================
// Helper Functions
// =================================================================================================

use crate::error::ChaosError;
use crate::physics::{StateVector, VectorField};

/// Reject a time step that is not strictly positive and finite
pub(crate) fn check_time_step(dt: f64) -> Result<(), ChaosError> {
    if dt.is_finite() && dt > 0.0 {
        Ok(())
    } else {
        Err(ChaosError::NonPositiveTimeStep { dt })
    }
}

/// Apply `steps` integrator steps without storing intermediate states
///
/// Inputs are assumed validated by the caller.
pub(crate) fn propagate<I: Integrator + ?Sized>(
    integrator: &I,
    mut state: StateVector,
    dt: f64,
    steps: usize,
    field: &dyn VectorField,
) -> StateVector {
    for _ in 0..steps {
        state = integrator.step(&state, dt, field);
    }
    state
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Lorenz;

    #[test]
    fn test_check_time_step() {
        assert!(check_time_step(1e-3).is_ok());
        assert!(check_time_step(0.0).is_err());
        assert!(check_time_step(-1.0).is_err());
        assert!(check_time_step(f64::NAN).is_err());
        assert!(check_time_step(f64::INFINITY).is_err());
    }

    #[test]
    fn test_propagate_zero_steps() {
        let initial = StateVector::from_vec(vec![1.0, 2.0, 3.0]);
        let last = propagate(&RK4Integrator::new(), initial.clone(), 0.1, 0, &Lorenz::default());
        assert_eq!(last, initial);
    }

    #[test]
    fn test_lorenz_origin_stays_at_origin() {
        let trajectory = RK4Integrator::new()
            .integrate(&StateVector::zeros(3), 0.01, 1000, &Lorenz::default())
            .unwrap();

        for state in &trajectory {
            assert_eq!(state.norm(), 0.0);
        }
    }

    #[test]
    fn test_integrators_are_shareable_across_threads() {
        use std::thread;

        let handles: Vec<_> = (0..4)
            .map(|k| {
                thread::spawn(move || {
                    let initial = StateVector::from_vec(vec![1.0 + k as f64, 1.0, 1.0]);
                    RK4Integrator::new()
                        .advance(&initial, 0.001, 100, &Lorenz::default())
                        .unwrap()
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap().len(), 3);
        }
    }
}
