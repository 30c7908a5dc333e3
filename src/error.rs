//! Error types
//!
//! Every fallible entry point of the crate returns [`ChaosError`]. These are
//! configuration errors raised before any integration work starts.
//!
//! Numeric degeneracy (NaN/Inf states, a separation that underflows to zero)
//! is deliberately NOT represented here: it propagates as a non-finite value
//! so that a grid scan always completes.

use thiserror::Error;

/// Errors raised by integrators, estimators and grid scans
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChaosError {
    /// Integration step is zero, negative or not finite
    #[error("time step must be positive and finite, got {dt}")]
    NonPositiveTimeStep { dt: f64 },

    /// Epoch duration is zero, negative or not finite
    #[error("epoch duration must be positive and finite, got {epoch_duration}")]
    EmptyEpoch { epoch_duration: f64 },

    /// No epoch to run
    #[error("epoch count must be greater than 0")]
    ZeroEpochCount,

    /// The epoch does not contain a single integration step
    #[error("epoch duration {epoch_duration} is shorter than one time step ({dt})")]
    EpochShorterThanStep { epoch_duration: f64, dt: f64 },

    /// Initial separation is zero, negative or not finite
    #[error("separation epsilon must be positive and finite, got {epsilon}")]
    InvalidSeparation { epsilon: f64 },

    /// State length does not match the vector field dimension
    #[error("state has {found} components, vector field expects {expected}")]
    DimensionMismatch { expected: usize, found: usize },

    /// Non-physical system parameter
    #[error("invalid parameter {name} = {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    /// Grid with no cell
    #[error("grid resolution must be greater than 0")]
    EmptyGrid,

    /// Scan stopped through its control handle
    #[error("scan cancelled after {completed} of {total} cells")]
    Cancelled { completed: usize, total: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_carry_values() {
        let error = ChaosError::NonPositiveTimeStep { dt: -0.1 };
        assert_eq!(error.to_string(), "time step must be positive and finite, got -0.1");

        let error = ChaosError::DimensionMismatch { expected: 4, found: 3 };
        assert!(error.to_string().contains("3 components"));
        assert!(error.to_string().contains("expects 4"));
    }

    #[test]
    fn test_cancelled_message() {
        let error = ChaosError::Cancelled { completed: 7, total: 16 };
        assert_eq!(error.to_string(), "scan cancelled after 7 of 16 cells");
    }
}
