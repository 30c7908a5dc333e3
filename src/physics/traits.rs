//! Vector field trait
//!
//! This module defines the core API for dynamical systems:
//! - `VectorField`: maps a state to its time derivative
//!
//! A vector field provides the "physics" (equations). Integrating them over
//! time is the job of an [`Integrator`](crate::solver::Integrator).

use crate::physics::StateVector;

// =================================================================================================
// Vector Field Trait
// =================================================================================================

/// Trait for autonomous vector fields dy/dt = f(y)
///
/// # Responsibility
/// Computes the time derivative of a system at a given state.
/// Does NOT integrate it (that's the Integrator's job).
///
/// # Contract
///
/// - `evaluate` is pure: no internal state, no side effects, deterministic
/// - The returned derivative has the same length and ordering as the input
/// - Physical constants are fields of the implementor, never globals
///
/// Implementors are `Send + Sync` so that one field can be shared by many
/// grid-scan workers at once.
///
/// # Example
///
/// ```rust
/// use chaos_rs::physics::{StateVector, VectorField};
///
/// /// dx/dt = -k·x
/// struct Decay {
///     rate: f64,
/// }
///
/// impl VectorField for Decay {
///     fn dimension(&self) -> usize { 1 }
///     fn evaluate(&self, state: &StateVector) -> StateVector { state * -self.rate }
///     fn name(&self) -> &str { "Decay" }
/// }
///
/// let field = Decay { rate: 2.0 };
/// let derivative = field.evaluate(&StateVector::from_vec(vec![3.0]));
/// assert_eq!(derivative[0], -6.0);
/// ```
pub trait VectorField: Send + Sync {

    /// Number of state components
    ///
    /// Used by integrators and estimators to reject mismatched states
    fn dimension(&self) -> usize;

    /// Computes f(y) at the given state
    ///
    /// # Arguments
    /// * `state` - Current state of the system
    ///
    /// # Returns
    /// Time derivative, same length as `state`
    ///
    /// # Degenerate output
    ///
    /// Divisions by near-zero quantities are not special-cased: Inf/NaN
    /// are valid (degenerate) results and must simply be returned.
    fn evaluate(&self, state: &StateVector) -> StateVector;

    /// Name of the system (used to display and logging)
    fn name(&self) -> &str;

    /// Description of the system (option)
    fn description(&self) -> Option<&str> {
        None
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    struct Rotation;

    impl VectorField for Rotation {
        fn dimension(&self) -> usize {
            2
        }

        fn evaluate(&self, state: &StateVector) -> StateVector {
            StateVector::from_vec(vec![-state[1], state[0]])
        }

        fn name(&self) -> &str {
            "Rotation"
        }
    }

    #[test]
    fn test_default_description() {
        assert!(Rotation.description().is_none());
    }

    #[test]
    fn test_trait_object_evaluation() {
        let field: &dyn VectorField = &Rotation;
        let derivative = field.evaluate(&StateVector::from_vec(vec![1.0, 0.0]));

        assert_eq!(field.dimension(), 2);
        assert_eq!(derivative[0], 0.0);
        assert_eq!(derivative[1], 1.0);
    }
}
