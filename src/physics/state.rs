//! State vectors
//!
//! A state is a fixed-length `DVector<f64>`: `[θ1, θ2, ω1, ω2]` for the
//! double pendulum, `[x, y, z]` for Lorenz. Integration steps never mutate a
//! stored state, they produce a new one.

use nalgebra::DVector;

use crate::error::ChaosError;
use crate::physics::VectorField;

/// State of a dynamical system
pub type StateVector = DVector<f64>;

/// Build a state from a slice
///
/// # Example
/// ```rust
/// use chaos_rs::physics::state;
///
/// let s = state(&[1.0, 1.0, 1.0]);
/// assert_eq!(s.len(), 3);
/// ```
pub fn state(components: &[f64]) -> StateVector {
    StateVector::from_row_slice(components)
}

/// Vector of magnitude `magnitude` along coordinate `axis`
///
/// Used to seed the Lyapunov perturbation offset.
pub fn axis_offset(dimension: usize, axis: usize, magnitude: f64) -> StateVector {
    let mut offset = StateVector::zeros(dimension);
    offset[axis] = magnitude;
    offset
}

/// True when no component is NaN or infinite
pub fn is_finite(state: &StateVector) -> bool {
    state.iter().all(|x| x.is_finite())
}

/// Euclidean distance between two states
pub fn distance(a: &StateVector, b: &StateVector) -> f64 {
    (a - b).norm()
}

/// Reject a state that does not match the field dimension
pub(crate) fn check_dimension(
    state: &StateVector,
    field: &dyn VectorField,
) -> Result<(), ChaosError> {
    let expected = field.dimension();
    if state.len() != expected || expected == 0 {
        return Err(ChaosError::DimensionMismatch {
            expected,
            found: state.len(),
        });
    }
    Ok(())
}
