//! Lorenz convection model
//!
//! # Model equations
//!
//! ```text
//! ẋ = σ(y − x)
//! ẏ = x(ρ − z) − y
//! ż = xy − βz
//! ```
//!
//! The classical parameters σ = 10, ρ = 28, β = 8/3 produce the butterfly
//! attractor, with a largest Lyapunov exponent close to 0.9.

use crate::error::ChaosError;
use crate::physics::{StateVector, VectorField};

// =================================================================================================
// LorenzParameters
// =================================================================================================

/// Lorenz constants
///
/// - σ (sigma): Prandtl number
/// - ρ (rho): Rayleigh number
/// - β (beta): geometric factor of the convection cell
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LorenzParameters {
    pub sigma: f64,
    pub rho: f64,
    pub beta: f64,
}

impl LorenzParameters {
    /// Create validated parameters
    ///
    /// # Errors
    /// `InvalidParameter` when a constant is not finite
    pub fn new(sigma: f64, rho: f64, beta: f64) -> Result<Self, ChaosError> {
        let params = Self { sigma, rho, beta };
        params.validate()?;
        Ok(params)
    }

    /// Check that every constant is finite
    pub fn validate(&self) -> Result<(), ChaosError> {
        for (name, value) in [("sigma", self.sigma), ("rho", self.rho), ("beta", self.beta)] {
            if !value.is_finite() {
                return Err(ChaosError::InvalidParameter { name, value });
            }
        }
        Ok(())
    }
}

impl Default for LorenzParameters {
    fn default() -> Self {
        Self {
            sigma: 10.0,
            rho: 28.0,
            beta: 8.0 / 3.0,
        }
    }
}

// =================================================================================================
// Lorenz
// =================================================================================================

/// Lorenz vector field bound to its parameters
///
/// # Example
///
/// ```rust
/// use chaos_rs::models::Lorenz;
/// use chaos_rs::physics::{state, VectorField};
///
/// let lorenz = Lorenz::default();
/// let derivative = lorenz.evaluate(&state(&[1.0, 1.0, 1.0]));
///
/// assert_eq!(derivative[0], 0.0);          // σ(1 − 1)
/// assert_eq!(derivative[1], 26.0);         // 1·(28 − 1) − 1
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Lorenz {
    params: LorenzParameters,
}

impl Lorenz {
    /// Bind the field to a set of parameters
    pub fn new(params: LorenzParameters) -> Self {
        Self { params }
    }

    /// Parameters this field was built with
    pub fn parameters(&self) -> &LorenzParameters {
        &self.params
    }

    /// Equilibrium points of the flow
    ///
    /// Always contains the origin. For ρ > 1 (and β > 0) the two symmetric
    /// convection rolls C± = (±√(β(ρ−1)), ±√(β(ρ−1)), ρ−1) follow.
    pub fn fixed_points(&self) -> Vec<StateVector> {
        let LorenzParameters { rho, beta, .. } = self.params;
        let mut points = vec![StateVector::zeros(3)];

        let radius_sq = beta * (rho - 1.0);
        if rho > 1.0 && radius_sq > 0.0 {
            let r = radius_sq.sqrt();
            points.push(StateVector::from_vec(vec![r, r, rho - 1.0]));
            points.push(StateVector::from_vec(vec![-r, -r, rho - 1.0]));
        }

        points
    }
}

impl VectorField for Lorenz {
    fn dimension(&self) -> usize {
        3
    }

    fn evaluate(&self, state: &StateVector) -> StateVector {
        let LorenzParameters { sigma, rho, beta } = self.params;
        let (x, y, z) = (state[0], state[1], state[2]);

        StateVector::from_vec(vec![
            sigma * (y - x),
            x * (rho - z) - y,
            x * y - beta * z,
        ])
    }

    fn name(&self) -> &str {
        "Lorenz"
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_parameters() {
        let params = LorenzParameters::default();
        assert_eq!(params.sigma, 10.0);
        assert_eq!(params.rho, 28.0);
        assert_relative_eq!(params.beta, 8.0 / 3.0);
    }

    #[test]
    fn test_invalid_parameters() {
        assert!(LorenzParameters::new(10.0, f64::NAN, 1.0).is_err());
        assert!(LorenzParameters::new(10.0, 28.0, 8.0 / 3.0).is_ok());
    }

    #[test]
    fn test_origin_is_exact_fixed_point() {
        let lorenz = Lorenz::default();
        let derivative = lorenz.evaluate(&StateVector::zeros(3));

        assert_eq!(derivative, StateVector::zeros(3));
    }

    #[test]
    fn test_custom_parameters() {
        let lorenz = Lorenz::new(LorenzParameters::new(1.0, 2.0, 3.0).unwrap());
        let derivative = lorenz.evaluate(&StateVector::from_vec(vec![1.0, 2.0, 3.0]));

        assert_eq!(derivative[0], 1.0);   // 1·(2 − 1)
        assert_eq!(derivative[1], -3.0);  // 1·(2 − 3) − 2
        assert_eq!(derivative[2], -7.0);  // 1·2 − 3·3
    }

    #[test]
    fn test_convection_rolls_are_equilibria() {
        let lorenz = Lorenz::default();
        let points = lorenz.fixed_points();

        assert_eq!(points.len(), 3);
        for point in &points {
            let derivative = lorenz.evaluate(point);
            assert!(derivative.norm() < 1e-12, "{} is not an equilibrium", point);
        }
    }

    #[test]
    fn test_subcritical_rayleigh_has_single_equilibrium() {
        let lorenz = Lorenz::new(LorenzParameters::new(10.0, 0.5, 8.0 / 3.0).unwrap());
        assert_eq!(lorenz.fixed_points().len(), 1);
    }
}
