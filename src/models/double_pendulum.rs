//! Planar double pendulum
//!
//! # Physical background
//!
//! Two point masses `m1`, `m2` hang on massless rigid rods of length `L1`,
//! `L2`. Angles are measured from the downward vertical, the pivot sits at the
//! origin and `y` points up. For most initial angles the motion is chaotic.
//!
//! # Model equations
//!
//! State `[θ1, θ2, ω1, ω2]`, with `Δθ = θ1 − θ2`:
//!
//! ```text
//! θ̇1 = ω1
//! θ̇2 = ω2
//! ω̇1 = [−m2(L1·ω1²·sinΔθ·cosΔθ + L2·ω2²·sinΔθ) + g(−(m1+m2)sinθ1 + m2·cosΔθ·sinθ2)]
//!       / (m1·L1 + m2·L1·sin²Δθ)
//! ω̇2 = [(m1+m2)L1·ω1²·sinΔθ + m2·L2·ω2²·sinΔθ·cosΔθ + (m1+m2)g(sinθ1·cosΔθ − sinθ2)]
//!       / (m1·L2 + m2·L2·sin²Δθ)
//! ```
//!
//! The denominators stay positive for positive masses and lengths. They are
//! not special-cased: a near-zero denominator produces Inf/NaN, which is a
//! degenerate but accepted output.
//!
//! # Example
//!
//! ```rust
//! use chaos_rs::models::{DoublePendulum, PendulumParameters};
//! use chaos_rs::physics::VectorField;
//!
//! let pendulum = DoublePendulum::new(PendulumParameters::default());
//! let initial = DoublePendulum::at_rest(std::f64::consts::FRAC_PI_2, 0.0);
//!
//! let derivative = pendulum.evaluate(&initial);
//! assert_eq!(derivative.len(), 4);
//! ```

use crate::error::ChaosError;
use crate::physics::{StateVector, VectorField};

/// Standard gravity [m/s²]
pub const STANDARD_GRAVITY: f64 = 9.81;

// =================================================================================================
// PendulumParameters
// =================================================================================================

/// Physical constants of a double pendulum
///
/// | Field | Symbol | Unit  |
/// |-------|--------|-------|
/// | `m1`  | m₁     | kg    |
/// | `m2`  | m₂     | kg    |
/// | `l1`  | L₁     | m     |
/// | `l2`  | L₂     | m     |
/// | `g`   | g      | m/s²  |
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendulumParameters {
    pub m1: f64,
    pub m2: f64,
    pub l1: f64,
    pub l2: f64,
    pub g: f64,
}

impl PendulumParameters {
    /// Create validated parameters with standard gravity
    ///
    /// # Errors
    ///
    /// `InvalidParameter` when a mass or a length is not strictly positive
    /// and finite.
    ///
    /// # Example
    /// ```rust
    /// use chaos_rs::models::PendulumParameters;
    ///
    /// let params = PendulumParameters::new([10.0, 20.0], [10.0, 20.0]).unwrap();
    /// assert_eq!(params.m2, 20.0);
    /// assert!(PendulumParameters::new([0.0, 1.0], [1.0, 1.0]).is_err());
    /// ```
    pub fn new(masses: [f64; 2], lengths: [f64; 2]) -> Result<Self, ChaosError> {
        let params = Self {
            m1: masses[0],
            m2: masses[1],
            l1: lengths[0],
            l2: lengths[1],
            g: STANDARD_GRAVITY,
        };
        params.validate()?;
        Ok(params)
    }

    /// Replace the gravitational acceleration
    pub fn with_gravity(mut self, g: f64) -> Result<Self, ChaosError> {
        self.g = g;
        self.validate()?;
        Ok(self)
    }

    /// Check that the constants describe a physical pendulum
    pub fn validate(&self) -> Result<(), ChaosError> {
        for (name, value) in [("m1", self.m1), ("m2", self.m2), ("l1", self.l1), ("l2", self.l2)] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ChaosError::InvalidParameter { name, value });
            }
        }
        if !self.g.is_finite() {
            return Err(ChaosError::InvalidParameter { name: "g", value: self.g });
        }
        Ok(())
    }
}

impl Default for PendulumParameters {
    fn default() -> Self {
        Self {
            m1: 1.0,
            m2: 1.0,
            l1: 1.0,
            l2: 1.0,
            g: STANDARD_GRAVITY,
        }
    }
}

// =================================================================================================
// DoublePendulum
// =================================================================================================

/// Double pendulum vector field bound to its parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DoublePendulum {
    params: PendulumParameters,
}

impl DoublePendulum {
    /// Bind the field to a set of parameters
    pub fn new(params: PendulumParameters) -> Self {
        Self { params }
    }

    /// Parameters this field was built with
    pub fn parameters(&self) -> &PendulumParameters {
        &self.params
    }

    /// Zero-velocity state `[θ1, θ2, 0, 0]`
    pub fn at_rest(theta1: f64, theta2: f64) -> StateVector {
        StateVector::from_vec(vec![theta1, theta2, 0.0, 0.0])
    }

    /// Total mechanical energy (kinetic + potential) [J]
    ///
    /// Conserved by the exact flow; the drift of this value along a numerical
    /// trajectory measures integration quality.
    ///
    /// ```text
    /// T = ½(m1+m2)L1²ω1² + ½m2·L2²ω2² + m2·L1·L2·ω1·ω2·cos(θ1−θ2)
    /// V = −(m1+m2)g·L1·cosθ1 − m2·g·L2·cosθ2
    /// ```
    pub fn energy(&self, state: &StateVector) -> f64 {
        let PendulumParameters { m1, m2, l1, l2, g } = self.params;
        let (theta1, theta2, omega1, omega2) = (state[0], state[1], state[2], state[3]);

        let kinetic = 0.5 * (m1 + m2) * l1 * l1 * omega1 * omega1
            + 0.5 * m2 * l2 * l2 * omega2 * omega2
            + m2 * l1 * l2 * omega1 * omega2 * (theta1 - theta2).cos();

        let potential = -(m1 + m2) * g * l1 * theta1.cos() - m2 * g * l2 * theta2.cos();

        kinetic + potential
    }

    /// Cartesian bob positions `(x1, y1, x2, y2)`
    pub fn cartesian(&self, state: &StateVector) -> (f64, f64, f64, f64) {
        let (theta1, theta2) = (state[0], state[1]);
        let x1 = self.params.l1 * theta1.sin();
        let y1 = -self.params.l1 * theta1.cos();
        let x2 = x1 + self.params.l2 * theta2.sin();
        let y2 = y1 - self.params.l2 * theta2.cos();
        (x1, y1, x2, y2)
    }
}

impl Default for DoublePendulum {
    fn default() -> Self {
        Self::new(PendulumParameters::default())
    }
}

impl VectorField for DoublePendulum {
    fn dimension(&self) -> usize {
        4
    }

    fn evaluate(&self, state: &StateVector) -> StateVector {
        let PendulumParameters { m1, m2, l1, l2, g } = self.params;
        let (theta1, theta2, omega1, omega2) = (state[0], state[1], state[2], state[3]);

        let delta = theta1 - theta2;
        let (sin_delta, cos_delta) = delta.sin_cos();
        let sin2_delta = sin_delta * sin_delta;

        let omega1_sq = omega1 * omega1;
        let omega2_sq = omega2 * omega2;

        let numerator1 = -m2 * (l1 * omega1_sq * sin_delta * cos_delta + l2 * omega2_sq * sin_delta)
            + g * (-(m1 + m2) * theta1.sin() + m2 * cos_delta * theta2.sin());
        let denominator1 = m1 * l1 + m2 * l1 * sin2_delta;

        let numerator2 = (m1 + m2) * l1 * omega1_sq * sin_delta
            + m2 * l2 * omega2_sq * sin_delta * cos_delta
            + (m1 + m2) * g * (theta1.sin() * cos_delta - theta2.sin());
        let denominator2 = m1 * l2 + m2 * l2 * sin2_delta;

        StateVector::from_vec(vec![
            omega1,
            omega2,
            numerator1 / denominator1,
            numerator2 / denominator2,
        ])
    }

    fn name(&self) -> &str {
        "Double Pendulum"
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_parameters_validation() {
        assert!(PendulumParameters::new([1.0, 2.0], [1.0, 2.0]).is_ok());

        let error = PendulumParameters::new([1.0, -2.0], [1.0, 2.0]).unwrap_err();
        assert_eq!(error, ChaosError::InvalidParameter { name: "m2", value: -2.0 });

        assert!(PendulumParameters::new([1.0, 1.0], [f64::NAN, 1.0]).is_err());
        assert!(PendulumParameters::default().with_gravity(f64::INFINITY).is_err());
    }

    #[test]
    fn test_equilibrium_has_zero_derivative() {
        let pendulum = DoublePendulum::default();
        let derivative = pendulum.evaluate(&DoublePendulum::at_rest(0.0, 0.0));

        assert_eq!(derivative.len(), 4);
        for value in derivative.iter() {
            assert_relative_eq!(*value, 0.0, epsilon = 1e-15);
        }
    }

    #[test]
    fn test_angular_velocities_pass_through() {
        let pendulum = DoublePendulum::default();
        let state = StateVector::from_vec(vec![0.3, -0.2, 1.5, -0.7]);
        let derivative = pendulum.evaluate(&state);

        assert_eq!(derivative[0], 1.5);
        assert_eq!(derivative[1], -0.7);
    }

    #[test]
    fn test_horizontal_upper_arm() {
        // θ1 = π/2, θ2 = 0, at rest:
        // Δθ = π/2 → sinΔθ = 1, cosΔθ ≈ 0
        // ω̇1 = g·(−(m1+m2)) / (m1·L1 + m2·L1) = −g/L1
        // ω̇2 = (m1+m2)·g·(1·0 − 0) / (...) ≈ 0
        let pendulum = DoublePendulum::default();
        let derivative = pendulum.evaluate(&DoublePendulum::at_rest(FRAC_PI_2, 0.0));

        assert_relative_eq!(derivative[2], -STANDARD_GRAVITY, epsilon = 1e-12);
        assert_relative_eq!(derivative[3], 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_heavy_parameters() {
        let params = PendulumParameters::new([10.0, 20.0], [10.0, 20.0]).unwrap();
        let pendulum = DoublePendulum::new(params);

        // Δθ = 0: denominators reduce to m1·L
        // ω̇1 = g(−30·sin θ + 20·sin θ) / (10·10) = −g·sin θ / 10
        let theta: f64 = 0.4;
        let derivative = pendulum.evaluate(&DoublePendulum::at_rest(theta, theta));
        assert_relative_eq!(derivative[2], -STANDARD_GRAVITY * theta.sin() / 10.0, epsilon = 1e-12);
        // ω̇2 = 30·g·(sin θ − sin θ) / (10·20) = 0
        assert_relative_eq!(derivative[3], 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_energy_at_rest() {
        let pendulum = DoublePendulum::default();

        // Hanging straight down: V = −2g − g = −3g
        let energy = pendulum.energy(&DoublePendulum::at_rest(0.0, 0.0));
        assert_relative_eq!(energy, -3.0 * STANDARD_GRAVITY, epsilon = 1e-12);

        // Both arms horizontal: V = 0
        let energy = pendulum.energy(&DoublePendulum::at_rest(FRAC_PI_2, FRAC_PI_2));
        assert_relative_eq!(energy, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_cartesian_positions() {
        let pendulum = DoublePendulum::default();

        let (x1, y1, x2, y2) = pendulum.cartesian(&DoublePendulum::at_rest(0.0, 0.0));
        assert_relative_eq!(x1, 0.0);
        assert_relative_eq!(y1, -1.0);
        assert_relative_eq!(x2, 0.0);
        assert_relative_eq!(y2, -2.0);

        let (_, y1, _, y2) = pendulum.cartesian(&DoublePendulum::at_rest(PI, PI));
        assert_relative_eq!(y1, 1.0, epsilon = 1e-12);
        assert_relative_eq!(y2, 2.0, epsilon = 1e-12);
    }
}
