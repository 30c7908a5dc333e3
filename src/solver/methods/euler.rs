//! Forward Euler integrator
//!
//! # Mathematical Background
//!
//! The simplest explicit time-stepping scheme for dy/dt = f(y):
//!
//! ```text
//! yₙ₊₁ = yₙ + dt · f(yₙ)
//! ```
//!
//! # Characteristics
//!
//! - **Order**: First-order accurate (global error ~ O(dt))
//! - **Stability**: Conditionally stable, |1 + λ·dt| ≤ 1 for dy/dt = λy
//! - **Complexity**: 1 field evaluation per step
//!
//! Kept as the baseline method for convergence comparisons. Lyapunov
//! estimates use [`RK4Integrator`](crate::solver::RK4Integrator) by default.

use crate::physics::{StateVector, VectorField};
use crate::solver::Integrator;

/// Forward Euler integrator
///
/// # Example
///
/// ```rust
/// use chaos_rs::models::Lorenz;
/// use chaos_rs::physics::state;
/// use chaos_rs::solver::{EulerIntegrator, Integrator};
///
/// let integrator = EulerIntegrator::new();
/// let next = integrator.step(&state(&[1.0, 1.0, 1.0]), 0.01, &Lorenz::default());
///
/// // y + dt·f(y) with f(1, 1, 1) = (0, 26, 1 - 8/3)
/// assert!((next[1] - 1.26).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct EulerIntegrator;

impl EulerIntegrator {
    /// Create a new forward Euler integrator
    pub fn new() -> Self {
        Self
    }
}

impl Integrator for EulerIntegrator {
    fn step(&self, state: &StateVector, dt: f64, field: &dyn VectorField) -> StateVector {
        state + field.evaluate(state) * dt
    }

    fn stages(&self) -> usize {
        1
    }

    fn name(&self) -> &str {
        "Forward Euler"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    struct ExponentialDecay {
        decay_rate: f64,
    }

    impl VectorField for ExponentialDecay {
        fn dimension(&self) -> usize {
            1
        }

        fn evaluate(&self, state: &StateVector) -> StateVector {
            state * -self.decay_rate
        }

        fn name(&self) -> &str {
            "Exponential Decay"
        }
    }

    #[test]
    fn test_euler_integrator_creation() {
        let integrator = EulerIntegrator::default();
        assert_eq!(integrator.name(), "Forward Euler");
        assert_eq!(integrator.stages(), 1);
    }

    #[test]
    fn test_euler_single_step() {
        // y₁ = y₀·(1 - k·dt)
        let field = ExponentialDecay { decay_rate: 0.5 };
        let next = EulerIntegrator::new().step(&StateVector::from_element(1, 2.0), 0.1, &field);

        assert_relative_eq!(next[0], 2.0 * (1.0 - 0.05), epsilon = 1e-15);
    }

    #[test]
    fn test_euler_geometric_decay() {
        // After n steps y = (1 - k·dt)ⁿ exactly
        let field = ExponentialDecay { decay_rate: 1.0 };
        let trajectory = EulerIntegrator::new()
            .integrate(&StateVector::from_element(1, 1.0), 0.01, 100, &field)
            .unwrap();

        assert_relative_eq!(trajectory.final_state()[0], 0.99_f64.powi(100), epsilon = 1e-12);
    }

    #[test]
    fn test_euler_convergence() {
        let field = ExponentialDecay { decay_rate: 0.3 };
        let total_time = 10.0;
        let exact = (-0.3 * total_time as f64).exp();

        let errors: Vec<f64> = [100, 200, 400, 800]
            .iter()
            .map(|&steps| {
                let last = EulerIntegrator::new()
                    .advance(&StateVector::from_element(1, 1.0), total_time / steps as f64, steps, &field)
                    .unwrap();
                (last[0] - exact).abs()
            })
            .collect();

        // First-order convergence: error(dt/2) ≈ error(dt) / 2
        for pair in errors.windows(2) {
            let ratio = pair[0] / pair[1];
            assert!(ratio > 1.8 && ratio < 2.2, "Convergence ratio {} not first-order", ratio);
        }
    }
}
