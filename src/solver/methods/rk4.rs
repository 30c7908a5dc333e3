//! Runge-Kutta 4 (RK4) integrator
//!
//! # Mathematical Background
//!
//! The classical fourth-order Runge-Kutta method (RK4) uses a weighted
//! average of four slope estimates for dy/dt = f(y):
//!
//! ```text
//! k₁ = f(yₙ)
//! k₂ = f(yₙ + dt/2 · k₁)
//! k₃ = f(yₙ + dt/2 · k₂)
//! k₄ = f(yₙ + dt · k₃)
//!
//! yₙ₊₁ = yₙ + dt/6 · (k₁ + 2k₂ + 2k₃ + k₄)
//! ```
//!
//! # Characteristics
//!
//! - **Order**: Fourth-order accurate (global error ~ O(dt⁴))
//! - **Complexity**: 4 field evaluations per step
//! - **Memory**: O(1) per step - stores only k₁, k₂, k₃, k₄
//! - **Fixed step**: no error control, no adaptivity
//!
//! # When NOT to Use
//!
//! - Stiff problems → implicit methods
//! - Long Hamiltonian runs where energy must be conserved → symplectic methods
//!
//! Neither case is in scope for the pendulum and Lorenz runs of this crate:
//! chaotic divergence is estimated over short epochs, where RK4 at
//! `dt = 1e-3 .. 1e-2` is far below the separation being measured.
//!
//! # Comparison with Euler
//!
//! | Method | Order | Evals/Step | Error |
//! |--------|-------|------------|-------|
//! | Euler  | 1     | 1          | O(dt) |
//! | RK4    | 4     | 4          | O(dt⁴)|

use crate::physics::{StateVector, VectorField};
use crate::solver::Integrator;

// =================================================================================================
// RK4 Integrator
// =================================================================================================

/// Classical fourth-order Runge-Kutta integrator
///
/// # Algorithm
///
/// For each step:
///    - **Stage 1**: k₁ = f(yₙ), slope at beginning of interval
///    - **Stage 2**: k₂ = f(yₙ + dt/2·k₁), slope at midpoint using k₁
///    - **Stage 3**: k₃ = f(yₙ + dt/2·k₂), slope at midpoint using k₂
///    - **Stage 4**: k₄ = f(yₙ + dt·k₃), slope at end of interval using k₃
///    - **Update**: yₙ₊₁ = yₙ + dt/6·(k₁ + 2k₂ + 2k₃ + k₄)
///
/// # Error Analysis
///
/// - **Local truncation error**: O(dt⁵) per step
/// - **Global error**: O(dt⁴) after T/dt steps
///
/// Halving dt reduces the global error by a factor of 16.
///
/// # Example
///
/// ```rust
/// use chaos_rs::models::{DoublePendulum, PendulumParameters};
/// use chaos_rs::solver::{Integrator, RK4Integrator};
///
/// let pendulum = DoublePendulum::new(PendulumParameters::default());
/// let initial = DoublePendulum::at_rest(1.0, 0.5);
///
/// let integrator = RK4Integrator::new();
/// let next = integrator.step(&initial, 0.01, &pendulum);
///
/// assert_eq!(next.len(), 4);
/// assert_eq!(integrator.name(), "Runge Kutta (RK4)");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RK4Integrator;

impl RK4Integrator {
    /// Create a new RK4 integrator
    pub fn new() -> Self {
        Self
    }
}

impl Integrator for RK4Integrator {
    fn step(&self, state: &StateVector, dt: f64, field: &dyn VectorField) -> StateVector {
        let half_dt = 0.5 * dt;

        let k1 = field.evaluate(state);
        let k2 = field.evaluate(&(state + &k1 * half_dt));
        let k3 = field.evaluate(&(state + &k2 * half_dt));
        let k4 = field.evaluate(&(state + &k3 * dt));

        // Simpson weights: endpoints 1/6, midpoints 1/3
        state + (k1 + k2 * 2.0 + k3 * 2.0 + k4) * (dt / 6.0)
    }

    fn stages(&self) -> usize {
        4
    }

    fn name(&self) -> &str {
        "Runge Kutta (RK4)"
    }
}

// =================================================================================================
// Tests
// =================================================================================================
