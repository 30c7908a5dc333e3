//! Mock vector fields for testing
//!
//! These fields have known analytical solutions (or known failure modes),
//! making them ideal for validating integrators and the Lyapunov estimator.

#![allow(dead_code)]

use chaos_rs::physics::{StateVector, VectorField};

// =================================================================================================
// Exponential Decay: dy/dt = -k*y
// =================================================================================================

/// Exponential decay field: dy/dt = -k*y
///
/// Analytical solution: y(t) = y₀ * exp(-k*t). Its Lyapunov exponent is -k.
pub struct ExponentialDecay {
    pub dimension: usize,
    pub decay_rate: f64,
}

impl ExponentialDecay {
    pub fn new(dimension: usize, decay_rate: f64) -> Self {
        Self { dimension, decay_rate }
    }

    /// Compute analytical solution at time t
    pub fn analytical_solution(&self, t: f64, y0: f64) -> f64 {
        y0 * (-self.decay_rate * t).exp()
    }
}

impl VectorField for ExponentialDecay {
    fn dimension(&self) -> usize {
        self.dimension
    }

    fn evaluate(&self, state: &StateVector) -> StateVector {
        state * -self.decay_rate
    }

    fn name(&self) -> &str {
        "Exponential Decay"
    }
}

// =================================================================================================
// Constant Growth: dy/dt = c
// =================================================================================================

/// Constant growth field: dy/dt = c
///
/// Euler and RK4 are both exact for this problem.
pub struct ConstantGrowth {
    pub dimension: usize,
    pub growth_rate: f64,
}

impl ConstantGrowth {
    pub fn new(dimension: usize, growth_rate: f64) -> Self {
        Self { dimension, growth_rate }
    }

    pub fn analytical_solution(&self, t: f64, y0: f64) -> f64 {
        y0 + self.growth_rate * t
    }
}

impl VectorField for ConstantGrowth {
    fn dimension(&self) -> usize {
        self.dimension
    }

    fn evaluate(&self, _state: &StateVector) -> StateVector {
        StateVector::from_element(self.dimension, self.growth_rate)
    }

    fn name(&self) -> &str {
        "Constant Growth"
    }
}

// =================================================================================================
// Harmonic Oscillator: x'' = -ω²x
// =================================================================================================

/// Harmonic oscillator, state `[x, v]`
///
/// Analytical solution from `[1, 0]`: x(t) = cos(ωt). Neutrally stable: its
/// Lyapunov exponent is 0.
pub struct HarmonicOscillator {
    pub omega: f64,
}

impl VectorField for HarmonicOscillator {
    fn dimension(&self) -> usize {
        2
    }

    fn evaluate(&self, state: &StateVector) -> StateVector {
        StateVector::from_vec(vec![state[1], -self.omega * self.omega * state[0]])
    }

    fn name(&self) -> &str {
        "Harmonic Oscillator"
    }
}

// =================================================================================================
// NaN field
// =================================================================================================

/// Field that returns NaN everywhere, stands in for a singular system
pub struct NaNField {
    pub dimension: usize,
}

impl VectorField for NaNField {
    fn dimension(&self) -> usize {
        self.dimension
    }

    fn evaluate(&self, _state: &StateVector) -> StateVector {
        StateVector::from_element(self.dimension, f64::NAN)
    }

    fn name(&self) -> &str {
        "NaN"
    }
}
