//! Helper functions for integration tests

#![allow(dead_code)]

use chaos_rs::physics::{StateVector, VectorField};
use chaos_rs::solver::Integrator;

/// Assert that two states are close (within tolerance), component by component
pub fn assert_states_close(
    state1: &StateVector,
    state2: &StateVector,
    tolerance: f64,
    message: &str,
) {
    assert_eq!(state1.len(), state2.len(), "{}: Dimension mismatch", message);

    for (i, (&v1, &v2)) in state1.iter().zip(state2.iter()).enumerate() {
        let diff = (v1 - v2).abs();
        assert!(
            diff < tolerance,
            "{}: Element {} differs by {} (tolerance {})",
            message, i, diff, tolerance
        );
    }
}

/// Absolute error of component 0 after `steps` steps over `total_time`
pub fn final_error(
    integrator: &dyn Integrator,
    field: &dyn VectorField,
    initial: &StateVector,
    total_time: f64,
    steps: usize,
    exact: f64,
) -> f64 {
    let dt = total_time / steps as f64;
    let last = integrator
        .advance(initial, dt, steps, field)
        .expect("valid integration input");
    (last[0] - exact).abs()
}

/// Compute relative error: |actual - expected| / |expected|
pub fn relative_error(actual: f64, expected: f64) -> f64 {
    if expected.abs() < 1e-10 {
        (actual - expected).abs()
    } else {
        (actual - expected).abs() / expected.abs()
    }
}
