//! Numerical methods for advancing vector fields in time
//!
//! This module contains concrete implementations of the
//! [`Integrator`](crate::solver::Integrator) trait.
//!
//! # Available Methods
//!
//! - **[`RK4Integrator`]**: Classical fourth-order Runge-Kutta
//!   - Order: Fourth-order O(dt⁴)
//!   - Cost: 4 field evaluations per step
//!   - Use: **Default** for trajectories and Lyapunov estimation
//!
//! - **[`EulerIntegrator`]**: Forward Euler method
//!   - Order: First-order O(dt)
//!   - Cost: 1 field evaluation per step
//!   - Use: Baseline for convergence comparisons
//!
//! # Example
//!
//! ```rust
//! use chaos_rs::models::Lorenz;
//! use chaos_rs::physics::state;
//! use chaos_rs::solver::{EulerIntegrator, Integrator, RK4Integrator};
//!
//! let lorenz = Lorenz::default();
//! let initial = state(&[1.0, 1.0, 1.0]);
//!
//! let coarse = EulerIntegrator::new().integrate(&initial, 1e-3, 1000, &lorenz).unwrap();
//! let fine = RK4Integrator::new().integrate(&initial, 1e-3, 1000, &lorenz).unwrap();
//!
//! assert_eq!(coarse.len(), fine.len());
//! ```
//!
//! # Design Philosophy
//!
//! Each integrator is:
//! - **Self-contained**: No shared mutable state
//! - **Stateless**: Can be reused for any number of runs, on any thread

mod euler;
mod rk4;

// Re-exports for convenience
pub use euler::EulerIntegrator;
pub use rk4::RK4Integrator;
