//! Vector fields
//!
//! This module provides the trait and state type shared by every dynamical
//! system. A vector field encapsulates the equations of motion of a system
//! (e.g. double pendulum, Lorenz convection).
//!
//! # Core Concepts
//!
//! - **Vector Field**: Computes the time derivative at a given state
//! - **State Vector**: Fixed-length `DVector<f64>` holding the system coordinates
//!
//! # Architecture
//!
//! Vector fields are **separate from numerical integrators**:
//! - The field provides the **equations** (physics)
//! - The integrator provides the **method** to advance them (numerics)
//!
//! This separation allows:
//! - Same field with different integrators (Euler, Runge-Kutta)
//! - Same integrator and Lyapunov estimator for every field
//!
//! # Implementing a New Vector Field
//!
//! ```rust
//! use chaos_rs::physics::{StateVector, VectorField};
//!
//! /// Harmonic oscillator: x' = v, v' = -ω²x
//! struct Oscillator {
//!     omega: f64,
//! }
//!
//! impl VectorField for Oscillator {
//!     fn dimension(&self) -> usize {
//!         2
//!     }
//!
//!     fn evaluate(&self, state: &StateVector) -> StateVector {
//!         StateVector::from_vec(vec![state[1], -self.omega * self.omega * state[0]])
//!     }
//!
//!     fn name(&self) -> &str {
//!         "Oscillator"
//!     }
//! }
//! ```
//!
//! # Available Systems
//!
//! See [`crate::models`]: double pendulum and Lorenz.

// module declaration
pub mod traits;
pub mod state;

// re-export commonly used types for convenience
pub use state::{StateVector, state};
pub use traits::VectorField;
