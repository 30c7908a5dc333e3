//! chaos-rs: Chaotic Dynamics Toolkit
//!
//! Fixed-step integration of small ODE systems and estimation of their largest
//! Lyapunov exponent, with a parallel initial-condition scan for the double
//! pendulum.
//!
//! # Architecture
//!
//! chaos-rs is built on two core principles:
//!
//! 1. **Separation of Physics and Numerics**
//!    - Vector fields define equations (what to integrate)
//!    - Integrators provide methods (how to integrate)
//!    - The Lyapunov estimator and the grid scanner only talk to the two traits
//!
//! 2. **Values, not shared state**
//!    - Physical constants live in parameter values, never in globals
//!    - Every step returns a new state
//!    - Grid cells share nothing mutable and run in parallel
//!
//! # Quick Start
//!
//! ```rust
//! use chaos_rs::prelude::*;
//!
//! # fn main() -> Result<(), ChaosError> {
//! // 1. Pick a system
//! let lorenz = Lorenz::default();
//! let initial = state(&[1.0, 1.0, 1.0]);
//!
//! // 2. Integrate a trajectory
//! let trajectory = RK4Integrator::new().integrate(&initial, 0.001, 5000, &lorenz)?;
//! println!("Final state: {}", trajectory.final_state().transpose());
//!
//! // 3. Estimate the largest Lyapunov exponent
//! let estimator = LyapunovEstimator::new(LyapunovConfig::lorenz().with_epoch_count(100))?;
//! let result = estimator.estimate(&lorenz, &initial)?;
//! println!("λ ≈ {:.3}", result.exponent);
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`physics`]: `VectorField` trait and state vectors
//! - [`models`]: double pendulum and Lorenz system
//! - [`solver`]: RK4 and Euler integrators, trajectories
//! - [`lyapunov`]: Benettin estimator
//! - [`grid`]: double pendulum initial-angle scan
//! - [`error`]: `ChaosError`
//!
//! # Features
//!
//! - `parallel` (default): grid cells run on the rayon thread pool
//!
//! # Logging
//!
//! The crate emits through the `log` facade and installs no logger.

// Core modules
pub mod error;
pub mod physics;

pub mod models;
pub mod solver;

// Analysis
pub mod lyapunov;
pub mod grid;

pub use error::ChaosError;

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //! use chaos_rs::prelude::*;
    //! ```
    pub use crate::error::ChaosError;
    pub use crate::physics::{state,
                             StateVector,
                             VectorField};
    pub use crate::models::{DoublePendulum,
                            PendulumParameters,
                            Lorenz,
                            LorenzParameters,
                            System};
    pub use crate::solver::{Integrator,
                            IntegrationConfig,
                            Trajectory,
                            EulerIntegrator,
                            RK4Integrator};
    pub use crate::lyapunov::{LyapunovConfig,
                              LyapunovEstimator,
                              LyapunovRunResult};
    pub use crate::grid::{GridResult,
                          GridScanner,
                          ScanControl};
}
