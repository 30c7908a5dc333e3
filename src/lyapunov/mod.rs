//! Largest Lyapunov exponent estimation
//!
//! The exponent λ measures how fast two nearby trajectories separate:
//! `d(t) ≈ d₀ · e^{λt}`. A positive λ signals chaos, a negative λ a
//! contracting flow.
//!
//! # Module Organization
//!
//! - **`config`**: `LyapunovConfig`, validated run parameters and per-system defaults
//! - **`benettin`**: `LyapunovEstimator`, the renormalization loop, and its
//!   epoch-by-epoch iterator
//! - **`result`**: `LyapunovRunResult`, the exponent and its per-epoch logs
//!
//! # Workflow Diagram
//!
//! ```text
//! ┌───────────────────┐     ┌──────────────────┐
//! │ LyapunovConfig    │────▶│ LyapunovEstimator│ ← validate() once
//! └───────────────────┘     └────────┬─────────┘
//!                                    │ epochs(field, S₀)
//!                           ┌────────▼─────────┐
//!                           │ EpochIter        │ ← K × (integrate, measure,
//!                           │ (EpochRecord)    │        renormalize)
//!                           └────────┬─────────┘
//!                                    │ collect ln(dₖ/d₀)
//!                           ┌────────▼─────────┐
//!                           │ LyapunovRunResult│
//!                           └──────────────────┘
//! ```
//!
//! # Quick Start Example
//!
//! ```rust
//! use chaos_rs::lyapunov::{LyapunovConfig, LyapunovEstimator};
//! use chaos_rs::models::DoublePendulum;
//!
//! let config = LyapunovConfig::double_pendulum().with_epoch_count(20);
//! let estimator = LyapunovEstimator::new(config).unwrap();
//!
//! let pendulum = DoublePendulum::default();
//! let result = estimator.estimate(&pendulum, &DoublePendulum::at_rest(2.0, 2.5)).unwrap();
//!
//! assert_eq!(result.epoch_count(), 20);
//! ```

mod benettin;
mod config;
mod result;

pub use benettin::{EpochIter, EpochRecord, LOG_GUARD, LyapunovEstimator};
pub use config::{DEFAULT_SEPARATION, LyapunovConfig};
pub use result::LyapunovRunResult;
