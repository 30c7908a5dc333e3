//! Common utilities for integration tests

pub mod mock_fields;
pub mod test_helpers;

// Re-export commonly used items
pub use mock_fields::{ConstantGrowth, ExponentialDecay, HarmonicOscillator, NaNField};
pub use test_helpers::{
    assert_states_close,
    final_error,
    relative_error,
};
