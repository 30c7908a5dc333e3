//! Integration output
//!
//! A [`Trajectory`] is the ordered list of states produced by one integrator
//! run, indexed by step number. It is read-only once built.

use std::ops::Index;

use crate::physics::StateVector;

/// States visited by one fixed-step integration run
///
/// # Layout
///
/// - `states[0]` is the initial condition
/// - `states[n]` is the state after `n` steps, at time `n · dt`
/// - `len() == step_count + 1`
///
/// # Example
///
/// ```rust
/// use chaos_rs::models::Lorenz;
/// use chaos_rs::physics::state;
/// use chaos_rs::solver::{Integrator, RK4Integrator};
///
/// let trajectory = RK4Integrator::new()
///     .integrate(&state(&[1.0, 1.0, 1.0]), 0.01, 100, &Lorenz::default())
///     .unwrap();
///
/// // x(t) series for a plotting collaborator
/// let xs = trajectory.component(0);
/// let ts = trajectory.time_points();
/// assert_eq!(xs.len(), ts.len());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    states: Vec<StateVector>,
    dt: f64,
}

impl Trajectory {
    pub(crate) fn new(states: Vec<StateVector>, dt: f64) -> Self {
        debug_assert!(!states.is_empty(), "a trajectory always holds its initial state");
        Self { states, dt }
    }

    /// Number of stored states (`step_count + 1`)
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Number of integration steps
    pub fn step_count(&self) -> usize {
        self.states.len() - 1
    }

    /// Step size used by the run
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Time covered by the run
    pub fn duration(&self) -> f64 {
        self.step_count() as f64 * self.dt
    }

    /// Initial condition
    pub fn initial_state(&self) -> &StateVector {
        &self.states[0]
    }

    /// Last state
    pub fn final_state(&self) -> &StateVector {
        &self.states[self.states.len() - 1]
    }

    /// State after `step` steps
    pub fn state(&self, step: usize) -> Option<&StateVector> {
        self.states.get(step)
    }

    /// All states, in step order
    pub fn states(&self) -> &[StateVector] {
        &self.states
    }

    /// Iterate over states, in step order
    pub fn iter(&self) -> std::slice::Iter<'_, StateVector> {
        self.states.iter()
    }

    /// Consume the trajectory and return its states
    pub fn into_states(self) -> Vec<StateVector> {
        self.states
    }

    /// Time of every stored state
    ///
    /// Computed as `n · dt` from the index rather than by accumulating `dt`,
    /// so the last time point does not carry summed rounding errors.
    pub fn time_points(&self) -> Vec<f64> {
        (0..self.states.len()).map(|n| n as f64 * self.dt).collect()
    }

    /// Series of coordinate `index` along the trajectory
    ///
    /// # Panics
    /// Panics if `index` is out of the state dimension.
    pub fn component(&self, index: usize) -> Vec<f64> {
        self.states.iter().map(|state| state[index]).collect()
    }

    /// True when no state holds NaN or Inf
    pub fn is_finite(&self) -> bool {
        self.states.iter().all(|state| state.iter().all(|x| x.is_finite()))
    }
}

impl Index<usize> for Trajectory {
    type Output = StateVector;

    fn index(&self, step: usize) -> &Self::Output {
        &self.states[step]
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = &'a StateVector;
    type IntoIter = std::slice::Iter<'a, StateVector>;

    fn into_iter(self) -> Self::IntoIter {
        self.states.iter()
    }
}
