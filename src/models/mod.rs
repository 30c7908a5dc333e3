//! Dynamical systems
//!
//! All systems implement the [`VectorField`](crate::physics::VectorField) trait.
//! The integrator calls `evaluate` four times per RK4 step: systems are
//! responsible for the equations of motion, the integrator for the time stepping.
//!
//! # Available Systems
//!
//! ## [`DoublePendulum`]
//!
//! Two rigid arms swinging in a plane, state `[θ1, θ2, ω1, ω2]`.
//! This is the system swept by the [`GridScanner`](crate::grid::GridScanner).
//!
//! ## [`Lorenz`]
//!
//! Three-mode truncation of Rayleigh-Bénard convection, state `[x, y, z]`.
//!
//! # Closed set of variants
//!
//! [`System`] wraps both fields in one enum so callers that pick the system at
//! runtime still hand a single `&dyn VectorField` to the integrator.

// =================================================================================================
// Module Declarations
// =================================================================================================

pub mod double_pendulum;
pub mod lorenz;

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use double_pendulum::{DoublePendulum, PendulumParameters, STANDARD_GRAVITY};
pub use lorenz::{Lorenz, LorenzParameters};

use crate::physics::{StateVector, VectorField};

/// Built-in dynamical systems
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum System {
    DoublePendulum(DoublePendulum),
    Lorenz(Lorenz),
}

impl System {
    /// Double pendulum bound to `params`
    pub fn double_pendulum(params: PendulumParameters) -> Self {
        Self::DoublePendulum(DoublePendulum::new(params))
    }

    /// Lorenz system bound to `params`
    pub fn lorenz(params: LorenzParameters) -> Self {
        Self::Lorenz(Lorenz::new(params))
    }

    fn field(&self) -> &dyn VectorField {
        match self {
            System::DoublePendulum(pendulum) => pendulum,
            System::Lorenz(lorenz) => lorenz,
        }
    }
}

impl From<DoublePendulum> for System {
    fn from(pendulum: DoublePendulum) -> Self {
        Self::DoublePendulum(pendulum)
    }
}

impl From<Lorenz> for System {
    fn from(lorenz: Lorenz) -> Self {
        Self::Lorenz(lorenz)
    }
}

impl VectorField for System {
    fn dimension(&self) -> usize {
        self.field().dimension()
    }

    fn evaluate(&self, state: &StateVector) -> StateVector {
        self.field().evaluate(state)
    }

    fn name(&self) -> &str {
        self.field().name()
    }
}
