use thiserror::Error;
use twine_solvers::equation::bisection;
use uom::si::f64::MassRate;

use crate::support::{constraint::ConstraintError, flow_meter::FlowMeterError};

/// Errors that can occur while solving for the orifice mass flow rate.
#[derive(Debug, Error)]
pub enum MassFlowError {
    /// The conditions or a correlation evaluation were invalid.
    #[error("flow meter calculation failed")]
    FlowMeter(#[from] FlowMeterError),

    /// Equal tap pressures leave no flow to solve for.
    #[error("tap pressures are equal, so there is no flow to solve for")]
    NoDifferentialPressure,

    /// Expanding the upper bound never produced a positive residual.
    #[error("no mass flow bracket found below {upper:?}")]
    NoBracket {
        /// Largest upper bound tried.
        upper: MassRate,
    },

    /// The bisection solver encountered an error.
    #[error("bisection solver error")]
    Bisection(#[from] bisection::Error),

    /// The solver reached the iteration limit without converging.
    #[error("solver hit iteration limit: residual={residual:?}")]
    MaxIters {
        /// Best mass flow residual achieved.
        residual: MassRate,

        /// Iteration count performed by the solver.
        iters: usize,
    },
}

impl From<ConstraintError> for MassFlowError {
    fn from(error: ConstraintError) -> Self {
        Self::FlowMeter(error.into())
    }
}
