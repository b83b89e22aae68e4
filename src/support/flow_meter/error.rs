use num_traits::Zero;
use thiserror::Error;

use crate::support::constraint::{ConstraintError, StrictlyPositive};

use super::UnknownTapsError;

/// Errors raised by flow meter correlations and their inputs.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum FlowMeterError {
    /// A computed quantity violated its constraint.
    ///
    /// For example, a discharge coefficient correlation extrapolated so far
    /// that it no longer yields a positive value.
    #[error("constraint violated: {0}")]
    Constraint(#[from] ConstraintError),

    /// An input lies outside the physical domain of the correlations.
    #[error("invalid argument: {context}")]
    InvalidArgument { context: String },

    /// A textual tap arrangement was not recognized.
    #[error(transparent)]
    UnknownTaps(#[from] UnknownTapsError),
}

/// A result type alias for flow meter calculations.
pub type FlowMeterResult<T> = Result<T, FlowMeterError>;

impl FlowMeterError {
    pub(crate) fn invalid(context: impl Into<String>) -> Self {
        Self::InvalidArgument {
            context: context.into(),
        }
    }
}

/// Checks that a named input is strictly positive.
pub(crate) fn require_positive<T>(name: &str, value: T) -> FlowMeterResult<T>
where
    T: PartialOrd + Zero,
{
    match StrictlyPositive::new(value) {
        Ok(value) => Ok(value.into_inner()),
        Err(source) => Err(FlowMeterError::invalid(format!("{name} {source}"))),
    }
}
