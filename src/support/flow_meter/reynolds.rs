use std::{f64::consts::PI, ops::Deref};

use crate::support::constraint::{Constrained, ConstraintResult, StrictlyPositive};
use uom::si::{
    dynamic_viscosity::pascal_second,
    f64::{DynamicViscosity, Length, MassRate, Ratio},
    length::meter,
    mass_rate::kilogram_per_second,
    ratio::ratio,
};

use super::error::{FlowMeterResult, require_positive};

/// Pipe Reynolds number `Re_D` of the flow approaching a meter.
///
/// The Reynolds number must be > 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReynoldsNumber(Constrained<Ratio, StrictlyPositive>);

impl ReynoldsNumber {
    /// Create a [`ReynoldsNumber`] from a scalar value.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the value is not strictly positive.
    pub fn new(value: f64) -> ConstraintResult<Self> {
        Self::from_quantity(Ratio::new::<ratio>(value))
    }

    /// Create a [`ReynoldsNumber`] from a ratio quantity.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the quantity is not strictly positive.
    pub fn from_quantity(quantity: Ratio) -> ConstraintResult<Self> {
        Ok(Self(StrictlyPositive::new(quantity)?))
    }

    /// Create the pipe Reynolds number from a mass flow rate.
    ///
    /// Uses `Re_D = 4 m / (pi D mu)`, which needs no density because the
    /// pipe velocity and density cancel.
    ///
    /// # Errors
    ///
    /// Returns `Err` if any input is not strictly positive.
    pub fn from_mass_flow(
        pipe_diameter: Length,
        viscosity: DynamicViscosity,
        mass_flow: MassRate,
    ) -> FlowMeterResult<Self> {
        let d = require_positive("pipe diameter", pipe_diameter)?.get::<meter>();
        let mu = require_positive("viscosity", viscosity)?.get::<pascal_second>();
        let m = require_positive("mass flow", mass_flow)?.get::<kilogram_per_second>();

        Ok(Self::new(4.0 * m / (PI * d * mu))?)
    }

    pub(crate) fn value(&self) -> f64 {
        self.get::<ratio>()
    }
}

impl Deref for ReynoldsNumber {
    type Target = Ratio;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}
