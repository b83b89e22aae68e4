//! Problem formulation for the orifice mass flow solve.

use std::convert::Infallible;

use twine_core::{EquationProblem, Model};
use uom::si::{f64::MassRate, mass_rate::kilogram_per_second};

use crate::models::flow::orifice::OrificeConditions;
use crate::support::flow_meter::{
    DischargeCoefficient, Expansibility, FlowMeterError, MeterGeometry, ReynoldsNumber, Taps,
    functional::orifice_discharge,
};

/// Flow calculated from a guessed mass flow rate.
#[derive(Debug, Clone, Copy)]
pub(super) struct Evaluation {
    pub(super) mass_flow: MassRate,
    pub(super) discharge_coefficient: DischargeCoefficient,
    pub(super) reynolds_number: ReynoldsNumber,
}

/// Model adapter exposing the guessed mass flow rate as its sole input.
pub(super) struct MassFlowModel<'a> {
    geometry: &'a MeterGeometry,
    taps: Taps,
    conditions: &'a OrificeConditions,
    expansibility: Expansibility,
}

impl<'a> MassFlowModel<'a> {
    pub(super) fn new(
        geometry: &'a MeterGeometry,
        taps: Taps,
        conditions: &'a OrificeConditions,
        expansibility: Expansibility,
    ) -> Self {
        Self {
            geometry,
            taps,
            conditions,
            expansibility,
        }
    }
}

impl Model for MassFlowModel<'_> {
    type Input = MassRate;
    type Output = Evaluation;
    type Error = FlowMeterError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let reynolds_number = ReynoldsNumber::from_mass_flow(
            self.geometry.pipe_diameter(),
            self.conditions.viscosity,
            *input,
        )?;
        let discharge_coefficient =
            DischargeCoefficient::reader_harris_gallagher(self.geometry, reynolds_number, self.taps)?;
        let mass_flow = orifice_discharge(
            self.geometry,
            self.conditions.pressures,
            self.conditions.density,
            discharge_coefficient,
            self.expansibility,
        )?;

        Ok(Evaluation {
            mass_flow,
            discharge_coefficient,
            reynolds_number,
        })
    }
}

/// Equation problem for the mass flow solve.
///
/// Computes the residual as `guess - calculated`.
pub(super) struct MassFlowProblem;

impl EquationProblem<1> for MassFlowProblem {
    type Input = MassRate;
    type Output = Evaluation;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(MassRate::new::<kilogram_per_second>(x[0]))
    }

    fn residuals(
        &self,
        input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; 1], Self::Error> {
        let guess = input.get::<kilogram_per_second>();
        let calculated = output.mass_flow.get::<kilogram_per_second>();
        Ok([guess - calculated])
    }
}
