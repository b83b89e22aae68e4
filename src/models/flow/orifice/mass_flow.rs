//! Iterative solve for the mass flow rate through an orifice plate.
//!
//! The discharge coefficient depends on the Reynolds number, and so on the
//! mass flow rate. Bisection on the mass flow rate drives the residual
//! `m - m_calc(C(Re(m)))` to zero.

mod config;
mod error;
mod problem;

pub use config::MassFlowConfig;
pub use error::MassFlowError;

use twine_core::Model;
use twine_solvers::equation::bisection;
use uom::si::{f64::MassRate, mass_rate::kilogram_per_second};

use crate::support::flow_meter::{
    DischargeCoefficient, Expansibility, MeterGeometry, Taps, functional::orifice_discharge,
};

use super::{OrificeConditions, OrificeSolution};

use problem::{MassFlowModel, MassFlowProblem};

/// Lower bracket bound as a multiple of the flow with a unit discharge coefficient.
///
/// The low-Reynolds terms make C very large here, so the residual is negative.
const LOWER_SCALE: f64 = 1e-6;

/// Initial upper bracket bound, doubled until the residual turns positive.
///
/// Extrapolated to low Reynolds numbers C can exceed this multiple, so the
/// bound cannot be fixed.
const UPPER_SCALE: f64 = 2.0;

/// Maximum number of upper bound doublings.
const MAX_BRACKET_EXPANSIONS: u32 = 60;

/// Solves for the orifice mass flow rate.
///
/// # Errors
///
/// Returns [`MassFlowError`] on invalid conditions, solver failures, or if the
/// solver reaches its iteration limit.
pub(super) fn solve(
    geometry: &MeterGeometry,
    taps: Taps,
    conditions: &OrificeConditions,
    config: MassFlowConfig,
) -> Result<OrificeSolution, MassFlowError> {
    let expansibility = Expansibility::orifice(
        geometry.beta(),
        conditions.pressures,
        conditions.isentropic_exponent,
    )?;

    let ideal = orifice_discharge(
        geometry,
        conditions.pressures,
        conditions.density,
        DischargeCoefficient::new(1.0)?,
        expansibility,
    )?
    .get::<kilogram_per_second>();

    if ideal == 0.0 {
        return Err(MassFlowError::NoDifferentialPressure);
    }

    let model = MassFlowModel::new(geometry, taps, conditions, expansibility);
    let upper = upper_bound(&model, ideal)?;

    let solution = bisection::solve(
        &model,
        &MassFlowProblem,
        [LOWER_SCALE * ideal, upper],
        &config.bisection(),
        |event: &bisection::Event<'_, _, _>| {
            // A correlation failure means C went non-positive, so the
            // calculated flow is below the guess.
            if event.result().is_err() {
                return Some(bisection::Action::assume_positive());
            }
            None
        },
    )?;

    let (iters, residual) = (solution.iters, solution.residual);

    if solution.status != bisection::Status::Converged {
        tracing::warn!(iters, residual, "orifice mass flow solve hit its iteration limit");
        return Err(MassFlowError::MaxIters {
            residual: MassRate::new::<kilogram_per_second>(residual),
            iters,
        });
    }

    let evaluation = solution.snapshot.output;
    tracing::debug!(
        iters,
        residual,
        mass_flow = evaluation.mass_flow.get::<kilogram_per_second>(),
        "orifice mass flow solve converged"
    );

    Ok(OrificeSolution {
        mass_flow: evaluation.mass_flow,
        discharge_coefficient: evaluation.discharge_coefficient,
        expansibility,
        reynolds_number: evaluation.reynolds_number,
        iters,
    })
}

/// Doubles the upper bound from `UPPER_SCALE * ideal` until `m - m_calc` is positive.
fn upper_bound(model: &MassFlowModel<'_>, ideal: f64) -> Result<f64, MassFlowError> {
    let mut upper = UPPER_SCALE * ideal;
    let mut expansions = 0;

    while !residual_is_positive(model, upper) {
        if expansions == MAX_BRACKET_EXPANSIONS {
            tracing::warn!(expansions, upper, "orifice mass flow bracket never changed sign");
            return Err(MassFlowError::NoBracket {
                upper: MassRate::new::<kilogram_per_second>(upper),
            });
        }
        upper *= 2.0;
        expansions += 1;
    }

    if expansions > 0 {
        tracing::debug!(expansions, upper, "expanded orifice mass flow bracket");
    }
    Ok(upper)
}

fn residual_is_positive(model: &MassFlowModel<'_>, guess: f64) -> bool {
    match model.call(&MassRate::new::<kilogram_per_second>(guess)) {
        Ok(evaluation) => guess > evaluation.mass_flow.get::<kilogram_per_second>(),
        // Same assumption as the bisection observer.
        Err(_) => true,
    }
}
