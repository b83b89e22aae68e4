//! Functional helpers combining the meter correlations.

use uom::si::{
    f64::{MassDensity, MassRate, Pressure},
    mass_density::kilogram_per_cubic_meter,
    mass_rate::kilogram_per_second,
    pressure::pascal,
};

use super::{
    DiameterRatio, DischargeCoefficient, Expansibility, MeterGeometry, MeterPressures,
    error::{FlowMeterResult, require_positive},
};

/// Mass flow rate through a differential pressure meter.
///
/// Evaluates the ISO 5167-1 flow equation:
///
/// ```text
/// m = C / sqrt(1 - b^4) * epsilon * (pi / 4) Do^2 * sqrt(2 rho (P1 - P2))
/// ```
///
/// where `rho` is the fluid density at the upstream tap.
///
/// # Errors
///
/// Returns `Err` if the density is not strictly positive.
pub fn orifice_discharge(
    geometry: &MeterGeometry,
    pressures: MeterPressures,
    density: MassDensity,
    c: DischargeCoefficient,
    expansibility: Expansibility,
) -> FlowMeterResult<MassRate> {
    let rho = require_positive("density", density)?.get::<kilogram_per_cubic_meter>();
    let dp = pressures.differential().get::<pascal>();

    let flow_coefficient = c.value() / (1.0 - geometry.beta().pow4()).sqrt();
    let m = flow_coefficient
        * expansibility.value()
        * geometry.throat_area_m2()
        * (2.0 * rho * dp).sqrt();

    Ok(MassRate::new::<kilogram_per_second>(m))
}

/// Non-recoverable pressure loss across an orifice plate (ISO 5167-2).
///
/// The fraction of the measured differential pressure `P1 - P2` that is
/// never recovered downstream:
///
/// ```text
/// dP = (sqrt(1 - b^4 (1 - C^2)) - C b^2) / (sqrt(1 - b^4 (1 - C^2)) + C b^2) * (P1 - P2)
/// ```
#[must_use]
pub fn orifice_pressure_loss(
    geometry: &MeterGeometry,
    pressures: MeterPressures,
    c: DischargeCoefficient,
) -> Pressure {
    let beta = geometry.beta();
    let beta4 = beta.pow4();
    let c = c.value();
    let c_beta2 = c * beta.value() * beta.value();

    let root = ((1.0 - beta4) + beta4 * c * c).sqrt();
    pressures.differential() * ((root - c_beta2) / (root + c_beta2))
}

/// Non-recoverable pressure loss across a cone meter (ISO 5167-5).
///
/// `dP = (1.09 - 0.813 b) (P1 - P2)` with beta the cone meter's
/// equivalent-area ratio.
#[must_use]
pub fn cone_meter_pressure_loss(beta: DiameterRatio, pressures: MeterPressures) -> Pressure {
    pressures.differential() * (1.09 - 0.813 * beta.value())
}
