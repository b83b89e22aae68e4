//! Discharge coefficient correlations.
//!
//! Correlations are evaluated wherever they are asked to be. The validity
//! limits published with each one (Reynolds number and beta ranges) are not
//! enforced, so extrapolated results are the caller's responsibility.

#[cfg(test)]
mod reference_tables;

use std::ops::Deref;

use crate::support::constraint::{Constrained, ConstraintResult, StrictlyPositive};
use uom::si::{f64::Ratio, length::meter, ratio::ratio};

use super::{DiameterRatio, MeterGeometry, ReynoldsNumber, Taps, error::FlowMeterResult};

/// Pipes smaller than this get the Reader-Harris/Gallagher small-bore term.
const SMALL_PIPE_DIAMETER_METERS: f64 = 0.071_12;

const INCH_METERS: f64 = 0.0254;

/// The discharge coefficient (C) of a meter.
///
/// The discharge coefficient is the ratio of the actual flow rate to the
/// ideal flow rate for the measured differential pressure. It is usually a
/// little below one for nozzles and venturis and about 0.6 for orifices, but
/// correlations extrapolated to low Reynolds numbers can exceed one.
///
/// The discharge coefficient must be > 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DischargeCoefficient(Constrained<Ratio, StrictlyPositive>);

impl DischargeCoefficient {
    /// Create a [`DischargeCoefficient`] from a scalar value.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the value is not strictly positive.
    pub fn new(value: f64) -> ConstraintResult<Self> {
        Self::from_quantity(Ratio::new::<ratio>(value))
    }

    /// Create a [`DischargeCoefficient`] from a ratio quantity.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the quantity is not strictly positive.
    pub fn from_quantity(quantity: Ratio) -> ConstraintResult<Self> {
        Ok(Self(StrictlyPositive::new(quantity)?))
    }

    /// Orifice plate discharge coefficient from the Reader-Harris/Gallagher
    /// equation (ISO 5167-2:2003).
    ///
    /// The tap arrangement sets the upstream and downstream correction terms.
    /// Pipes under 71.12 mm also receive the small-bore correction.
    ///
    /// ```
    /// use twine_flow_meters::support::flow_meter::{
    ///     DischargeCoefficient, MeterGeometry, ReynoldsNumber, Taps,
    /// };
    /// use uom::si::{
    ///     dynamic_viscosity::pascal_second,
    ///     f64::{DynamicViscosity, Length, MassRate},
    ///     length::meter,
    ///     mass_rate::kilogram_per_second,
    ///     ratio::ratio,
    /// };
    ///
    /// let geometry = MeterGeometry::new(
    ///     Length::new::<meter>(0.07391),
    ///     Length::new::<meter>(0.0222),
    /// )?;
    /// let reynolds = ReynoldsNumber::from_mass_flow(
    ///     geometry.pipe_diameter(),
    ///     DynamicViscosity::new::<pascal_second>(1.858_617_530_95e-5),
    ///     MassRate::new::<kilogram_per_second>(0.124_431_876),
    /// )?;
    ///
    /// let c = DischargeCoefficient::reader_harris_gallagher(&geometry, reynolds, Taps::Flange)?;
    /// assert!((c.get::<ratio>() - 0.599_004).abs() < 1e-6);
    /// # Ok::<(), twine_flow_meters::support::flow_meter::FlowMeterError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `Err` if the correlation yields a non-positive coefficient.
    pub fn reader_harris_gallagher(
        geometry: &MeterGeometry,
        reynolds: ReynoldsNumber,
        taps: Taps,
    ) -> FlowMeterResult<Self> {
        let d = geometry.pipe_diameter().get::<meter>();
        let beta = geometry.beta().value();
        let re = reynolds.value();
        let spacing = taps.spacing(geometry.pipe_diameter());

        let beta2 = beta * beta;
        let beta4 = beta2 * beta2;
        let beta8 = beta4 * beta4;

        let a = (19_000.0 * beta / re).powf(0.8);
        let m2 = 2.0 * spacing.downstream / (1.0 - beta);

        // Corner taps at infinite Reynolds number plus the slope term.
        let c_infinite = 0.5961 + 0.0261 * beta2 - 0.216 * beta8
            + 0.000_521 * (1e6 * beta / re).powf(0.7)
            + (0.0188 + 0.0063 * a) * beta.powf(3.5) * (1e6 / re).max(1.0).powf(0.3);

        let upstream = (0.043 + 0.080 * (-10.0 * spacing.upstream).exp()
            - 0.123 * (-7.0 * spacing.upstream).exp())
            * (1.0 - 0.11 * a)
            * beta4
            / (1.0 - beta4);

        let downstream = -0.031 * (m2 - 0.8 * m2.powf(1.1)) * beta.powf(1.3);

        let small_pipe = if d < SMALL_PIPE_DIAMETER_METERS {
            0.011 * (0.75 - beta) * (2.8 - d / INCH_METERS)
        } else {
            0.0
        };

        Ok(Self::new(c_infinite + upstream + downstream + small_pipe)?)
    }

    /// Long radius nozzle discharge coefficient (ISO 5167-3).
    ///
    /// `C = 0.9965 - 0.00653 b^0.5 (1e6 / Re_D)^0.5`
    ///
    /// # Errors
    ///
    /// Returns `Err` if the correlation yields a non-positive coefficient.
    pub fn long_radius_nozzle(
        beta: DiameterRatio,
        reynolds: ReynoldsNumber,
    ) -> FlowMeterResult<Self> {
        let value = 0.9965 - 0.006_53 * (beta.value() * 1e6 / reynolds.value()).sqrt();
        Ok(Self::new(value)?)
    }

    /// ISA 1932 nozzle discharge coefficient (ISO 5167-3).
    ///
    /// `C = 0.9900 - 0.2262 b^4.1 - (0.00175 b^2 - 0.0033 b^4.15) (1e6 / Re_D)^1.15`
    ///
    /// # Errors
    ///
    /// Returns `Err` if the correlation yields a non-positive coefficient.
    pub fn isa_1932_nozzle(beta: DiameterRatio, reynolds: ReynoldsNumber) -> FlowMeterResult<Self> {
        let b = beta.value();
        let value = 0.9900
            - 0.2262 * b.powf(4.1)
            - (0.001_75 * b * b - 0.0033 * b.powf(4.15)) * (1e6 / reynolds.value()).powf(1.15);
        Ok(Self::new(value)?)
    }

    /// Venturi nozzle discharge coefficient.
    ///
    /// `C = 0.9858 - 0.198 b^4.5`, independent of Reynolds number over the
    /// standard's range (`1.5e5 <= Re_D <= 2e6`, `0.316 <= b <= 0.775`).
    ///
    /// # Errors
    ///
    /// Returns `Err` if the correlation yields a non-positive coefficient.
    pub fn venturi_nozzle(beta: DiameterRatio) -> FlowMeterResult<Self> {
        Ok(Self::new(0.9858 - 0.198 * beta.value().powf(4.5))?)
    }

    /// The flow coefficient, `C / sqrt(1 - b^4)`.
    ///
    /// Combines the discharge coefficient with the velocity of approach
    /// factor of the meter it describes.
    #[must_use]
    pub fn flow_coefficient(&self, beta: DiameterRatio) -> Ratio {
        **self * beta.velocity_of_approach_factor()
    }

    pub(crate) fn value(&self) -> f64 {
        self.get::<ratio>()
    }
}

impl Deref for DischargeCoefficient {
    type Target = Ratio;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}
