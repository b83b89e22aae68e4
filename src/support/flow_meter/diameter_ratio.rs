use std::ops::Deref;

use crate::support::constraint::{Constrained, ConstraintResult, UnitIntervalOpen};
use uom::si::{
    f64::{Length, Ratio},
    ratio::ratio,
};

use super::error::{FlowMeterError, FlowMeterResult, require_positive};

/// The diameter ratio (beta) of a differential pressure meter.
///
/// For orifices, nozzles and venturis this is the throat diameter divided by
/// the pipe diameter. For cone meters it is the equivalent-area ratio, see
/// [`DiameterRatio::cone_meter`].
///
/// The diameter ratio must be in the open interval (0, 1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiameterRatio(Constrained<Ratio, UnitIntervalOpen>);

impl DiameterRatio {
    /// Create a [`DiameterRatio`] from a scalar value.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the value lies outside the interval (0, 1).
    pub fn new(value: f64) -> ConstraintResult<Self> {
        Self::from_quantity(Ratio::new::<ratio>(value))
    }

    /// Create a [`DiameterRatio`] from a ratio quantity.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the quantity lies outside the interval (0, 1).
    pub fn from_quantity(quantity: Ratio) -> ConstraintResult<Self> {
        Ok(Self(UnitIntervalOpen::new(quantity)?))
    }

    /// Create the diameter ratio of a cone meter.
    ///
    /// ISO 5167-5 defines beta through the annular flow area between the cone
    /// and the pipe, `sqrt(D^2 - Dc^2) / D`, not the plain diameter ratio.
    ///
    /// ```
    /// use twine_flow_meters::support::flow_meter::DiameterRatio;
    /// use uom::si::{f64::Length, length::meter, ratio::ratio};
    ///
    /// let beta = DiameterRatio::cone_meter(
    ///     Length::new::<meter>(0.2575),
    ///     Length::new::<meter>(0.184),
    /// )?;
    /// assert!((beta.get::<ratio>() - 0.69957).abs() < 1e-5);
    /// # Ok::<(), twine_flow_meters::support::flow_meter::FlowMeterError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `Err` if either diameter is not strictly positive or if the cone
    /// is not smaller than the pipe.
    pub fn cone_meter(pipe_diameter: Length, cone_diameter: Length) -> FlowMeterResult<Self> {
        let pipe = require_positive("pipe diameter", pipe_diameter)?;
        let cone = require_positive("cone diameter", cone_diameter)?;
        if cone >= pipe {
            return Err(FlowMeterError::invalid(format!(
                "cone diameter {cone:?} must be smaller than pipe diameter {pipe:?}"
            )));
        }

        let cone_ratio = (cone / pipe).get::<ratio>();
        Ok(Self::new((1.0 - cone_ratio * cone_ratio).sqrt())?)
    }

    /// The velocity of approach factor, `1 / sqrt(1 - beta^4)`.
    ///
    /// Corrects the throat velocity for the kinetic energy already carried by
    /// the fluid approaching the restriction.
    #[must_use]
    pub fn velocity_of_approach_factor(&self) -> Ratio {
        Ratio::new::<ratio>(1.0 / (1.0 - self.pow4()).sqrt())
    }

    pub(crate) fn value(&self) -> f64 {
        self.get::<ratio>()
    }

    pub(crate) fn pow4(&self) -> f64 {
        let beta2 = self.value() * self.value();
        beta2 * beta2
    }
}

impl Deref for DiameterRatio {
    type Target = Ratio;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}
