use std::ops::Deref;

use crate::support::constraint::{Constrained, ConstraintResult, NonNegative};
use uom::si::{f64::Ratio, ratio::ratio};

use super::{
    DiameterRatio, DischargeCoefficient,
    error::{FlowMeterError, FlowMeterResult},
};

/// The loss coefficient (K) of a meter, referenced to the pipe velocity head.
///
/// For a meter with diameter ratio `b` and discharge coefficient `C`:
///
/// ```text
/// K = (sqrt(1 - b^4 (1 - C^2)) / (C b^2) - 1)^2
/// ```
///
/// The relation is a bijection between K > 0 and C > 0 for a fixed beta,
/// so a meter can be entered into a network solver as an ordinary fitting.
///
/// The loss coefficient must be >= 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LossCoefficient(Constrained<Ratio, NonNegative>);

impl LossCoefficient {
    /// Create a [`LossCoefficient`] from a scalar value.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the value is negative.
    pub fn new(value: f64) -> ConstraintResult<Self> {
        Self::from_quantity(Ratio::new::<ratio>(value))
    }

    /// Create a [`LossCoefficient`] from a ratio quantity.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the quantity is negative.
    pub fn from_quantity(quantity: Ratio) -> ConstraintResult<Self> {
        Ok(Self(NonNegative::new(quantity)?))
    }

    /// Create the loss coefficient equivalent to a discharge coefficient.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the discharge coefficient is not finite.
    pub fn from_discharge_coefficient(
        beta: DiameterRatio,
        c: DischargeCoefficient,
    ) -> FlowMeterResult<Self> {
        let beta2 = beta.value() * beta.value();
        let beta4 = beta2 * beta2;
        let c = c.value();

        // Written as (1 - b^4) + b^4 C^2 to keep precision as b approaches one.
        let root = ((1.0 - beta4) + beta4 * c * c).sqrt() / (c * beta2);
        let k = (root - 1.0) * (root - 1.0);
        Ok(Self::new(k)?)
    }

    /// The discharge coefficient equivalent to this loss coefficient.
    ///
    /// Squaring the defining relation twice gives a quartic in C with four
    /// roots, `C = ±sqrt((1 - b^4) / (b^4 (K ∓ 2 sqrt(K))))`. Only the positive
    /// root using `K + 2 sqrt(K)` is real and positive for every K > 0; the
    /// `K - 2 sqrt(K)` roots are spurious solutions of `sqrt(...) / (C b^2) = 1 - sqrt(K)`.
    ///
    /// ```
    /// use twine_flow_meters::support::flow_meter::{DiameterRatio, LossCoefficient};
    /// use uom::si::ratio::ratio;
    ///
    /// let beta = DiameterRatio::new(0.05 / 0.07366)?;
    /// let c = LossCoefficient::new(5.231_429_172_975_4)?.discharge_coefficient(beta)?;
    /// assert!((c.get::<ratio>() - 0.61512).abs() < 1e-12);
    /// # Ok::<(), twine_flow_meters::support::flow_meter::FlowMeterError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `Err` if the loss coefficient is zero, which corresponds to an
    /// unbounded discharge coefficient.
    pub fn discharge_coefficient(
        &self,
        beta: DiameterRatio,
    ) -> FlowMeterResult<DischargeCoefficient> {
        let k = self.get::<ratio>();
        if k == 0.0 {
            return Err(FlowMeterError::invalid(
                "a zero loss coefficient has no finite discharge coefficient",
            ));
        }

        let beta4 = beta.pow4();
        let c = ((1.0 - beta4) / (beta4 * (2.0 * k.sqrt() + k))).sqrt();
        Ok(DischargeCoefficient::new(c)?)
    }
}

impl Deref for LossCoefficient {
    type Target = Ratio;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}
