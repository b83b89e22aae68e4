mod lower_open;
mod open;

use uom::si::{f64::Ratio, ratio::ratio};

pub use lower_open::UnitIntervalLowerOpen;
pub use open::UnitIntervalOpen;

/// Supplies 0 and 1 for types bounded by the unit interval.
///
/// Implementations are provided for `f64` and `uom::si::f64::Ratio`, which
/// covers diameter ratios, pressure ratios and expansibility factors.
pub trait UnitBounds: PartialOrd {
    fn zero() -> Self;
    fn one() -> Self;
}

impl UnitBounds for f64 {
    fn zero() -> Self {
        0.0
    }
    fn one() -> Self {
        1.0
    }
}

impl UnitBounds for Ratio {
    fn zero() -> Self {
        Ratio::new::<ratio>(0.0)
    }
    fn one() -> Self {
        Ratio::new::<ratio>(1.0)
    }
}
