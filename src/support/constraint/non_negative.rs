use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is non-negative (zero or greater).
///
/// Loss coefficients carry this constraint.
///
/// # Examples
///
/// ```
/// use twine_flow_meters::support::constraint::NonNegative;
///
/// assert_eq!(NonNegative::new(5.23).unwrap().into_inner(), 5.23);
/// assert!(NonNegative::new(0.0).is_ok());
/// assert!(NonNegative::new(-1.0).is_err());
/// assert!(NonNegative::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct NonNegative;

impl NonNegative {
    /// Constructs a [`Constrained<T, NonNegative>`] if the value is non-negative.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is negative or not a number (`NaN`).
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, NonNegative>, ConstraintError> {
        Constrained::<T, NonNegative>::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for NonNegative {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater | Ordering::Equal) => Ok(()),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{f64::Pressure, pressure::pascal};

    #[test]
    fn floats() {
        assert!(NonNegative::new(2.0).is_ok());
        assert!(NonNegative::new(0.0).is_ok());
        assert!(matches!(
            NonNegative::new(-2.0),
            Err(ConstraintError::Negative)
        ));
        assert!(matches!(
            NonNegative::new(f64::NAN),
            Err(ConstraintError::NotANumber)
        ));
    }

    #[test]
    fn pressures() {
        assert!(NonNegative::new(Pressure::new::<pascal>(9069.47)).is_ok());
        assert!(NonNegative::new(Pressure::new::<pascal>(0.0)).is_ok());
        assert!(NonNegative::new(Pressure::new::<pascal>(-1.0)).is_err());
    }
}
