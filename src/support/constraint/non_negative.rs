use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is non-negative (zero or greater).
///
/// Used for angular offsets and smearing widths, where zero means "off".
///
/// # Examples
///
/// ```
/// use wake_model_book::support::constraint::NonNegative;
///
/// let smear = NonNegative::new(0.0).unwrap();
/// assert_eq!(smear.into_inner(), 0.0);
///
/// assert!(NonNegative::new(-3.0).is_err());
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

    /// Returns zero as a non-negative constrained value.
    #[must_use]
    pub fn zero<T: PartialOrd + Zero>() -> Constrained<T, NonNegative> {
        Constrained {
            value: T::zero(),
            _marker: std::marker::PhantomData,
        }
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

    use approx::assert_relative_eq;
    use uom::si::{angle::degree, f64::Angle};

    #[test]
    fn zero_is_allowed() {
        let x = NonNegative::zero::<f64>();
        assert_eq!(x.into_inner(), 0.0);
        assert!(NonNegative::new(0).is_ok());
    }

    #[test]
    fn angles() {
        let a = NonNegative::new(Angle::new::<degree>(45.0)).unwrap();
        assert_relative_eq!(a.get().get::<degree>(), 45.0);

        assert_eq!(
            NonNegative::new(Angle::new::<degree>(-1.0)),
            Err(ConstraintError::Negative)
        );
    }
}
