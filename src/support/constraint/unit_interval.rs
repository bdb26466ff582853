use std::{cmp::Ordering, marker::PhantomData};

use uom::si::{f64::Ratio, ratio::ratio};

use super::{Constrained, Constraint, ConstraintError};

/// Supplies the endpoints of the closed unit interval for a type.
///
/// Implementations must satisfy `zero() ≤ one()`.
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

/// Marker for values in the closed unit interval `0 ≤ x ≤ 1`.
///
/// # Examples
///
/// ```
/// use turbine_models::support::constraint::UnitInterval;
///
/// let efficiency = UnitInterval::new(0.944).unwrap();
/// assert_eq!(efficiency.into_inner(), 0.944);
///
/// assert_eq!(UnitInterval::one::<f64>().into_inner(), 1.0);
/// assert!(UnitInterval::new(1.2).is_err());
/// assert!(UnitInterval::new(-0.1).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct UnitInterval;

impl UnitInterval {
    /// Wraps `value` if `0 ≤ value ≤ 1`.
    ///
    /// # Errors
    ///
    /// - [`ConstraintError::BelowMinimum`] if less than zero.
    /// - [`ConstraintError::AboveMaximum`] if greater than one.
    /// - [`ConstraintError::NotANumber`] if the comparison is undefined.
    pub fn new<T: UnitBounds>(value: T) -> Result<Constrained<T, UnitInterval>, ConstraintError> {
        Constrained::<T, UnitInterval>::new(value)
    }

    /// Returns the lower endpoint.
    #[must_use]
    pub fn zero<T: UnitBounds>() -> Constrained<T, UnitInterval> {
        Constrained::<T, UnitInterval> {
            value: T::zero(),
            _marker: PhantomData,
        }
    }

    /// Returns the upper endpoint.
    #[must_use]
    pub fn one<T: UnitBounds>() -> Constrained<T, UnitInterval> {
        Constrained::<T, UnitInterval> {
            value: T::one(),
            _marker: PhantomData,
        }
    }
}

impl<T: UnitBounds> Constraint<T> for UnitInterval {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match (value.partial_cmp(&T::zero()), value.partial_cmp(&T::one())) {
            (None, _) | (_, None) => Err(ConstraintError::NotANumber),
            (Some(Ordering::Less), _) => Err(ConstraintError::BelowMinimum),
            (_, Some(Ordering::Greater)) => Err(ConstraintError::AboveMaximum),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[allow(clippy::float_cmp)]
    fn endpoints_are_inclusive() {
        assert_eq!(UnitInterval::new(0.0).unwrap().into_inner(), 0.0);
        assert_eq!(UnitInterval::new(1.0).unwrap().into_inner(), 1.0);
        assert_eq!(UnitInterval::zero::<f64>().into_inner(), 0.0);
    }

    #[test]
    fn out_of_range() {
        assert_eq!(
            UnitInterval::new(1.0 + 1e-15),
            Err(ConstraintError::AboveMaximum)
        );
        assert_eq!(UnitInterval::new(-1e-15), Err(ConstraintError::BelowMinimum));
        assert_eq!(
            UnitInterval::new(f64::INFINITY),
            Err(ConstraintError::AboveMaximum)
        );
        assert_eq!(UnitInterval::new(f64::NAN), Err(ConstraintError::NotANumber));
    }

    #[test]
    fn ratios() {
        assert!(UnitInterval::new(Ratio::new::<ratio>(0.75)).is_ok());
        assert!(UnitInterval::new(Ratio::new::<ratio>(1.5)).is_err());
    }
}
