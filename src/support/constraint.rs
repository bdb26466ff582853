//! Numeric invariants checked once, at construction.
//!
//! Turbine data arrives from configuration files and upstream flow solvers,
//! so quantities such as rotor diameter, air density or a thrust coefficient
//! need to be validated before they reach the aerodynamic models.
//! Wrapping a value in [`Constrained<T, C>`] records that the check happened,
//! and the wrapper costs nothing after construction.
//!
//! # Provided constraints
//!
//! - [`NonNegative`]: zero or greater (cut-in speeds, cubature weights)
//! - [`StrictlyPositive`]: greater than zero (rotor geometry, air density)
//! - [`UnitInterval`]: closed unit interval `0 ≤ x ≤ 1` (Ct, efficiencies)
//!
//! Each marker offers a `new()` shortcut, e.g. `StrictlyPositive::new(126.0)`.
//!
//! # Extending
//!
//! Implement [`Constraint<T>`] for a zero-sized marker type to add a new
//! invariant.

mod non_negative;
mod strictly_positive;
mod unit_interval;

use std::{iter::Sum, marker::PhantomData, ops::Add};

use num_traits::Zero;
use thiserror::Error;

pub use non_negative::NonNegative;
pub use strictly_positive::StrictlyPositive;
pub use unit_interval::{UnitBounds, UnitInterval};

/// A numeric invariant that can be checked against a value.
pub trait Constraint<T> {
    /// Checks that `value` satisfies this constraint.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] describing the violation.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// The reason a value failed a [`Constraint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("value must not be negative")]
    Negative,
    #[error("value must not be zero")]
    Zero,
    #[error("value is not a number")]
    NotANumber,
    #[error("value is below the minimum allowed")]
    BelowMinimum,
    #[error("value is above the maximum allowed")]
    AboveMaximum,
}

/// Result alias for constraint checks.
pub type ConstraintResult<T, E = ConstraintError> = Result<T, E>;

/// A value known to satisfy the constraint `C`.
///
/// # Example
///
/// ```
/// use turbine_models::support::constraint::{Constrained, StrictlyPositive};
/// use uom::si::{f64::Length, length::meter};
///
/// let diameter = Constrained::<_, StrictlyPositive>::new(Length::new::<meter>(126.0)).unwrap();
/// assert_eq!(diameter.into_inner().get::<meter>(), 126.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Constrained<T, C: Constraint<T>> {
    value: T,
    _marker: PhantomData<C>,
}

impl<T, C: Constraint<T>> Constrained<T, C> {
    /// Checks `value` against `C` and wraps it.
    ///
    /// # Errors
    ///
    /// Returns an error if the value does not satisfy the constraint.
    pub fn new(value: T) -> Result<Self, ConstraintError> {
        C::check(&value)?;
        Ok(Self {
            value,
            _marker: PhantomData,
        })
    }

    /// Unwraps the checked value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T, C: Constraint<T>> AsRef<T> for Constrained<T, C> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}

/// Sums constrained values whose constraint survives addition.
impl<T, C> Sum for Constrained<T, C>
where
    C: Constraint<T>,
    Constrained<T, C>: Add<Output = Self> + Zero,
{
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |a, b| a + b)
    }
}
