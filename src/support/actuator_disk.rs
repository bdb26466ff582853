//! One-dimensional actuator-disk relations.
//!
//! Momentum theory links the rotor thrust coefficient `Ct` to the axial
//! induction factor `a`, the fractional reduction of wind speed at the rotor
//! plane:
//!
//! ```text
//! Ct = 4 a (1 - a)
//! ```
//!
//! For `Ct ∈ [0, 1]` the relation has two roots; the smaller one,
//! `a = (1 - √(1 - Ct)) / 2 ∈ [0, 0.5]`, is the momentum-theory (unstalled)
//! branch used here.
//!
//! ```
//! use turbine_models::support::actuator_disk::{AxialInduction, ThrustCoefficient};
//!
//! let ct = ThrustCoefficient::new(0.75).unwrap();
//! let a = AxialInduction::from_thrust_coefficient(ct);
//! assert!((a.value() - 0.25).abs() < 1e-12);
//!
//! // No momentum-theory solution above Ct = 1.
//! assert!(ThrustCoefficient::new(1.2).is_err());
//! ```

use crate::support::constraint::{Constrained, ConstraintError, ConstraintResult, UnitInterval};

/// A thrust coefficient in the closed interval `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct ThrustCoefficient(Constrained<f64, UnitInterval>);

impl ThrustCoefficient {
    /// Creates a thrust coefficient.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `ct` lies outside `[0, 1]` or is `NaN`.
    pub fn new(ct: f64) -> ConstraintResult<Self> {
        Ok(Self(UnitInterval::new(ct)?))
    }

    /// A rotor producing no thrust.
    #[must_use]
    pub fn zero() -> Self {
        Self(UnitInterval::zero())
    }

    /// Returns the coefficient as a plain number.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0.into_inner()
    }
}

/// An axial induction factor on the momentum-theory branch, `a ∈ [0, 0.5]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct AxialInduction(f64);

impl AxialInduction {
    /// Upper end of the momentum-theory branch.
    pub const MAX: f64 = 0.5;

    /// Creates an axial induction factor.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `a` is negative, above [`AxialInduction::MAX`], or `NaN`.
    pub fn new(a: f64) -> ConstraintResult<Self> {
        if a.is_nan() {
            return Err(ConstraintError::NotANumber);
        }
        if a < 0.0 {
            return Err(ConstraintError::BelowMinimum);
        }
        if a > Self::MAX {
            return Err(ConstraintError::AboveMaximum);
        }
        Ok(Self(a))
    }

    /// Solves `Ct = 4a(1 - a)` for the smaller root.
    #[must_use]
    pub fn from_thrust_coefficient(ct: ThrustCoefficient) -> Self {
        let a = 0.5 * (1.0 - (1.0 - ct.value()).sqrt());
        // Rounding cannot push the root outside [0, 0.5] for Ct in [0, 1].
        Self(a.clamp(0.0, Self::MAX))
    }

    /// Returns the thrust coefficient `4a(1 - a)` for this induction.
    #[must_use]
    pub fn thrust_coefficient(self) -> ThrustCoefficient {
        let ct = 4.0 * self.0 * (1.0 - self.0);
        ThrustCoefficient(
            UnitInterval::new(ct.clamp(0.0, 1.0))
                .expect("4a(1 - a) lies in [0, 1] for a in [0, 0.5]"),
        )
    }

    /// Returns the factor as a plain number.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}
