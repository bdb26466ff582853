//! Rotor-area averaging of a velocity field.
//!
//! Each method reduces the samples of a [`VelocityField`] to one speed.
//! The cubic variants average `v³` and take the cube root, preserving the
//! kinetic-energy flux through the rotor, which is what a power curve responds
//! to. The cubature variants weight each sample by its quadrature weight.

use std::iter;

use thiserror::Error;
use uom::{
    ConstZero,
    si::{f64::Velocity, velocity::meter_per_second},
};

use crate::support::constraint::{Constrained, ConstraintError, NonNegative};

use super::VelocityField;

/// Errors that can occur while averaging a velocity field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AveragingError {
    /// The field has no samples.
    #[error("velocity field is empty")]
    Empty,

    /// A sample is `NaN` or infinite.
    #[error("velocity sample {index} is not finite")]
    NonFinite { index: usize },

    /// Sample and weight counts differ.
    #[error("{samples} velocity samples but {weights} cubature weights")]
    DimensionMismatch { samples: usize, weights: usize },

    /// A weight is negative, infinite, or `NaN`.
    #[error("cubature weight {index} is invalid")]
    InvalidWeight {
        index: usize,
        #[source]
        source: ConstraintError,
    },

    /// The weights sum to zero.
    #[error("cubature weights sum to zero")]
    ZeroTotalWeight,

    /// The weights are individually finite but their sum overflows.
    #[error("cubature weights sum to a non-finite total")]
    NonFiniteTotalWeight,

    /// A cubature method was requested for a field without weights.
    #[error("cubature averaging requires quadrature weights")]
    MissingWeights,
}

/// How a velocity field is reduced to a single rotor speed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AveragingMethod {
    /// Arithmetic mean of the samples.
    SimpleMean,

    /// Cube root of the mean cubed sample.
    #[default]
    CubicMean,

    /// Weighted mean of the samples.
    SimpleCubature,

    /// Cube root of the weighted mean cubed sample.
    CubicCubature,
}

impl AveragingMethod {
    /// Averages `field` with this method.
    ///
    /// # Errors
    ///
    /// Returns an [`AveragingError`] if the field is empty, contains a
    /// non-finite sample, or (for cubature methods) lacks valid weights.
    pub fn average(self, field: &VelocityField) -> Result<Velocity, AveragingError> {
        let samples = field.samples();
        match self {
            Self::SimpleMean => simple_mean(samples),
            Self::CubicMean => cubic_mean(samples),
            Self::SimpleCubature => {
                simple_cubature(samples, field.weights().ok_or(AveragingError::MissingWeights)?)
            }
            Self::CubicCubature => {
                cubic_cubature(samples, field.weights().ok_or(AveragingError::MissingWeights)?)
            }
        }
    }
}

/// Arithmetic mean of the samples.
///
/// # Errors
///
/// Returns [`AveragingError::Empty`] or [`AveragingError::NonFinite`].
pub fn simple_mean(samples: &[Velocity]) -> Result<Velocity, AveragingError> {
    check_samples(samples)?;
    Ok(power_mean(samples, iter::repeat(1.0), Moment::First))
}

/// Cube root of the mean of the cubed samples.
///
/// # Errors
///
/// Returns [`AveragingError::Empty`] or [`AveragingError::NonFinite`].
pub fn cubic_mean(samples: &[Velocity]) -> Result<Velocity, AveragingError> {
    check_samples(samples)?;
    Ok(power_mean(samples, iter::repeat(1.0), Moment::Third))
}

/// Weighted mean of the samples, `Σ wᵢvᵢ / Σ wᵢ`.
///
/// # Errors
///
/// Returns [`AveragingError::DimensionMismatch`] if the counts differ, and the
/// errors of [`simple_mean`] or an invalid-weight error otherwise.
pub fn simple_cubature(samples: &[Velocity], weights: &[f64]) -> Result<Velocity, AveragingError> {
    check_weights(samples, weights)?;
    Ok(power_mean(samples, weights.iter().copied(), Moment::First))
}

/// Cube root of the weighted mean of the cubed samples.
///
/// # Errors
///
/// Same as [`simple_cubature`].
pub fn cubic_cubature(samples: &[Velocity], weights: &[f64]) -> Result<Velocity, AveragingError> {
    check_weights(samples, weights)?;
    Ok(power_mean(samples, weights.iter().copied(), Moment::Third))
}

#[derive(Debug, Clone, Copy)]
enum Moment {
    First,
    Third,
}

/// Weighted power mean of validated samples.
///
/// Samples are divided by the largest magnitude `m` before they are summed,
/// and the mean is scaled back by `m`. Cubes therefore stay within `[-1, 1]`,
/// and the weight total is accumulated in the same order as the weighted sum,
/// so a uniform field returns its own speed bit for bit.
fn power_mean(
    samples: &[Velocity],
    weights: impl Iterator<Item = f64>,
    moment: Moment,
) -> Velocity {
    let scale = samples
        .iter()
        .map(|v| v.get::<meter_per_second>().abs())
        .fold(0.0, f64::max);
    if scale == 0.0 {
        return Velocity::ZERO;
    }

    let (sum, total) = samples
        .iter()
        .zip(weights)
        .fold((0.0, 0.0), |(sum, total), (v, w)| {
            let x = v.get::<meter_per_second>() / scale;
            let term = match moment {
                Moment::First => x,
                Moment::Third => x.powi(3),
            };
            (sum + w * term, total + w)
        });

    let mean = sum / total;
    let mean = match moment {
        Moment::First => mean,
        Moment::Third => mean.cbrt(),
    };
    Velocity::new::<meter_per_second>(scale * mean)
}

fn check_samples(samples: &[Velocity]) -> Result<(), AveragingError> {
    if samples.is_empty() {
        return Err(AveragingError::Empty);
    }
    match samples
        .iter()
        .position(|v| !v.get::<meter_per_second>().is_finite())
    {
        Some(index) => Err(AveragingError::NonFinite { index }),
        None => Ok(()),
    }
}

/// Validates samples and weights.
fn check_weights(samples: &[Velocity], weights: &[f64]) -> Result<(), AveragingError> {
    if samples.len() != weights.len() {
        return Err(AveragingError::DimensionMismatch {
            samples: samples.len(),
            weights: weights.len(),
        });
    }
    check_samples(samples)?;

    let total: Constrained<f64, NonNegative> = weights
        .iter()
        .enumerate()
        .map(|(index, &w)| {
            if w.is_infinite() {
                return Err(AveragingError::InvalidWeight {
                    index,
                    source: ConstraintError::AboveMaximum,
                });
            }
            NonNegative::new(w).map_err(|source| AveragingError::InvalidWeight { index, source })
        })
        .sum::<Result<_, _>>()?;

    let total = total.into_inner();
    if total == 0.0 {
        return Err(AveragingError::ZeroTotalWeight);
    }
    if !total.is_finite() {
        return Err(AveragingError::NonFiniteTotalWeight);
    }
    Ok(())
}
