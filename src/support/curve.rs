//! Tabulated performance curves.
//!
//! A [`PerformanceCurve`] maps an abscissa (usually wind speed in m/s) to a
//! dependent value by piecewise-linear interpolation between sorted
//! breakpoints. Lookups use binary search over the breakpoints, so a curve
//! carries no cached interpolation state and can be shared freely between
//! threads.
//!
//! Outside its domain the curve is clamped to the first or last value.
//! Operating-range policies such as cut-in and cut-out belong to the caller.
//!
//! ```
//! use turbine_models::support::curve::PerformanceCurve;
//!
//! let ct = PerformanceCurve::new(vec![3.0, 12.0, 25.0], vec![0.8, 0.7, 0.1]).unwrap();
//! assert!((ct.interpolate(7.5) - 0.75).abs() < 1e-12);
//! assert_eq!(ct.interpolate(30.0), 0.1);
//! ```

use thiserror::Error;

/// Errors describing a malformed curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CurveError {
    /// The curve has no breakpoints.
    #[error("curve has no breakpoints")]
    Empty,

    /// Breakpoint and value counts differ.
    #[error("curve has {breakpoints} breakpoints but {values} values")]
    LengthMismatch { breakpoints: usize, values: usize },

    /// A breakpoint or value is `NaN` or infinite.
    #[error("curve entry {index} is not a finite number")]
    NotANumber { index: usize },

    /// Breakpoints are not strictly increasing.
    #[error("curve breakpoint {index} does not exceed the one before it")]
    NonMonotonic { index: usize },
}

/// A piecewise-linear curve over strictly increasing breakpoints.
#[derive(Debug, Clone, PartialEq)]
pub struct PerformanceCurve {
    breakpoints: Vec<f64>,
    values: Vec<f64>,
}

impl PerformanceCurve {
    /// Builds a curve from breakpoints and their values.
    ///
    /// # Errors
    ///
    /// Returns a [`CurveError`] if the curve is empty, the lengths differ, any
    /// entry is not finite, or the breakpoints are not strictly increasing.
    pub fn new(breakpoints: Vec<f64>, values: Vec<f64>) -> Result<Self, CurveError> {
        if breakpoints.len() != values.len() {
            return Err(CurveError::LengthMismatch {
                breakpoints: breakpoints.len(),
                values: values.len(),
            });
        }

        if breakpoints.is_empty() {
            return Err(CurveError::Empty);
        }

        if let Some(index) = breakpoints
            .iter()
            .zip(&values)
            .position(|(x, y)| !x.is_finite() || !y.is_finite())
        {
            return Err(CurveError::NotANumber { index });
        }

        if let Some(index) = breakpoints.windows(2).position(|pair| pair[1] <= pair[0]) {
            return Err(CurveError::NonMonotonic { index: index + 1 });
        }

        Ok(Self {
            breakpoints,
            values,
        })
    }

    /// Builds a curve from `(breakpoint, value)` pairs.
    ///
    /// # Errors
    ///
    /// See [`PerformanceCurve::new`].
    pub fn from_points(points: impl IntoIterator<Item = (f64, f64)>) -> Result<Self, CurveError> {
        let (breakpoints, values) = points.into_iter().unzip();
        Self::new(breakpoints, values)
    }

    /// Evaluates the curve at `x`, clamping outside the breakpoint range.
    ///
    /// A `NaN` input yields `NaN`.
    #[must_use]
    pub fn interpolate(&self, x: f64) -> f64 {
        if x.is_nan() {
            return f64::NAN;
        }

        let last = self.breakpoints.len() - 1;
        if x <= self.breakpoints[0] {
            return self.values[0];
        }
        if x >= self.breakpoints[last] {
            return self.values[last];
        }

        // First breakpoint strictly greater than x; always in 1..=last here.
        let upper = self.breakpoints.partition_point(|&b| b <= x);
        let lower = upper - 1;

        let (x0, x1) = (self.breakpoints[lower], self.breakpoints[upper]);
        let (y0, y1) = (self.values[lower], self.values[upper]);

        y0 + (y1 - y0) * (x - x0) / (x1 - x0)
    }

    /// Returns the first and last breakpoints.
    #[must_use]
    pub fn domain(&self) -> (f64, f64) {
        (self.breakpoints[0], self.breakpoints[self.breakpoints.len() - 1])
    }

    /// Returns the breakpoints.
    #[must_use]
    pub fn breakpoints(&self) -> &[f64] {
        &self.breakpoints
    }

    /// Returns the values at each breakpoint.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn power_curve() -> PerformanceCurve {
        PerformanceCurve::from_points([(3.0, 0.0), (12.0, 2000.0), (25.0, 2000.0)]).unwrap()
    }

    #[test]
    fn interpolates_between_breakpoints() {
        let curve = power_curve();
        assert_relative_eq!(curve.interpolate(7.5), 1000.0);
        assert_relative_eq!(curve.interpolate(18.0), 2000.0);
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn hits_breakpoints_exactly() {
        let curve = power_curve();
        assert_eq!(curve.interpolate(3.0), 0.0);
        assert_eq!(curve.interpolate(12.0), 2000.0);
        assert_eq!(curve.interpolate(25.0), 2000.0);
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn clamps_outside_domain() {
        let curve = power_curve();
        assert_eq!(curve.interpolate(0.0), 0.0);
        assert_eq!(curve.interpolate(40.0), 2000.0);
        assert!(curve.interpolate(f64::NAN).is_nan());
        assert_eq!(curve.domain(), (3.0, 25.0));
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn single_point_is_constant() {
        let curve = PerformanceCurve::new(vec![10.0], vec![0.5]).unwrap();
        assert_eq!(curve.interpolate(2.0), 0.5);
        assert_eq!(curve.interpolate(10.0), 0.5);
        assert_eq!(curve.interpolate(20.0), 0.5);
    }

    #[test]
    fn rejects_malformed_curves() {
        assert_eq!(
            PerformanceCurve::new(vec![], vec![]),
            Err(CurveError::Empty)
        );
        assert_eq!(
            PerformanceCurve::new(vec![1.0, 2.0], vec![0.1]),
            Err(CurveError::LengthMismatch {
                breakpoints: 2,
                values: 1
            })
        );
        assert_eq!(
            PerformanceCurve::new(vec![1.0, f64::NAN], vec![0.1, 0.2]),
            Err(CurveError::NotANumber { index: 1 })
        );
        assert_eq!(
            PerformanceCurve::new(vec![1.0, 2.0, 2.0], vec![0.1, 0.2, 0.3]),
            Err(CurveError::NonMonotonic { index: 2 })
        );
        assert_eq!(
            PerformanceCurve::new(vec![5.0, 4.0], vec![0.1, 0.2]),
            Err(CurveError::NonMonotonic { index: 1 })
        );
    }
}
