//! Angle wrapping helpers.

use uom::si::{angle::degree, f64::Angle};

/// Shifts an angle into `(-180°, 180°]`.
///
/// ```
/// use turbine_models::support::angle::wrap_180;
/// use uom::si::{angle::degree, f64::Angle};
///
/// let yaw = wrap_180(Angle::new::<degree>(350.0));
/// assert!((yaw.get::<degree>() + 10.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn wrap_180(angle: Angle) -> Angle {
    let wrapped = wrap_360(angle).get::<degree>();
    if wrapped > 180.0 {
        Angle::new::<degree>(wrapped - 360.0)
    } else {
        Angle::new::<degree>(wrapped)
    }
}

/// Shifts an angle into `[0°, 360°)`.
#[must_use]
pub fn wrap_360(angle: Angle) -> Angle {
    let wrapped = angle.get::<degree>().rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs.
    Angle::new::<degree>(if wrapped >= 360.0 { 0.0 } else { wrapped })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn deg(value: f64) -> Angle {
        Angle::new::<degree>(value)
    }

    #[test]
    fn wraps_into_half_open_ranges() {
        assert_relative_eq!(wrap_360(deg(-90.0)).get::<degree>(), 270.0, epsilon = 1e-12);
        assert_relative_eq!(wrap_360(deg(450.0)).get::<degree>(), 90.0, epsilon = 1e-12);
        assert_relative_eq!(wrap_180(deg(170.0)).get::<degree>(), 170.0, epsilon = 1e-12);
        assert_relative_eq!(wrap_180(deg(-190.0)).get::<degree>(), 170.0, epsilon = 1e-12);
        assert_relative_eq!(wrap_180(deg(190.0)).get::<degree>(), -170.0, epsilon = 1e-12);
        assert_relative_eq!(wrap_180(deg(-25.0)).get::<degree>(), -25.0, epsilon = 1e-12);
    }

    #[test]
    fn tiny_negative_angles_stay_in_range() {
        let wrapped = wrap_360(deg(-1e-18)).get::<degree>();
        assert!((0.0..360.0).contains(&wrapped));
    }
}
