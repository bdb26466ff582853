use thiserror::Error;
use uom::si::f64::Angle;

use super::{AveragingError, TiltError};

/// Errors that can occur while evaluating a turbine.
///
/// All variants indicate corrupted inputs or a failed numerical solve.
/// Wind speeds outside the operating range are not errors; they produce zero
/// thrust and power.
#[derive(Debug, Error)]
pub enum TurbineError {
    /// The velocity field could not be averaged.
    #[error("velocity field averaging failed")]
    Averaging(#[from] AveragingError),

    /// The thrust coefficient has no momentum-theory axial induction.
    ///
    /// Raised for `Ct > 1`, `Ct < 0`, or `NaN`; usually a sign of a corrupted
    /// thrust curve.
    #[error("thrust coefficient {ct} has no physical axial induction")]
    InvalidCt { ct: f64 },

    /// The rotor tilt in the flow conditions lies outside `[0°, 90°)`.
    #[error("rotor tilt {tilt:?} is outside [0°, 90°)")]
    InvalidTilt { tilt: Angle },

    /// The yaw angle in the flow conditions is `NaN` or infinite.
    #[error("yaw angle {yaw:?} is not finite")]
    InvalidYaw { yaw: Angle },

    /// The floating tilt solve failed.
    #[error("floating tilt solve failed")]
    Tilt(#[from] TiltError),

    /// Per-turbine inputs have different lengths.
    #[error("expected {expected} entries per turbine, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}
