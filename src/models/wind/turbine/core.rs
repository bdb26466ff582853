//! Rotor-level aerodynamics of a single wind turbine.
//!
//! The evaluation pipeline for one turbine at one flow condition is:
//!
//! 1. Average the [`VelocityField`] across the rotor ([`AveragingMethod`]).
//! 2. Correct the average for yaw and tilt ([`rotor_effective_velocity`]),
//!    resolving the floating tilt coupling when needed ([`TiltIteration`]).
//! 3. Read thrust and power from the specification's curves at the effective
//!    velocity ([`thrust_coefficient`], [`power`]).

mod averaging;
mod conditions;
mod curves;
mod error;
mod field;
mod specification;
mod state;
mod tilt;
mod velocity;

#[cfg(test)]
pub(crate) mod test_support;

pub use averaging::{
    AveragingError, AveragingMethod, cubic_cubature, cubic_mean, simple_cubature, simple_mean,
};
pub use conditions::Conditions;
pub use curves::{
    axial_induction, axial_induction_from_ct, power, power_curve_from_coefficients,
    thrust_coefficient,
};
pub use error::TurbineError;
pub use field::VelocityField;
pub use specification::{
    CurveKind, DEFAULT_POWER_LOSS_EXPONENT, FloatingTilt, FloatingTiltParameters, OperatingRange,
    SpecificationError, TurbineParameters, TurbineSpecification,
};
pub use state::TurbineState;
pub use tilt::{TiltError, TiltIteration, TiltSolveConfig};
pub use velocity::{
    compute_tilt_angles_for_floating_turbines, floating_tilt_angle, rotor_effective_velocity,
};

use tracing::trace;
use uom::si::{angle::degree, power::kilowatt, velocity::meter_per_second};

use crate::support::{
    actuator_disk::{AxialInduction, ThrustCoefficient},
    angle::wrap_180,
};

use self::specification::is_physical_tilt;

/// Evaluates one turbine at one flow condition.
///
/// Yaw is wrapped to `(-180°, 180°]` before use. When `conditions.tilt` is
/// `None` the reference tilt is used as the prior tilt.
///
/// # Errors
///
/// Returns a [`TurbineError`] if the yaw is not finite, the prior tilt lies
/// outside `[0°, 90°)`, the velocity field cannot be averaged, the thrust
/// curve yields a coefficient outside `[0, 1]`, or the floating tilt solve
/// fails.
pub fn evaluate(
    spec: &TurbineSpecification,
    conditions: &Conditions,
    iteration: TiltIteration,
) -> Result<TurbineState, TurbineError> {
    if !conditions.yaw.get::<degree>().is_finite() {
        return Err(TurbineError::InvalidYaw {
            yaw: conditions.yaw,
        });
    }
    if let Some(tilt) = conditions.tilt.filter(|&tilt| !is_physical_tilt(tilt)) {
        return Err(TurbineError::InvalidTilt { tilt });
    }

    let averaged = conditions.averaging.average(&conditions.field)?;
    let yaw = wrap_180(conditions.yaw);
    let prior_tilt = conditions.tilt.unwrap_or_else(|| spec.reference_tilt());

    let resolved = tilt::resolve(averaged, yaw, prior_tilt, spec, iteration)?;

    let ct = thrust_coefficient(resolved.velocity, spec);
    let ct = ThrustCoefficient::new(ct).map_err(|_| TurbineError::InvalidCt { ct })?;
    let power = curves::power(resolved.velocity, spec, conditions.air_density);

    trace!(
        turbine_type = spec.turbine_type(),
        averaged_mps = averaged.get::<meter_per_second>(),
        effective_mps = resolved.velocity.get::<meter_per_second>(),
        tilt_deg = resolved.tilt.get::<degree>(),
        ct = ct.value(),
        power_kw = power.get::<kilowatt>(),
        "turbine evaluated"
    );

    Ok(TurbineState {
        effective_velocity: resolved.velocity,
        tilt: resolved.tilt,
        thrust_coefficient: ct,
        axial_induction: AxialInduction::from_thrust_coefficient(ct),
        power,
        tilt_iterations: resolved.iters,
    })
}
