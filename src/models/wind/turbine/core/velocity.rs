//! Rotor effective velocity and floating platform tilt.

use uom::si::{
    angle::radian,
    f64::{Angle, Velocity},
    velocity::meter_per_second,
};

use super::{TurbineError, TurbineSpecification};

/// Corrects a rotor-averaged speed for yaw and tilt misalignment.
///
/// Yaw reduces the speed by `cos(yaw)^(pP / 3)`, where `pP` is the
/// specification's power loss exponent, so that power (∝ `v³`) drops by
/// `cos(yaw)^pP`. Tilt does the same with the tilt loss exponent `pT`, and is
/// measured relative to the reference tilt at which the curves were derived.
/// Cosines of misalignments beyond 90° are taken as zero.
///
/// Air density is not applied here; [`power`](super::power) scales by density
/// directly.
#[must_use]
pub fn rotor_effective_velocity(
    averaged: Velocity,
    yaw: Angle,
    tilt: Angle,
    spec: &TurbineSpecification,
) -> Velocity {
    let yaw_factor = misalignment_factor(yaw, spec.power_loss_exponent() / 3.0);
    let tilt_factor = misalignment_factor(
        tilt - spec.reference_tilt(),
        spec.tilt_loss_exponent() / 3.0,
    );

    Velocity::new::<meter_per_second>(
        averaged.get::<meter_per_second>() * yaw_factor * tilt_factor,
    )
}

fn misalignment_factor(angle: Angle, exponent: f64) -> f64 {
    angle.get::<radian>().cos().max(0.0).powf(exponent)
}

/// Tilt of one turbine at `speed`.
///
/// Floating turbines read their tilt table; fixed-bottom turbines keep
/// `prior`.
#[must_use]
pub fn floating_tilt_angle(spec: &TurbineSpecification, speed: Velocity, prior: Angle) -> Angle {
    spec.floating_tilt()
        .map_or(prior, |floating| floating.tilt_at(speed))
}

/// Tilt angles for a set of turbines at their rotor effective speeds.
///
/// Floating turbines take the tilt from their table at the matching speed.
/// Fixed-bottom turbines keep the corresponding entry of `tilts`.
///
/// # Errors
///
/// Returns [`TurbineError::DimensionMismatch`] if `tilts` or `velocities`
/// does not have one entry per specification.
pub fn compute_tilt_angles_for_floating_turbines(
    specs: &[&TurbineSpecification],
    tilts: &[Angle],
    velocities: &[Velocity],
) -> Result<Vec<Angle>, TurbineError> {
    for actual in [tilts.len(), velocities.len()] {
        if actual != specs.len() {
            return Err(TurbineError::DimensionMismatch {
                expected: specs.len(),
                actual,
            });
        }
    }

    Ok(specs
        .iter()
        .zip(tilts)
        .zip(velocities)
        .map(|((spec, &tilt), &speed)| floating_tilt_angle(spec, speed, tilt))
        .collect())
}
