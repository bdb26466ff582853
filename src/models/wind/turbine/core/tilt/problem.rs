//! Problem formulation for floating tilt resolution.

use std::convert::Infallible;

use twine_core::{EquationProblem, Model};
use uom::si::{
    f64::{Angle, Velocity},
    velocity::meter_per_second,
};

use crate::models::wind::turbine::core::{
    FloatingTilt, TurbineSpecification, rotor_effective_velocity,
};

/// Tilt at a candidate speed and the effective velocity it implies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct TiltPoint {
    pub(super) tilt: Angle,
    pub(super) velocity: Velocity,
}

/// Maps a candidate effective speed to the tilt it produces and the effective
/// velocity at that tilt.
pub(super) struct TiltModel<'a> {
    averaged: Velocity,
    yaw: Angle,
    spec: &'a TurbineSpecification,
    floating: &'a FloatingTilt,
}

impl<'a> TiltModel<'a> {
    pub(super) fn new(
        averaged: Velocity,
        yaw: Angle,
        spec: &'a TurbineSpecification,
        floating: &'a FloatingTilt,
    ) -> Self {
        Self {
            averaged,
            yaw,
            spec,
            floating,
        }
    }

    /// Effective velocity at `tilt`.
    pub(super) fn velocity_at(&self, tilt: Angle) -> Velocity {
        rotor_effective_velocity(self.averaged, self.yaw, tilt, self.spec)
    }

    pub(super) fn point(&self, speed: Velocity) -> TiltPoint {
        let tilt = self.floating.tilt_at(speed);
        TiltPoint {
            tilt,
            velocity: self.velocity_at(tilt),
        }
    }
}

impl Model for TiltModel<'_> {
    type Input = Velocity;
    type Output = TiltPoint;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(self.point(*input))
    }
}

/// Equation problem for self-consistent tilt.
///
/// Computes the residual as `implied_velocity - candidate_velocity`.
pub(super) struct TiltProblem;

impl EquationProblem<1> for TiltProblem {
    type Input = Velocity;
    type Output = TiltPoint;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(Velocity::new::<meter_per_second>(x[0]))
    }

    fn residuals(
        &self,
        input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; 1], Self::Error> {
        Ok([(output.velocity - *input).get::<meter_per_second>()])
    }
}
