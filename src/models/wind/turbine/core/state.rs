use uom::si::f64::{Angle, Power, Velocity};

use crate::support::actuator_disk::{AxialInduction, ThrustCoefficient};

/// Aerodynamic state of one turbine at one flow condition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TurbineState {
    /// Rotor-averaged speed corrected for yaw and tilt.
    pub effective_velocity: Velocity,

    /// Rotor tilt used for the evaluation.
    ///
    /// For floating turbines this is the platform tilt at
    /// `effective_velocity`.
    pub tilt: Angle,

    /// Thrust coefficient at `effective_velocity`.
    pub thrust_coefficient: ThrustCoefficient,

    /// Axial induction corresponding to `thrust_coefficient`.
    pub axial_induction: AxialInduction,

    /// Electrical power at the ambient air density.
    pub power: Power,

    /// Iterations spent resolving floating tilt; zero when none were needed.
    pub tilt_iterations: usize,
}
