//! Per-evaluation flow conditions at a turbine.

use uom::si::{
    angle::degree,
    f64::{Angle, MassDensity},
    mass_density::kilogram_per_cubic_meter,
};

use super::{AveragingMethod, VelocityField};

/// Inflow and operating state of one turbine at one flow condition.
///
/// Construct with [`Conditions::new`] and adjust the rest with the `with_*`
/// methods. Yaw defaults to zero and tilt to the specification's reference
/// tilt.
#[derive(Debug, Clone, PartialEq)]
pub struct Conditions {
    /// Velocity samples across the rotor.
    pub field: VelocityField,

    /// How the field is reduced to a single speed.
    pub averaging: AveragingMethod,

    /// Ambient air density.
    pub air_density: MassDensity,

    /// Yaw misalignment between rotor axis and wind direction.
    pub yaw: Angle,

    /// Rotor tilt before floating-platform adjustment; `None` for the
    /// reference tilt.
    pub tilt: Option<Angle>,
}

impl Conditions {
    /// Aligned conditions at `air_density` with the default averaging
    /// method and the reference tilt.
    #[must_use]
    pub fn new(field: VelocityField, air_density: MassDensity) -> Self {
        Self {
            field,
            averaging: AveragingMethod::default(),
            air_density,
            yaw: Angle::new::<degree>(0.0),
            tilt: None,
        }
    }

    /// Conditions at sea-level standard density (1.225 kg/m³).
    #[must_use]
    pub fn at_standard_density(field: VelocityField) -> Self {
        Self::new(field, MassDensity::new::<kilogram_per_cubic_meter>(1.225))
    }

    /// Replaces the default [`AveragingMethod::CubicMean`].
    #[must_use]
    pub fn with_averaging(mut self, averaging: AveragingMethod) -> Self {
        self.averaging = averaging;
        self
    }

    /// Sets the yaw misalignment. Any finite angle is accepted and wrapped to
    /// `(-180°, 180°]` at evaluation.
    #[must_use]
    pub fn with_yaw(mut self, yaw: Angle) -> Self {
        self.yaw = yaw;
        self
    }

    /// Sets the prior rotor tilt, which must lie in `[0°, 90°)`.
    ///
    /// Fixed-bottom turbines use it as is. Floating turbines with
    /// tilt-corrected curves start their tilt iteration from it.
    #[must_use]
    pub fn with_tilt(mut self, tilt: Angle) -> Self {
        self.tilt = Some(tilt);
        self
    }
}
