//! Static turbine specification.

use std::{f64::consts::PI, fmt};

use thiserror::Error;
use uom::si::{
    angle::degree,
    f64::{Angle, Area, Length, MassDensity, Power, Velocity},
    area::square_meter,
    length::meter,
    mass_density::kilogram_per_cubic_meter,
    power::watt,
    velocity::meter_per_second,
};

use crate::support::{
    constraint::{Constraint, ConstraintError, NonNegative, StrictlyPositive},
    curve::{CurveError, PerformanceCurve},
};

/// Default cosine exponent for power loss under rotor misalignment.
pub const DEFAULT_POWER_LOSS_EXPONENT: f64 = 1.88;

/// Identifies which curve of a specification failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveKind {
    Power,
    Thrust,
    FloatingTilt,
}

impl fmt::Display for CurveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Power => "power",
            Self::Thrust => "thrust",
            Self::FloatingTilt => "floating tilt",
        })
    }
}

/// Errors that can occur while building a [`TurbineSpecification`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SpecificationError {
    /// A performance curve is empty, non-monotonic, or contains non-finite entries.
    #[error("invalid {curve} curve")]
    Curve {
        curve: CurveKind,
        #[source]
        source: CurveError,
    },

    #[error("invalid rotor diameter: {diameter:?}")]
    RotorDiameter {
        diameter: Length,
        #[source]
        source: ConstraintError,
    },

    #[error("invalid hub height: {height:?}")]
    HubHeight {
        height: Length,
        #[source]
        source: ConstraintError,
    },

    #[error("invalid reference air density: {density:?}")]
    ReferenceDensity {
        density: MassDensity,
        #[source]
        source: ConstraintError,
    },

    #[error("invalid power loss exponent: {exponent}")]
    PowerLossExponent { exponent: f64 },

    #[error("invalid tilt loss exponent: {exponent}")]
    TiltLossExponent { exponent: f64 },

    /// Cut-in must be non-negative and strictly below cut-out.
    #[error("invalid operating range: cut_in={cut_in:?}, cut_out={cut_out:?}")]
    OperatingRange { cut_in: Velocity, cut_out: Velocity },

    /// A tilt angle lies outside `[0°, 90°)`.
    #[error("tilt angle {tilt:?} is outside [0°, 90°)")]
    TiltOutOfRange { tilt: Angle },
}

/// Wind speeds between which the turbine operates.
///
/// Thrust and power are zero strictly below cut-in and strictly above cut-out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OperatingRange {
    cut_in: Velocity,
    cut_out: Velocity,
}

impl OperatingRange {
    /// Creates an operating range.
    ///
    /// # Errors
    ///
    /// Returns [`SpecificationError::OperatingRange`] unless
    /// `0 ≤ cut_in < cut_out`.
    pub fn new(cut_in: Velocity, cut_out: Velocity) -> Result<Self, SpecificationError> {
        if NonNegative::check(&cut_in).is_err()
            || cut_out.get::<meter_per_second>().is_nan()
            || cut_in >= cut_out
        {
            return Err(SpecificationError::OperatingRange { cut_in, cut_out });
        }
        Ok(Self { cut_in, cut_out })
    }

    #[must_use]
    pub fn cut_in(&self) -> Velocity {
        self.cut_in
    }

    #[must_use]
    pub fn cut_out(&self) -> Velocity {
        self.cut_out
    }

    /// True if the turbine operates at `speed`. `NaN` is never in range.
    #[must_use]
    pub fn contains(&self, speed: Velocity) -> bool {
        self.cut_in <= speed && speed <= self.cut_out
    }
}

/// Parameters describing a floating platform's tilt response.
#[derive(Debug, Clone, PartialEq)]
pub struct FloatingTiltParameters {
    /// Platform tilt versus rotor effective wind speed.
    pub table: Vec<(Velocity, Angle)>,

    /// Whether the power and thrust curves need correcting for the tilt.
    ///
    /// Set to `false` when the curves were derived with the floating tilt
    /// behavior already included.
    pub correct_curves_for_tilt: bool,
}

/// Validated floating tilt behavior.
#[derive(Debug, Clone, PartialEq)]
pub struct FloatingTilt {
    /// Tilt in degrees versus speed in m/s.
    table: PerformanceCurve,
    correct_curves_for_tilt: bool,
}

impl FloatingTilt {
    fn new(parameters: FloatingTiltParameters) -> Result<Self, SpecificationError> {
        for &(_, tilt) in &parameters.table {
            check_tilt(tilt)?;
        }

        let table = PerformanceCurve::from_points(
            parameters
                .table
                .iter()
                .map(|(v, tilt)| (v.get::<meter_per_second>(), tilt.get::<degree>())),
        )
        .map_err(|source| SpecificationError::Curve {
            curve: CurveKind::FloatingTilt,
            source,
        })?;

        Ok(Self {
            table,
            correct_curves_for_tilt: parameters.correct_curves_for_tilt,
        })
    }

    /// Returns the platform tilt at `speed`, clamped to the table ends.
    #[must_use]
    pub fn tilt_at(&self, speed: Velocity) -> Angle {
        Angle::new::<degree>(self.table.interpolate(speed.get::<meter_per_second>()))
    }

    /// Whether the performance curves are corrected for this tilt.
    #[must_use]
    pub fn corrects_curves(&self) -> bool {
        self.correct_curves_for_tilt
    }

    /// Smallest and largest tilt in the table.
    ///
    /// Every tilt returned by [`FloatingTilt::tilt_at`] lies in this range.
    #[must_use]
    pub fn tilt_range(&self) -> (Angle, Angle) {
        let (min, max) = self
            .table
            .values()
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), &tilt| {
                (min.min(tilt), max.max(tilt))
            });
        (Angle::new::<degree>(min), Angle::new::<degree>(max))
    }
}

/// Inputs for building a [`TurbineSpecification`].
///
/// Construct with [`TurbineParameters::new`] and adjust the optional
/// settings with the `with_*` methods.
#[derive(Debug, Clone, PartialEq)]
pub struct TurbineParameters {
    pub turbine_type: String,
    pub rotor_diameter: Length,
    pub hub_height: Length,

    /// Electrical power versus wind speed at the reference air density.
    pub power_curve: Vec<(Velocity, Power)>,

    /// Thrust coefficient versus wind speed.
    pub thrust_curve: Vec<(Velocity, f64)>,

    /// Air density at which the power curve was derived.
    pub reference_air_density: MassDensity,

    /// Rotor tilt at which the power and thrust curves were derived.
    pub reference_tilt: Angle,

    /// Cosine exponent `pP` for power loss under yaw misalignment.
    pub power_loss_exponent: f64,

    /// Cosine exponent `pT` for power loss under tilt misalignment; `None`
    /// uses the power loss exponent.
    pub tilt_loss_exponent: Option<f64>,

    /// Cut-in and cut-out speeds; defaults to the power curve's domain.
    pub operating_range: Option<(Velocity, Velocity)>,

    /// Tilt behavior for floating turbines; `None` for fixed-bottom turbines.
    pub floating_tilt: Option<FloatingTiltParameters>,
}

impl TurbineParameters {
    /// Creates parameters with sea-level reference density, zero reference
    /// tilt, the default power loss exponent (also used for tilt) and no
    /// floating behavior.
    #[must_use]
    pub fn new(
        turbine_type: impl Into<String>,
        rotor_diameter: Length,
        hub_height: Length,
        power_curve: Vec<(Velocity, Power)>,
        thrust_curve: Vec<(Velocity, f64)>,
    ) -> Self {
        Self {
            turbine_type: turbine_type.into(),
            rotor_diameter,
            hub_height,
            power_curve,
            thrust_curve,
            reference_air_density: MassDensity::new::<kilogram_per_cubic_meter>(1.225),
            reference_tilt: Angle::new::<degree>(0.0),
            power_loss_exponent: DEFAULT_POWER_LOSS_EXPONENT,
            tilt_loss_exponent: None,
            operating_range: None,
            floating_tilt: None,
        }
    }

    /// Sets the air density the power curve was measured at.
    #[must_use]
    pub fn with_reference_air_density(mut self, density: MassDensity) -> Self {
        self.reference_air_density = density;
        self
    }

    /// Sets the tilt the curves were derived at. Must lie in `[0°, 90°)`.
    #[must_use]
    pub fn with_reference_tilt(mut self, tilt: Angle) -> Self {
        self.reference_tilt = tilt;
        self
    }

    #[must_use]
    pub fn with_power_loss_exponent(mut self, exponent: f64) -> Self {
        self.power_loss_exponent = exponent;
        self
    }

    /// Gives tilt its own cosine loss exponent instead of sharing `pP`.
    #[must_use]
    pub fn with_tilt_loss_exponent(mut self, exponent: f64) -> Self {
        self.tilt_loss_exponent = Some(exponent);
        self
    }

    /// Overrides the cut-in and cut-out speeds.
    #[must_use]
    pub fn with_operating_range(mut self, cut_in: Velocity, cut_out: Velocity) -> Self {
        self.operating_range = Some((cut_in, cut_out));
        self
    }

    /// Makes the turbine floating, with `table` giving platform tilt versus
    /// rotor effective speed.
    #[must_use]
    pub fn with_floating_tilt(
        mut self,
        table: Vec<(Velocity, Angle)>,
        correct_curves_for_tilt: bool,
    ) -> Self {
        self.floating_tilt = Some(FloatingTiltParameters {
            table,
            correct_curves_for_tilt,
        });
        self
    }
}

/// Immutable description of a turbine type.
///
/// Built once from [`TurbineParameters`] and shared read-only by every
/// evaluation of turbines of that type.
#[derive(Debug, Clone, PartialEq)]
pub struct TurbineSpecification {
    turbine_type: String,
    rotor_diameter: Length,
    hub_height: Length,
    reference_air_density: MassDensity,
    reference_tilt: Angle,
    power_loss_exponent: f64,
    tilt_loss_exponent: f64,
    /// Power in watts versus speed in m/s.
    power_curve: PerformanceCurve,
    thrust_curve: PerformanceCurve,
    operating_range: OperatingRange,
    floating_tilt: Option<FloatingTilt>,
}

impl TurbineSpecification {
    /// Validates `parameters` and builds a specification.
    ///
    /// # Errors
    ///
    /// Returns a [`SpecificationError`] if geometry or reference density is
    /// not strictly positive, a curve is malformed, the operating range is
    /// inverted, or a tilt lies outside `[0°, 90°)`.
    pub fn new(parameters: TurbineParameters) -> Result<Self, SpecificationError> {
        let TurbineParameters {
            turbine_type,
            rotor_diameter,
            hub_height,
            power_curve,
            thrust_curve,
            reference_air_density,
            reference_tilt,
            power_loss_exponent,
            tilt_loss_exponent,
            operating_range,
            floating_tilt,
        } = parameters;

        StrictlyPositive::check(&rotor_diameter).map_err(|source| {
            SpecificationError::RotorDiameter {
                diameter: rotor_diameter,
                source,
            }
        })?;
        StrictlyPositive::check(&hub_height).map_err(|source| SpecificationError::HubHeight {
            height: hub_height,
            source,
        })?;
        StrictlyPositive::check(&reference_air_density).map_err(|source| {
            SpecificationError::ReferenceDensity {
                density: reference_air_density,
                source,
            }
        })?;

        if !is_loss_exponent(power_loss_exponent) {
            return Err(SpecificationError::PowerLossExponent {
                exponent: power_loss_exponent,
            });
        }
        let tilt_loss_exponent = tilt_loss_exponent.unwrap_or(power_loss_exponent);
        if !is_loss_exponent(tilt_loss_exponent) {
            return Err(SpecificationError::TiltLossExponent {
                exponent: tilt_loss_exponent,
            });
        }

        check_tilt(reference_tilt)?;

        let power_curve = PerformanceCurve::from_points(
            power_curve
                .iter()
                .map(|(v, p)| (v.get::<meter_per_second>(), p.get::<watt>())),
        )
        .map_err(|source| SpecificationError::Curve {
            curve: CurveKind::Power,
            source,
        })?;

        let thrust_curve = PerformanceCurve::from_points(
            thrust_curve
                .iter()
                .map(|&(v, ct)| (v.get::<meter_per_second>(), ct)),
        )
        .map_err(|source| SpecificationError::Curve {
            curve: CurveKind::Thrust,
            source,
        })?;

        let (cut_in, cut_out) = operating_range.unwrap_or_else(|| {
            let (first, last) = power_curve.domain();
            (
                Velocity::new::<meter_per_second>(first),
                Velocity::new::<meter_per_second>(last),
            )
        });
        let operating_range = OperatingRange::new(cut_in, cut_out)?;

        let floating_tilt = floating_tilt.map(FloatingTilt::new).transpose()?;

        Ok(Self {
            turbine_type,
            rotor_diameter,
            hub_height,
            reference_air_density,
            reference_tilt,
            power_loss_exponent,
            tilt_loss_exponent,
            power_curve,
            thrust_curve,
            operating_range,
            floating_tilt,
        })
    }

    #[must_use]
    pub fn turbine_type(&self) -> &str {
        &self.turbine_type
    }

    #[must_use]
    pub fn rotor_diameter(&self) -> Length {
        self.rotor_diameter
    }

    #[must_use]
    pub fn rotor_radius(&self) -> Length {
        Length::new::<meter>(self.rotor_diameter.get::<meter>() / 2.0)
    }

    /// Returns the rotor-swept area `π R²`.
    #[must_use]
    pub fn rotor_area(&self) -> Area {
        let radius = self.rotor_radius().get::<meter>();
        Area::new::<square_meter>(PI * radius * radius)
    }

    #[must_use]
    pub fn hub_height(&self) -> Length {
        self.hub_height
    }

    #[must_use]
    pub fn reference_air_density(&self) -> MassDensity {
        self.reference_air_density
    }

    #[must_use]
    pub fn reference_tilt(&self) -> Angle {
        self.reference_tilt
    }

    #[must_use]
    pub fn power_loss_exponent(&self) -> f64 {
        self.power_loss_exponent
    }

    /// Cosine exponent applied to tilt misalignment.
    #[must_use]
    pub fn tilt_loss_exponent(&self) -> f64 {
        self.tilt_loss_exponent
    }

    #[must_use]
    pub fn operating_range(&self) -> OperatingRange {
        self.operating_range
    }

    /// Floating tilt behavior, or `None` for a fixed-bottom turbine.
    #[must_use]
    pub fn floating_tilt(&self) -> Option<&FloatingTilt> {
        self.floating_tilt.as_ref()
    }

    /// Power curve: watts versus m/s at the reference air density.
    #[must_use]
    pub fn power_curve(&self) -> &PerformanceCurve {
        &self.power_curve
    }

    /// Thrust coefficient versus m/s.
    #[must_use]
    pub fn thrust_curve(&self) -> &PerformanceCurve {
        &self.thrust_curve
    }
}

/// True if `tilt` lies in `[0°, 90°)`. `NaN` is never in range.
pub(super) fn is_physical_tilt(tilt: Angle) -> bool {
    (0.0..90.0).contains(&tilt.get::<degree>())
}

fn is_loss_exponent(exponent: f64) -> bool {
    exponent.is_finite() && exponent >= 0.0
}

fn check_tilt(tilt: Angle) -> Result<(), SpecificationError> {
    if is_physical_tilt(tilt) {
        Ok(())
    } else {
        Err(SpecificationError::TiltOutOfRange { tilt })
    }
}
