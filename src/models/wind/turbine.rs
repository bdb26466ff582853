//! Wind turbine rotor model.
//!
//! [`Turbine`] evaluates the aerodynamic state of one turbine type for a
//! given inflow: rotor effective velocity, tilt, thrust coefficient, axial
//! induction, and power. It implements [`twine_core::Model`] with
//! [`Conditions`] as input and [`TurbineState`] as output.
//!
//! ```
//! use turbine_models::models::wind::turbine::{
//!     Conditions, Turbine, TurbineParameters, TurbineSpecification, VelocityField,
//! };
//! use uom::si::{
//!     f64::{Length, Power, Velocity},
//!     length::meter,
//!     power::kilowatt,
//!     velocity::meter_per_second,
//! };
//!
//! let mps = |v: f64| Velocity::new::<meter_per_second>(v);
//! let kw = |p: f64| Power::new::<kilowatt>(p);
//!
//! let spec = TurbineSpecification::new(TurbineParameters::new(
//!     "two_mw",
//!     Length::new::<meter>(90.0),
//!     Length::new::<meter>(80.0),
//!     vec![(mps(3.0), kw(0.0)), (mps(12.0), kw(2000.0)), (mps(25.0), kw(2000.0))],
//!     vec![(mps(3.0), 0.8), (mps(12.0), 0.75), (mps(25.0), 0.1)],
//! ))
//! .unwrap();
//!
//! let turbine = Turbine::new(spec);
//! let state = turbine
//!     .evaluate(&Conditions::at_standard_density(VelocityField::uniform(mps(12.0), 9)))
//!     .unwrap();
//!
//! assert!((state.power.get::<kilowatt>() - 2000.0).abs() < 1e-9);
//! ```

mod core;

pub use self::core::{
    AveragingError, AveragingMethod, Conditions, CurveKind, DEFAULT_POWER_LOSS_EXPONENT,
    FloatingTilt, FloatingTiltParameters, OperatingRange, SpecificationError, TiltError,
    TiltIteration, TiltSolveConfig, TurbineError, TurbineParameters, TurbineSpecification,
    TurbineState, VelocityField, axial_induction, axial_induction_from_ct,
    compute_tilt_angles_for_floating_turbines, cubic_cubature, cubic_mean, floating_tilt_angle,
    power, power_curve_from_coefficients, rotor_effective_velocity, simple_cubature, simple_mean,
    thrust_coefficient,
};

use std::sync::Arc;

use rayon::prelude::*;
use twine_core::Model;

/// Configuration for turbine evaluation.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TurbineConfig {
    /// How floating tilt is resolved for turbines with tilt-corrected curves.
    pub tilt: TiltIteration,
}

/// A turbine of one type.
///
/// Holds a shared, immutable [`TurbineSpecification`]; cloning a `Turbine`
/// does not copy the curves. Evaluation keeps no state between calls.
#[derive(Debug, Clone)]
pub struct Turbine {
    spec: Arc<TurbineSpecification>,
    config: TurbineConfig,
}

impl Turbine {
    /// Creates a turbine with the default configuration.
    #[must_use]
    pub fn new(spec: impl Into<Arc<TurbineSpecification>>) -> Self {
        Self::with_config(spec, TurbineConfig::default())
    }

    #[must_use]
    pub fn with_config(spec: impl Into<Arc<TurbineSpecification>>, config: TurbineConfig) -> Self {
        Self {
            spec: spec.into(),
            config,
        }
    }

    #[must_use]
    pub fn spec(&self) -> &TurbineSpecification {
        &self.spec
    }

    #[must_use]
    pub fn config(&self) -> TurbineConfig {
        self.config
    }

    /// Evaluates the turbine at one flow condition.
    ///
    /// # Errors
    ///
    /// Returns a [`TurbineError`] if the yaw or prior tilt is invalid, the
    /// velocity field is invalid, the thrust curve yields a coefficient
    /// outside `[0, 1]`, or floating tilt fails to resolve.
    pub fn evaluate(&self, conditions: &Conditions) -> Result<TurbineState, TurbineError> {
        self::core::evaluate(&self.spec, conditions, self.config.tilt)
    }

    /// Evaluates the turbine at many flow conditions in parallel.
    ///
    /// States are returned in the order of `conditions`.
    ///
    /// # Errors
    ///
    /// Returns a [`TurbineError`] if any evaluation fails, as for
    /// [`Turbine::evaluate`].
    pub fn evaluate_many(
        &self,
        conditions: &[Conditions],
    ) -> Result<Vec<TurbineState>, TurbineError> {
        conditions
            .par_iter()
            .map(|conditions| self.evaluate(conditions))
            .collect()
    }
}

impl Model for Turbine {
    type Input = Conditions;
    type Output = TurbineState;
    type Error = TurbineError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self.evaluate(input)
    }
}
