//! Quadrature rules over a rotor-swept disk.
//!
//! A [`DiskCubature`] places sample points on the rotor disk and assigns each
//! an area weight, so that `Σ wᵢ f(pᵢ)` approximates `∫ f dA`. The rule is a
//! product of Gauss-Legendre nodes in the radial direction (with the polar
//! Jacobian `r` folded into the weights) and evenly spaced angles.
//!
//! The weights sum to the swept area `π R²` exactly (up to rounding), which
//! makes them directly usable with the cubature averaging methods.

use std::f64::consts::PI;

use thiserror::Error;
use uom::si::{
    f64::{Area, Length},
    area::square_meter,
    length::meter,
};

use crate::support::constraint::{ConstraintError, StrictlyPositive};

/// Gauss-Legendre nodes and weights on `[-1, 1]`, indexed by order - 1.
const GAUSS_LEGENDRE: [&[(f64, f64)]; 5] = [
    &[(0.0, 2.0)],
    &[(-0.577_350_269_189_625_8, 1.0), (0.577_350_269_189_625_8, 1.0)],
    &[
        (-0.774_596_669_241_483_4, 0.555_555_555_555_555_6),
        (0.0, 0.888_888_888_888_888_9),
        (0.774_596_669_241_483_4, 0.555_555_555_555_555_6),
    ],
    &[
        (-0.861_136_311_594_052_6, 0.347_854_845_137_453_9),
        (-0.339_981_043_584_856_3, 0.652_145_154_862_546_1),
        (0.339_981_043_584_856_3, 0.652_145_154_862_546_1),
        (0.861_136_311_594_052_6, 0.347_854_845_137_453_9),
    ],
    &[
        (-0.906_179_845_938_664_0, 0.236_926_885_056_189_1),
        (-0.538_469_310_105_683_1, 0.478_628_670_499_366_5),
        (0.0, 0.568_888_888_888_888_9),
        (0.538_469_310_105_683_1, 0.478_628_670_499_366_5),
        (0.906_179_845_938_664_0, 0.236_926_885_056_189_1),
    ],
];

/// Errors that can occur while building a [`DiskCubature`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CubatureError {
    /// The rotor diameter is not strictly positive.
    #[error("invalid rotor diameter")]
    Diameter(#[source] ConstraintError),

    /// The radial order is outside the supported range.
    #[error("radial order {order} is not supported (expected 1 to {max})")]
    UnsupportedOrder { order: usize, max: usize },

    /// At least one angular station is required.
    #[error("cubature needs at least one angular station")]
    NoAngularStations,
}

/// A sample point on the rotor disk, relative to the hub center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiskPoint {
    /// Lateral offset from the hub, positive to the right looking downstream.
    pub y: Length,

    /// Vertical offset from the hub, positive upward.
    pub z: Length,
}

/// Points and area weights of a quadrature rule over a rotor disk.
#[derive(Debug, Clone, PartialEq)]
pub struct DiskCubature {
    points: Vec<DiskPoint>,
    weights: Vec<f64>,
}

impl DiskCubature {
    /// Highest supported radial order.
    pub const MAX_RADIAL_ORDER: usize = GAUSS_LEGENDRE.len();

    /// Builds a rule with `radial` Gauss-Legendre rings and `angular` stations
    /// per ring.
    ///
    /// # Errors
    ///
    /// Returns a [`CubatureError`] if the diameter is not positive, the radial
    /// order is unsupported, or `angular` is zero.
    pub fn new(
        rotor_diameter: Length,
        radial: usize,
        angular: usize,
    ) -> Result<Self, CubatureError> {
        let radius = StrictlyPositive::new(rotor_diameter.get::<meter>())
            .map_err(CubatureError::Diameter)?
            .into_inner()
            / 2.0;

        if radial == 0 || radial > Self::MAX_RADIAL_ORDER {
            return Err(CubatureError::UnsupportedOrder {
                order: radial,
                max: Self::MAX_RADIAL_ORDER,
            });
        }
        if angular == 0 {
            return Err(CubatureError::NoAngularStations);
        }

        let d_theta = 2.0 * PI / angular as f64;
        let mut points = Vec::with_capacity(radial * angular);
        let mut weights = Vec::with_capacity(radial * angular);

        for &(node, weight) in GAUSS_LEGENDRE[radial - 1] {
            let r = radius * (node + 1.0) / 2.0;
            // Polar Jacobian r dr dθ, with dr = R/2 dt on the reference interval.
            let ring_weight = weight * (radius / 2.0) * r * d_theta;

            for j in 0..angular {
                let theta = d_theta * j as f64;
                points.push(DiskPoint {
                    y: Length::new::<meter>(r * theta.cos()),
                    z: Length::new::<meter>(r * theta.sin()),
                });
                weights.push(ring_weight);
            }
        }

        Ok(Self { points, weights })
    }

    /// Returns the sample points.
    #[must_use]
    pub fn points(&self) -> &[DiskPoint] {
        &self.points
    }

    /// Returns the area weights in square meters, one per point.
    #[must_use]
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Returns the total area covered by the weights.
    #[must_use]
    pub fn area(&self) -> Area {
        Area::new::<square_meter>(self.weights.iter().sum())
    }
}
