use uom::si::f64::Velocity;

use crate::support::cubature::{DiskCubature, DiskPoint};

/// Wind-speed samples across a rotor-swept disk.
///
/// Holds the streamwise velocity at each sample point for one turbine at one
/// flow condition, optionally paired with quadrature weights for the cubature
/// averaging methods. The field is not validated on construction; the
/// averaging functions reject empty fields and mismatched weights.
#[derive(Debug, Clone, PartialEq)]
pub struct VelocityField {
    samples: Vec<Velocity>,
    weights: Option<Vec<f64>>,
}

impl VelocityField {
    /// Creates a field from samples without quadrature weights.
    #[must_use]
    pub fn new(samples: Vec<Velocity>) -> Self {
        Self {
            samples,
            weights: None,
        }
    }

    /// Creates a field from samples and their quadrature weights.
    ///
    /// Weights may sum to the swept area or to one.
    #[must_use]
    pub fn with_weights(samples: Vec<Velocity>, weights: Vec<f64>) -> Self {
        Self {
            samples,
            weights: Some(weights),
        }
    }

    /// Creates a field of `count` identical samples.
    #[must_use]
    pub fn uniform(speed: Velocity, count: usize) -> Self {
        Self::new(vec![speed; count])
    }

    /// Samples `velocity_at` at each point of a disk cubature rule and keeps
    /// the rule's area weights.
    #[must_use]
    pub fn from_cubature(
        cubature: &DiskCubature,
        velocity_at: impl Fn(&DiskPoint) -> Velocity,
    ) -> Self {
        Self::with_weights(
            cubature.points().iter().map(velocity_at).collect(),
            cubature.weights().to_vec(),
        )
    }

    /// Returns the velocity samples.
    #[must_use]
    pub fn samples(&self) -> &[Velocity] {
        &self.samples
    }

    /// Returns the quadrature weights, if any.
    #[must_use]
    pub fn weights(&self) -> Option<&[f64]> {
        self.weights.as_deref()
    }
}
