//! Resolution of the floating tilt and effective velocity coupling.
//!
//! A floating platform tilts with the wind speed it sees, and the tilt in turn
//! reduces that speed. When a turbine's curves are corrected for tilt, the
//! tilt and effective velocity must be consistent with each other; this
//! module resolves that coupling by single pass, fixed-point iteration, or
//! bisection.

mod config;
mod error;
mod problem;

pub use config::{TiltIteration, TiltSolveConfig};
pub use error::TiltError;

use tracing::{debug, trace};
use twine_solvers::equation::bisection;
use uom::si::{
    angle::degree,
    f64::{Angle, Velocity},
    velocity::meter_per_second,
};

use super::{FloatingTilt, TurbineSpecification};

use problem::{TiltModel, TiltPoint, TiltProblem};

/// Effective velocity and tilt after resolving the floating coupling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct ResolvedTilt {
    pub(super) velocity: Velocity,
    pub(super) tilt: Angle,
    pub(super) iters: usize,
}

impl ResolvedTilt {
    fn at(point: TiltPoint, iters: usize) -> Self {
        Self {
            velocity: point.velocity,
            tilt: point.tilt,
            iters,
        }
    }
}

/// Resolves the effective velocity and tilt of one turbine.
///
/// - Fixed-bottom turbines use `prior_tilt` directly.
/// - Floating turbines with uncorrected curves report the table tilt but use
///   the reference tilt for the velocity correction.
/// - Floating turbines with corrected curves resolve the coupling with
///   `iteration`, starting from `prior_tilt`.
///
/// # Errors
///
/// Returns [`TiltError`] if the bisection search, or the fixed-point
/// fallback to it, fails.
pub(super) fn resolve(
    averaged: Velocity,
    yaw: Angle,
    prior_tilt: Angle,
    spec: &TurbineSpecification,
    iteration: TiltIteration,
) -> Result<ResolvedTilt, TiltError> {
    let Some(floating) = spec.floating_tilt() else {
        return Ok(ResolvedTilt {
            velocity: super::rotor_effective_velocity(averaged, yaw, prior_tilt, spec),
            tilt: prior_tilt,
            iters: 0,
        });
    };

    let model = TiltModel::new(averaged, yaw, spec, floating);

    if !floating.corrects_curves() {
        let velocity = model.velocity_at(spec.reference_tilt());
        return Ok(ResolvedTilt {
            velocity,
            tilt: floating.tilt_at(velocity),
            iters: 0,
        });
    }

    let start = model.velocity_at(prior_tilt);

    match iteration {
        TiltIteration::SinglePass => Ok(ResolvedTilt::at(model.point(start), 1)),
        TiltIteration::FixedPoint(config) => match fixed_point(&model, start, config) {
            Some(resolved) => Ok(resolved),
            None => {
                let resolved = bracketed(&model, spec, floating, config)?;
                Ok(ResolvedTilt {
                    iters: config.max_iters + resolved.iters,
                    ..resolved
                })
            }
        },
        TiltIteration::Bracketed(config) => bracketed(&model, spec, floating, config),
    }
}

/// Repeated tilt lookups, or `None` if they do not settle within
/// `config.max_iters`.
fn fixed_point(
    model: &TiltModel<'_>,
    start: Velocity,
    config: TiltSolveConfig,
) -> Option<ResolvedTilt> {
    let tol = config.velocity_tol.get::<meter_per_second>();
    let mut speed = start;
    let mut residual = f64::INFINITY;

    for iter in 1..=config.max_iters {
        let point = model.point(speed);
        residual = (point.velocity - speed).get::<meter_per_second>().abs();
        trace!(iter, speed = point.velocity.get::<meter_per_second>(), residual);

        if residual <= tol {
            debug!(
                iters = iter,
                tilt_deg = point.tilt.get::<degree>(),
                "floating tilt converged"
            );
            return Some(ResolvedTilt::at(point, iter));
        }
        speed = point.velocity;
    }

    debug!(
        iters = config.max_iters,
        residual, "fixed-point tilt did not settle, falling back to bisection"
    );
    None
}

/// Bisection between the effective velocities at the extremes of the tilt
/// table.
///
/// Every tilt the table can return lies in [`FloatingTilt::tilt_range`], so
/// the self-consistent velocity lies between the speeds at the most and the
/// least misaligned tilts in that range.
fn bracketed(
    model: &TiltModel<'_>,
    spec: &TurbineSpecification,
    floating: &FloatingTilt,
    config: TiltSolveConfig,
) -> Result<ResolvedTilt, TiltError> {
    let tol = config.velocity_tol.get::<meter_per_second>();

    let (min_tilt, max_tilt) = floating.tilt_range();
    let least_misaligned = Angle::new::<degree>(
        spec.reference_tilt()
            .get::<degree>()
            .max(min_tilt.get::<degree>())
            .min(max_tilt.get::<degree>()),
    );
    let upper = model.velocity_at(least_misaligned);
    let [at_min, at_max] =
        [min_tilt, max_tilt].map(|tilt| model.velocity_at(tilt).get::<meter_per_second>());
    let lower = Velocity::new::<meter_per_second>(at_min.min(at_max));

    // Bisection needs a strict sign change, so a self-consistent edge is
    // returned directly. This covers calm wind and flat tables.
    for edge in [upper, lower] {
        let point = model.point(edge);
        if (point.velocity - edge).get::<meter_per_second>().abs() <= tol {
            return Ok(ResolvedTilt::at(point, 0));
        }
    }

    let solution = bisection::solve_unobserved(
        model,
        &TiltProblem,
        [
            lower.get::<meter_per_second>(),
            upper.get::<meter_per_second>(),
        ],
        &bisection::Config {
            max_iters: config.max_iters,
            x_abs_tol: 0.0,
            x_rel_tol: 0.0,
            residual_tol: tol,
        },
    )?;

    if solution.status != bisection::Status::Converged {
        debug!(
            iters = solution.iters,
            residual = solution.residual,
            "floating tilt did not converge"
        );
        return Err(TiltError::MaxIters {
            residual: Velocity::new::<meter_per_second>(solution.residual),
            iters: solution.iters,
        });
    }

    let point = solution.snapshot.output;
    debug!(
        iters = solution.iters,
        tilt_deg = point.tilt.get::<degree>(),
        "floating tilt converged"
    );

    Ok(ResolvedTilt::at(point, solution.iters))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::models::wind::turbine::core::{
        rotor_effective_velocity,
        test_support::{deg, floating, mps, steep_floating, two_megawatt},
    };

    fn resolve_at(
        spec: &TurbineSpecification,
        speed: f64,
        iteration: TiltIteration,
    ) -> ResolvedTilt {
        resolve(mps(speed), deg(0.0), deg(5.0), spec, iteration)
            .expect("tilt resolution should succeed")
    }

    fn resolve_at_prior(spec: &TurbineSpecification, speed: f64, prior: f64) -> ResolvedTilt {
        resolve(
            mps(speed),
            deg(0.0),
            deg(prior),
            spec,
            TiltIteration::Bracketed(TiltSolveConfig::default()),
        )
        .expect("tilt resolution should succeed")
    }

    #[test]
    fn fixed_bottom_keeps_prior_tilt() {
        let spec = two_megawatt();
        let resolved = resolve(mps(10.0), deg(0.0), deg(4.0), &spec, TiltIteration::default())
            .unwrap();

        assert_relative_eq!(resolved.tilt.get::<degree>(), 4.0, epsilon = 1e-12);
        assert_eq!(resolved.iters, 0);
        assert_relative_eq!(
            resolved.velocity.get::<meter_per_second>(),
            rotor_effective_velocity(mps(10.0), deg(0.0), deg(4.0), &spec)
                .get::<meter_per_second>()
        );
    }

    #[test]
    fn uncorrected_curves_report_tilt_without_iterating() {
        let spec = floating(false);
        let resolved = resolve_at(&spec, 10.0, TiltIteration::default());

        // Reference tilt is 5°, so the velocity is uncorrected.
        assert_relative_eq!(resolved.velocity.get::<meter_per_second>(), 10.0, epsilon = 1e-12);
        assert_relative_eq!(resolved.tilt.get::<degree>(), 7.5, epsilon = 1e-9);
        assert_eq!(resolved.iters, 0);
    }

    #[test]
    fn fixed_point_is_self_consistent() {
        let spec = floating(true);
        let resolved = resolve_at(&spec, 14.0, TiltIteration::default());

        let floating_tilt = spec.floating_tilt().unwrap();
        let tilt = floating_tilt.tilt_at(resolved.velocity);
        let implied = rotor_effective_velocity(mps(14.0), deg(0.0), tilt, &spec);

        assert_relative_eq!(
            implied.get::<meter_per_second>(),
            resolved.velocity.get::<meter_per_second>(),
            epsilon = 1e-8
        );
        assert_relative_eq!(resolved.tilt.get::<degree>(), tilt.get::<degree>(), epsilon = 1e-8);
        assert!(resolved.velocity < mps(14.0));
        assert!(resolved.iters >= 1);
    }

    #[test]
    fn bracketed_agrees_with_fixed_point() {
        let spec = floating(true);

        for speed in [4.0, 9.0, 14.0, 22.0] {
            let fixed = resolve_at(&spec, speed, TiltIteration::default());
            let bracketed = resolve_at(
                &spec,
                speed,
                TiltIteration::Bracketed(TiltSolveConfig::default()),
            );

            assert_relative_eq!(
                bracketed.velocity.get::<meter_per_second>(),
                fixed.velocity.get::<meter_per_second>(),
                epsilon = 1e-8
            );
            assert_relative_eq!(
                bracketed.tilt.get::<degree>(),
                fixed.tilt.get::<degree>(),
                epsilon = 1e-8
            );
        }
    }

    #[test]
    fn steep_table_falls_back_to_bisection() {
        let spec = steep_floating();
        let resolved = resolve(mps(10.5), deg(0.0), deg(0.0), &spec, TiltIteration::default())
            .expect("fallback should resolve the tilt");

        let floating_tilt = spec.floating_tilt().unwrap();
        let implied = rotor_effective_velocity(
            mps(10.5),
            deg(0.0),
            floating_tilt.tilt_at(resolved.velocity),
            &spec,
        );
        assert_relative_eq!(
            implied.get::<meter_per_second>(),
            resolved.velocity.get::<meter_per_second>(),
            epsilon = 1e-7
        );
        assert_relative_eq!(resolved.velocity.get::<meter_per_second>(), 10.0358, epsilon = 1e-3);
        assert!(resolved.iters > 100);

        let bracketed = resolve(
            mps(10.5),
            deg(0.0),
            deg(0.0),
            &spec,
            TiltIteration::Bracketed(TiltSolveConfig::default()),
        )
        .unwrap();
        assert_relative_eq!(
            bracketed.velocity.get::<meter_per_second>(),
            resolved.velocity.get::<meter_per_second>(),
            epsilon = 1e-8
        );
        assert_eq!(resolved.iters, 100 + bracketed.iters);
    }

    #[test]
    fn bracket_spans_the_tilt_table() {
        // Below the table every lookup returns 0°, so the lower edge is
        // already self-consistent.
        let spec = steep_floating();
        let resolved = resolve_at_prior(&spec, 8.0, 0.0);

        assert_relative_eq!(resolved.velocity.get::<meter_per_second>(), 8.0, epsilon = 1e-12);
        assert_relative_eq!(resolved.tilt.get::<degree>(), 0.0, epsilon = 1e-12);
        assert_eq!(resolved.iters, 0);
    }

    #[test]
    fn single_pass_reads_tilt_once() {
        let spec = floating(true);
        let resolved = resolve_at(&spec, 14.0, TiltIteration::SinglePass);

        // Prior tilt equals the reference tilt, so the lookup is at 14 m/s.
        assert_relative_eq!(resolved.tilt.get::<degree>(), 8.5, epsilon = 1e-9);
        assert_eq!(resolved.iters, 1);
    }

    #[test]
    fn zero_iterations_is_an_error() {
        let spec = floating(true);
        let result = resolve(
            mps(14.0),
            deg(0.0),
            deg(5.0),
            &spec,
            TiltIteration::FixedPoint(TiltSolveConfig {
                max_iters: 0,
                ..TiltSolveConfig::default()
            }),
        );

        assert!(matches!(result, Err(TiltError::MaxIters { iters: 0, .. })));
    }

    #[test]
    fn calm_wind_needs_no_bisection() {
        let spec = floating(true);
        let resolved = resolve_at(&spec, 0.0, TiltIteration::Bracketed(TiltSolveConfig::default()));

        assert_relative_eq!(resolved.velocity.get::<meter_per_second>(), 0.0);
        assert_relative_eq!(resolved.tilt.get::<degree>(), 5.0, epsilon = 1e-12);
        assert_eq!(resolved.iters, 0);
    }
}
