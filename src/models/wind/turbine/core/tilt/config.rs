use uom::si::{f64::Velocity, velocity::meter_per_second};

/// How the coupling between floating tilt and effective velocity is resolved.
///
/// A floating turbine's tilt depends on its effective wind speed, which in
/// turn depends on the tilt. Only turbines whose curves are corrected for
/// tilt need this; others are evaluated directly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TiltIteration {
    /// One pass: the tilt is read at the speed implied by the prior tilt.
    SinglePass,

    /// Repeats the tilt lookup until the effective velocity stops changing.
    ///
    /// A steep tilt table can make the lookup oscillate between two speeds.
    /// When `max_iters` lookups do not settle, the coupling is resolved by
    /// bisection as for [`TiltIteration::Bracketed`].
    FixedPoint(TiltSolveConfig),

    /// Bisection on the effective velocity between the speeds at the
    /// table's extreme tilts.
    Bracketed(TiltSolveConfig),
}

impl Default for TiltIteration {
    fn default() -> Self {
        Self::FixedPoint(TiltSolveConfig::default())
    }
}

/// Limits for resolving floating tilt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TiltSolveConfig {
    /// Maximum tilt lookups, or bisection steps when bracketing.
    pub max_iters: usize,

    /// Largest `|implied - candidate|` effective velocity accepted as
    /// self-consistent.
    pub velocity_tol: Velocity,
}

impl Default for TiltSolveConfig {
    fn default() -> Self {
        Self {
            max_iters: 100,
            velocity_tol: Velocity::new::<meter_per_second>(1e-9),
        }
    }
}
