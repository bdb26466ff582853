use thiserror::Error;
use twine_solvers::equation::bisection;
use uom::si::f64::Velocity;

/// Errors that can occur while resolving floating tilt.
#[derive(Debug, Error)]
pub enum TiltError {
    /// The bisection solver encountered an error.
    #[error("bisection solver error")]
    Bisection(#[from] bisection::Error),

    /// The bisection search hit its iteration limit without converging.
    #[error("tilt iteration hit iteration limit: residual={residual:?}")]
    MaxIters {
        /// `implied - candidate` effective velocity at the best estimate.
        residual: Velocity,

        /// Bisection steps taken.
        iters: usize,
    },
}
