use thiserror::Error;
use twine_solvers::equation::bisection;
use uom::si::f64::{TemperatureInterval, ThermodynamicTemperature, Velocity};

use crate::models::thermal::heat_sink::core::ThermalError;

/// Errors that can occur while sizing the air velocity.
#[derive(Debug, Error)]
pub enum SizingError {
    /// The resistance network could not be evaluated.
    #[error(transparent)]
    Thermal(#[from] ThermalError),

    /// The bisection solver encountered an error.
    #[error("bisection solver error")]
    Bisection(#[from] bisection::Error),

    /// Even the fastest allowed air leaves the junction above the target.
    #[error("target unreachable: junction reaches {best:?} at {max_velocity:?}")]
    Unreachable {
        /// Junction temperature at the upper velocity bound.
        best: ThermodynamicTemperature,

        /// The upper velocity bound.
        max_velocity: Velocity,
    },

    /// No velocity gives the target: the junction temperature jumps across it.
    #[error(
        "target falls in a jump of the junction temperature near {velocity:?}: closest reached {closest:?}"
    )]
    Discontinuous {
        /// Velocity where the search converged.
        velocity: Velocity,

        /// Junction temperature at that velocity.
        closest: ThermodynamicTemperature,

        /// Signed distance from the target at that velocity.
        residual: TemperatureInterval,
    },

    /// The solver reached the iteration limit without converging.
    #[error("solver hit iteration limit: residual={residual:?}")]
    MaxIters {
        /// Best junction temperature residual achieved.
        residual: TemperatureInterval,

        /// Iteration count performed by the solver.
        iters: usize,
    },
}
