//! Iterative sizing of the air velocity for a target junction temperature.
//!
//! The full pipeline is wrapped as a model of air velocity alone, and
//! bisection varies the velocity until the junction temperature matches
//! the target.

mod config;
mod error;
mod problem;

pub use config::RequiredVelocityConfig;
pub use error::SizingError;

use twine_core::Model;
use twine_solvers::equation::bisection;
use uom::si::{
    f64::{TemperatureInterval, ThermodynamicTemperature},
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::kelvin,
    velocity::meter_per_second,
};

use super::{AnalysisResult, ErrorKind, NetworkConfig, ThermalError, ThermalInputs};

use problem::{RequiredVelocityModel, RequiredVelocityProblem};

/// Finds the air velocity at which the junction reaches `target`.
///
/// The air velocity in `inputs` is ignored. The returned result holds the
/// velocity found and the full analysis at that velocity.
///
/// # Errors
///
/// - [`SizingError::Thermal`] if the target is not finite or the pipeline
///   fails at the upper velocity bound.
/// - [`SizingError::Unreachable`] if the junction stays above `target` even
///   at the upper velocity bound.
/// - [`SizingError::Discontinuous`] if the target falls in a jump of the
///   junction temperature, such as where the Nusselt correlation changes
///   between flow regimes.
/// - [`SizingError::Bisection`] or [`SizingError::MaxIters`] if the solve fails.
pub fn required_velocity(
    inputs: &ThermalInputs,
    target: ThermodynamicTemperature,
    network: &NetworkConfig,
    config: RequiredVelocityConfig,
) -> Result<AnalysisResult, SizingError> {
    let target_k = target.get::<kelvin>();
    if !target_k.is_finite() {
        return Err(ThermalError::new(
            ErrorKind::InvalidInput,
            "junction_target",
            "target temperature is not finite",
        )
        .into());
    }

    let model = RequiredVelocityModel::new(inputs, network);

    let fastest = model.call(&config.max_velocity)?;
    if fastest.junction_temperature > target {
        return Err(SizingError::Unreachable {
            best: fastest.junction_temperature,
            max_velocity: config.max_velocity,
        });
    }

    let problem = RequiredVelocityProblem::new(target);

    let solution = bisection::solve(
        &model,
        &problem,
        [
            config.min_velocity.get::<meter_per_second>(),
            config.max_velocity.get::<meter_per_second>(),
        ],
        &config.bisection(),
        |event: &bisection::Event<'_, _, _>| {
            // Too little air to form a finite convective resistance means the
            // junction would run hot, so steer toward higher velocities.
            if event.result().is_err() {
                tracing::trace!("velocity candidate rejected by the pipeline");
                return Some(bisection::Action::assume_positive());
            }
            None
        },
    )?;

    if solution.status != bisection::Status::Converged {
        return Err(SizingError::MaxIters {
            residual: TemperatureInterval::new::<delta_kelvin>(solution.residual),
            iters: solution.iters,
        });
    }

    // Bisection also converges onto a jump in the junction temperature, where
    // the velocity bracket collapses without the residual ever closing.
    let temperature_tol = config.temperature_tol.get::<delta_kelvin>();
    if solution.residual.abs() > temperature_tol {
        let closest = solution.snapshot.output;
        return Err(SizingError::Discontinuous {
            velocity: closest.inputs.air_velocity,
            closest: closest.junction_temperature,
            residual: TemperatureInterval::new::<delta_kelvin>(solution.residual),
        });
    }

    tracing::debug!(
        iters = solution.iters,
        air_velocity_m_s = solution
            .snapshot
            .output
            .inputs
            .air_velocity
            .get::<meter_per_second>(),
        "sized air velocity"
    );

    Ok(solution.snapshot.output)
}
