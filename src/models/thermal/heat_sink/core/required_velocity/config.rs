use twine_solvers::equation::bisection;
use uom::si::{
    f64::{TemperatureInterval, Velocity},
    temperature_interval::kelvin as delta_kelvin,
    velocity::meter_per_second,
};

/// Solver configuration for air-velocity sizing.
#[derive(Debug, Clone, Copy)]
pub struct RequiredVelocityConfig {
    /// Maximum iteration count for the bisection solve.
    pub max_iters: usize,

    /// Lower end of the velocity bracket.
    ///
    /// Still air is allowed; it fails the pipeline and is treated as too hot.
    pub min_velocity: Velocity,

    /// Upper end of the velocity bracket.
    pub max_velocity: Velocity,

    /// Absolute tolerance for the velocity search variable.
    pub velocity_tol: Velocity,

    /// Absolute tolerance for the junction temperature residual.
    pub temperature_tol: TemperatureInterval,
}

impl Default for RequiredVelocityConfig {
    fn default() -> Self {
        Self {
            max_iters: 100,
            min_velocity: Velocity::new::<meter_per_second>(0.0),
            max_velocity: Velocity::new::<meter_per_second>(50.0),
            velocity_tol: Velocity::new::<meter_per_second>(1e-12),
            temperature_tol: TemperatureInterval::new::<delta_kelvin>(1e-9),
        }
    }
}

impl RequiredVelocityConfig {
    /// Converts this configuration into a bisection solver configuration.
    pub(super) fn bisection(&self) -> bisection::Config {
        bisection::Config {
            max_iters: self.max_iters,
            x_abs_tol: self.velocity_tol.get::<meter_per_second>(),
            x_rel_tol: 0.0,
            residual_tol: self.temperature_tol.get::<delta_kelvin>(),
        }
    }
}
