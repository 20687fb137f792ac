//! Problem formulation for air-velocity sizing.

use std::convert::Infallible;

use twine_core::{EquationProblem, Model};
use uom::si::{
    f64::{ThermodynamicTemperature, Velocity},
    thermodynamic_temperature::kelvin,
    velocity::meter_per_second,
};

use crate::models::thermal::heat_sink::core::{
    AnalysisResult, NetworkConfig, ThermalError, ThermalInputs, analyze,
};

/// The resistance network seen as a function of air velocity alone.
pub(super) struct RequiredVelocityModel<'a> {
    inputs: &'a ThermalInputs,
    network: &'a NetworkConfig,
}

impl<'a> RequiredVelocityModel<'a> {
    pub(super) fn new(inputs: &'a ThermalInputs, network: &'a NetworkConfig) -> Self {
        Self { inputs, network }
    }
}

impl Model for RequiredVelocityModel<'_> {
    type Input = Velocity;
    type Output = AnalysisResult;
    type Error = ThermalError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        analyze(&self.inputs.with_air_velocity(*input), self.network)
    }
}

/// Residual is `junction_temperature - target`, positive when too hot.
pub(super) struct RequiredVelocityProblem {
    target: ThermodynamicTemperature,
}

impl RequiredVelocityProblem {
    pub(super) fn new(target: ThermodynamicTemperature) -> Self {
        Self { target }
    }
}

impl EquationProblem<1> for RequiredVelocityProblem {
    type Input = Velocity;
    type Output = AnalysisResult;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(Velocity::new::<meter_per_second>(x[0]))
    }

    fn residuals(
        &self,
        _input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; 1], Self::Error> {
        let t_j = output.junction_temperature.get::<kelvin>();
        Ok([t_j - self.target.get::<kelvin>()])
    }
}
