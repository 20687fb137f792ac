//! Forced-air heat sink model.
//!
//! This module provides a [`twine_core::Model`] implementation that predicts
//! the junction temperature of a die cooled by a finned heat sink.
//! The computational core is in the internal `core` module.

pub(crate) mod core;

pub use self::core::{
    AnalysisResult, Conduction, Convection, CorrelationSet, DerivedGeometry, DieGeometry,
    ErrorKind, FinEfficiencyModel, FlowRegime, FlowState, HeatSink, InterfaceMaterial,
    NetworkConfig, NusseltCorrelation, RegimeThresholds, RequiredVelocityConfig,
    ResistanceNetwork, ResistanceTerm, SizingError, ThermalError, ThermalInputs,
};

use twine_core::Model;
use uom::si::f64::{Power, ThermodynamicTemperature};

/// Junction temperature of a die under a finned heat sink in forced air.
///
/// Holds only the immutable [`NetworkConfig`]; every call is independent.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ForcedAirHeatSink {
    config: NetworkConfig,
}

impl ForcedAirHeatSink {
    /// Creates a model with the given constants.
    #[must_use]
    pub fn new(config: NetworkConfig) -> Self {
        Self { config }
    }

    /// The constants this model evaluates with.
    #[must_use]
    pub fn config(&self) -> &NetworkConfig {
        &self.config
    }

    /// Largest power that keeps the junction at or below `limit`.
    ///
    /// # Errors
    ///
    /// Fails if the network cannot be evaluated or `limit` is not above ambient.
    pub fn max_power(
        &self,
        inputs: &ThermalInputs,
        limit: ThermodynamicTemperature,
    ) -> Result<Power, ThermalError> {
        self::core::max_power(inputs, limit, &self.config)
    }

    /// Air velocity at which the junction reaches `target`.
    ///
    /// # Errors
    ///
    /// Returns [`SizingError`] if the target cannot be reached within the
    /// configured velocity bracket or the solver fails.
    pub fn required_velocity(
        &self,
        inputs: &ThermalInputs,
        target: ThermodynamicTemperature,
        solver: RequiredVelocityConfig,
    ) -> Result<AnalysisResult, SizingError> {
        self::core::required_velocity(inputs, target, &self.config, solver)
    }
}

impl Model for ForcedAirHeatSink {
    type Input = ThermalInputs;
    type Output = AnalysisResult;
    type Error = ThermalError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self::core::analyze(input, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        f64::Velocity, thermodynamic_temperature::degree_celsius, velocity::meter_per_second,
    };

    #[test]
    fn model_call_matches_reference() {
        let model = ForcedAirHeatSink::default();
        let result = model.call(&ThermalInputs::reference()).unwrap();

        assert_relative_eq!(
            result.junction_temperature.get::<degree_celsius>(),
            81.34,
            max_relative = 0.02
        );
    }

    #[test]
    fn sizing_goes_through_the_model_config() {
        let model = ForcedAirHeatSink::new(
            NetworkConfig::default().with_fin_efficiency(FinEfficiencyModel::StraightFinAdiabaticTip),
        );
        let inputs = ThermalInputs::reference();
        let baseline = model.call(&inputs).unwrap();

        let sized = model
            .required_velocity(
                &inputs.with_air_velocity(Velocity::new::<meter_per_second>(3.0)),
                baseline.junction_temperature,
                RequiredVelocityConfig::default(),
            )
            .unwrap();
        assert_relative_eq!(
            sized.inputs.air_velocity.get::<meter_per_second>(),
            1.0,
            max_relative = 1e-6
        );

        let p_max = model
            .max_power(&inputs, baseline.junction_temperature)
            .unwrap();
        assert_relative_eq!(p_max.get::<uom::si::power::watt>(), 150.0, max_relative = 1e-9);
    }
}
