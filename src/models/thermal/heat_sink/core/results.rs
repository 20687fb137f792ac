//! Full trace of one analysis.

use uom::si::{
    f64::{Power, TemperatureInterval, ThermodynamicTemperature},
    power::watt,
    temperature_interval::kelvin as delta_kelvin,
};

use crate::support::units::{TemperatureDifference, ThermalResistance};

use super::{Convection, Conduction, DerivedGeometry, FlowState, ResistanceNetwork, ThermalInputs};

/// Every intermediate quantity of an analysis plus the junction temperature.
///
/// A result is built fresh for each request and never mutated afterwards.
/// The intermediate values are part of the contract, not diagnostics:
/// validating the model against reference data means inspecting each stage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalysisResult {
    /// The inputs this result was computed from.
    pub inputs: ThermalInputs,

    pub geometry: DerivedGeometry,
    pub conduction: Conduction,
    pub flow: FlowState,
    pub convection: Convection,
    pub network: ResistanceNetwork,

    pub junction_temperature: ThermodynamicTemperature,
}

impl AnalysisResult {
    /// Junction-to-ambient resistance.
    #[must_use]
    pub fn total_resistance(&self) -> ThermalResistance {
        self.network.total()
    }

    /// Junction temperature rise above ambient.
    #[must_use]
    pub fn temperature_rise(&self) -> TemperatureInterval {
        self.junction_temperature.minus(self.inputs.ambient)
    }

    /// Largest dissipation that keeps the junction at or below `limit`,
    /// holding every resistance fixed.
    ///
    /// Returns `None` if `limit` is not above ambient.
    #[must_use]
    pub fn power_headroom(&self, limit: ThermodynamicTemperature) -> Option<Power> {
        let margin = limit.minus(self.inputs.ambient).get::<delta_kelvin>();
        if margin.is_nan() || margin <= 0.0 {
            return None;
        }
        Some(Power::new::<watt>(
            margin / self.total_resistance().kelvin_per_watt(),
        ))
    }
}
