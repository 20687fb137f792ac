use crate::support::thermo::{TransportProperties, fluid::Air};

use super::{CorrelationSet, FinEfficiencyModel, RegimeThresholds};

/// Property tables and model constants shared by every analysis.
///
/// A configuration is immutable once built and is passed into each analysis,
/// so tests and callers can substitute alternative air properties or
/// recalibrated correlation constants without touching shared state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NetworkConfig {
    /// Transport properties of the cooling air.
    pub air: TransportProperties,

    /// Reynolds number boundaries between flow regimes.
    pub regimes: RegimeThresholds,

    /// Nusselt correlation used in each regime.
    pub correlations: CorrelationSet,

    /// Treatment of fin area in the convective stage.
    pub fin_efficiency: FinEfficiencyModel,
}

impl Default for NetworkConfig {
    /// Reference air near 25 °C, ideal fins, Sieder-Tate laminar and
    /// Dittus-Boelter turbulent correlations.
    fn default() -> Self {
        Self {
            air: Air::reference(),
            regimes: RegimeThresholds::default(),
            correlations: CorrelationSet::default(),
            fin_efficiency: FinEfficiencyModel::default(),
        }
    }
}

impl NetworkConfig {
    /// Returns a copy using different air properties.
    #[must_use]
    pub fn with_air(self, air: TransportProperties) -> Self {
        Self { air, ..self }
    }

    /// Returns a copy using a different fin efficiency model.
    #[must_use]
    pub fn with_fin_efficiency(self, fin_efficiency: FinEfficiencyModel) -> Self {
        Self {
            fin_efficiency,
            ..self
        }
    }
}
