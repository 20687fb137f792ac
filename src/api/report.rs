use serde::{Deserialize, Serialize};
use uom::si::{
    area::square_meter,
    heat_transfer::watt_per_square_meter_kelvin,
    length::meter,
    power::watt,
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::degree_celsius,
    velocity::meter_per_second,
};

use crate::models::thermal::heat_sink::{AnalysisResult, ResistanceTerm};

/// Full report of one analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub input_parameters: InputParameters,
    pub thermal_resistances: ResistanceSummary,
    pub heat_transfer: HeatTransferSummary,
    pub results: JunctionSummary,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputParameters {
    pub die_length_m: f64,
    pub die_width_m: f64,
    pub die_area_m2: f64,
    pub tdp_w: f64,
    pub sink_length_m: f64,
    pub sink_width_m: f64,
    pub base_thickness_m: f64,
    pub num_fins: u32,
    pub fin_thickness_m: f64,
    pub fin_height_m: f64,
    pub fin_spacing_m: f64,
    pub ambient_temp_c: f64,
    pub air_velocity_m_s: f64,
}

/// Resistances in °C/W, which equal K/W.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResistanceSummary {
    pub r_jc_c_per_w: f64,
    pub r_tim_c_per_w: f64,
    pub r_conduction_c_per_w: f64,
    pub r_convection_c_per_w: f64,
    pub r_heatsink_c_per_w: f64,
    pub r_total_c_per_w: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatTransferSummary {
    pub reynolds_number: f64,
    pub flow_regime: String,
    pub nusselt_number: f64,
    pub convection_coefficient_w_m2k: f64,
    pub total_convection_area_m2: f64,
    pub fin_efficiency: f64,
    pub effective_convection_area_m2: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JunctionSummary {
    pub junction_temperature_c: f64,
    pub temperature_rise_c: f64,
}

impl From<&AnalysisResult> for AnalysisReport {
    fn from(result: &AnalysisResult) -> Self {
        let inputs = &result.inputs;
        let network = &result.network;
        let convection = &result.convection;
        let resistance = |term| network.get(term).celsius_per_watt();

        Self {
            input_parameters: InputParameters {
                die_length_m: inputs.die.length.get::<meter>(),
                die_width_m: inputs.die.width.get::<meter>(),
                die_area_m2: result.geometry.die_area.get::<square_meter>(),
                tdp_w: inputs.power.get::<watt>(),
                sink_length_m: inputs.sink.length.get::<meter>(),
                sink_width_m: inputs.sink.width.get::<meter>(),
                base_thickness_m: inputs.sink.base_thickness.get::<meter>(),
                num_fins: inputs.sink.fin_count,
                fin_thickness_m: inputs.sink.fin_thickness.get::<meter>(),
                fin_height_m: inputs.sink.fin_height.get::<meter>(),
                fin_spacing_m: result.geometry.fin_spacing.get::<meter>(),
                ambient_temp_c: inputs.ambient.get::<degree_celsius>(),
                air_velocity_m_s: inputs.air_velocity.get::<meter_per_second>(),
            },
            thermal_resistances: ResistanceSummary {
                r_jc_c_per_w: resistance(ResistanceTerm::JunctionToCase),
                r_tim_c_per_w: resistance(ResistanceTerm::Interface),
                r_conduction_c_per_w: resistance(ResistanceTerm::Conduction),
                r_convection_c_per_w: resistance(ResistanceTerm::Convection),
                r_heatsink_c_per_w: network.heat_sink().celsius_per_watt(),
                r_total_c_per_w: network.total().celsius_per_watt(),
            },
            heat_transfer: HeatTransferSummary {
                reynolds_number: result.flow.reynolds_number,
                flow_regime: result.flow.regime.label().to_owned(),
                nusselt_number: convection.nusselt_number,
                convection_coefficient_w_m2k: convection
                    .heat_transfer_coefficient
                    .get::<watt_per_square_meter_kelvin>(),
                total_convection_area_m2: convection.total_area.get::<square_meter>(),
                fin_efficiency: convection.fin_efficiency,
                effective_convection_area_m2: convection.effective_area.get::<square_meter>(),
            },
            results: JunctionSummary {
                junction_temperature_c: result.junction_temperature.get::<degree_celsius>(),
                temperature_rise_c: result.temperature_rise().get::<delta_kelvin>(),
            },
        }
    }
}

/// Largest power under a junction temperature limit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PowerHeadroomReport {
    pub junction_limit_c: f64,
    pub max_power_w: f64,
    pub r_total_c_per_w: f64,

    /// Junction temperature when dissipating `max_power_w`.
    pub junction_temperature_c: f64,
}

impl PowerHeadroomReport {
    pub(super) fn new(junction_limit_c: f64, at_limit: &AnalysisResult) -> Self {
        Self {
            junction_limit_c,
            max_power_w: at_limit.inputs.power.get::<watt>(),
            r_total_c_per_w: at_limit.total_resistance().celsius_per_watt(),
            junction_temperature_c: at_limit.junction_temperature.get::<degree_celsius>(),
        }
    }
}

/// Air velocity that meets a junction temperature target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequiredVelocityReport {
    pub target_junction_temp_c: f64,
    pub air_velocity_m_s: f64,

    /// Full analysis at the sized velocity.
    pub analysis: AnalysisReport,
}

impl RequiredVelocityReport {
    pub(super) fn new(target_junction_temp_c: f64, sized: &AnalysisResult) -> Self {
        Self {
            target_junction_temp_c,
            air_velocity_m_s: sized.inputs.air_velocity.get::<meter_per_second>(),
            analysis: AnalysisReport::from(sized),
        }
    }
}
