use std::{
    io::{self, Read},
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use uom::si::{
    f64::{
        Length, Power, ThermalConductivity, ThermodynamicTemperature, Velocity,
    },
    length::meter,
    power::watt,
    thermal_conductivity::watt_per_meter_kelvin,
    thermodynamic_temperature::degree_celsius,
    velocity::meter_per_second,
};

use crate::{
    models::thermal::heat_sink::{
        DieGeometry, ErrorKind, FinEfficiencyModel, HeatSink, InterfaceMaterial, NetworkConfig,
        RegimeThresholds, ThermalError, ThermalInputs,
    },
    support::{
        thermo::{TransportProperties, fluid::Air},
        units::{ThermalResistance, kinematic_viscosity},
    },
};

use super::RequestError;

/// Named parameters of one analysis, in SI units with temperatures in °C.
///
/// Every field is optional in JSON and falls back to the reference
/// configuration. Unrecognized keys are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisRequest {
    pub die_length: f64,
    pub die_width: f64,

    /// Thermal design power (W).
    pub tdp: f64,

    pub sink_length: f64,
    pub sink_width: f64,
    pub base_thickness: f64,

    /// Any JSON number is accepted so that `60.0`, a negative count, or a
    /// fractional count is reported as a geometry error rather than a parse error.
    pub num_fins: f64,

    pub fin_thickness: f64,
    pub fin_height: f64,
    pub k_aluminum: f64,
    pub k_tim: f64,
    pub tim_thickness: f64,
    pub k_air: f64,
    pub kinematic_viscosity: f64,
    pub prandtl_number: f64,
    pub air_velocity: f64,
    pub ambient_temp: f64,
    pub r_jc: f64,

    /// Replaces `k_air`, `kinematic_viscosity`, and `prandtl_number` with
    /// tabulated dry-air properties at this temperature (°C).
    pub air_temperature: Option<f64>,

    pub laminar_limit: f64,
    pub turbulent_onset: f64,
    pub fin_efficiency: FinEfficiency,
}

/// Fin efficiency treatment selectable from a request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinEfficiency {
    #[default]
    Ideal,
    StraightFin,
}

impl From<FinEfficiency> for FinEfficiencyModel {
    fn from(value: FinEfficiency) -> Self {
        match value {
            FinEfficiency::Ideal => Self::Ideal,
            FinEfficiency::StraightFin => Self::StraightFinAdiabaticTip,
        }
    }
}

impl Default for AnalysisRequest {
    fn default() -> Self {
        let regimes = RegimeThresholds::default();
        Self {
            die_length: 0.0525,
            die_width: 0.045,
            tdp: 150.0,
            sink_length: 0.09,
            sink_width: 0.116,
            base_thickness: 0.0025,
            num_fins: 60.0,
            fin_thickness: 0.0008,
            fin_height: 0.0245,
            k_aluminum: 167.0,
            k_tim: 4.0,
            tim_thickness: 0.0001,
            k_air: 0.0262,
            kinematic_viscosity: 1.57e-5,
            prandtl_number: 0.71,
            air_velocity: 1.0,
            ambient_temp: 25.0,
            r_jc: 0.2,
            air_temperature: None,
            laminar_limit: regimes.laminar_limit,
            turbulent_onset: regimes.turbulent_onset,
            fin_efficiency: FinEfficiency::default(),
        }
    }
}

/// Where a request comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestSource {
    /// The reference configuration, without reading anything.
    Defaults,
    Stdin,
    File(PathBuf),
}

impl RequestSource {
    /// Interprets a command-line argument, with `-` meaning stdin.
    #[must_use]
    pub fn from_arg(arg: Option<&Path>, defaults: bool) -> Self {
        match arg {
            _ if defaults => Self::Defaults,
            None => Self::Stdin,
            Some(path) if path == Path::new("-") => Self::Stdin,
            Some(path) => Self::File(path.to_path_buf()),
        }
    }

    /// Reads and parses the request.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::Read`] on I/O failure and
    /// [`RequestError::Parse`] on malformed JSON.
    pub fn load(&self) -> Result<AnalysisRequest, RequestError> {
        let text = match self {
            Self::Defaults => return Ok(AnalysisRequest::default()),
            Self::Stdin => {
                let mut text = String::new();
                io::stdin()
                    .read_to_string(&mut text)
                    .map_err(|source| RequestError::Read {
                        origin: "stdin".into(),
                        source,
                    })?;
                text
            }
            Self::File(path) => {
                std::fs::read_to_string(path).map_err(|source| RequestError::Read {
                    origin: path.display().to_string(),
                    source,
                })?
            }
        };
        AnalysisRequest::from_json(&text)
    }
}

impl AnalysisRequest {
    /// Parses a JSON object. Blank input yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::Parse`] on malformed JSON.
    pub fn from_json(text: &str) -> Result<Self, RequestError> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(text)?)
    }

    /// Converts the request into pipeline inputs.
    ///
    /// # Errors
    ///
    /// Returns [`ThermalError::InvalidGeometry`] if `num_fins` is not a whole,
    /// non-negative number that fits a `u32`. Every other value is validated
    /// by the pipeline.
    pub fn inputs(&self) -> Result<ThermalInputs, ThermalError> {
        let fin_count = whole_count(self.num_fins).ok_or_else(|| {
            ThermalError::new(
                ErrorKind::InvalidGeometry,
                "num_fins",
                format!("{} is not a whole number of fins", self.num_fins),
            )
        })?;

        Ok(ThermalInputs {
            power: Power::new::<watt>(self.tdp),
            ambient: ThermodynamicTemperature::new::<degree_celsius>(self.ambient_temp),
            air_velocity: Velocity::new::<meter_per_second>(self.air_velocity),
            die: DieGeometry {
                length: Length::new::<meter>(self.die_length),
                width: Length::new::<meter>(self.die_width),
            },
            sink: HeatSink {
                length: Length::new::<meter>(self.sink_length),
                width: Length::new::<meter>(self.sink_width),
                base_thickness: Length::new::<meter>(self.base_thickness),
                fin_count,
                fin_height: Length::new::<meter>(self.fin_height),
                fin_thickness: Length::new::<meter>(self.fin_thickness),
                conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(self.k_aluminum),
            },
            tim: InterfaceMaterial {
                thickness: Length::new::<meter>(self.tim_thickness),
                conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(self.k_tim),
            },
            r_jc: ThermalResistance::from_kelvin_per_watt(self.r_jc),
        })
    }

    /// Builds the network constants for this request.
    ///
    /// # Errors
    ///
    /// Returns [`ThermalError::InvalidMaterial`] on `air_temperature` if it
    /// lies outside the tabulated air data.
    pub fn config(&self) -> Result<NetworkConfig, ThermalError> {
        let air = match self.air_temperature {
            Some(celsius) => {
                Air::at_temperature(ThermodynamicTemperature::new::<degree_celsius>(celsius))
                    .map_err(|err| {
                        ThermalError::new(ErrorKind::InvalidMaterial, "air_temperature", err)
                    })?
            }
            None => TransportProperties::new(
                ThermalConductivity::new::<watt_per_meter_kelvin>(self.k_air),
                kinematic_viscosity(self.kinematic_viscosity),
                self.prandtl_number,
            ),
        };

        Ok(NetworkConfig {
            air,
            regimes: RegimeThresholds {
                laminar_limit: self.laminar_limit,
                turbulent_onset: self.turbulent_onset,
            },
            fin_efficiency: self.fin_efficiency.into(),
            ..NetworkConfig::default()
        })
    }
}

/// `Some(n)` when `value` is exactly a count representable as `u32`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn whole_count(value: f64) -> Option<u32> {
    let in_range = (0.0..=f64::from(u32::MAX)).contains(&value);
    (in_range && value.fract() == 0.0).then(|| value as u32)
}
