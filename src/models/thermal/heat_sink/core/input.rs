//! Operating conditions and physical description of one analysis request.

use uom::si::{
    f64::{Length, Power, ThermalConductivity, ThermodynamicTemperature, Velocity},
    length::meter,
    power::watt,
    thermal_conductivity::watt_per_meter_kelvin,
    thermodynamic_temperature::degree_celsius,
    velocity::meter_per_second,
};

use crate::support::units::ThermalResistance;

/// Everything a single analysis needs besides the [`NetworkConfig`](super::NetworkConfig).
///
/// Values are taken as given; each pipeline stage validates the fields it
/// consumes and names the offending field on failure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThermalInputs {
    /// Power dissipated by the die (thermal design power).
    pub power: Power,

    /// Temperature of the cooling air approaching the heat sink.
    pub ambient: ThermodynamicTemperature,

    /// Approach velocity of the cooling air through the fin channels.
    pub air_velocity: Velocity,

    pub die: DieGeometry,
    pub sink: HeatSink,
    pub tim: InterfaceMaterial,

    /// Junction-to-case resistance from the package datasheet.
    pub r_jc: ThermalResistance,
}

/// Footprint of the die on the heat-sink base.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DieGeometry {
    pub length: Length,
    pub width: Length,
}

/// A straight-fin heat sink with fins running along its length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatSink {
    /// Base length, in the direction of air flow.
    pub length: Length,

    /// Base width, across which the fins are distributed.
    pub width: Length,

    pub base_thickness: Length,
    pub fin_count: u32,
    pub fin_height: Length,
    pub fin_thickness: Length,

    /// Conductivity of the heat-sink alloy.
    pub conductivity: ThermalConductivity,
}

/// Thermal interface material between the die and the heat-sink base.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InterfaceMaterial {
    pub thickness: Length,
    pub conductivity: ThermalConductivity,
}

impl ThermalInputs {
    /// The reference configuration: a 150 W package on a 60-fin aluminium
    /// heat sink in 1 m/s air at 25 °C.
    #[must_use]
    pub fn reference() -> Self {
        Self {
            power: Power::new::<watt>(150.0),
            ambient: ThermodynamicTemperature::new::<degree_celsius>(25.0),
            air_velocity: Velocity::new::<meter_per_second>(1.0),
            die: DieGeometry {
                length: Length::new::<meter>(0.0525),
                width: Length::new::<meter>(0.045),
            },
            sink: HeatSink {
                length: Length::new::<meter>(0.09),
                width: Length::new::<meter>(0.116),
                base_thickness: Length::new::<meter>(0.0025),
                fin_count: 60,
                fin_height: Length::new::<meter>(0.0245),
                fin_thickness: Length::new::<meter>(0.0008),
                conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(167.0),
            },
            tim: InterfaceMaterial {
                thickness: Length::new::<meter>(0.0001),
                conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(4.0),
            },
            r_jc: ThermalResistance::from_kelvin_per_watt(0.2),
        }
    }

    /// Returns a copy with a different air velocity.
    #[must_use]
    pub fn with_air_velocity(self, air_velocity: Velocity) -> Self {
        Self {
            air_velocity,
            ..self
        }
    }

    /// Returns a copy with a different dissipated power.
    #[must_use]
    pub fn with_power(self, power: Power) -> Self {
        Self { power, ..self }
    }
}

impl Default for ThermalInputs {
    fn default() -> Self {
        Self::reference()
    }
}
