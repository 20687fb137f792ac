use uom::si::{
    f64::{ThermalConductivity, ThermodynamicTemperature},
    thermal_conductivity::watt_per_meter_kelvin,
    thermodynamic_temperature::kelvin,
};

use crate::support::{
    thermo::{PropertyError, TransportProperties},
    units::kinematic_viscosity,
};

/// Canonical identifier for dry air.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Air;

/// Dry air at 1 atm: temperature (K), conductivity (W/m·K),
/// kinematic viscosity (m²/s), Prandtl number.
const AIR_TABLE: [(f64, f64, f64, f64); 5] = [
    (250.0, 0.0223, 11.44e-6, 0.720),
    (300.0, 0.0263, 15.89e-6, 0.707),
    (350.0, 0.0300, 20.92e-6, 0.700),
    (400.0, 0.0338, 26.41e-6, 0.690),
    (450.0, 0.0373, 32.39e-6, 0.686),
];

impl Air {
    /// Fixed properties of air near 25 °C used for the reference validation.
    #[must_use]
    pub fn reference() -> TransportProperties {
        TransportProperties::new(
            ThermalConductivity::new::<watt_per_meter_kelvin>(0.0262),
            kinematic_viscosity(1.57e-5),
            0.71,
        )
    }

    /// Properties of air at `temperature`, linearly interpolated from tabulated
    /// data between 250 K and 450 K.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::OutOfDomain`] outside the tabulated range and
    /// [`PropertyError::InvalidState`] for a temperature that is not a number.
    pub fn at_temperature(
        temperature: ThermodynamicTemperature,
    ) -> Result<TransportProperties, PropertyError> {
        let t = temperature.get::<kelvin>();
        if t.is_nan() {
            return Err(PropertyError::InvalidState {
                context: "air temperature is not a number".into(),
            });
        }

        let (t_min, t_max) = (AIR_TABLE[0].0, AIR_TABLE[AIR_TABLE.len() - 1].0);
        if !(t_min..=t_max).contains(&t) {
            return Err(PropertyError::OutOfDomain {
                context: format!("air properties tabulated for {t_min} K to {t_max} K, got {t} K"),
            });
        }

        let upper = AIR_TABLE
            .iter()
            .position(|row| row.0 >= t)
            .unwrap_or(AIR_TABLE.len() - 1)
            .max(1);
        let (t0, k0, nu0, pr0) = AIR_TABLE[upper - 1];
        let (t1, k1, nu1, pr1) = AIR_TABLE[upper];
        let w = (t - t0) / (t1 - t0);
        let lerp = |a: f64, b: f64| a + w * (b - a);

        Ok(TransportProperties::new(
            ThermalConductivity::new::<watt_per_meter_kelvin>(lerp(k0, k1)),
            kinematic_viscosity(lerp(nu0, nu1)),
            lerp(pr0, pr1),
        ))
    }
}
