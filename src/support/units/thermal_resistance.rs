use std::{fmt, ops::Add};

use num_traits::Zero;
use uom::si::{
    f64::{Power, TemperatureInterval, ThermalConductance},
    power::watt,
    temperature_interval::kelvin as delta_kelvin,
    thermal_conductance::watt_per_kelvin,
};

use crate::support::constraint::{Constrained, StrictlyPositive};

/// Thermal resistance in kelvin per watt (equivalently °C/W).
///
/// A resistance is the reciprocal of a [`ThermalConductance`]. Building one
/// from a conductance requires the conductance to be strictly positive, so a
/// zero area or zero conductivity can never produce an infinite resistance.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct ThermalResistance(f64);

impl ThermalResistance {
    /// Creates a resistance from a value in K/W.
    #[must_use]
    pub const fn from_kelvin_per_watt(value: f64) -> Self {
        Self(value)
    }

    /// Creates the resistance `1 / G` of a strictly positive conductance.
    #[must_use]
    pub fn from_conductance(conductance: Constrained<ThermalConductance, StrictlyPositive>) -> Self {
        Self(conductance.into_inner().get::<watt_per_kelvin>().recip())
    }

    /// Returns the value in K/W.
    #[must_use]
    pub const fn kelvin_per_watt(self) -> f64 {
        self.0
    }

    /// Returns the value in °C/W, identical to K/W.
    #[must_use]
    pub const fn celsius_per_watt(self) -> f64 {
        self.0
    }

    /// Temperature rise across this resistance when `power` flows through it.
    #[must_use]
    pub fn temperature_rise(self, power: Power) -> TemperatureInterval {
        TemperatureInterval::new::<delta_kelvin>(self.0 * power.get::<watt>())
    }
}

impl Add for ThermalResistance {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Zero for ThermalResistance {
    fn zero() -> Self {
        Self(0.0)
    }

    fn is_zero(&self) -> bool {
        self.0 == 0.0
    }
}

impl fmt::Display for ThermalResistance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} K/W", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::temperature_interval::degree_celsius as delta_celsius;

    #[test]
    fn reciprocal_of_conductance() {
        let g = StrictlyPositive::new(ThermalConductance::new::<watt_per_kelvin>(4.0)).unwrap();
        let r = ThermalResistance::from_conductance(g);
        assert_relative_eq!(r.kelvin_per_watt(), 0.25);
    }

    #[test]
    fn rise_is_power_times_resistance() {
        let r = ThermalResistance::from_kelvin_per_watt(0.376);
        let rise = r.temperature_rise(Power::new::<watt>(150.0));
        assert_relative_eq!(rise.get::<delta_celsius>(), 56.4, epsilon = 1e-9);
    }

    #[test]
    fn series_addition() {
        let total = ThermalResistance::from_kelvin_per_watt(0.2)
            + ThermalResistance::from_kelvin_per_watt(0.01);
        assert_relative_eq!(total.celsius_per_watt(), 0.21);
        assert!(ThermalResistance::zero().is_zero());
    }
}
