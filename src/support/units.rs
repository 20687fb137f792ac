//! Extensions to [`uom`].
//!
//! Physical quantities throughout this crate are [`uom`] quantities. This
//! module fills the gaps a thermal resistance network runs into:
//!
//! - [`ThermalResistance`]: kelvin per watt, the unit every network term is
//!   expressed in. [`uom`] has thermal conductance but no resistance.
//! - [`KinematicViscosity`]: square meters per second, for Reynolds numbers.
//! - [`TemperatureDifference`]: subtracting two absolute temperatures to get
//!   a [`TemperatureInterval`](uom::si::f64::TemperatureInterval).
//!
//! ```
//! use uom::si::f64::ThermodynamicTemperature;
//! use uom::si::thermodynamic_temperature::degree_celsius;
//! use heatsink_network::support::units::TemperatureDifference;
//!
//! let junction = ThermodynamicTemperature::new::<degree_celsius>(81.3);
//! let ambient = ThermodynamicTemperature::new::<degree_celsius>(25.0);
//! let rise = junction.minus(ambient);
//! // rise is a TemperatureInterval, not a ThermodynamicTemperature
//! ```

mod quantities;
mod temperature_difference;
mod thermal_resistance;

pub use quantities::{KinematicViscosity, kinematic_viscosity};
pub use temperature_difference::TemperatureDifference;
pub use thermal_resistance::ThermalResistance;
