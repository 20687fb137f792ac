use uom::si::f64::ThermalConductivity;

use crate::support::units::KinematicViscosity;

/// Transport properties of a coolant at a single state.
///
/// Convection correlations consume these directly:
/// the Reynolds number uses the kinematic viscosity,
/// the Nusselt correlation uses the Prandtl number,
/// and the film coefficient scales with the thermal conductivity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransportProperties {
    pub thermal_conductivity: ThermalConductivity,
    pub kinematic_viscosity: KinematicViscosity,
    pub prandtl_number: f64,
}

impl TransportProperties {
    /// Groups the three properties.
    ///
    /// Values are not checked here; the stage that consumes a property
    /// validates it and names it in any error.
    #[must_use]
    pub fn new(
        thermal_conductivity: ThermalConductivity,
        kinematic_viscosity: KinematicViscosity,
        prandtl_number: f64,
    ) -> Self {
        Self {
            thermal_conductivity,
            kinematic_viscosity,
            prandtl_number,
        }
    }
}
