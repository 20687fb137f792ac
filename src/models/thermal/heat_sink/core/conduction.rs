//! Stage 2: junction-to-case, interface, and base conduction resistances.

use uom::si::f64::{Area, Length, ThermalConductance, ThermalConductivity};

use crate::support::units::ThermalResistance;

use super::{
    DerivedGeometry, ErrorKind, ThermalError, ThermalInputs,
    error::{finite, strictly_positive},
};

/// The three conductive terms between the junction and the fin base.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Conduction {
    /// Datasheet junction-to-case resistance, passed through after validation.
    pub r_jc: ThermalResistance,

    /// Resistance of the interface material layer.
    pub r_tim: ThermalResistance,

    /// One-dimensional conduction through the heat-sink base under the die.
    pub r_cond: ThermalResistance,
}

/// Computes the conductive resistances.
///
/// Both the interface layer and the base are treated as plane slabs over the
/// die footprint, `R = t / (k · A)`. Spreading beyond the footprint is not modeled.
///
/// # Errors
///
/// - [`ThermalError::InvalidInput`] if `r_jc` is not strictly positive.
/// - [`ThermalError::InvalidMaterial`] if a conductivity is not strictly positive.
/// - [`ThermalError::InvalidGeometry`] if a thickness or the die area is not strictly positive.
/// - [`ThermalError::ComputationOverflow`] if a resistance is not finite.
pub(super) fn conduct(
    inputs: &ThermalInputs,
    geometry: &DerivedGeometry,
) -> Result<Conduction, ThermalError> {
    let r_jc = strictly_positive(inputs.r_jc, ErrorKind::InvalidInput, "r_jc")?.into_inner();
    finite(r_jc.kelvin_per_watt(), ErrorKind::InvalidInput, "r_jc")?;

    let r_tim = slab(
        Slab {
            thickness: (inputs.tim.thickness, "tim_thickness"),
            conductivity: (inputs.tim.conductivity, "k_tim"),
            area: (geometry.die_area, "die_area"),
        },
        "r_tim",
    )?;

    let r_cond = slab(
        Slab {
            thickness: (inputs.sink.base_thickness, "base_thickness"),
            conductivity: (inputs.sink.conductivity, "k_aluminum"),
            area: (geometry.die_area, "die_area"),
        },
        "r_cond",
    )?;

    Ok(Conduction { r_jc, r_tim, r_cond })
}

/// A plane layer, each dimension paired with its parameter name.
struct Slab {
    thickness: (Length, &'static str),
    conductivity: (ThermalConductivity, &'static str),
    area: (Area, &'static str),
}

fn slab(layer: Slab, name: &'static str) -> Result<ThermalResistance, ThermalError> {
    let (thickness, thickness_name) = layer.thickness;
    let (conductivity, conductivity_name) = layer.conductivity;
    let (area, area_name) = layer.area;

    let thickness =
        strictly_positive(thickness, ErrorKind::InvalidGeometry, thickness_name)?.into_inner();
    let conductivity =
        strictly_positive(conductivity, ErrorKind::InvalidMaterial, conductivity_name)?
            .into_inner();
    let area = strictly_positive(area, ErrorKind::InvalidGeometry, area_name)?.into_inner();

    let conductance: ThermalConductance = conductivity * area / thickness;
    let conductance = strictly_positive(conductance, ErrorKind::ComputationOverflow, name)?;

    let resistance = ThermalResistance::from_conductance(conductance);
    finite(resistance.kelvin_per_watt(), ErrorKind::ComputationOverflow, name)?;
    Ok(resistance)
}
