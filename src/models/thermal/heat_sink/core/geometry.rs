//! Stage 1: derived geometry and power validation.

use uom::si::{
    f64::{Area, Length},
    length::meter,
};

use super::{
    ErrorKind, ThermalError, ThermalInputs,
    error::{finite, strictly_positive},
};

/// Areas and lengths derived from the die and heat-sink dimensions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedGeometry {
    /// Die footprint, also the conduction area through TIM and base.
    pub die_area: Area,

    /// Heat-sink base footprint.
    pub base_area: Area,

    /// Clear gap between neighbouring fins.
    pub fin_spacing: Length,

    /// Hydraulic diameter of a fin channel, twice the spacing for parallel plates.
    pub hydraulic_diameter: Length,

    /// Wetted area of all fins, both faces.
    pub fin_area: Area,

    /// Base area left between the fins.
    pub exposed_base_area: Area,
}

impl DerivedGeometry {
    /// Fin area plus exposed base area, with every fin treated as fully effective.
    #[must_use]
    pub fn total_convective_area(&self) -> Area {
        self.fin_area + self.exposed_base_area
    }
}

/// Validates the dissipated power and resolves the geometry.
///
/// # Errors
///
/// - [`ThermalError::InvalidInput`] if the power is not strictly positive.
/// - [`ThermalError::InvalidGeometry`] if any length is not strictly positive,
///   or not finite, the fin count is zero, or the fins do not fit across the base.
pub(super) fn resolve(inputs: &ThermalInputs) -> Result<DerivedGeometry, ThermalError> {
    strictly_positive(inputs.power, ErrorKind::InvalidInput, "tdp")?;

    let die = &inputs.die;
    let sink = &inputs.sink;

    let die_length = positive_length(die.length, "die_length")?;
    let die_width = positive_length(die.width, "die_width")?;
    let sink_length = positive_length(sink.length, "sink_length")?;
    let sink_width = positive_length(sink.width, "sink_width")?;
    let fin_height = positive_length(sink.fin_height, "fin_height")?;
    let fin_thickness = positive_length(sink.fin_thickness, "fin_thickness")?;
    let fin_count = strictly_positive(sink.fin_count, ErrorKind::InvalidGeometry, "num_fins")?
        .into_inner();

    let fins = f64::from(fin_count);
    let fin_footprint_width = fin_thickness * fins;
    if fin_footprint_width >= sink_width {
        return Err(ThermalError::new(
            ErrorKind::InvalidGeometry,
            "num_fins",
            format!("{fin_count} fins of the given thickness do not fit across the base width"),
        ));
    }

    // A single fin leaves one open channel beside it.
    let channels = f64::from(fin_count.saturating_sub(1).max(1));
    let fin_spacing = (sink_width - fin_footprint_width) / channels;

    let die_area: Area = die_length * die_width;
    let base_area: Area = sink_length * sink_width;
    let fin_area: Area = fin_height * sink_length * (2.0 * fins);
    let exposed_base_area = base_area - fin_footprint_width * sink_length;

    Ok(DerivedGeometry {
        die_area,
        base_area,
        fin_spacing,
        hydraulic_diameter: fin_spacing * 2.0,
        fin_area,
        exposed_base_area,
    })
}

fn positive_length(value: Length, parameter: &'static str) -> Result<Length, ThermalError> {
    let value = strictly_positive(value, ErrorKind::InvalidGeometry, parameter)?.into_inner();
    finite(value.get::<meter>(), ErrorKind::InvalidGeometry, parameter)?;
    Ok(value)
}
