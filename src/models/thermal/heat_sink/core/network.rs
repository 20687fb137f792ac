//! Stage 5: series aggregation and junction temperature.

use uom::si::{f64::ThermodynamicTemperature, thermodynamic_temperature::degree_celsius};

use crate::support::{
    constraint::{Constrained, NonNegative},
    units::ThermalResistance,
};

use super::{
    Conduction, ErrorKind, ThermalError, ThermalInputs,
    error::{finite, non_negative},
};

/// A named term of the series resistance network, ordered junction to air.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResistanceTerm {
    JunctionToCase,
    Interface,
    Conduction,
    Convection,
}

impl ResistanceTerm {
    /// All terms in path order.
    pub const ALL: [Self; 4] = [
        Self::JunctionToCase,
        Self::Interface,
        Self::Conduction,
        Self::Convection,
    ];

    /// Short symbol used in reports.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::JunctionToCase => "r_jc",
            Self::Interface => "r_tim",
            Self::Conduction => "r_cond",
            Self::Convection => "r_conv",
        }
    }
}

/// Four resistances in series from junction to ambient air.
///
/// There are no parallel paths and no hidden terms: [`Self::total`] is the
/// exact sum of the four named terms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResistanceNetwork {
    terms: [Constrained<ThermalResistance, NonNegative>; 4],
}

impl ResistanceNetwork {
    /// Builds the network from the conductive terms and the convective resistance.
    ///
    /// # Errors
    ///
    /// Returns [`ThermalError::ComputationOverflow`] if any term is negative or `NaN`.
    pub fn new(conduction: &Conduction, r_conv: ThermalResistance) -> Result<Self, ThermalError> {
        let checked = |r: ThermalResistance, term: ResistanceTerm| {
            non_negative(r, ErrorKind::ComputationOverflow, term.symbol())
        };

        Ok(Self {
            terms: [
                checked(conduction.r_jc, ResistanceTerm::JunctionToCase)?,
                checked(conduction.r_tim, ResistanceTerm::Interface)?,
                checked(conduction.r_cond, ResistanceTerm::Conduction)?,
                checked(r_conv, ResistanceTerm::Convection)?,
            ],
        })
    }

    /// The value of a single term.
    #[must_use]
    pub fn get(&self, term: ResistanceTerm) -> ThermalResistance {
        let index = match term {
            ResistanceTerm::JunctionToCase => 0,
            ResistanceTerm::Interface => 1,
            ResistanceTerm::Conduction => 2,
            ResistanceTerm::Convection => 3,
        };
        self.terms[index].into_inner()
    }

    /// Terms paired with their names, in path order.
    pub fn terms(&self) -> impl Iterator<Item = (ResistanceTerm, ThermalResistance)> + '_ {
        ResistanceTerm::ALL.into_iter().map(|term| (term, self.get(term)))
    }

    /// Sum of all four terms.
    #[must_use]
    pub fn total(&self) -> ThermalResistance {
        self.terms.iter().copied().sum::<Constrained<_, NonNegative>>().into_inner()
    }

    /// Heat-sink portion of the path, base conduction plus convection.
    #[must_use]
    pub fn heat_sink(&self) -> ThermalResistance {
        self.get(ResistanceTerm::Conduction) + self.get(ResistanceTerm::Convection)
    }
}

/// Computes `T_j = T_ambient + P · R_total`.
///
/// # Errors
///
/// - [`ThermalError::InvalidInput`] if the ambient temperature is not finite.
/// - [`ThermalError::ComputationOverflow`] if the junction temperature is not finite.
pub(super) fn junction_temperature(
    inputs: &ThermalInputs,
    network: &ResistanceNetwork,
) -> Result<ThermodynamicTemperature, ThermalError> {
    finite(
        inputs.ambient.get::<degree_celsius>(),
        ErrorKind::InvalidInput,
        "ambient_temp",
    )?;

    let junction = inputs.ambient + network.total().temperature_rise(inputs.power);
    finite(
        junction.get::<degree_celsius>(),
        ErrorKind::ComputationOverflow,
        "junction_temperature",
    )?;
    Ok(junction)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn conduction() -> Conduction {
        Conduction {
            r_jc: ThermalResistance::from_kelvin_per_watt(0.2),
            r_tim: ThermalResistance::from_kelvin_per_watt(0.010_582),
            r_cond: ThermalResistance::from_kelvin_per_watt(0.006_337),
        }
    }

    #[test]
    fn total_is_exact_series_sum() {
        let r_conv = ThermalResistance::from_kelvin_per_watt(0.158_67);
        let network = ResistanceNetwork::new(&conduction(), r_conv).unwrap();

        let c = conduction();
        let expected = c.r_jc + c.r_tim + c.r_cond + r_conv;
        assert_eq!(network.total(), expected);

        let from_terms = network
            .terms()
            .fold(ThermalResistance::default(), |acc, (_, r)| acc + r);
        assert_eq!(network.total(), from_terms);
    }

    #[test]
    fn heat_sink_subtotal() {
        let r_conv = ThermalResistance::from_kelvin_per_watt(0.15);
        let network = ResistanceNetwork::new(&conduction(), r_conv).unwrap();

        assert_relative_eq!(network.heat_sink().kelvin_per_watt(), 0.156_337);
        assert_eq!(network.get(ResistanceTerm::Convection), r_conv);
    }

    #[test]
    fn terms_follow_path_order() {
        let network =
            ResistanceNetwork::new(&conduction(), ThermalResistance::from_kelvin_per_watt(0.1))
                .unwrap();
        let symbols: Vec<_> = network.terms().map(|(term, _)| term.symbol()).collect();
        assert_eq!(symbols, ["r_jc", "r_tim", "r_cond", "r_conv"]);
    }

    #[test]
    fn rejects_negative_term() {
        let err = ResistanceNetwork::new(
            &conduction(),
            ThermalResistance::from_kelvin_per_watt(-0.01),
        )
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ComputationOverflow);
        assert_eq!(err.parameter(), "r_conv");
    }

    #[test]
    fn junction_temperature_from_total() {
        let inputs = ThermalInputs::reference();
        let network =
            ResistanceNetwork::new(&conduction(), ThermalResistance::from_kelvin_per_watt(0.158_67))
                .unwrap();

        let t_j = junction_temperature(&inputs, &network).unwrap();
        assert_relative_eq!(
            t_j.get::<degree_celsius>(),
            25.0 + 150.0 * network.total().kelvin_per_watt(),
            max_relative = 1e-12
        );
    }

    #[test]
    fn rejects_non_finite_ambient() {
        let mut inputs = ThermalInputs::reference();
        inputs.ambient = ThermodynamicTemperature::new::<degree_celsius>(f64::NAN);
        let network =
            ResistanceNetwork::new(&conduction(), ThermalResistance::from_kelvin_per_watt(0.1))
                .unwrap();

        let err = junction_temperature(&inputs, &network).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert_eq!(err.parameter(), "ambient_temp");
    }
}
