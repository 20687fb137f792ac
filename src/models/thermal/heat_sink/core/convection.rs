//! Stage 4: film coefficient, effective area, and convective resistance.
//!
//! The Nusselt correlation is chosen once per request from the flow regime.
//! Each correlation is a tagged variant carrying its own constants, so the
//! constants can be calibrated against measured data without touching code.

use uom::si::{
    f64::{Area, HeatTransfer, Length, Ratio, ThermalConductance},
    heat_transfer::watt_per_square_meter_kelvin,
    length::meter,
    ratio::ratio,
    thermal_conductivity::watt_per_meter_kelvin,
};

use crate::support::{
    constraint::UnitIntervalLowerOpen,
    thermo::TransportProperties,
    units::ThermalResistance,
};

use super::{
    DerivedGeometry, ErrorKind, FlowRegime, FlowState, HeatSink, ThermalError,
    error::{finite, strictly_positive},
};

/// A closed-form Nusselt number correlation for flow between parallel fins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NusseltCorrelation {
    /// Developing laminar flow (Sieder-Tate / Graetz form):
    /// `Nu = C · (Re · Pr · D_h / L)^(1/3)`.
    DevelopingLaminar { coefficient: f64 },

    /// Fully developed turbulent flow (Dittus-Boelter form):
    /// `Nu = C · Re^a · Pr^b`.
    DittusBoelter {
        coefficient: f64,
        reynolds_exponent: f64,
        prandtl_exponent: f64,
    },
}

impl NusseltCorrelation {
    /// Sieder-Tate constant for developing laminar flow.
    pub const SIEDER_TATE: Self = Self::DevelopingLaminar { coefficient: 1.86 };

    /// Dittus-Boelter with the cooling exponent on the Prandtl number.
    pub const DITTUS_BOELTER: Self = Self::DittusBoelter {
        coefficient: 0.023,
        reynolds_exponent: 0.8,
        prandtl_exponent: 0.3,
    };

    /// Evaluates the Nusselt number.
    ///
    /// `hydraulic_diameter / flow_length` only enters the developing-flow form.
    #[must_use]
    pub fn nusselt(
        &self,
        reynolds_number: f64,
        prandtl_number: f64,
        hydraulic_diameter: Length,
        flow_length: Length,
    ) -> f64 {
        match *self {
            Self::DevelopingLaminar { coefficient } => {
                let graetz: Ratio = hydraulic_diameter / flow_length;
                let graetz = reynolds_number * prandtl_number * graetz.get::<ratio>();
                coefficient * graetz.cbrt()
            }
            Self::DittusBoelter {
                coefficient,
                reynolds_exponent,
                prandtl_exponent,
            } => {
                coefficient
                    * reynolds_number.powf(reynolds_exponent)
                    * prandtl_number.powf(prandtl_exponent)
            }
        }
    }

    fn coefficient(&self) -> f64 {
        match *self {
            Self::DevelopingLaminar { coefficient } | Self::DittusBoelter { coefficient, .. } => {
                coefficient
            }
        }
    }
}

/// The correlation used in each flow regime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CorrelationSet {
    pub laminar: NusseltCorrelation,
    pub transitional: NusseltCorrelation,
    pub turbulent: NusseltCorrelation,
}

impl Default for CorrelationSet {
    /// Sieder-Tate below the laminar limit, Dittus-Boelter above it.
    fn default() -> Self {
        Self {
            laminar: NusseltCorrelation::SIEDER_TATE,
            transitional: NusseltCorrelation::DITTUS_BOELTER,
            turbulent: NusseltCorrelation::DITTUS_BOELTER,
        }
    }
}

impl CorrelationSet {
    /// Selects the correlation for `regime`.
    #[must_use]
    pub fn for_regime(&self, regime: FlowRegime) -> NusseltCorrelation {
        match regime {
            FlowRegime::Laminar => self.laminar,
            FlowRegime::Transitional => self.transitional,
            FlowRegime::Turbulent => self.turbulent,
        }
    }
}

/// How fin area is weighted against base area.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FinEfficiencyModel {
    /// Every fin is at base temperature (`η = 1`).
    #[default]
    Ideal,

    /// Straight rectangular fin with an adiabatic tip:
    /// `η = tanh(mH) / (mH)`, `m = sqrt(2h / (k · t))`.
    StraightFinAdiabaticTip,
}

/// Results of the convective stage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Convection {
    /// The correlation that produced [`Self::nusselt_number`].
    pub correlation: NusseltCorrelation,

    pub nusselt_number: f64,

    /// Film coefficient `h = Nu · k_air / D_h`.
    pub heat_transfer_coefficient: HeatTransfer,

    /// Fin plus exposed base area, before fin efficiency.
    pub total_area: Area,

    /// Fin efficiency in `(0, 1]`.
    pub fin_efficiency: f64,

    /// `η · A_fins + A_base`.
    pub effective_area: Area,

    /// `1 / (h · A_eff)`.
    pub r_conv: ThermalResistance,
}

/// Computes the convective resistance of the finned surface.
///
/// # Errors
///
/// - [`ThermalError::InvalidMaterial`] if the air conductivity or Prandtl
///   number is not strictly positive.
/// - [`ThermalError::InvalidFlowState`] if the selected correlation has a
///   non-positive coefficient or yields a non-finite Nusselt number.
/// - [`ThermalError::ComputationOverflow`] if `h · A_eff` is zero, as in still air.
pub(super) fn convect(
    flow: &FlowState,
    geometry: &DerivedGeometry,
    sink: &HeatSink,
    air: &TransportProperties,
    correlations: &CorrelationSet,
    fin_efficiency: FinEfficiencyModel,
) -> Result<Convection, ThermalError> {
    let k_air = strictly_positive(air.thermal_conductivity, ErrorKind::InvalidMaterial, "k_air")?
        .into_inner();
    let prandtl = strictly_positive(air.prandtl_number, ErrorKind::InvalidMaterial, "prandtl_number")?
        .into_inner();

    let correlation = correlations.for_regime(flow.regime);
    strictly_positive(
        correlation.coefficient(),
        ErrorKind::InvalidFlowState,
        "nusselt_correlation",
    )?;

    let nusselt_number = correlation.nusselt(
        flow.reynolds_number,
        prandtl,
        geometry.hydraulic_diameter,
        sink.length,
    );
    finite(nusselt_number, ErrorKind::InvalidFlowState, "nusselt_number")?;

    let heat_transfer_coefficient: HeatTransfer =
        k_air / geometry.hydraulic_diameter * nusselt_number;

    let fin_efficiency = match fin_efficiency {
        FinEfficiencyModel::Ideal => 1.0,
        FinEfficiencyModel::StraightFinAdiabaticTip => {
            adiabatic_tip_efficiency(heat_transfer_coefficient, sink)?
        }
    };

    let total_area = geometry.total_convective_area();
    let effective_area = geometry.fin_area * fin_efficiency + geometry.exposed_base_area;

    let conductance: ThermalConductance = heat_transfer_coefficient * effective_area;
    let conductance = strictly_positive(conductance, ErrorKind::ComputationOverflow, "r_conv")?;
    let r_conv = ThermalResistance::from_conductance(conductance);
    finite(r_conv.kelvin_per_watt(), ErrorKind::ComputationOverflow, "r_conv")?;

    Ok(Convection {
        correlation,
        nusselt_number,
        heat_transfer_coefficient,
        total_area,
        fin_efficiency,
        effective_area,
        r_conv,
    })
}

fn adiabatic_tip_efficiency(h: HeatTransfer, sink: &HeatSink) -> Result<f64, ThermalError> {
    let k_fin = strictly_positive(sink.conductivity, ErrorKind::InvalidMaterial, "k_aluminum")?
        .into_inner()
        .get::<watt_per_meter_kelvin>();
    let h = h.get::<watt_per_square_meter_kelvin>();
    let t = sink.fin_thickness.get::<meter>();

    let m = (2.0 * h / (k_fin * t)).sqrt();
    let ml = m * sink.fin_height.get::<meter>();
    let eta = if ml > 0.0 { ml.tanh() / ml } else { 1.0 };

    let eta = UnitIntervalLowerOpen::new(eta)
        .map_err(|err| ThermalError::new(ErrorKind::ComputationOverflow, "fin_efficiency", err))?;
    Ok(eta.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{area::square_meter, f64::Velocity, velocity::meter_per_second};

    use crate::models::thermal::heat_sink::core::{
        ThermalInputs, flow::{RegimeThresholds, classify}, geometry::resolve,
    };
    use crate::support::thermo::fluid::Air;

    fn run(inputs: &ThermalInputs, model: FinEfficiencyModel) -> Result<Convection, ThermalError> {
        let air = Air::reference();
        let geometry = resolve(inputs)?;
        let flow = classify(
            inputs.air_velocity,
            geometry.fin_spacing,
            &air,
            &RegimeThresholds::default(),
        )?;
        convect(
            &flow,
            &geometry,
            &inputs.sink,
            &air,
            &CorrelationSet::default(),
            model,
        )
    }

    #[test]
    fn reference_convection() {
        let convection = run(&ThermalInputs::reference(), FinEfficiencyModel::Ideal).unwrap();

        assert_eq!(convection.correlation, NusseltCorrelation::SIEDER_TATE);
        assert_relative_eq!(convection.nusselt_number, 2.05, max_relative = 0.01);
        assert_relative_eq!(
            convection
                .heat_transfer_coefficient
                .get::<watt_per_square_meter_kelvin>(),
            23.3,
            max_relative = 0.01
        );
        assert_relative_eq!(convection.fin_efficiency, 1.0);
        assert_relative_eq!(
            convection.total_area.get::<square_meter>(),
            convection.effective_area.get::<square_meter>()
        );
        assert_relative_eq!(convection.r_conv.kelvin_per_watt(), 0.159, max_relative = 0.01);
    }

    #[test]
    fn faster_air_lowers_resistance() {
        let slow = run(&ThermalInputs::reference(), FinEfficiencyModel::Ideal).unwrap();
        let fast_inputs = ThermalInputs::reference()
            .with_air_velocity(Velocity::new::<meter_per_second>(3.0));
        let fast = run(&fast_inputs, FinEfficiencyModel::Ideal).unwrap();

        assert!(fast.r_conv < slow.r_conv);
    }

    #[test]
    fn finite_fin_efficiency_reduces_effective_area() {
        let ideal = run(&ThermalInputs::reference(), FinEfficiencyModel::Ideal).unwrap();
        let real = run(
            &ThermalInputs::reference(),
            FinEfficiencyModel::StraightFinAdiabaticTip,
        )
        .unwrap();

        assert!(real.fin_efficiency < 1.0);
        assert!(real.fin_efficiency > 0.9);
        assert!(real.effective_area < ideal.effective_area);
        assert!(real.r_conv > ideal.r_conv);
    }

    #[test]
    fn still_air_overflows() {
        let inputs =
            ThermalInputs::reference().with_air_velocity(Velocity::new::<meter_per_second>(0.0));
        let err = run(&inputs, FinEfficiencyModel::Ideal).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::ComputationOverflow);
        assert_eq!(err.parameter(), "r_conv");
    }

    #[test]
    fn laminar_and_turbulent_forms_differ() {
        let d_h = Length::new::<meter>(0.0023);
        let l = Length::new::<meter>(0.09);

        let laminar = NusseltCorrelation::SIEDER_TATE.nusselt(2299.0, 0.71, d_h, l);
        let turbulent = NusseltCorrelation::DITTUS_BOELTER.nusselt(2300.0, 0.71, d_h, l);

        assert_relative_eq!(laminar, 1.86 * (2299.0_f64 * 0.71 * 0.0023 / 0.09).cbrt());
        assert_relative_eq!(
            turbulent,
            0.023 * 2300.0_f64.powf(0.8) * 0.71_f64.powf(0.3)
        );
        assert!((laminar - turbulent).abs() > 1.0);
    }

    #[test]
    fn rejects_non_positive_correlation_coefficient() {
        let air = Air::reference();
        let inputs = ThermalInputs::reference();
        let geometry = resolve(&inputs).unwrap();
        let flow = classify(
            inputs.air_velocity,
            geometry.fin_spacing,
            &air,
            &RegimeThresholds::default(),
        )
        .unwrap();
        let correlations = CorrelationSet {
            laminar: NusseltCorrelation::DevelopingLaminar { coefficient: 0.0 },
            ..CorrelationSet::default()
        };

        let err = convect(
            &flow,
            &geometry,
            &inputs.sink,
            &air,
            &correlations,
            FinEfficiencyModel::Ideal,
        )
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidFlowState);
        assert_eq!(err.parameter(), "nusselt_correlation");
    }
}
