//! Steady-state resistance network for a finned heat sink in forced air.
//!
//! An analysis runs five stages in a fixed order, each a pure function of the
//! inputs and the stages before it:
//!
//! 1. [`geometry`]: die area, fin spacing, and convective areas.
//! 2. [`conduction`]: junction-to-case, interface, and base resistances.
//! 3. [`flow`]: Reynolds number and flow regime in the fin channels.
//! 4. [`convection`]: Nusselt number, film coefficient, and convective resistance.
//! 5. [`network`]: series total and junction temperature.
//!
//! Nothing is cached between analyses and no stage retries or corrects an
//! upstream value. A stage that cannot produce a finite, non-negative result
//! fails with a [`ThermalError`] naming the parameter at fault.

mod conduction;
mod config;
mod convection;
mod error;
mod flow;
mod geometry;
mod input;
mod network;
mod required_velocity;
mod results;

pub use conduction::Conduction;
pub use config::NetworkConfig;
pub use convection::{Convection, CorrelationSet, FinEfficiencyModel, NusseltCorrelation};
pub use error::{ErrorKind, ThermalError};
pub use flow::{FlowRegime, FlowState, RegimeThresholds};
pub use geometry::DerivedGeometry;
pub use input::{DieGeometry, HeatSink, InterfaceMaterial, ThermalInputs};
pub use network::{ResistanceNetwork, ResistanceTerm};
pub use required_velocity::{RequiredVelocityConfig, SizingError, required_velocity};
pub use results::AnalysisResult;

use uom::si::{
    area::square_meter,
    f64::{Power, ThermodynamicTemperature},
    heat_transfer::watt_per_square_meter_kelvin,
    length::meter,
    thermodynamic_temperature::degree_celsius,
};

/// Runs the full pipeline for one set of inputs.
///
/// # Errors
///
/// Returns the first [`ThermalError`] raised by any stage.
pub fn analyze(
    inputs: &ThermalInputs,
    config: &NetworkConfig,
) -> Result<AnalysisResult, ThermalError> {
    let geometry = geometry::resolve(inputs)?;
    tracing::debug!(
        die_area_m2 = geometry.die_area.get::<square_meter>(),
        fin_spacing_m = geometry.fin_spacing.get::<meter>(),
        "resolved geometry"
    );

    let conduction = conduction::conduct(inputs, &geometry)?;
    tracing::debug!(
        r_jc = conduction.r_jc.kelvin_per_watt(),
        r_tim = conduction.r_tim.kelvin_per_watt(),
        r_cond = conduction.r_cond.kelvin_per_watt(),
        "computed conductive resistances"
    );

    let flow = flow::classify(
        inputs.air_velocity,
        geometry.fin_spacing,
        &config.air,
        &config.regimes,
    )?;
    tracing::debug!(
        reynolds_number = flow.reynolds_number,
        regime = %flow.regime,
        "classified channel flow"
    );

    let convection = convection::convect(
        &flow,
        &geometry,
        &inputs.sink,
        &config.air,
        &config.correlations,
        config.fin_efficiency,
    )?;
    tracing::debug!(
        nusselt_number = convection.nusselt_number,
        h_w_m2k = convection
            .heat_transfer_coefficient
            .get::<watt_per_square_meter_kelvin>(),
        fin_efficiency = convection.fin_efficiency,
        r_conv = convection.r_conv.kelvin_per_watt(),
        "computed convective resistance"
    );

    let network = ResistanceNetwork::new(&conduction, convection.r_conv)?;
    let junction_temperature = network::junction_temperature(inputs, &network)?;
    tracing::debug!(
        r_total = network.total().kelvin_per_watt(),
        junction_c = junction_temperature.get::<degree_celsius>(),
        "aggregated network"
    );

    Ok(AnalysisResult {
        inputs: *inputs,
        geometry,
        conduction,
        flow,
        convection,
        network,
        junction_temperature,
    })
}

/// Largest dissipation that keeps the junction at or below `limit`.
///
/// The network is evaluated at the given inputs; none of its terms depend on
/// power, so the headroom is `(T_limit - T_ambient) / R_total`.
///
/// # Errors
///
/// Returns any error from [`analyze`], or [`ThermalError::InvalidInput`] on
/// `junction_limit` if the limit is not above ambient.
pub fn max_power(
    inputs: &ThermalInputs,
    limit: ThermodynamicTemperature,
    config: &NetworkConfig,
) -> Result<Power, ThermalError> {
    let result = analyze(inputs, config)?;
    result.power_headroom(limit).ok_or_else(|| {
        ThermalError::new(
            ErrorKind::InvalidInput,
            "junction_limit",
            format!(
                "limit {} °C is not above ambient {} °C",
                limit.get::<degree_celsius>(),
                inputs.ambient.get::<degree_celsius>()
            ),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        f64::{ThermalConductivity, Velocity},
        power::watt,
        thermal_conductivity::watt_per_meter_kelvin,
        thermodynamic_temperature::kelvin,
        velocity::meter_per_second,
    };

    use crate::support::thermo::fluid::Air;

    #[test]
    fn reference_junction_temperature() {
        let result = analyze(&ThermalInputs::reference(), &NetworkConfig::default()).unwrap();

        assert_eq!(result.flow.regime, FlowRegime::Laminar);
        assert_relative_eq!(
            result.total_resistance().kelvin_per_watt(),
            0.376,
            max_relative = 0.02
        );
        assert_relative_eq!(
            result.junction_temperature.get::<degree_celsius>(),
            81.3,
            max_relative = 0.02
        );
    }

    #[test]
    fn more_power_is_hotter() {
        let config = NetworkConfig::default();
        let mut previous = f64::NEG_INFINITY;

        for watts in [50.0, 100.0, 150.0, 200.0] {
            let inputs = ThermalInputs::reference().with_power(Power::new::<watt>(watts));
            let t_j = analyze(&inputs, &config)
                .unwrap()
                .junction_temperature
                .get::<degree_celsius>();
            assert!(t_j > previous, "{watts} W should be hotter than the previous step");
            previous = t_j;
        }
    }

    #[test]
    fn more_air_is_cooler_within_a_regime() {
        let config = NetworkConfig::default();
        let mut previous_r_conv = f64::INFINITY;
        let mut previous_t_j = f64::INFINITY;

        for speed in [0.5, 1.0, 2.0, 4.0, 8.0] {
            let inputs = ThermalInputs::reference()
                .with_air_velocity(Velocity::new::<meter_per_second>(speed));
            let result = analyze(&inputs, &config).unwrap();
            assert_eq!(result.flow.regime, FlowRegime::Laminar);

            let r_conv = result.convection.r_conv.kelvin_per_watt();
            let t_j = result.junction_temperature.get::<degree_celsius>();
            assert!(r_conv < previous_r_conv);
            assert!(t_j < previous_t_j);
            previous_r_conv = r_conv;
            previous_t_j = t_j;
        }
    }

    #[test]
    fn repeated_calls_are_identical() {
        let config = NetworkConfig::default();
        let inputs = ThermalInputs::reference();

        let first = analyze(&inputs, &config).unwrap();
        let second = analyze(&inputs, &config).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn errors_propagate_unchanged() {
        let mut inputs = ThermalInputs::reference();
        inputs.tim.conductivity = ThermalConductivity::new::<watt_per_meter_kelvin>(0.0);

        let err = analyze(&inputs, &NetworkConfig::default()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidMaterial);
        assert_eq!(err.parameter(), "k_tim");
    }

    #[test]
    fn warmer_air_changes_the_flow() {
        let inputs = ThermalInputs::reference();
        let cool = analyze(&inputs, &NetworkConfig::default()).unwrap();

        let hot_air = Air::at_temperature(ThermodynamicTemperature::new::<kelvin>(350.0)).unwrap();
        let warm = analyze(&inputs, &NetworkConfig::default().with_air(hot_air)).unwrap();

        assert!(warm.flow.reynolds_number < cool.flow.reynolds_number);
    }

    #[test]
    fn power_headroom_reaches_the_limit() {
        let inputs = ThermalInputs::reference();
        let config = NetworkConfig::default();
        let limit = ThermodynamicTemperature::new::<degree_celsius>(100.0);

        let p_max = max_power(&inputs, limit, &config).unwrap();
        let at_limit = analyze(&inputs.with_power(p_max), &config).unwrap();

        assert_relative_eq!(
            at_limit.junction_temperature.get::<degree_celsius>(),
            100.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn power_headroom_needs_a_limit_above_ambient() {
        let limit = ThermodynamicTemperature::new::<degree_celsius>(20.0);
        let err =
            max_power(&ThermalInputs::reference(), limit, &NetworkConfig::default()).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert_eq!(err.parameter(), "junction_limit");
    }
}
