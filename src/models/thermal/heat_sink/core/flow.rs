//! Stage 3: Reynolds number and flow-regime classification.

use std::{fmt, str::FromStr};

use uom::si::{
    f64::{Length, Ratio, Velocity},
    ratio::ratio,
};

use crate::support::thermo::TransportProperties;

use super::{
    ErrorKind, ThermalError,
    error::{finite, non_negative, strictly_positive},
};

/// Flow regime in the fin channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlowRegime {
    Laminar,
    Transitional,
    Turbulent,
}

impl FlowRegime {
    /// Human-readable label, as shown in reports.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Laminar => "Laminar",
            Self::Transitional => "Transitional",
            Self::Turbulent => "Turbulent",
        }
    }
}

impl fmt::Display for FlowRegime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for FlowRegime {
    type Err = ThermalError;

    /// Parses a regime label, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "laminar" => Ok(Self::Laminar),
            "transitional" => Ok(Self::Transitional),
            "turbulent" => Ok(Self::Turbulent),
            other => Err(ThermalError::new(
                ErrorKind::InvalidFlowState,
                "flow_regime",
                format!("unrecognized regime `{other}`"),
            )),
        }
    }
}

/// Reynolds number boundaries between the regimes.
///
/// Below `laminar_limit` the flow is laminar; at or above `turbulent_onset` it
/// is turbulent; in between it is transitional. Setting both to the same
/// value removes the transitional band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegimeThresholds {
    pub laminar_limit: f64,
    pub turbulent_onset: f64,
}

impl Default for RegimeThresholds {
    fn default() -> Self {
        Self {
            laminar_limit: 2300.0,
            turbulent_onset: 10_000.0,
        }
    }
}

impl RegimeThresholds {
    /// Classifies a Reynolds number.
    ///
    /// Each value maps to exactly one regime: the lower bound of a band belongs
    /// to that band.
    ///
    /// # Errors
    ///
    /// Returns [`ThermalError::InvalidFlowState`] if the thresholds are not
    /// positive and ordered, or if `reynolds_number` is negative or not finite.
    pub fn classify(&self, reynolds_number: f64) -> Result<FlowRegime, ThermalError> {
        let laminar_limit = strictly_positive(
            self.laminar_limit,
            ErrorKind::InvalidFlowState,
            "laminar_limit",
        )?
        .into_inner();
        finite(laminar_limit, ErrorKind::InvalidFlowState, "laminar_limit")?;
        finite(self.turbulent_onset, ErrorKind::InvalidFlowState, "turbulent_onset")?;
        if self.turbulent_onset < laminar_limit {
            return Err(ThermalError::new(
                ErrorKind::InvalidFlowState,
                "turbulent_onset",
                "turbulent onset lies below the laminar limit",
            ));
        }

        let re = non_negative(reynolds_number, ErrorKind::InvalidFlowState, "reynolds_number")?
            .into_inner();
        finite(re, ErrorKind::InvalidFlowState, "reynolds_number")?;

        Ok(if re < laminar_limit {
            FlowRegime::Laminar
        } else if re < self.turbulent_onset {
            FlowRegime::Transitional
        } else {
            FlowRegime::Turbulent
        })
    }
}

/// Reynolds number and the regime it falls in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowState {
    pub reynolds_number: f64,
    pub regime: FlowRegime,
}

/// Computes `Re = V · s / ν` over the fin spacing `s` and classifies it.
///
/// Still air gives `Re = 0`, which is laminar.
///
/// # Errors
///
/// - [`ThermalError::InvalidInput`] if the air velocity is negative.
/// - [`ThermalError::InvalidMaterial`] if the kinematic viscosity is not strictly positive.
/// - [`ThermalError::InvalidFlowState`] if the result cannot be classified.
pub(super) fn classify(
    air_velocity: Velocity,
    fin_spacing: Length,
    air: &TransportProperties,
    thresholds: &RegimeThresholds,
) -> Result<FlowState, ThermalError> {
    let velocity =
        non_negative(air_velocity, ErrorKind::InvalidInput, "air_velocity")?.into_inner();
    let nu = strictly_positive(
        air.kinematic_viscosity,
        ErrorKind::InvalidMaterial,
        "kinematic_viscosity",
    )?
    .into_inner();

    let re: Ratio = velocity * fin_spacing / nu;
    let reynolds_number = re.get::<ratio>();
    let regime = thresholds.classify(reynolds_number)?;

    Ok(FlowState {
        reynolds_number,
        regime,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{length::meter, velocity::meter_per_second};

    use crate::support::{thermo::fluid::Air, units::kinematic_viscosity};

    fn reference_spacing() -> Length {
        Length::new::<meter>(0.068 / 59.0)
    }

    #[test]
    fn reference_flow_is_laminar() {
        let flow = classify(
            Velocity::new::<meter_per_second>(1.0),
            reference_spacing(),
            &Air::reference(),
            &RegimeThresholds::default(),
        )
        .unwrap();

        assert_relative_eq!(flow.reynolds_number, 73.41, max_relative = 1e-3);
        assert_eq!(flow.regime, FlowRegime::Laminar);
    }

    #[test]
    fn still_air_is_laminar() {
        let flow = classify(
            Velocity::new::<meter_per_second>(0.0),
            reference_spacing(),
            &Air::reference(),
            &RegimeThresholds::default(),
        )
        .unwrap();

        assert_eq!(flow.reynolds_number, 0.0);
        assert_eq!(flow.regime, FlowRegime::Laminar);
    }

    #[test]
    fn negative_velocity_is_rejected() {
        let err = classify(
            Velocity::new::<meter_per_second>(-1.0),
            reference_spacing(),
            &Air::reference(),
            &RegimeThresholds::default(),
        )
        .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert_eq!(err.parameter(), "air_velocity");
    }

    #[test]
    fn zero_viscosity_is_rejected() {
        let mut air = Air::reference();
        air.kinematic_viscosity = kinematic_viscosity(0.0);

        let err = classify(
            Velocity::new::<meter_per_second>(1.0),
            reference_spacing(),
            &air,
            &RegimeThresholds::default(),
        )
        .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InvalidMaterial);
        assert_eq!(err.parameter(), "kinematic_viscosity");
    }

    #[test]
    fn thresholds_partition_the_axis() {
        let thresholds = RegimeThresholds::default();

        assert_eq!(thresholds.classify(2299.999).unwrap(), FlowRegime::Laminar);
        assert_eq!(thresholds.classify(2300.0).unwrap(), FlowRegime::Transitional);
        assert_eq!(thresholds.classify(9999.0).unwrap(), FlowRegime::Transitional);
        assert_eq!(thresholds.classify(10_000.0).unwrap(), FlowRegime::Turbulent);
    }

    #[test]
    fn collapsed_band_goes_straight_to_turbulent() {
        let thresholds = RegimeThresholds {
            laminar_limit: 2300.0,
            turbulent_onset: 2300.0,
        };

        assert_eq!(thresholds.classify(2299.0).unwrap(), FlowRegime::Laminar);
        assert_eq!(thresholds.classify(2300.0).unwrap(), FlowRegime::Turbulent);
    }

    #[test]
    fn unclassifiable_reynolds_numbers() {
        let thresholds = RegimeThresholds::default();

        for re in [f64::NAN, f64::INFINITY, -1.0] {
            let err = thresholds.classify(re).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidFlowState);
        }

        let inverted = RegimeThresholds {
            laminar_limit: 2300.0,
            turbulent_onset: 1000.0,
        };
        assert_eq!(
            inverted.classify(50.0).unwrap_err().parameter(),
            "turbulent_onset"
        );
    }

    #[test]
    fn labels_round_trip() {
        for regime in [
            FlowRegime::Laminar,
            FlowRegime::Transitional,
            FlowRegime::Turbulent,
        ] {
            assert_eq!(regime.label().parse::<FlowRegime>().unwrap(), regime);
        }
        assert_eq!(" TURBULENT ".parse::<FlowRegime>().unwrap(), FlowRegime::Turbulent);

        let err = "creeping".parse::<FlowRegime>().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidFlowState);
        assert_eq!(err.parameter(), "flow_regime");
    }
}
