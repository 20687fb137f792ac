use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::thermal::heat_sink::{SizingError, ThermalError};

/// Errors from handling a request end to end.
#[derive(Debug, Error)]
pub enum RequestError {
    /// The request could not be read.
    #[error("failed to read request from {origin}")]
    Read {
        origin: String,
        #[source]
        source: std::io::Error,
    },

    /// The request is not a JSON object of numeric parameters.
    #[error("malformed request: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Thermal(#[from] ThermalError),

    #[error(transparent)]
    Sizing(#[from] SizingError),
}

/// Machine-readable description of a failed request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorReport {
    /// `InvalidInput`, `InvalidGeometry`, `InvalidMaterial`,
    /// `InvalidFlowState`, `ComputationOverflow`, `InvalidRequest`,
    /// `Unreachable`, or `SolverFailure`.
    pub kind: String,

    /// The rejected parameter, when one is to blame.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameter: Option<String>,

    pub message: String,
}

impl From<&RequestError> for ErrorReport {
    fn from(err: &RequestError) -> Self {
        let (kind, parameter) = match err {
            RequestError::Read { .. } | RequestError::Parse(_) => ("InvalidRequest", None),
            RequestError::Thermal(thermal) | RequestError::Sizing(SizingError::Thermal(thermal)) => {
                (thermal.kind().as_str(), Some(thermal.parameter().to_owned()))
            }
            RequestError::Sizing(
                SizingError::Unreachable { .. } | SizingError::Discontinuous { .. },
            ) => ("Unreachable", None),
            RequestError::Sizing(_) => ("SolverFailure", None),
        };

        Self {
            kind: kind.to_owned(),
            parameter,
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::models::thermal::heat_sink::ErrorKind;

    #[test]
    fn thermal_errors_keep_kind_and_parameter() {
        let err = RequestError::from(ThermalError::new(
            ErrorKind::InvalidGeometry,
            "num_fins",
            "fins do not fit",
        ));
        let report = ErrorReport::from(&err);

        assert_eq!(report.kind, "InvalidGeometry");
        assert_eq!(report.parameter.as_deref(), Some("num_fins"));
        assert!(report.message.contains("fins do not fit"));
    }

    #[test]
    fn parse_errors_have_no_parameter() {
        let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let report = ErrorReport::from(&RequestError::from(parse));

        assert_eq!(report.kind, "InvalidRequest");
        assert_eq!(report.parameter, None);

        let json = serde_json::to_value(&report).unwrap();
        assert!(json.get("parameter").is_none());
    }
}
