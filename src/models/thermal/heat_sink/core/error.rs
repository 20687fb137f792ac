use std::fmt;

use num_traits::Zero;
use thiserror::Error;

use crate::support::constraint::{Constrained, NonNegative, StrictlyPositive};

/// Machine-readable category of a [`ThermalError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidInput,
    InvalidGeometry,
    InvalidMaterial,
    InvalidFlowState,
    ComputationOverflow,
}

impl ErrorKind {
    /// Stable identifier for reports and scripts.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::InvalidInput => "InvalidInput",
            Self::InvalidGeometry => "InvalidGeometry",
            Self::InvalidMaterial => "InvalidMaterial",
            Self::InvalidFlowState => "InvalidFlowState",
            Self::ComputationOverflow => "ComputationOverflow",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors raised by the resistance network stages.
///
/// Every variant names the offending parameter so a caller can point at the
/// exact input that was rejected. No partial result accompanies an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ThermalError {
    /// A non-positive power, a negative air velocity, or a non-finite temperature.
    #[error("invalid input `{parameter}`: {reason}")]
    InvalidInput {
        parameter: &'static str,
        reason: String,
    },

    /// A non-positive length or area, or fins that do not fit on the base.
    #[error("invalid geometry `{parameter}`: {reason}")]
    InvalidGeometry {
        parameter: &'static str,
        reason: String,
    },

    /// A non-positive conductivity or fluid property.
    #[error("invalid material `{parameter}`: {reason}")]
    InvalidMaterial {
        parameter: &'static str,
        reason: String,
    },

    /// An unrecognized flow regime or a Reynolds number that cannot be classified.
    #[error("invalid flow state `{parameter}`: {reason}")]
    InvalidFlowState {
        parameter: &'static str,
        reason: String,
    },

    /// A denominator collapsed to zero or a result left the finite range.
    ///
    /// Input validation should catch these first; this variant guards the
    /// cases it cannot, such as still air producing a zero film coefficient.
    #[error("computation overflow in `{parameter}`: {reason}")]
    ComputationOverflow {
        parameter: &'static str,
        reason: String,
    },
}

impl ThermalError {
    /// Builds an error of the given kind.
    pub fn new(kind: ErrorKind, parameter: &'static str, reason: impl fmt::Display) -> Self {
        let reason = reason.to_string();
        match kind {
            ErrorKind::InvalidInput => Self::InvalidInput { parameter, reason },
            ErrorKind::InvalidGeometry => Self::InvalidGeometry { parameter, reason },
            ErrorKind::InvalidMaterial => Self::InvalidMaterial { parameter, reason },
            ErrorKind::InvalidFlowState => Self::InvalidFlowState { parameter, reason },
            ErrorKind::ComputationOverflow => Self::ComputationOverflow { parameter, reason },
        }
    }

    /// The category of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidInput { .. } => ErrorKind::InvalidInput,
            Self::InvalidGeometry { .. } => ErrorKind::InvalidGeometry,
            Self::InvalidMaterial { .. } => ErrorKind::InvalidMaterial,
            Self::InvalidFlowState { .. } => ErrorKind::InvalidFlowState,
            Self::ComputationOverflow { .. } => ErrorKind::ComputationOverflow,
        }
    }

    /// Name of the rejected parameter.
    #[must_use]
    pub fn parameter(&self) -> &'static str {
        match self {
            Self::InvalidInput { parameter, .. }
            | Self::InvalidGeometry { parameter, .. }
            | Self::InvalidMaterial { parameter, .. }
            | Self::InvalidFlowState { parameter, .. }
            | Self::ComputationOverflow { parameter, .. } => parameter,
        }
    }
}

/// Requires `value > 0`, reporting a violation as `kind` on `parameter`.
pub(super) fn strictly_positive<T: PartialOrd + Zero>(
    value: T,
    kind: ErrorKind,
    parameter: &'static str,
) -> Result<Constrained<T, StrictlyPositive>, ThermalError> {
    StrictlyPositive::new(value).map_err(|err| ThermalError::new(kind, parameter, err))
}

/// Requires `value ≥ 0`, reporting a violation as `kind` on `parameter`.
pub(super) fn non_negative<T: PartialOrd + Zero>(
    value: T,
    kind: ErrorKind,
    parameter: &'static str,
) -> Result<Constrained<T, NonNegative>, ThermalError> {
    NonNegative::new(value).map_err(|err| ThermalError::new(kind, parameter, err))
}

/// Requires a finite value, reporting a violation as `kind` on `parameter`.
pub(super) fn finite(value: f64, kind: ErrorKind, parameter: &'static str) -> Result<f64, ThermalError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ThermalError::new(kind, parameter, format!("value {value} is not finite")))
    }
}
