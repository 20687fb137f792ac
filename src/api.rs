//! JSON request and report surface.
//!
//! A request carries the named SI parameters of one analysis, each with a
//! default from the reference configuration. Reports expose every
//! intermediate value of the resistance network under stable,
//! unit-suffixed keys. Failures become an [`ErrorReport`] rather than a
//! partial result.

mod error;
mod report;
mod request;

pub use error::{ErrorReport, RequestError};
pub use report::{
    AnalysisReport, HeatTransferSummary, InputParameters, JunctionSummary, PowerHeadroomReport,
    RequiredVelocityReport, ResistanceSummary,
};
pub use request::{AnalysisRequest, FinEfficiency, RequestSource};

use twine_core::Model;
use uom::si::{f64::ThermodynamicTemperature, thermodynamic_temperature::degree_celsius};

use crate::models::thermal::heat_sink::{ForcedAirHeatSink, RequiredVelocityConfig};

/// Runs one analysis and builds its report.
///
/// # Errors
///
/// Returns [`RequestError::Thermal`] if the request is rejected by any stage.
pub fn analyze(request: &AnalysisRequest) -> Result<AnalysisReport, RequestError> {
    let model = ForcedAirHeatSink::new(request.config()?);
    let result = model.call(&request.inputs()?)?;
    Ok(AnalysisReport::from(&result))
}

/// Finds the largest power that keeps the junction at or below `limit_c` (°C).
///
/// # Errors
///
/// Returns [`RequestError::Thermal`] if the request is rejected or the limit
/// is not above ambient.
pub fn size_power(
    request: &AnalysisRequest,
    limit_c: f64,
) -> Result<PowerHeadroomReport, RequestError> {
    let model = ForcedAirHeatSink::new(request.config()?);
    let inputs = request.inputs()?;
    let limit = ThermodynamicTemperature::new::<degree_celsius>(limit_c);

    let max_power = model.max_power(&inputs, limit)?;
    let at_limit = model.call(&inputs.with_power(max_power))?;
    Ok(PowerHeadroomReport::new(limit_c, &at_limit))
}

/// Finds the air velocity that brings the junction to `target_c` (°C).
///
/// The request's own air velocity is ignored.
///
/// # Errors
///
/// Returns [`RequestError::Thermal`] if the request is rejected and
/// [`RequestError::Sizing`] if the target cannot be met.
pub fn size_velocity(
    request: &AnalysisRequest,
    target_c: f64,
) -> Result<RequiredVelocityReport, RequestError> {
    let model = ForcedAirHeatSink::new(request.config()?);
    let target = ThermodynamicTemperature::new::<degree_celsius>(target_c);

    let sized = model.required_velocity(
        &request.inputs()?,
        target,
        RequiredVelocityConfig::default(),
    )?;
    Ok(RequiredVelocityReport::new(target_c, &sized))
}
