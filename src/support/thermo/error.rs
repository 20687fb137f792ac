use thiserror::Error;

/// Errors that may occur when evaluating fluid properties.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PropertyError {
    /// The requested state is outside the range the property data covers.
    #[error("out of domain: {context}")]
    OutOfDomain { context: String },

    /// The provided state is invalid or inconsistent.
    ///
    /// For example, a temperature that is not a number.
    #[error("invalid state: {context}")]
    InvalidState { context: String },
}
