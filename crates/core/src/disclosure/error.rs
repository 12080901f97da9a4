//! Disclosure error types.

use sentra_shared::AppError;
use thiserror::Error;

/// An unrecognized authorization-tier claim was supplied.
///
/// Not fatal to disclosure itself: the lenient resolution path proceeds
/// with the maximal-redaction rule set. Callers that must reject the
/// request outright use the strict parse and surface this error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unrecognized authorization tier claim '{claim}'")]
pub struct UnknownTierError {
    /// The claim string that failed to resolve.
    pub claim: String,
}

impl UnknownTierError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        "UNKNOWN_TIER"
    }
}

impl From<UnknownTierError> for AppError {
    fn from(err: UnknownTierError) -> Self {
        Self::Forbidden(err.to_string())
    }
}
