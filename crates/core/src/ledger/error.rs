//! Ledger error types.

use sentra_shared::AppError;
use thiserror::Error;

/// Errors that can occur while building a sign convention or aggregating.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// A transaction type code has no defined polarity.
    ///
    /// Fatal to the aggregation call: the upstream data or the convention
    /// table must be fixed. Never defaulted.
    #[error("No polarity defined for transaction type code '{type_code}'")]
    ConventionGap {
        /// The offending type code.
        type_code: String,
    },

    /// A configuration override named a polarity that does not exist.
    #[error("Invalid polarity name '{name}' for transaction type code '{type_code}'")]
    InvalidPolarityName {
        /// The type code the override targeted.
        type_code: String,
        /// The unparseable polarity name.
        name: String,
    },

    /// A sign convention must define at least one type code.
    #[error("Sign convention must define at least one type code")]
    EmptyConvention,
}

impl LedgerError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::ConventionGap { .. } => "CONVENTION_GAP",
            Self::InvalidPolarityName { .. } => "INVALID_POLARITY_NAME",
            Self::EmptyConvention => "EMPTY_CONVENTION",
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn http_status_code(&self) -> u16 {
        match self {
            // 422 Unprocessable - the records and the table disagree
            Self::ConventionGap { .. } => 422,
            // 400 Bad Request - broken configuration input
            Self::InvalidPolarityName { .. } | Self::EmptyConvention => 400,
        }
    }
}

impl From<LedgerError> for AppError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::ConventionGap { .. } => Self::BusinessRule(err.to_string()),
            LedgerError::InvalidPolarityName { .. } | LedgerError::EmptyConvention => {
                Self::Validation(err.to_string())
            }
        }
    }
}
