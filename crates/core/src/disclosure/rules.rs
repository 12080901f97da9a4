//! Declarative redaction rule tables.
//!
//! Each tier's rule set is the union of explicit per-tier deltas, so the
//! nesting invariant (everything hidden from a manager is also hidden from
//! standard and read-only requesters) holds by construction and can be
//! reviewed by reading the tables, not just by running the tests.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::tier::AuthorizationTier;

/// Sensitivity class of a view field, determining how redaction applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sensitivity {
    /// Identifying data (card numbers, SSNs, account numbers). Nulled.
    Identifier,
    /// Balance and amount figures. Nulled.
    Monetary,
    /// Descriptive text such as merchant names. Never redacted; the class
    /// exists so the distinction is explicit, and no rule table entry may
    /// carry it.
    FreeText,
}

/// Every field the disclosure engine knows how to redact.
///
/// Adding a maskable view field means adding a variant here; the match in
/// [`RedactableField::path`] and the engine are total over the enum, so a
/// missing classification is a compile error rather than a silent leak.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RedactableField {
    /// The card PAN on the transaction view.
    CardNumber,
    /// The aggregated category balance on the transaction view.
    CategoryBalance,
    /// The account number on the account view.
    AccountNumber,
    /// The current balance on the account view.
    CurrentBalance,
    /// The available credit on the account view.
    AvailableCredit,
    /// The customer's social security number.
    CustomerSsn,
    /// The customer's date of birth.
    CustomerDateOfBirth,
    /// The customer's email address.
    CustomerEmail,
    /// The customer's phone number.
    CustomerPhone,
}

impl RedactableField {
    /// The audit field path, as reported in the redacted-field list.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::CardNumber => "transactionDetails.cardNumber",
            Self::CategoryBalance => "transactionDetails.categoryBalance",
            Self::AccountNumber => "accountInfo.accountNumber",
            Self::CurrentBalance => "accountInfo.currentBalance",
            Self::AvailableCredit => "accountInfo.availableCredit",
            Self::CustomerSsn => "customerInfo.ssn",
            Self::CustomerDateOfBirth => "customerInfo.dateOfBirth",
            Self::CustomerEmail => "customerInfo.email",
            Self::CustomerPhone => "customerInfo.phone",
        }
    }

    /// The sensitivity class driving the redaction sentinel.
    #[must_use]
    pub const fn sensitivity(self) -> Sensitivity {
        match self {
            Self::CardNumber
            | Self::AccountNumber
            | Self::CustomerSsn
            | Self::CustomerDateOfBirth
            | Self::CustomerEmail
            | Self::CustomerPhone => Sensitivity::Identifier,
            Self::CategoryBalance | Self::CurrentBalance | Self::AvailableCredit => {
                Sensitivity::Monetary
            }
        }
    }
}

/// Fields hidden from managers (and every tier below).
pub const MANAGER_REDACTIONS: &[RedactableField] =
    &[RedactableField::CardNumber, RedactableField::CustomerSsn];

/// Fields additionally hidden from standard requesters.
pub const STANDARD_REDACTIONS: &[RedactableField] = &[
    RedactableField::CurrentBalance,
    RedactableField::AvailableCredit,
    RedactableField::CustomerDateOfBirth,
];

/// Fields additionally hidden from read-only (and unknown) requesters.
pub const READONLY_REDACTIONS: &[RedactableField] = &[
    RedactableField::AccountNumber,
    RedactableField::CustomerEmail,
    RedactableField::CustomerPhone,
    RedactableField::CategoryBalance,
];

static MANAGER_SET: Lazy<Vec<RedactableField>> = Lazy::new(|| MANAGER_REDACTIONS.to_vec());

static STANDARD_SET: Lazy<Vec<RedactableField>> = Lazy::new(|| {
    MANAGER_REDACTIONS
        .iter()
        .chain(STANDARD_REDACTIONS)
        .copied()
        .collect()
});

static READONLY_SET: Lazy<Vec<RedactableField>> = Lazy::new(|| {
    MANAGER_REDACTIONS
        .iter()
        .chain(STANDARD_REDACTIONS)
        .chain(READONLY_REDACTIONS)
        .copied()
        .collect()
});

/// Returns the full, ordered redaction rule set for a tier.
///
/// The mapping is total: every tier, including `Unknown`, resolves to a
/// defined set. `Unknown` shares the read-only set, never the admin one.
#[must_use]
pub fn rule_set(tier: AuthorizationTier) -> &'static [RedactableField] {
    match tier {
        AuthorizationTier::Admin => &[],
        AuthorizationTier::Manager => &MANAGER_SET,
        AuthorizationTier::Standard => &STANDARD_SET,
        AuthorizationTier::ReadOnly | AuthorizationTier::Unknown => &READONLY_SET,
    }
}
