//! The debit/credit sign convention.
//!
//! The source of truth for which transaction types increase a balance and
//! which decrease it. The table is explicit, auditable data: every type code
//! in use must appear in it, and an unmapped code is a data-integrity error
//! rather than a silent default.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::LedgerError;

/// The sign applied to an amount based on its transaction type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    /// Increases the balance (+1).
    Credit,
    /// Decreases the balance (-1).
    Debit,
}

impl Polarity {
    /// Applies this polarity to an amount.
    #[must_use]
    pub fn signed(self, amount: Decimal) -> Decimal {
        match self {
            Self::Credit => amount,
            Self::Debit => -amount,
        }
    }

    /// Parses a polarity name as it appears in configuration.
    fn from_config_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "credit" => Some(Self::Credit),
            "debit" => Some(Self::Debit),
            _ => None,
        }
    }
}

/// Type codes that charge the account (card-side debits).
pub const CHARGE_CODES: &[&str] = &["PU", "ON", "RP", "CA", "CB", "AF", "LF", "OF", "IN", "BT"];

/// Type codes that repay or credit the account.
pub const REPAYMENT_CODES: &[&str] = &["PY", "RF", "CR", "RW"];

static CARD_DEFAULTS: Lazy<SignConvention> = Lazy::new(|| {
    let mut table = BTreeMap::new();
    for code in CHARGE_CODES {
        table.insert((*code).to_string(), Polarity::Debit);
    }
    for code in REPAYMENT_CODES {
        table.insert((*code).to_string(), Polarity::Credit);
    }
    SignConvention { table }
});

/// A total mapping from transaction type code to polarity.
///
/// Held in a `BTreeMap` so iteration order (and therefore any derived
/// output) is deterministic. Built once at startup and treated as read-only
/// configuration afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "BTreeMap<String, Polarity>")]
pub struct SignConvention {
    table: BTreeMap<String, Polarity>,
}

impl SignConvention {
    /// The built-in table for card transactions.
    ///
    /// Charges (purchases, fees, interest, cash advances) are debits;
    /// repayments (payments, refunds, credits, rewards) are credits.
    #[must_use]
    pub fn card_defaults() -> &'static Self {
        &CARD_DEFAULTS
    }

    /// Builds a convention from explicit (code, polarity) pairs.
    ///
    /// Codes are normalized to uppercase. An empty table is rejected: a
    /// convention that maps nothing can only ever produce gap errors.
    pub fn from_pairs<I, S>(pairs: I) -> Result<Self, LedgerError>
    where
        I: IntoIterator<Item = (S, Polarity)>,
        S: AsRef<str>,
    {
        let table: BTreeMap<String, Polarity> = pairs
            .into_iter()
            .map(|(code, polarity)| (normalize(code.as_ref()), polarity))
            .collect();

        if table.is_empty() {
            return Err(LedgerError::EmptyConvention);
        }

        Ok(Self { table })
    }

    /// Returns a copy of this convention with configuration overrides applied.
    ///
    /// Override values are polarity names as loaded from configuration
    /// (`"credit"` / `"debit"`, case-insensitive). An unparseable name fails
    /// the whole build so a typo cannot silently flip a sign.
    pub fn with_overrides(
        &self,
        overrides: &BTreeMap<String, String>,
    ) -> Result<Self, LedgerError> {
        let mut table = self.table.clone();
        for (code, name) in overrides {
            let polarity = Polarity::from_config_name(name).ok_or_else(|| {
                LedgerError::InvalidPolarityName {
                    type_code: code.clone(),
                    name: name.clone(),
                }
            })?;
            table.insert(normalize(code), polarity);
        }
        Ok(Self { table })
    }

    /// Resolves the polarity for a type code.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::ConventionGap`] naming the offending code when
    /// it is absent from the table.
    pub fn polarity_for(&self, type_code: &str) -> Result<Polarity, LedgerError> {
        self.table
            .get(&normalize(type_code))
            .copied()
            .ok_or_else(|| LedgerError::ConventionGap {
                type_code: type_code.to_string(),
            })
    }

    /// Returns true if the convention defines the given code.
    #[must_use]
    pub fn covers(&self, type_code: &str) -> bool {
        self.table.contains_key(&normalize(type_code))
    }

    /// Iterates the table in deterministic (code-sorted) order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, Polarity)> {
        self.table.iter().map(|(code, polarity)| (code.as_str(), *polarity))
    }

    /// Number of codes defined.
    #[must_use]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns true if no codes are defined. Always false for a
    /// successfully constructed convention.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl TryFrom<BTreeMap<String, Polarity>> for SignConvention {
    type Error = LedgerError;

    fn try_from(table: BTreeMap<String, Polarity>) -> Result<Self, Self::Error> {
        Self::from_pairs(table)
    }
}

fn normalize(code: &str) -> String {
    code.trim().to_uppercase()
}
