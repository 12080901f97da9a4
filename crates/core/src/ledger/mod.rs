//! Sign-aware transaction aggregation.
//!
//! This module implements the balance side of the viewing core:
//! - Transaction records as supplied by the persistence collaborator
//! - The debit/credit sign convention keyed on transaction type code
//! - Signed aggregation over filtered record sets
//! - Error types for ledger operations

pub mod aggregate;
pub mod convention;
pub mod error;
pub mod types;

#[cfg(test)]
mod aggregate_props;

pub use aggregate::{AggregateResult, LedgerService};
pub use convention::{Polarity, SignConvention};
pub use error::LedgerError;
pub use types::{CategoryCode, TransactionRecord};
