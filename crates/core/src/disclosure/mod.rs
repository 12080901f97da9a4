//! Authorization-tiered disclosure control.
//!
//! This module decides, per request, which fields of a transaction, account,
//! or customer view must be redacted before the response leaves the system
//! boundary:
//! - Authorization tiers resolved from external claims
//! - Declarative per-tier redaction rule tables
//! - View bundle DTOs shared with the transport collaborator
//! - The redaction engine and its audit outcome

pub mod engine;
pub mod error;
pub mod rules;
pub mod tier;
pub mod types;

#[cfg(test)]
mod engine_props;

pub use engine::DisclosureService;
pub use error::UnknownTierError;
pub use rules::{RedactableField, Sensitivity, rule_set};
pub use tier::AuthorizationTier;
pub use types::{AccountView, CustomerView, RedactionOutcome, TransactionView, ViewBundle};
