//! The redaction engine.

use super::rules::{RedactableField, rule_set};
use super::tier::AuthorizationTier;
use super::types::{RedactionOutcome, ViewBundle};

/// Disclosure policy service.
///
/// Pure functions of (bundle shape, tier); no state, no I/O. The input
/// bundle is cloned, never mutated, so callers keep the unredacted view for
/// internal audit logging.
pub struct DisclosureService;

impl DisclosureService {
    /// Applies the tier's redaction rules to a bundle.
    ///
    /// Every rule field present in the bundle is nulled and its path
    /// recorded; rule fields absent from the bundle (missing sub-view, or
    /// already empty) are skipped without error. The reported path list is
    /// lexicographically ordered and deduplicated, so identical inputs
    /// produce byte-identical audit output.
    #[must_use]
    pub fn apply(bundle: &ViewBundle, tier: AuthorizationTier) -> RedactionOutcome {
        let mut redacted = bundle.clone();
        let mut paths: Vec<&'static str> = Vec::new();

        for field in rule_set(tier) {
            if Self::clear_field(&mut redacted, *field) {
                paths.push(field.path());
            }
        }

        paths.sort_unstable();
        paths.dedup();

        let redacted_fields: Vec<String> = paths.into_iter().map(str::to_string).collect();
        RedactionOutcome {
            bundle: redacted,
            was_masked: !redacted_fields.is_empty(),
            redacted_fields,
        }
    }

    /// Clears one maskable field, returning whether a value was present.
    fn clear_field(bundle: &mut ViewBundle, field: RedactableField) -> bool {
        match field {
            RedactableField::CardNumber => bundle
                .transaction
                .as_mut()
                .is_some_and(|view| view.card_number.take().is_some()),
            RedactableField::CategoryBalance => bundle
                .transaction
                .as_mut()
                .is_some_and(|view| view.category_balance.take().is_some()),
            RedactableField::AccountNumber => bundle
                .account
                .as_mut()
                .is_some_and(|view| view.account_number.take().is_some()),
            RedactableField::CurrentBalance => bundle
                .account
                .as_mut()
                .is_some_and(|view| view.current_balance.take().is_some()),
            RedactableField::AvailableCredit => bundle
                .account
                .as_mut()
                .is_some_and(|view| view.available_credit.take().is_some()),
            RedactableField::CustomerSsn => bundle
                .customer
                .as_mut()
                .is_some_and(|view| view.ssn.take().is_some()),
            RedactableField::CustomerDateOfBirth => bundle
                .customer
                .as_mut()
                .is_some_and(|view| view.date_of_birth.take().is_some()),
            RedactableField::CustomerEmail => bundle
                .customer
                .as_mut()
                .is_some_and(|view| view.email.take().is_some()),
            RedactableField::CustomerPhone => bundle
                .customer
                .as_mut()
                .is_some_and(|view| view.phone.take().is_some()),
        }
    }
}
