//! Property-based tests for the redaction engine.

use std::collections::HashSet;

use chrono::{NaiveDate, Utc};
use proptest::prelude::*;
use rust_decimal::Decimal;

use sentra_shared::types::{
    AccountId, CardId, Currency, CustomerId, Money, TransactionId,
};

use super::engine::DisclosureService;
use super::tier::AuthorizationTier;
use super::types::{AccountView, CustomerView, TransactionView, ViewBundle};
use crate::ledger::types::CategoryCode;

fn money_strategy() -> impl Strategy<Value = Money> {
    (-10_000_000i64..10_000_000).prop_map(|n| Money::new(Decimal::new(n, 2), Currency::Usd))
}

fn transaction_view_strategy() -> impl Strategy<Value = TransactionView> {
    (
        prop::option::of(Just("4111111111111111".to_string())),
        prop::option::of(money_strategy()),
        money_strategy(),
    )
        .prop_map(|(card_number, category_balance, amount)| TransactionView {
            transaction_id: TransactionId::new(),
            transaction_type: "PU".to_string(),
            category: CategoryCode::Other,
            merchant_name: "PROP MERCHANT".to_string(),
            amount,
            card_id: CardId::new(),
            card_number,
            category_balance,
            occurred_at: Utc::now(),
            processed_at: Utc::now(),
        })
}

fn account_view_strategy() -> impl Strategy<Value = AccountView> {
    (
        prop::option::of(Just("7001-4412".to_string())),
        prop::option::of(money_strategy()),
        prop::option::of(money_strategy()),
    )
        .prop_map(|(account_number, current_balance, available_credit)| AccountView {
            account_id: AccountId::new(),
            account_number,
            currency: Currency::Usd,
            current_balance,
            available_credit,
        })
}

fn customer_view_strategy() -> impl Strategy<Value = CustomerView> {
    (
        prop::option::of(Just("alex@example.com".to_string())),
        prop::option::of(Just("+1-555-0142".to_string())),
        prop::option::of(Just(NaiveDate::from_ymd_opt(1989, 4, 12).unwrap())),
        prop::option::of(Just("078-05-1120".to_string())),
    )
        .prop_map(|(email, phone, date_of_birth, ssn)| CustomerView {
            customer_id: CustomerId::new(),
            full_name: "Alex Fontaine".to_string(),
            email,
            phone,
            date_of_birth,
            ssn,
        })
}

fn bundle_strategy() -> impl Strategy<Value = ViewBundle> {
    (
        prop::option::of(transaction_view_strategy()),
        prop::option::of(account_view_strategy()),
        prop::option::of(customer_view_strategy()),
    )
        .prop_map(|(transaction, account, customer)| ViewBundle {
            transaction,
            account,
            customer,
        })
}

fn redacted_set(bundle: &ViewBundle, tier: AuthorizationTier) -> HashSet<String> {
    DisclosureService::apply(bundle, tier)
        .redacted_fields
        .into_iter()
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// **Redaction monotonicity**
    ///
    /// *For any* bundle, the redacted-field set for a stricter tier is a
    /// superset of the set for a looser tier, down the whole trust ladder.
    #[test]
    fn prop_redaction_monotonic(bundle in bundle_strategy()) {
        let admin = redacted_set(&bundle, AuthorizationTier::Admin);
        let manager = redacted_set(&bundle, AuthorizationTier::Manager);
        let standard = redacted_set(&bundle, AuthorizationTier::Standard);
        let readonly = redacted_set(&bundle, AuthorizationTier::ReadOnly);

        prop_assert!(admin.is_subset(&manager));
        prop_assert!(manager.is_subset(&standard));
        prop_assert!(standard.is_subset(&readonly));
    }

    /// **Admin purity**
    ///
    /// *For any* bundle, the admin outcome is unmasked, reports nothing,
    /// and returns the bundle unchanged.
    #[test]
    fn prop_admin_purity(bundle in bundle_strategy()) {
        let outcome = DisclosureService::apply(&bundle, AuthorizationTier::Admin);

        prop_assert!(!outcome.was_masked);
        prop_assert!(outcome.redacted_fields.is_empty());
        prop_assert_eq!(outcome.bundle, bundle);
    }

    /// **Determinism**
    ///
    /// *For any* (bundle, tier), repeated applications produce identical
    /// redacted-field lists, same order and content.
    #[test]
    fn prop_deterministic(
        bundle in bundle_strategy(),
        tier in prop::sample::select(AuthorizationTier::ALL.to_vec()),
    ) {
        let first = DisclosureService::apply(&bundle, tier);
        let second = DisclosureService::apply(&bundle, tier);

        prop_assert_eq!(&first.redacted_fields, &second.redacted_fields);
        prop_assert_eq!(first.bundle, second.bundle);
        prop_assert_eq!(first.was_masked, second.was_masked);
    }

    /// **Unknown-tier safety**
    ///
    /// *For any* bundle, an unrecognized claim redacts at least everything
    /// read-only redacts.
    #[test]
    fn prop_unknown_tier_is_maximal(bundle in bundle_strategy()) {
        let unknown = redacted_set(&bundle, AuthorizationTier::resolve("garbage-string"));
        let readonly = redacted_set(&bundle, AuthorizationTier::ReadOnly);

        prop_assert!(readonly.is_subset(&unknown));
    }

    /// **Free text survives**
    ///
    /// *For any* bundle and tier, merchant and customer names come through
    /// untouched.
    #[test]
    fn prop_free_text_never_redacted(
        bundle in bundle_strategy(),
        tier in prop::sample::select(AuthorizationTier::ALL.to_vec()),
    ) {
        let outcome = DisclosureService::apply(&bundle, tier);

        if let (Some(before), Some(after)) = (&bundle.transaction, &outcome.bundle.transaction) {
            prop_assert_eq!(&before.merchant_name, &after.merchant_name);
            prop_assert_eq!(before.amount, after.amount);
        }
        if let (Some(before), Some(after)) = (&bundle.customer, &outcome.bundle.customer) {
            prop_assert_eq!(&before.full_name, &after.full_name);
        }
    }

    /// **Masked flag tracks the list**
    ///
    /// *For any* (bundle, tier), `was_masked` is exactly "the redacted
    /// list is non-empty".
    #[test]
    fn prop_masked_flag_consistent(
        bundle in bundle_strategy(),
        tier in prop::sample::select(AuthorizationTier::ALL.to_vec()),
    ) {
        let outcome = DisclosureService::apply(&bundle, tier);
        prop_assert_eq!(outcome.was_masked, !outcome.redacted_fields.is_empty());
    }
}
