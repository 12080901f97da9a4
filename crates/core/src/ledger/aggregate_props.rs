//! Property-based tests for signed aggregation.

use chrono::Utc;
use proptest::prelude::*;
use rust_decimal::Decimal;

use sentra_shared::types::{AccountId, CardId, TransactionId};

use super::aggregate::LedgerService;
use super::convention::{CHARGE_CODES, Polarity, REPAYMENT_CODES, SignConvention};
use super::types::{CategoryCode, TransactionRecord};

fn make_record(type_code: &str, amount: Decimal) -> TransactionRecord {
    TransactionRecord {
        id: TransactionId::new(),
        transaction_type: type_code.to_string(),
        category: CategoryCode::Other,
        amount,
        account_id: AccountId::new(),
        card_id: CardId::new(),
        merchant: "PROP MERCHANT".to_string(),
        occurred_at: Utc::now(),
        processed_at: Utc::now(),
    }
}

/// Strategy for a positive exact-decimal amount with two fraction digits.
fn amount_strategy() -> impl Strategy<Value = Decimal> {
    (1i64..10_000_000).prop_map(|n| Decimal::new(n, 2))
}

/// Strategy for a type code drawn from the built-in card table.
fn known_code_strategy() -> impl Strategy<Value = &'static str> {
    let all: Vec<&'static str> = CHARGE_CODES
        .iter()
        .chain(REPAYMENT_CODES.iter())
        .copied()
        .collect();
    prop::sample::select(all)
}

/// Strategy for a batch of records with known type codes.
fn records_strategy(max_len: usize) -> impl Strategy<Value = Vec<TransactionRecord>> {
    prop::collection::vec(
        (known_code_strategy(), amount_strategy())
            .prop_map(|(code, amount)| make_record(code, amount)),
        0..=max_len,
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// **Sign totality**
    ///
    /// *For every* supported type code, a single record of that type yields
    /// exactly `amount` or `-amount` per the documented polarity, never
    /// zero or any other value.
    #[test]
    fn prop_sign_totality(
        code in known_code_strategy(),
        amount in amount_strategy(),
    ) {
        let convention = SignConvention::card_defaults();
        let result = LedgerService::aggregate(&[make_record(code, amount)], convention)
            .expect("known code must resolve");

        let expected = match convention.polarity_for(code).unwrap() {
            Polarity::Credit => amount,
            Polarity::Debit => -amount,
        };
        prop_assert_eq!(result.total, expected);
        prop_assert_ne!(result.total, Decimal::ZERO);
        prop_assert_eq!(result.count, 1);
    }

    /// **Commutativity**
    ///
    /// *For any* permutation of the same record set, the aggregate yields
    /// the identical total and count.
    #[test]
    fn prop_permutation_invariance(
        (records, shuffled) in records_strategy(25)
            .prop_flat_map(|records| {
                let shuffled = Just(records.clone()).prop_shuffle();
                (Just(records), shuffled)
            }),
    ) {
        let convention = SignConvention::card_defaults();
        let original = LedgerService::aggregate(&records, convention).unwrap();
        let permuted = LedgerService::aggregate(&shuffled, convention).unwrap();

        prop_assert_eq!(original.total, permuted.total);
        prop_assert_eq!(original.count, permuted.count);
    }

    /// **Partial summation**
    ///
    /// *For any* split point, aggregating the two halves separately and
    /// combining equals aggregating the whole set.
    #[test]
    fn prop_split_and_combine(
        records in records_strategy(25),
        split in 0usize..26,
    ) {
        let convention = SignConvention::card_defaults();
        let split = split.min(records.len());

        let whole = LedgerService::aggregate(&records, convention).unwrap();
        let left = LedgerService::aggregate(&records[..split], convention).unwrap();
        let right = LedgerService::aggregate(&records[split..], convention).unwrap();

        prop_assert_eq!(left.combine(right), whole);
    }

    /// **Count tracks input size**
    ///
    /// *For any* record set with known codes, the count equals the number
    /// of records supplied.
    #[test]
    fn prop_count_equals_len(records in records_strategy(25)) {
        let result =
            LedgerService::aggregate(&records, SignConvention::card_defaults()).unwrap();
        prop_assert_eq!(result.count as usize, records.len());
    }

    /// **Gap poisoning**
    ///
    /// *For any* record set containing at least one unmapped code, the
    /// aggregate fails regardless of how many valid records surround it.
    #[test]
    fn prop_single_gap_fails_whole_batch(
        mut records in records_strategy(10),
        position in 0usize..11,
        amount in amount_strategy(),
    ) {
        let position = position.min(records.len());
        records.insert(position, make_record("XX", amount));

        let result = LedgerService::aggregate(&records, SignConvention::card_defaults());
        prop_assert!(matches!(
            result,
            Err(super::error::LedgerError::ConventionGap { ref type_code }) if type_code.as_str() == "XX"
        ));
    }
}
