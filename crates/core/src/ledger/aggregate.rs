//! Signed aggregation over transaction records.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::convention::SignConvention;
use super::error::LedgerError;
use super::types::TransactionRecord;

/// The signed total and record count for a filtered record set.
///
/// Never persisted; recomputed per request and discarded with the response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateResult {
    /// Signed sum of `amount x polarity(type)` over the records.
    pub total: Decimal,
    /// Number of records summed.
    pub count: u64,
}

impl AggregateResult {
    /// The empty aggregate: zero total, zero count.
    pub const ZERO: Self = Self {
        total: Decimal::ZERO,
        count: 0,
    };

    /// Combines two partial aggregates.
    ///
    /// Exact-decimal addition is associative and commutative, so partial
    /// sums over record subsets combine into the same result as a single
    /// pass over the whole set.
    #[must_use]
    pub fn combine(self, other: Self) -> Self {
        Self {
            total: self.total + other.total,
            count: self.count + other.count,
        }
    }
}

/// Ledger aggregation service.
///
/// Pure functions over caller-supplied records; no state, no I/O.
pub struct LedgerService;

impl LedgerService {
    /// Computes the signed total over a filtered set of records.
    ///
    /// For each record the polarity is resolved via `convention`, the exact
    /// decimal amount is multiplied by it, and the result accumulates into
    /// a running total. Accumulation order does not affect the result.
    ///
    /// The same routine backs both use sites: the category balance (records
    /// pre-filtered to one account and category) and the listing total
    /// (records pre-filtered to the current page).
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::ConventionGap`] if any record's type code is
    /// absent from the convention. No polarity is ever defaulted.
    pub fn aggregate(
        records: &[TransactionRecord],
        convention: &SignConvention,
    ) -> Result<AggregateResult, LedgerError> {
        let mut total = Decimal::ZERO;
        let mut count = 0u64;

        for record in records {
            let polarity = convention.polarity_for(&record.transaction_type)?;
            total += polarity.signed(record.amount);
            count += 1;
        }

        Ok(AggregateResult { total, count })
    }
}
