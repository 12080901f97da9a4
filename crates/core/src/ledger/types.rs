//! Transaction record domain types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sentra_shared::types::{AccountId, CardId, TransactionId};

/// Spending category a transaction is filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryCode {
    /// Restaurants and food delivery.
    Dining,
    /// Airfare, lodging, transit.
    Travel,
    /// Supermarkets and grocery stores.
    Groceries,
    /// Streaming, events, media.
    Entertainment,
    /// Recurring household bills.
    Utilities,
    /// Fees, interest, and anything uncategorized.
    Other,
}

impl CategoryCode {
    /// Returns the stable wire code for this category.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dining => "dining",
            Self::Travel => "travel",
            Self::Groceries => "groceries",
            Self::Entertainment => "entertainment",
            Self::Utilities => "utilities",
            Self::Other => "other",
        }
    }
}

/// A single transaction as read from the upstream store.
///
/// Records are immutable inputs to the core: the persistence collaborator
/// creates them already filtered by account, category, or date range, and
/// the aggregation never modifies them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// Unique identifier for this transaction.
    pub id: TransactionId,
    /// Two-letter transaction type code (e.g. "PU", "PY").
    pub transaction_type: String,
    /// Spending category.
    pub category: CategoryCode,
    /// Exact decimal amount (signed magnitude, sign applied by convention).
    pub amount: Decimal,
    /// The account this transaction posted to.
    pub account_id: AccountId,
    /// The card the transaction was made with.
    pub card_id: CardId,
    /// Merchant descriptor as it appears on the statement.
    pub merchant: String,
    /// When the transaction originally occurred.
    pub occurred_at: DateTime<Utc>,
    /// When the transaction was processed and posted.
    pub processed_at: DateTime<Utc>,
}
