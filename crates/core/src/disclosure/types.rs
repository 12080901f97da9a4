//! View bundle DTOs exchanged with the transport collaborator.
//!
//! Maskable fields are `Option`s: redaction nulls them in place of the
//! value, so a serialized redacted view carries an explicit `null` where
//! the original carried data. Free-text fields (merchant, customer name)
//! are plain values and cannot be redacted by construction.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sentra_shared::types::{AccountId, CardId, Currency, CustomerId, Money, TransactionId};

use crate::ledger::types::CategoryCode;

/// Transaction details as presented to the requester.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionView {
    /// The transaction identifier.
    pub transaction_id: TransactionId,
    /// Two-letter transaction type code.
    pub transaction_type: String,
    /// Spending category.
    pub category: CategoryCode,
    /// Merchant descriptor. Free text; never redacted.
    pub merchant_name: String,
    /// The transaction amount.
    pub amount: Money,
    /// The card used, by identifier.
    pub card_id: CardId,
    /// The card PAN. Maskable.
    pub card_number: Option<String>,
    /// Signed balance of this transaction's category, from the aggregator.
    /// Maskable.
    pub category_balance: Option<Money>,
    /// When the transaction occurred.
    pub occurred_at: DateTime<Utc>,
    /// When the transaction was processed.
    pub processed_at: DateTime<Utc>,
}

/// Account details as presented to the requester.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountView {
    /// The account identifier.
    pub account_id: AccountId,
    /// The account number. Maskable.
    pub account_number: Option<String>,
    /// The account's currency.
    pub currency: Currency,
    /// Signed current balance, from the aggregator. Maskable.
    pub current_balance: Option<Money>,
    /// Remaining credit. Maskable.
    pub available_credit: Option<Money>,
}

/// Customer details as presented to the requester.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerView {
    /// The customer identifier.
    pub customer_id: CustomerId,
    /// The customer's display name. Free text; never redacted.
    pub full_name: String,
    /// Email address. Maskable.
    pub email: Option<String>,
    /// Phone number. Maskable.
    pub phone: Option<String>,
    /// Date of birth. Maskable.
    pub date_of_birth: Option<NaiveDate>,
    /// Social security number. Maskable.
    pub ssn: Option<String>,
}

/// The set of related views assembled for a single disclosure decision.
///
/// Each sub-view is optional; a bundle missing `customerInfo` simply yields
/// no customer redactions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewBundle {
    /// Transaction details, if part of this response.
    #[serde(rename = "transactionDetails")]
    pub transaction: Option<TransactionView>,
    /// Account details, if part of this response.
    #[serde(rename = "accountInfo")]
    pub account: Option<AccountView>,
    /// Customer details, if part of this response.
    #[serde(rename = "customerInfo")]
    pub customer: Option<CustomerView>,
}

impl ViewBundle {
    /// An empty bundle.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the transaction view.
    #[must_use]
    pub fn with_transaction(mut self, transaction: TransactionView) -> Self {
        self.transaction = Some(transaction);
        self
    }

    /// Sets the account view.
    #[must_use]
    pub fn with_account(mut self, account: AccountView) -> Self {
        self.account = Some(account);
        self
    }

    /// Sets the customer view.
    #[must_use]
    pub fn with_customer(mut self, customer: CustomerView) -> Self {
        self.customer = Some(customer);
        self
    }
}

/// The result of applying disclosure rules to a bundle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RedactionOutcome {
    /// The redacted copy of the bundle. The input bundle is never mutated.
    pub bundle: ViewBundle,
    /// Field paths actually redacted, lexicographically ordered, for audit
    /// transparency.
    pub redacted_fields: Vec<String>,
    /// False only when the tier is admin or nothing applied.
    pub was_masked: bool,
}
