//! This file defines the type `Transaction`, the input record every
//! analytics computation operates on.

use serde::{Deserialize, Serialize};
use time::Date;

use crate::{Error, TransactionId, UserId};

/// Whether a transaction brought money in or took money out.
///
/// The transaction amount is always a non-negative magnitude; this enum is
/// the only thing that decides which side of the ledger it lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money earned, e.g. salary or interest.
    Income,
    /// Money spent, e.g. groceries or rent.
    Expense,
}

/// A single dated money movement.
///
/// Transactions are owned by the application around the engine; the engine
/// treats them as immutable input. To create a new `Transaction`, use
/// [Transaction::build], which validates the amount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    id: Option<TransactionId>,
    user_id: UserId,
    date: Date,
    description: String,
    amount: f64,
    #[serde(rename = "type")]
    kind: TransactionKind,
    category: String,
}

impl Transaction {
    /// Create a new transaction.
    ///
    /// Shortcut for [TransactionBuilder::new] for discoverability.
    pub fn build(amount: f64, date: Date, kind: TransactionKind) -> TransactionBuilder {
        TransactionBuilder::new(amount, date, kind)
    }

    /// The store-assigned ID, or `None` for a record that has not been saved
    /// yet.
    pub fn id(&self) -> Option<TransactionId> {
        self.id
    }

    /// The ID of the user that owns this transaction.
    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    /// When the transaction happened.
    pub fn date(&self) -> Date {
        self.date
    }

    /// A text description of what the transaction was for.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The amount of money that moved, as a non-negative magnitude.
    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// Whether the amount counts as income or as an expense.
    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    /// The free-form category label, e.g. "Food" or "Salary".
    ///
    /// Categories are used verbatim for grouping; an empty string is a
    /// category of its own.
    pub fn category(&self) -> &str {
        &self.category
    }
}

/// Builder for creating a new [Transaction].
///
/// The function for finalizing the builder is [TransactionBuilder::finalise],
/// which performs the amount validation.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionBuilder {
    user_id: UserId,
    date: Date,
    description: String,
    amount: f64,
    kind: TransactionKind,
    category: String,
}

impl TransactionBuilder {
    /// Create a builder for a transaction of `amount` on `date`.
    pub fn new(amount: f64, date: Date, kind: TransactionKind) -> Self {
        Self {
            user_id: 0,
            date,
            description: String::new(),
            amount,
            kind,
            category: String::new(),
        }
    }

    /// Set the description for the transaction.
    pub fn description(mut self, description: &str) -> Self {
        self.description = description.to_owned();
        self
    }

    /// Set the category label for the transaction.
    pub fn category(mut self, category: &str) -> Self {
        self.category = category.to_owned();
        self
    }

    /// Set the owning user for the transaction.
    pub fn user_id(mut self, user_id: UserId) -> Self {
        self.user_id = user_id;
        self
    }

    /// Build the transaction, with `id` present for records that already
    /// live in a store.
    ///
    /// # Errors
    /// This function will return [Error::InvalidAmount] if the amount is
    /// negative or not finite. Amounts are magnitudes; an expense of $50 is
    /// `50.0` with [TransactionKind::Expense], not `-50.0`.
    pub fn finalise(self, id: Option<TransactionId>) -> Result<Transaction, Error> {
        if self.amount.is_sign_negative() || !self.amount.is_finite() {
            return Err(Error::InvalidAmount(self.amount));
        }

        Ok(Transaction {
            id,
            user_id: self.user_id,
            date: self.date,
            description: self.description,
            amount: self.amount,
            kind: self.kind,
            category: self.category,
        })
    }
}

#[cfg(test)]
mod transaction_tests {
    use time::macros::date;

    use crate::{Error, Transaction, TransactionKind};

    #[test]
    fn build_succeeds_on_valid_amount() {
        let transaction = Transaction::build(123.45, date!(2024 - 03 - 17), TransactionKind::Expense)
            .description("Groceries")
            .category("Food")
            .user_id(1)
            .finalise(Some(42))
            .unwrap();

        assert_eq!(transaction.id(), Some(42));
        assert_eq!(transaction.user_id(), 1);
        assert_eq!(transaction.date(), date!(2024 - 03 - 17));
        assert_eq!(transaction.description(), "Groceries");
        assert_eq!(transaction.amount(), 123.45);
        assert_eq!(transaction.kind(), TransactionKind::Expense);
        assert_eq!(transaction.category(), "Food");
    }

    #[test]
    fn build_succeeds_without_id() {
        let transaction = Transaction::build(1.0, date!(2024 - 01 - 01), TransactionKind::Income)
            .finalise(None)
            .unwrap();

        assert_eq!(transaction.id(), None);
    }

    #[test]
    fn build_fails_on_negative_amount() {
        let result = Transaction::build(-50.0, date!(2024 - 01 - 01), TransactionKind::Expense).finalise(None);

        assert_eq!(result, Err(Error::InvalidAmount(-50.0)));
    }

    #[test]
    fn build_fails_on_non_finite_amount() {
        let result = Transaction::build(f64::NAN, date!(2024 - 01 - 01), TransactionKind::Income).finalise(None);

        assert!(matches!(result, Err(Error::InvalidAmount(_))));
    }

    #[test]
    fn zero_amount_is_allowed() {
        let result = Transaction::build(0.0, date!(2024 - 01 - 01), TransactionKind::Expense).finalise(None);

        assert!(result.is_ok());
    }

    #[test]
    fn serializes_with_client_field_names() {
        let transaction = Transaction::build(25.5, date!(2024 - 01 - 15), TransactionKind::Expense)
            .description("Lunch")
            .category("Food")
            .user_id(7)
            .finalise(Some(3))
            .unwrap();

        let value = serde_json::to_value(&transaction).unwrap();

        assert_eq!(value["id"], 3);
        assert_eq!(value["userId"], 7);
        assert_eq!(value["date"], "2024-01-15");
        assert_eq!(value["amount"], 25.5);
        assert_eq!(value["type"], "expense");
        assert_eq!(value["category"], "Food");
    }
}
