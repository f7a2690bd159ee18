//! This file defines the type `Transaction`, the core record of the tracker.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::Error;

/// Alias for the integer type used for transaction IDs.
pub type TransactionId = i64;

/// The direction of a transaction: whether money came in or went out.
///
/// The direction decides the sign applied during aggregation. The amount on a
/// [Transaction] is always a non-negative magnitude; a withdrawal is never
/// stored with a negative amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// A transaction that increases the balance (income).
    Deposit,
    /// A transaction that decreases the balance (outcome).
    Withdraw,
}

/// An income or expense recorded by the user.
///
/// To create a new `Transaction`, use [Transaction::build] and hand the
/// builder to a [TransactionStore](crate::stores::TransactionStore), which
/// assigns the ID and creation timestamp. Transactions are immutable once
/// created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    id: TransactionId,
    title: String,
    #[serde(rename = "type")]
    kind: TransactionKind,
    category: String,
    amount: f64,
    created_at: OffsetDateTime,
}

impl Transaction {
    /// Create a new transaction.
    ///
    /// Shortcut for [TransactionBuilder::new] for discoverability.
    pub fn build(
        title: impl Into<String>,
        amount: f64,
        kind: TransactionKind,
    ) -> TransactionBuilder {
        TransactionBuilder::new(title, amount, kind)
    }

    /// The ID of the transaction.
    pub fn id(&self) -> TransactionId {
        self.id
    }

    /// A short text describing what the transaction was for.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Whether the transaction is a deposit or a withdrawal.
    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    /// A user-supplied, free-text category for the transaction.
    pub fn category(&self) -> &str {
        &self.category
    }

    /// The amount of money moved by this transaction, as a non-negative
    /// magnitude.
    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// When the transaction was recorded. Only the calendar date is ever
    /// displayed.
    pub fn created_at(&self) -> OffsetDateTime {
        self.created_at
    }
}

/// Builder for creating a new [Transaction].
///
/// The builder carries the fields collected from the new-transaction form.
/// Finalize it by passing it to
/// [TransactionStore::create](crate::stores::TransactionStore::create), or
/// directly with [TransactionBuilder::into_transaction] when implementing a
/// store.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionBuilder {
    title: String,
    amount: f64,
    kind: TransactionKind,
    category: String,
    created_at: Option<OffsetDateTime>,
}

impl TransactionBuilder {
    /// Create a builder for a new transaction.
    pub fn new(title: impl Into<String>, amount: f64, kind: TransactionKind) -> Self {
        Self {
            title: title.into(),
            amount,
            kind,
            category: String::new(),
            created_at: None,
        }
    }

    /// Set the category for the transaction.
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Set the creation timestamp for the transaction.
    ///
    /// Stores default to the current time when no timestamp is given.
    pub fn created_at(mut self, timestamp: OffsetDateTime) -> Self {
        self.created_at = Some(timestamp);
        self
    }

    /// Validate the builder and produce the finished [Transaction] with `id`.
    ///
    /// This is the single place where new-transaction input is validated;
    /// everything downstream of a store (aggregation, formatting) relies on
    /// it and does not defend against bad fields.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::EmptyTitle] if the title is empty or whitespace,
    /// - or [Error::InvalidAmount] if the amount is negative or not finite.
    pub fn into_transaction(self, id: TransactionId) -> Result<Transaction, Error> {
        if self.title.trim().is_empty() {
            return Err(Error::EmptyTitle);
        }

        if !self.amount.is_finite() || self.amount < 0.0 {
            return Err(Error::InvalidAmount(self.amount));
        }

        Ok(Transaction {
            id,
            title: self.title,
            kind: self.kind,
            category: self.category,
            amount: self.amount,
            created_at: self.created_at.unwrap_or_else(OffsetDateTime::now_utc),
        })
    }
}

/// Returns a new list with `created` at the front, followed by `existing` in
/// its original order.
///
/// New transactions are displayed above older ones, so the display list is
/// kept newest first. `existing` is left untouched.
pub fn prepend(existing: &[Transaction], created: Transaction) -> Vec<Transaction> {
    let mut transactions = Vec::with_capacity(existing.len() + 1);
    transactions.push(created);
    transactions.extend_from_slice(existing);
    transactions
}
