//! Defines the transaction store trait.

use crate::{
    Error,
    transaction::{Transaction, TransactionBuilder},
};

/// Handles the creation and retrieval of transactions.
///
/// The store owns the authoritative transaction list; the aggregation and
/// formatting functions only ever see the snapshots it hands out.
pub trait TransactionStore {
    /// Retrieve every transaction in the store, newest first.
    fn fetch_all(&self) -> Result<Vec<Transaction>, Error>;

    /// Create a new transaction in the store.
    ///
    /// Implementers validate the builder, assign the ID and the creation
    /// timestamp (when the builder does not carry one), and place the new
    /// transaction at the front of the list.
    fn create(&mut self, builder: TransactionBuilder) -> Result<Transaction, Error>;
}
