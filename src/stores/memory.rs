//! Implements an in-memory transaction store.

use crate::{
    Error,
    transaction::{Transaction, TransactionBuilder, TransactionId, prepend},
};

use super::TransactionStore;

/// Stores transactions in memory, newest first.
///
/// IDs are assigned sequentially starting from one. The list only grows;
/// editing and deletion are not part of the tracker.
#[derive(Debug, Clone)]
pub struct MemoryTransactionStore {
    transactions: Vec<Transaction>,
    next_id: TransactionId,
}

impl MemoryTransactionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            transactions: Vec::new(),
            next_id: 1,
        }
    }
}

impl Default for MemoryTransactionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TransactionStore for MemoryTransactionStore {
    fn fetch_all(&self) -> Result<Vec<Transaction>, Error> {
        Ok(self.transactions.clone())
    }

    /// Create a new transaction in the store.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::EmptyTitle] if the title is empty or whitespace,
    /// - or [Error::InvalidAmount] if the amount is negative or not finite.
    fn create(&mut self, builder: TransactionBuilder) -> Result<Transaction, Error> {
        let transaction = builder.into_transaction(self.next_id)?;
        self.next_id += 1;

        tracing::debug!(
            id = transaction.id(),
            title = transaction.title(),
            "created transaction"
        );

        self.transactions = prepend(&self.transactions, transaction.clone());

        Ok(transaction)
    }
}

#[cfg(test)]
mod memory_store_tests {
    use crate::{
        Error,
        transaction::{Transaction, TransactionKind},
    };

    use super::{MemoryTransactionStore, TransactionStore};

    #[test]
    fn fetch_all_on_empty_store_returns_no_transactions() {
        let store = MemoryTransactionStore::new();

        assert_eq!(store.fetch_all().unwrap(), vec![]);
    }

    #[test]
    fn create_assigns_sequential_ids() {
        let mut store = MemoryTransactionStore::new();

        let first = store
            .create(Transaction::build("Salário", 3000.0, TransactionKind::Deposit))
            .unwrap();
        let second = store
            .create(Transaction::build("Aluguel", 1100.0, TransactionKind::Withdraw))
            .unwrap();

        assert_eq!(first.id(), 1);
        assert_eq!(second.id(), 2);
    }

    #[test]
    fn create_prepends_the_new_transaction() {
        let mut store = MemoryTransactionStore::new();

        store
            .create(Transaction::build("Salário", 3000.0, TransactionKind::Deposit))
            .unwrap();
        store
            .create(Transaction::build("Aluguel", 1100.0, TransactionKind::Withdraw))
            .unwrap();

        let transactions = store.fetch_all().unwrap();

        assert_eq!(transactions[0].title(), "Aluguel");
        assert_eq!(transactions[1].title(), "Salário");
    }

    #[test]
    fn create_rejects_invalid_input_and_leaves_the_store_unchanged() {
        let mut store = MemoryTransactionStore::new();

        let result = store.create(Transaction::build("", 100.0, TransactionKind::Deposit));

        assert_eq!(result, Err(Error::EmptyTitle));
        assert_eq!(store.fetch_all().unwrap(), vec![]);

        // The failed create must not consume an ID.
        let transaction = store
            .create(Transaction::build("Salário", 3000.0, TransactionKind::Deposit))
            .unwrap();
        assert_eq!(transaction.id(), 1);
    }
}
