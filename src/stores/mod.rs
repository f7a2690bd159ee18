//! Contains the trait and implementations for objects that store
//! [transactions](crate::Transaction).

mod memory;
mod transaction;

pub use memory::MemoryTransactionStore;
pub use transaction::TransactionStore;
