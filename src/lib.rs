//! Core of dt money, a small personal-finance transaction tracker.
//!
//! This library implements the pure part of the tracker: turning an ordered
//! list of transactions into formatted display rows and summary totals
//! (income, outcome, net balance). Presentation and transport live elsewhere;
//! they talk to this crate through [stores::TransactionStore] and render
//! whatever [table_rows] and [summarize] hand back.

#![warn(missing_docs)]

mod locale;
mod summary;
mod transaction;
mod view;

pub mod csv;
pub mod stores;

pub use locale::Locale;
pub use summary::{Summary, SummaryDisplay, summarize};
pub use transaction::{Transaction, TransactionBuilder, TransactionId, TransactionKind, prepend};
pub use view::{TransactionRow, table_rows};

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// An empty string was used as a transaction title.
    #[error("transaction titles must not be empty")]
    EmptyTitle,

    /// A negative or non-finite amount was used to create a transaction.
    ///
    /// Amounts are stored as non-negative magnitudes; the direction of a
    /// transaction is carried by its [TransactionKind], never by the sign of
    /// its amount.
    #[error("{0} is not a valid transaction amount")]
    InvalidAmount(f64),

    /// The CSV statement had issues that prevented it from being parsed.
    #[error("could not parse the CSV statement: {0}")]
    InvalidCsv(String),
}
