//! View-model for the transaction table.

use crate::{
    locale::Locale,
    transaction::{Transaction, TransactionKind},
};

/// Renders one transaction as a table row.
///
/// The amount is formatted without a sign regardless of the transaction kind;
/// the summary totals are where the `- ` prefix appears. The row keeps the
/// kind so the presentation layer can style withdrawals differently.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRow {
    /// The title of the transaction, unchanged.
    pub title: String,
    /// The category of the transaction, unchanged.
    pub category: String,
    /// Whether the row is a deposit or a withdrawal.
    pub kind: TransactionKind,
    /// The amount formatted as an unsigned currency string, e.g. `R$ 6.000,00`.
    pub formatted_amount: String,
    /// The creation date formatted as `DD/MM/YYYY`.
    pub formatted_date: String,
}

impl TransactionRow {
    /// Formats `transaction` for display with the rules of `locale`.
    pub fn from_transaction(transaction: &Transaction, locale: &Locale) -> Self {
        Self {
            title: transaction.title().to_owned(),
            category: transaction.category().to_owned(),
            kind: transaction.kind(),
            formatted_amount: locale.currency(transaction.amount()),
            formatted_date: locale.date(transaction.created_at()),
        }
    }
}

/// Formats a transaction list as table rows, preserving the list order
/// (newest first).
pub fn table_rows(transactions: &[Transaction], locale: &Locale) -> Vec<TransactionRow> {
    transactions
        .iter()
        .map(|transaction| TransactionRow::from_transaction(transaction, locale))
        .collect()
}
