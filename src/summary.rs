//! Aggregation of a transaction list into income, outcome and net totals.

use crate::{
    locale::Locale,
    transaction::{Transaction, TransactionKind},
};

/// The totals derived from a transaction list.
///
/// `income` and `outcome` are both non-negative magnitudes; the display layer
/// applies the sign convention for outcome. Produced by [summarize].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    /// Sum of the amounts of all deposits.
    pub income: f64,
    /// Sum of the amounts of all withdrawals, as a non-negative magnitude.
    pub outcome: f64,
    /// `income - outcome`. Negative when more money went out than came in.
    pub total: f64,
}

/// The three totals of a [Summary] formatted for display.
///
/// Income and total render through the signed currency rule, so a negative
/// balance shows up as `- R$ …`. A non-zero outcome always carries the `- `
/// prefix; zero renders unsigned. Note the asymmetry with the transaction
/// table, where withdrawal amounts render without a sign.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryDisplay {
    /// Total income, e.g. `R$ 1.250,00`.
    pub income: String,
    /// Total outcome with the sign convention applied, e.g. `- R$ 175,00`.
    pub outcome: String,
    /// Net balance, e.g. `R$ 1.075,00`.
    pub total: String,
}

/// Sums a transaction list into its [Summary].
///
/// Deposits add to income, withdrawals add to outcome, and the total is the
/// difference. The result depends only on the multiset of (kind, amount)
/// pairs, not on the order of the list. An empty list yields all zeroes.
pub fn summarize(transactions: &[Transaction]) -> Summary {
    let mut summary = Summary {
        income: 0.0,
        outcome: 0.0,
        total: 0.0,
    };

    for transaction in transactions {
        match transaction.kind() {
            TransactionKind::Deposit => summary.income += transaction.amount(),
            TransactionKind::Withdraw => summary.outcome += transaction.amount(),
        }
    }

    summary.total = summary.income - summary.outcome;
    summary
}

impl Summary {
    /// Formats the three totals with the currency rules of `locale`.
    pub fn display(&self, locale: &Locale) -> SummaryDisplay {
        SummaryDisplay {
            income: locale.signed_currency(self.income),
            outcome: locale.signed_currency(-self.outcome),
            total: locale.signed_currency(self.total),
        }
    }
}
