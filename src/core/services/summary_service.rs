use crate::domain::{Transaction, TransactionKind};

/// Income, expense and net balance over a transaction list.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Totals {
    pub total_income: f64,
    pub total_expense: f64,
    pub balance: f64,
}

pub struct SummaryService;

impl SummaryService {
    /// Recomputes the totals from scratch on every call.
    pub fn aggregate(transactions: &[Transaction]) -> Totals {
        let sum_of = |kind: TransactionKind| -> f64 {
            transactions
                .iter()
                .filter(|txn| txn.kind == kind)
                .map(|txn| txn.amount)
                .sum()
        };
        let total_income = sum_of(TransactionKind::Income);
        let total_expense = sum_of(TransactionKind::Expense);
        Totals {
            total_income,
            total_expense,
            balance: total_income - total_expense,
        }
    }

    /// The newest `limit` entries, relying on the list being kept newest first.
    pub fn recent(transactions: &[Transaction], limit: usize) -> &[Transaction] {
        &transactions[..limit.min(transactions.len())]
    }
}
