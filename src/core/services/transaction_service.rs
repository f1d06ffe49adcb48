//! List operations behind the add/delete transitions.

use crate::domain::{Identifiable, Transaction};

pub struct TransactionService;

impl TransactionService {
    /// Inserts at the front so the list stays newest first.
    pub fn prepend(transactions: &[Transaction], transaction: Transaction) -> Vec<Transaction> {
        let mut next = Vec::with_capacity(transactions.len() + 1);
        next.push(transaction);
        next.extend_from_slice(transactions);
        next
    }

    /// Copy of the list without the entry matching `id`; unknown ids leave
    /// the list as it was.
    pub fn remove<T: Identifiable + Clone>(items: &[T], id: &str) -> Vec<T> {
        items.iter().filter(|item| item.id() != id).cloned().collect()
    }

    pub fn contains<T: Identifiable>(items: &[T], id: &str) -> bool {
        items.iter().any(|item| item.id() == id)
    }
}
