use std::{fmt, str::FromStr};

use crate::domain::{Transaction, TransactionKind};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TypeFilter {
    #[default]
    All,
    Income,
    Expense,
}

impl TypeFilter {
    pub fn matches(self, kind: TransactionKind) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Income => kind == TransactionKind::Income,
            TypeFilter::Expense => kind == TransactionKind::Expense,
        }
    }
}

impl FromStr for TypeFilter {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(TypeFilter::All),
            "income" => Ok(TypeFilter::Income),
            "expense" => Ok(TypeFilter::Expense),
            other => Err(format!("unknown type filter `{other}` (use all, income or expense)")),
        }
    }
}

impl fmt::Display for TypeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TypeFilter::All => "all",
            TypeFilter::Income => "income",
            TypeFilter::Expense => "expense",
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    #[default]
    Date,
    Amount,
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "date" => Ok(SortKey::Date),
            "amount" => Ok(SortKey::Amount),
            other => Err(format!("unknown sort key `{other}` (use date or amount)")),
        }
    }
}

/// Criteria for the transaction history view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionQuery {
    pub type_filter: TypeFilter,
    pub search: String,
    pub sort_key: SortKey,
}

impl TransactionQuery {
    /// True when the query hides anything, as opposed to an empty history.
    pub fn is_narrowed(&self) -> bool {
        self.type_filter != TypeFilter::All || !self.search.is_empty()
    }
}

pub struct FilterService;

impl FilterService {
    /// Returns a new, reordered view of `transactions`; the input is left as is.
    pub fn filter_and_sort<'a>(
        transactions: &'a [Transaction],
        query: &TransactionQuery,
    ) -> Vec<&'a Transaction> {
        let needle = query.search.to_lowercase();
        let mut matches: Vec<&Transaction> = transactions
            .iter()
            .filter(|txn| query.type_filter.matches(txn.kind))
            .filter(|txn| {
                needle.is_empty()
                    || txn.description.to_lowercase().contains(&needle)
                    || txn.category.to_lowercase().contains(&needle)
            })
            .collect();

        // `sort_by` is stable, so ties keep their list order.
        match query.sort_key {
            SortKey::Date => matches.sort_by(|a, b| b.date.cmp(&a.date)),
            SortKey::Amount => matches.sort_by(|a, b| b.amount.total_cmp(&a.amount)),
        }
        matches
    }
}
