use std::{fmt, str::FromStr};

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::common::{Displayable, Identifiable};

const INCOME_CATEGORIES: &[&str] = &["Salary", "Freelance", "Investment", "Gift", "Other Income"];
const EXPENSE_CATEGORIES: &[&str] = &[
    "Food",
    "Transportation",
    "Entertainment",
    "Shopping",
    "Bills",
    "Healthcare",
    "Education",
    "Other",
];

/// Direction of a transaction.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    #[default]
    Expense,
}

impl TransactionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TransactionKind::Income => "income",
            TransactionKind::Expense => "expense",
        }
    }

    /// Category names offered when recording a transaction of this kind.
    pub fn suggested_categories(self) -> &'static [&'static str] {
        match self {
            TransactionKind::Income => INCOME_CATEGORIES,
            TransactionKind::Expense => EXPENSE_CATEGORIES,
        }
    }

    pub fn sign(self) -> char {
        match self {
            TransactionKind::Income => '+',
            TransactionKind::Expense => '-',
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionKind {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "income" => Ok(TransactionKind::Income),
            "expense" => Ok(TransactionKind::Expense),
            other => Err(format!("unknown transaction type `{other}`")),
        }
    }
}

/// A recorded income or expense event. Never mutated after creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: String,
    pub amount: f64,
    pub category: String,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub description: String,
    pub date: DateTime<Utc>,
}

impl Transaction {
    pub fn from_draft(id: String, draft: TransactionDraft, date: DateTime<Utc>) -> Self {
        Self {
            id,
            amount: draft.amount,
            category: draft.category,
            kind: draft.kind,
            description: draft.description,
            date,
        }
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    /// Demo entries shown until the user has a saved transaction list.
    pub fn seed(now: DateTime<Utc>) -> Vec<Transaction> {
        vec![
            Transaction {
                id: "1".into(),
                amount: 3500.0,
                category: "Salary".into(),
                kind: TransactionKind::Income,
                description: "Monthly salary".into(),
                date: now,
            },
            Transaction {
                id: "2".into(),
                amount: 85.0,
                category: "Food".into(),
                kind: TransactionKind::Expense,
                description: "Groceries for the week".into(),
                date: now - Duration::days(1),
            },
            Transaction {
                id: "3".into(),
                amount: 1200.0,
                category: "Freelance".into(),
                kind: TransactionKind::Income,
                description: "Website development project".into(),
                date: now - Duration::days(2),
            },
        ]
    }
}

impl Identifiable for Transaction {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Displayable for Transaction {
    fn display_label(&self) -> String {
        format!("txn:{} [{} {}]", self.id, self.kind, self.category)
    }
}

/// Validated transaction input, still missing its id and timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionDraft {
    pub amount: f64,
    pub category: String,
    pub kind: TransactionKind,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn kind_serializes_as_lowercase_type_field() {
        let date = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let txn = Transaction {
            id: "abc".into(),
            amount: 12.5,
            category: "Food".into(),
            kind: TransactionKind::Expense,
            description: "Lunch".into(),
            date,
        };
        let json = serde_json::to_value(&txn).unwrap();
        assert_eq!(json["type"], "expense");
        assert!(json["date"].as_str().unwrap().starts_with("2024-03-01T12:00:00"));
    }

    #[test]
    fn parses_browser_style_records() {
        let raw = r#"{"id":"1700000000000","amount":42,"category":"Gift","type":"income","description":"Birthday","date":"2023-11-14T22:13:20.000Z"}"#;
        let txn: Transaction = serde_json::from_str(raw).unwrap();
        assert_eq!(txn.kind, TransactionKind::Income);
        assert_eq!(txn.amount, 42.0);
        assert_eq!(txn.date, Utc.with_ymd_and_hms(2023, 11, 14, 22, 13, 20).unwrap());
    }

    #[test]
    fn seed_entries_are_newest_first() {
        let now = Utc.with_ymd_and_hms(2024, 5, 10, 8, 0, 0).unwrap();
        let seed = Transaction::seed(now);
        assert_eq!(seed.len(), 3);
        assert!(seed.windows(2).all(|pair| pair[0].date > pair[1].date));
    }

    #[test]
    fn kind_parses_case_insensitively() {
        assert_eq!("Income".parse::<TransactionKind>(), Ok(TransactionKind::Income));
        assert!("transfer".parse::<TransactionKind>().is_err());
    }
}
