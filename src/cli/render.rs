//! Text rendering of each [`Screen`].
//!
//! Every screen is built as a list of [`Line`]s and printed from that list,
//! so what the tests inspect is what the shell shows.

use chrono::{DateTime, Utc};

use crate::cli::core::ShellContext;
use crate::cli::output;
use crate::config::Config;
use crate::core::router::{navigation_targets, route, Screen};
use crate::core::services::{FilterService, SortKey, SummaryService, TransactionQuery};
use crate::currency::{format_amount, format_signed};
use crate::domain::{AppState, AuthMode, Transaction, TransactionKind};

const BRAND: &str = "ExpenseTracker";
const COLUMN_GAP: &str = "  ";

pub fn render_current(context: &ShellContext) {
    let state = context.store.state();
    if let Some(bar) = navigation_bar(state) {
        output::line(bar);
    }
    let lines = match route(state) {
        Screen::Home => titled(home_lines()),
        Screen::Auth { mode } => titled(auth_lines(mode)),
        Screen::Dashboard => dashboard_lines(state, &context.config),
        Screen::AddTransaction => titled(add_transaction_lines()),
        Screen::Transactions => {
            transactions_lines(state, &context.query, &context.config.currency_symbol)
        }
    };
    print_lines(&lines);
}

/// One printed line of a screen. Money carries its direction so the printer
/// can color it; [`Line::plain`] is what ends up on screen without color.
#[derive(Debug, Clone, PartialEq)]
pub enum Line {
    Section(String),
    Text(String),
    Hint(String),
    Warning(String),
    /// `text` followed by an amount that is tinted by `positive`.
    Money {
        text: String,
        amount: String,
        positive: bool,
    },
}

impl Line {
    pub fn plain(&self) -> String {
        match self {
            Line::Section(text) | Line::Text(text) | Line::Hint(text) | Line::Warning(text) => {
                text.clone()
            }
            Line::Money { text, amount, .. } => format!("{text}{amount}"),
        }
    }

    fn print(&self) {
        match self {
            Line::Section(title) => output::section(title),
            Line::Text(text) => output::line(text),
            Line::Hint(text) => output::hint(text),
            Line::Warning(text) => output::warning(text),
            Line::Money {
                text,
                amount,
                positive,
            } => output::line(format!("{text}{}", output::tint_amount(amount, *positive))),
        }
    }
}

fn text(value: impl Into<String>) -> Line {
    Line::Text(value.into())
}

/// First entry becomes the section title, the rest plain text.
fn titled(lines: Vec<String>) -> Vec<Line> {
    let mut lines = lines.into_iter();
    let mut out = Vec::new();
    if let Some(title) = lines.next() {
        out.push(Line::Section(title));
    }
    out.extend(lines.map(Line::Text));
    out
}

fn print_lines(lines: &[Line]) {
    for line in lines {
        line.print();
    }
}

/// Brand, navigation entries and the signed-in user; `None` while signed out.
pub fn navigation_bar(state: &AppState) -> Option<String> {
    let user = state.current_user.as_ref()?;
    let entries: Vec<String> = navigation_targets(state)
        .iter()
        .map(|view| {
            if *view == state.current_view {
                format!("[{}]", view)
            } else {
                view.to_string()
            }
        })
        .collect();
    Some(format!(
        "{BRAND} | {} | {} | logout",
        entries.join(" "),
        user.name
    ))
}

pub fn home_lines() -> Vec<String> {
    vec![
        "Expense Tracker".into(),
        "Track your income and expenses effortlessly.".into(),
        "Visualize your money, manage your spending and plan smarter.".into(),
        String::new(),
        "signin   open the login form".into(),
        "signup   create an account".into(),
    ]
}

pub fn auth_lines(mode: AuthMode) -> Vec<String> {
    match mode {
        AuthMode::Login => vec![
            "Welcome Back!".into(),
            "Track your expenses like a pro.".into(),
            "login <email> [password]".into(),
            "No account yet? `mode` switches to sign up.".into(),
        ],
        AuthMode::Register => vec![
            "Join ExpenseTracker".into(),
            "Start managing your money today.".into(),
            "register <name> <email> [password]".into(),
            "Already registered? `mode` switches to sign in.".into(),
        ],
    }
}

pub fn add_transaction_lines() -> Vec<String> {
    vec![
        "Add Transaction".into(),
        "Track your income and expenses.".into(),
        "add                                                  guided form".into(),
        "add <income|expense> <amount> <category> <description>  one line".into(),
        "categories [income|expense] lists suggested categories.".into(),
    ]
}

/// The balance figure, with a `(-)` marker when it is negative.
pub fn balance_label(symbol: &str, balance: f64) -> String {
    let amount = format_amount(symbol, balance);
    if balance < 0.0 {
        format!("{amount} (-)")
    } else {
        amount
    }
}

pub fn dashboard_lines(state: &AppState, config: &Config) -> Vec<Line> {
    let totals = SummaryService::aggregate(&state.transactions);
    let symbol = &config.currency_symbol;
    let mut lines = vec![
        Line::Section("Dashboard".into()),
        Line::Money {
            text: "Total Balance   ".into(),
            amount: balance_label(symbol, totals.balance),
            positive: totals.balance >= 0.0,
        },
        Line::Money {
            text: "Total Income    ".into(),
            amount: format_amount(symbol, totals.total_income),
            positive: true,
        },
        Line::Money {
            text: "Total Expenses  ".into(),
            amount: format_amount(symbol, totals.total_expense),
            positive: false,
        },
        Line::Section("Recent Activity".into()),
    ];

    let recent = SummaryService::recent(&state.transactions, config.recent_limit);
    if recent.is_empty() {
        lines.push(Line::Hint(
            "No transactions yet. Start by adding your first income or expense!".into(),
        ));
    } else {
        let rows: Vec<&Transaction> = recent.iter().collect();
        lines.extend(table_lines(&rows, symbol));
    }
    lines
}

/// Header line in the `N of M transactions` form.
pub fn transactions_summary(shown: usize, total: usize) -> String {
    format!("{shown} of {total} transactions")
}

pub fn empty_history_message(query: &TransactionQuery) -> &'static str {
    if query.is_narrowed() {
        "Try adjusting your search or filter criteria"
    } else {
        "Start by adding your first transaction!"
    }
}

pub fn transactions_lines(state: &AppState, query: &TransactionQuery, symbol: &str) -> Vec<Line> {
    let shown = FilterService::filter_and_sort(&state.transactions, query);
    let mut lines = vec![
        Line::Section("All Transactions".into()),
        text(transactions_summary(shown.len(), state.transactions.len())),
        text(query_line(query)),
    ];
    if shown.is_empty() {
        lines.push(Line::Warning("No transactions found".into()));
        lines.push(Line::Hint(empty_history_message(query).into()));
    } else {
        lines.extend(table_lines(&shown, symbol));
    }
    lines
}

fn query_line(query: &TransactionQuery) -> String {
    let sort = match query.sort_key {
        SortKey::Date => "date",
        SortKey::Amount => "amount",
    };
    if query.search.is_empty() {
        format!("type: {} | sort: {}", query.type_filter, sort)
    } else {
        format!(
            "type: {} | sort: {} | search: \"{}\"",
            query.type_filter, sort, query.search
        )
    }
}

const HEADERS: [&str; 5] = ["ID", "Date", "Category", "Description", "Amount"];

fn cells(txn: &Transaction, symbol: &str) -> [String; 5] {
    [
        txn.id.clone(),
        format_date(txn.date),
        txn.category.clone(),
        txn.description.clone(),
        format_signed(symbol, txn.kind.sign(), txn.amount),
    ]
}

fn column_widths(rows: &[[String; 5]]) -> [usize; 5] {
    let mut widths = HEADERS.map(|header| header.chars().count());
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }
    widths
}

fn pad_row(row: &[String; 5], widths: &[usize; 5]) -> Vec<String> {
    row.iter()
        .zip(widths.iter())
        .enumerate()
        .map(|(idx, (cell, &width))| {
            // Amounts are right aligned.
            if idx == 4 {
                format!("{cell:>width$}")
            } else {
                format!("{cell:<width$}")
            }
        })
        .collect()
}

/// Header, rule and one line per transaction; the amount column is tinted
/// by transaction kind.
pub fn table_lines(transactions: &[&Transaction], symbol: &str) -> Vec<Line> {
    let rows: Vec<[String; 5]> = transactions.iter().map(|txn| cells(txn, symbol)).collect();
    let widths = column_widths(&rows);
    let header = HEADERS.map(String::from);

    let mut lines = vec![
        text(pad_row(&header, &widths).join(COLUMN_GAP).trim_end()),
        text(
            widths
                .iter()
                .map(|width| "-".repeat(*width))
                .collect::<Vec<_>>()
                .join(COLUMN_GAP),
        ),
    ];
    lines.extend(transactions.iter().zip(rows.iter()).map(|(txn, row)| {
        let mut padded = pad_row(row, &widths);
        let amount = padded.pop().unwrap_or_default();
        padded.push(String::new());
        Line::Money {
            text: padded.join(COLUMN_GAP),
            amount,
            positive: txn.kind == TransactionKind::Income,
        }
    }));
    lines
}

pub fn format_date(date: DateTime<Utc>) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Suggested categories for `kind`, one per line.
pub fn category_lines(kind: TransactionKind) -> Vec<String> {
    let mut lines = vec![format!("Categories ({kind})")];
    lines.extend(
        kind.suggested_categories()
            .iter()
            .map(|category| format!("  {category}")),
    );
    lines
}

pub fn print_categories(kind: TransactionKind) {
    print_lines(&titled(category_lines(kind)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::services::TypeFilter;
    use crate::domain::User;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 9, 3, 12, 0, 0).unwrap()
    }

    fn signed_in(transactions: Vec<Transaction>) -> AppState {
        AppState::restored(
            Default::default(),
            transactions,
            Some(User {
                id: "u1".into(),
                name: "Ada".into(),
                email: "ada@example.com".into(),
            }),
        )
    }

    fn expense(id: &str, amount: f64) -> Transaction {
        Transaction {
            id: id.into(),
            amount,
            category: "Food".into(),
            kind: TransactionKind::Expense,
            description: "Groceries".into(),
            date: now(),
        }
    }

    #[test]
    fn navigation_bar_marks_current_view() {
        let state = signed_in(Vec::new());
        assert_eq!(
            navigation_bar(&state).unwrap(),
            "ExpenseTracker | [dashboard] add-transaction transactions | Ada | logout"
        );
        assert!(navigation_bar(&AppState::default()).is_none());
    }

    fn plain(lines: &[Line]) -> Vec<String> {
        lines.iter().map(Line::plain).collect()
    }

    #[test]
    fn dashboard_shows_totals_and_seeded_activity() {
        let state = signed_in(Transaction::seed(now()));
        let lines = dashboard_lines(&state, &Config::default());
        let text = plain(&lines);
        assert_eq!(text[1], "Total Balance   $4,615.00");
        assert!(text[2].ends_with("$4,700.00"));
        assert!(text[3].ends_with("$85.00"));
        assert!(text.iter().any(|line| line.contains("Monthly salary")));
        assert!(matches!(lines[1], Line::Money { positive: true, .. }));
        assert!(matches!(lines[3], Line::Money { positive: false, .. }));
    }

    #[test]
    fn negative_balance_is_flagged_and_tinted() {
        assert_eq!(balance_label("$", -25.0), "$25.00 (-)");
        assert_eq!(balance_label("$", 0.0), "$0.00");

        let mut rent = expense("r", 900.0);
        rent.category = "Bills".into();
        let lines = dashboard_lines(&signed_in(vec![rent]), &Config::default());
        assert_eq!(
            lines[1],
            Line::Money {
                text: "Total Balance   ".into(),
                amount: "$900.00 (-)".into(),
                positive: false,
            }
        );
    }

    #[test]
    fn empty_dashboard_invites_first_entry() {
        let lines = dashboard_lines(&signed_in(Vec::new()), &Config::default());
        assert_eq!(lines[1].plain(), "Total Balance   $0.00");
        assert!(matches!(lines.last(), Some(Line::Hint(hint)) if hint.starts_with("No transactions yet.")));
    }

    #[test]
    fn recent_activity_honors_limit() {
        let transactions: Vec<_> = (0..8).map(|i| expense(&i.to_string(), 1.0)).collect();
        let config = Config {
            recent_limit: 2,
            ..Config::default()
        };
        let lines = dashboard_lines(&signed_in(transactions), &config);
        // Title and totals take five lines, then header, rule and two rows.
        assert_eq!(lines.len(), 5 + 2 + 2);
    }

    #[test]
    fn history_reports_counts_and_empty_states() {
        let state = signed_in(vec![expense("a", 5.0), expense("b", 7.0)]);

        let all = plain(&transactions_lines(&state, &TransactionQuery::default(), "$"));
        assert_eq!(all[1], "2 of 2 transactions");

        let income_only = TransactionQuery {
            type_filter: TypeFilter::Income,
            ..TransactionQuery::default()
        };
        let lines = transactions_lines(&state, &income_only, "$");
        assert_eq!(lines[1].plain(), "0 of 2 transactions");
        assert!(lines.contains(&Line::Warning("No transactions found".into())));
        assert!(lines.contains(&Line::Hint(
            "Try adjusting your search or filter criteria".into()
        )));

        let empty = transactions_lines(&signed_in(Vec::new()), &TransactionQuery::default(), "$");
        assert!(empty.contains(&Line::Hint("Start by adding your first transaction!".into())));
    }

    #[test]
    fn table_rows_carry_sign_and_date() {
        let txn = expense("abc", 1234.5);
        let lines = table_lines(&[&txn], "$");
        assert!(lines[0].plain().starts_with("ID"));
        let row = lines[2].plain();
        assert!(row.contains("Sep 3, 2024"));
        assert!(row.ends_with("-$1,234.50"));
        assert!(matches!(&lines[2], Line::Money { amount, positive: false, .. } if amount == "-$1,234.50"));
    }

    #[test]
    fn history_sorted_by_amount_lists_largest_first() {
        let state = signed_in(vec![expense("small", 5.0), expense("large", 70.0)]);
        let query = TransactionQuery {
            sort_key: SortKey::Amount,
            ..TransactionQuery::default()
        };
        let text = plain(&transactions_lines(&state, &query, "$"));
        assert!(text[2].ends_with("sort: amount"));
        assert!(text[5].starts_with("large"));
        assert!(text[6].starts_with("small"));
    }
}
