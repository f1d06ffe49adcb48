use crate::cli::core::{CliMode, CommandError, CommandResult, ShellContext};
use crate::cli::registry::CommandEntry;
use crate::cli::{io, render};
use crate::core::services::{SortKey, TransactionQuery, TypeFilter};
use crate::core::transitions::Action;
use crate::core::validation::{FormField, TransactionForm};
use crate::domain::{TransactionKind, View};
use crate::errors::TrackerError;

const ADD_USAGE: &str = "add [<income|expense> <amount> <category> <description...>]";
const LIST_USAGE: &str =
    "list [--type all|income|expense] [--search TEXT] [--sort date|amount] [--reset]";
const OTHER_CATEGORY: &str = "Other (type it)";
const KINDS: &[&str] = &["income", "expense"];

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new("add", "Record an income or expense", ADD_USAGE, cmd_add)
            .with_arguments(KINDS),
        CommandEntry::new(
            "list",
            "Show the transaction history with filters",
            LIST_USAGE,
            cmd_list,
        )
        .with_arguments(&["--type", "--search", "--sort", "--reset"]),
        CommandEntry::new("delete", "Delete a transaction by id", "delete <id>", cmd_delete),
        CommandEntry::new(
            "categories",
            "Show suggested categories",
            "categories [income|expense]",
            cmd_categories,
        )
        .with_arguments(KINDS),
    ]
}

fn cmd_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args {
        [] if context.mode == CliMode::Interactive => {
            if !run_wizard(context)? {
                return Ok(());
            }
        }
        [] => return Err(CommandError::usage(ADD_USAGE)),
        [kind, amount, category, description @ ..] if !description.is_empty() => {
            let kind: TransactionKind = kind.parse().map_err(CommandError::InvalidArguments)?;
            let form = &mut context.transaction_form;
            form.set_kind(kind);
            form.set_amount(*amount);
            form.set_category(*category);
            form.set_description(description.join(" "));
            context.submit_transaction()?;
        }
        _ => return Err(CommandError::usage(ADD_USAGE)),
    }

    if let Some(added) = context.store.state().transactions.first() {
        io::print_success(format!(
            "Added transaction {} ({} {} {})",
            added.id,
            added.kind,
            crate::currency::format_amount(&context.config.currency_symbol, added.amount),
            added.category
        ));
    }
    render::render_current(context);
    Ok(())
}

/// Walks through the add form, re-asking only for fields that failed
/// validation. Returns `false` when the user abandons the form.
fn run_wizard(context: &mut ShellContext) -> Result<bool, CommandError> {
    context.apply_and_render(Action::Navigate(View::AddTransaction))?;

    let kinds = [TransactionKind::Expense, TransactionKind::Income];
    let labels: Vec<&str> = kinds.iter().map(|kind| kind.as_str()).collect();
    let choice = io::select(&context.theme, "Type", &labels)?;
    context.transaction_form.set_kind(kinds[choice]);

    let mut pending = vec![FormField::Amount, FormField::Category, FormField::Description];
    loop {
        for field in &pending {
            match field {
                FormField::Amount => {
                    let amount = io::prompt_text(&context.theme, "Amount")?;
                    context.transaction_form.set_amount(amount);
                }
                FormField::Category => {
                    let category = prompt_category(context, context.transaction_form.kind())?;
                    context.transaction_form.set_category(category);
                }
                FormField::Description => {
                    let description = io::prompt_text(&context.theme, "Description")?;
                    context.transaction_form.set_description(description);
                }
                _ => {}
            }
        }

        match context.submit_transaction() {
            Ok(()) => return Ok(true),
            Err(CommandError::Core(TrackerError::Validation(_))) => {}
            Err(err) => return Err(err),
        }

        let errors = context.transaction_form.errors().clone();
        for (field, message) in errors.iter() {
            io::print_error(format!("{field}: {message}"));
        }
        if !io::confirm_action(&context.theme, "Fix and try again?", true)? {
            context.transaction_form = TransactionForm::new(context.transaction_form.kind());
            io::print_info("Transaction discarded.");
            return Ok(false);
        }
        pending = errors.iter().map(|(field, _)| field).collect();
    }
}

fn prompt_category(context: &ShellContext, kind: TransactionKind) -> Result<String, CommandError> {
    let mut items: Vec<&str> = kind.suggested_categories().to_vec();
    items.push(OTHER_CATEGORY);
    let index = io::select(&context.theme, "Category", &items)?;
    if items[index] == OTHER_CATEGORY {
        io::prompt_text(&context.theme, "Category")
    } else {
        Ok(items[index].to_string())
    }
}

/// Applies `--flag value` pairs on top of `base`.
pub(crate) fn parse_query(base: &TransactionQuery, args: &[&str]) -> Result<TransactionQuery, CommandError> {
    let mut query = base.clone();
    let mut iter = args.iter();
    while let Some(flag) = iter.next() {
        match *flag {
            "--reset" => query = TransactionQuery::default(),
            "--type" | "--search" | "--sort" => {
                let value = iter.next().ok_or_else(|| CommandError::usage(LIST_USAGE))?;
                match *flag {
                    "--type" => {
                        query.type_filter =
                            value.parse::<TypeFilter>().map_err(CommandError::InvalidArguments)?
                    }
                    "--sort" => {
                        query.sort_key =
                            value.parse::<SortKey>().map_err(CommandError::InvalidArguments)?
                    }
                    _ => query.search = value.trim().to_string(),
                }
            }
            other => {
                return Err(CommandError::InvalidArguments(format!(
                    "unknown option `{other}`; usage: {LIST_USAGE}"
                )))
            }
        }
    }
    Ok(query)
}

fn cmd_list(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let query = parse_query(&context.query, args)?;
    if context.store.state().current_view != View::Transactions {
        context.apply(Action::Navigate(View::Transactions))?;
    }
    context.query = query;
    render::render_current(context);
    Ok(())
}

fn cmd_delete(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [id] = args else {
        return Err(CommandError::usage("delete <id>"));
    };
    let existed = context.store.state().transaction(id).is_some();
    context.apply(Action::DeleteTransaction(id.to_string()))?;
    if !existed {
        io::print_warning(format!("No transaction with id `{id}`."));
        return Ok(());
    }
    io::print_success(format!("Deleted transaction {id}."));
    render::render_current(context);
    Ok(())
}

fn cmd_categories(_context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args {
        [] => {
            render::print_categories(TransactionKind::Income);
            render::print_categories(TransactionKind::Expense);
        }
        [kind] => {
            let kind: TransactionKind = kind.parse().map_err(CommandError::InvalidArguments)?;
            render::print_categories(kind);
        }
        _ => return Err(CommandError::usage("categories [income|expense]")),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_flags_layer_over_previous_query() {
        let base = TransactionQuery {
            search: "rent".into(),
            ..TransactionQuery::default()
        };
        let query = parse_query(&base, &["--type", "expense"]).unwrap();
        assert_eq!(query.type_filter, TypeFilter::Expense);
        assert_eq!(query.search, "rent");

        let reset = parse_query(&query, &["--reset", "--sort", "amount"]).unwrap();
        assert_eq!(reset.type_filter, TypeFilter::All);
        assert_eq!(reset.search, "");
        assert_eq!(reset.sort_key, SortKey::Amount);
    }

    #[test]
    fn list_flags_require_values() {
        let base = TransactionQuery::default();
        assert!(parse_query(&base, &["--search"]).is_err());
        assert!(parse_query(&base, &["--colour", "red"]).is_err());
        assert!(parse_query(&base, &["--type", "gifts"]).is_err());
    }
}
