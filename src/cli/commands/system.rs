use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::help;
use crate::cli::io;
use crate::cli::output::section as output_section;
use crate::cli::registry::CommandEntry;
use crate::utils::build_info;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "config",
            "Show or change settings",
            "config [set <key> <value>]",
            cmd_config,
        )
        .with_arguments(&["set"]),
        CommandEntry::new("version", "Show build metadata", "version", cmd_version),
        CommandEntry::new(
            "help",
            "Show available commands",
            "help [command]",
            cmd_help,
        ),
        CommandEntry::new("exit", "Exit the shell", "exit", cmd_exit),
    ]
}

fn cmd_config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args {
        [] => {
            let config = &context.config;
            output_section("Configuration");
            io::print_info(format!("  File           : {}", context.config_manager.path().display()));
            io::print_info(format!("  currency_symbol: {}", config.currency_symbol));
            io::print_info(format!("  recent_limit   : {}", config.recent_limit));
            io::print_info(format!("  seed_demo_data : {}", config.seed_demo_data));
            io::print_info(format!(
                "  log_filter     : {}",
                config.log_filter.as_deref().unwrap_or("(default)")
            ));
            Ok(())
        }
        ["set", key, value @ ..] if !value.is_empty() => {
            let mut updated = context.config.clone();
            updated.set_value(key, &value.join(" "))?;
            context.config_manager.save(&updated)?;
            context.config = updated;
            io::print_success(format!("Updated `{key}`."));
            if *key == "seed_demo_data" || *key == "log_filter" {
                io::print_hint("Takes effect the next time the shell starts.");
            }
            Ok(())
        }
        _ => Err(CommandError::usage("config [set <key> <value>]")),
    }
}

fn cmd_version(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let meta = build_info::current();
    output_section(format!("Expense Tracker {}", meta.version));
    io::print_info(format!(
        "  Build hash   : {} ({})",
        meta.git_hash, meta.git_status
    ));
    io::print_info(format!("  Built at     : {}", meta.timestamp));
    io::print_info(format!("  Target       : {}", meta.target));
    io::print_info(format!("  Profile      : {}", meta.profile));
    io::print_info(format!("  Rustc        : {}", meta.rustc));
    Ok(())
}

fn cmd_help(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if let Some(command) = args.first().map(|name| name.to_lowercase()) {
        if let Some(entry) = context.registry.get(&command) {
            help::print_command(entry);
        } else {
            context.suggest_command(args[0]);
        }
        return Ok(());
    }

    help::print_overview(&context.registry);
    Ok(())
}

fn cmd_exit(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    Err(CommandError::ExitRequested)
}
