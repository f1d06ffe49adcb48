use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::registry::CommandEntry;
use crate::cli::{io, render};
use crate::core::transitions::Action;
use crate::domain::View;

/// Views reachable with `view`, in navigation bar order.
const VIEW_TARGETS: &[&str] = &["dashboard", "add-transaction", "transactions"];

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "view",
            "Switch to another screen",
            "view <dashboard|add-transaction|transactions>",
            cmd_view,
        )
        .with_arguments(VIEW_TARGETS),
        CommandEntry::new("show", "Redraw the current screen", "show", cmd_show),
        CommandEntry::new("theme", "Toggle light and dark theme", "theme", cmd_theme),
    ]
}

fn cmd_view(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [target] = args else {
        return Err(CommandError::usage(
            "view <dashboard|add-transaction|transactions>",
        ));
    };
    let view: View = target.parse().map_err(CommandError::InvalidArguments)?;
    context.apply_and_render(Action::Navigate(view))
}

fn cmd_show(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    render::render_current(context);
    Ok(())
}

fn cmd_theme(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.apply(Action::ToggleTheme)?;
    io::print_success(format!("Theme set to {}.", context.store.state().theme.as_str()));
    Ok(())
}
