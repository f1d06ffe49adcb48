use crate::cli::core::{CliMode, CommandError, CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::registry::CommandEntry;
use crate::core::services::TransactionQuery;
use crate::core::transitions::Action;
use crate::core::validation::TransactionForm;
use crate::domain::{AuthMode, Displayable, View};

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new("signin", "Open the login form", "signin", cmd_signin),
        CommandEntry::new("signup", "Open the registration form", "signup", cmd_signup),
        CommandEntry::new(
            "mode",
            "Switch the auth form between login and register",
            "mode",
            cmd_mode,
        ),
        CommandEntry::new(
            "login",
            "Sign in with an email address",
            "login <email> [password]",
            cmd_login,
        ),
        CommandEntry::new(
            "register",
            "Create an account and sign in",
            "register <name> <email> [password]",
            cmd_register,
        ),
        CommandEntry::new("logout", "Sign out", "logout", cmd_logout),
    ]
}

fn cmd_signin(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.apply_and_render(Action::OpenAuth(AuthMode::Login))
}

fn cmd_signup(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.apply_and_render(Action::OpenAuth(AuthMode::Register))
}

fn cmd_mode(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    if context.store.state().current_view != View::Auth {
        return Err(CommandError::InvalidArguments(
            "the auth form is not open; use `signin` or `signup`".into(),
        ));
    }
    context.apply(Action::ToggleAuthMode)?;
    let mode = context.store.state().auth_mode;
    context.auth_form.set_mode(mode);
    crate::cli::render::render_current(context);
    Ok(())
}

fn cmd_login(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let (email, password) = match args {
        [email] => (*email, None),
        [email, password] => (*email, Some(*password)),
        _ => return Err(CommandError::usage("login <email> [password]")),
    };
    submit(context, AuthMode::Login, None, email, password)
}

fn cmd_register(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let (name, email, password) = match args {
        [name, email] => (*name, *email, None),
        [name, email, password] => (*name, *email, Some(*password)),
        _ => return Err(CommandError::usage("register <name> <email> [password]")),
    };
    submit(context, AuthMode::Register, Some(name), email, password)
}

/// Opens the form in `mode` when needed, then submits it. Without a password
/// argument the interactive shell prompts; scripts submit an empty one and
/// get the validation error.
fn submit(
    context: &mut ShellContext,
    mode: AuthMode,
    name: Option<&str>,
    email: &str,
    password: Option<&str>,
) -> CommandResult {
    context.auth_form.set_mode(mode);
    let state = context.store.state();
    if state.current_view != View::Auth || state.auth_mode != context.auth_form.mode() {
        context.apply(Action::OpenAuth(mode))?;
    }

    let password = match password {
        Some(password) => password.to_string(),
        None if context.mode == CliMode::Interactive => io::prompt_password(&context.theme)?,
        None => String::new(),
    };

    let form = &mut context.auth_form;
    if let Some(name) = name {
        form.set_name(name);
    }
    form.set_email(email);
    form.set_password(password);
    context.submit_auth()?;
    if let Some(user) = &context.store.state().current_user {
        io::print_success(format!("Signed in as {}", user.display_label()));
    }
    crate::cli::render::render_current(context);
    Ok(())
}

fn cmd_logout(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    if !context.store.state().is_authenticated() {
        io::print_warning("Not signed in.");
        return Ok(());
    }
    context.apply(Action::Logout)?;
    context.query = TransactionQuery::default();
    context.transaction_form = TransactionForm::default();
    io::print_success("Signed out.");
    crate::cli::render::render_current(context);
    Ok(())
}
