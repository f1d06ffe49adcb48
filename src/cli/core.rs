//! Dispatch, error reporting and the error types of the command shell.

use std::io;

use rustyline::error::ReadlineError;
use strsim::levenshtein;
use thiserror::Error;

use crate::cli::io as cli_io;
use crate::cli::render;
use crate::core::transitions::Action;
use crate::core::validation::AuthForm;
use crate::errors::TrackerError;

pub use crate::cli::shell_context::{CliMode, ShellContext};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

pub type CommandResult = Result<(), CommandError>;

/// Fatal shell errors; anything a single command can recover from is a
/// [`CommandError`] instead.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] TrackerError),
    #[error(transparent)]
    Readline(#[from] ReadlineError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Prompt(#[from] dialoguer::Error),
}

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error(transparent)]
    Core(#[from] TrackerError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Prompt(#[from] dialoguer::Error),
    #[error("exit requested")]
    ExitRequested,
}

impl CommandError {
    pub(crate) fn usage(usage: &str) -> Self {
        CommandError::InvalidArguments(format!("usage: {usage}"))
    }
}

impl ShellContext {
    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        if let Some(handler) = self.registry.handler(command) {
            match handler(self, args) {
                Ok(()) => Ok(LoopControl::Continue),
                Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
                Err(err) => Err(err),
            }
        } else {
            self.suggest_command(raw);
            Ok(LoopControl::Continue)
        }
    }

    /// Applies a state transition and refreshes output preferences that
    /// depend on state.
    pub(crate) fn apply(&mut self, action: Action) -> CommandResult {
        self.store.dispatch(action)?;
        self.sync_output();
        Ok(())
    }

    /// Like [`Self::apply`] followed by rendering the resulting screen.
    pub(crate) fn apply_and_render(&mut self, action: Action) -> CommandResult {
        self.apply(action)?;
        render::render_current(self);
        Ok(())
    }

    /// Submits the pending add-transaction form. Field errors stay on the
    /// form; if the store refuses the entry the input is restored as typed.
    pub(crate) fn submit_transaction(&mut self) -> CommandResult {
        if !self.store.state().is_authenticated() {
            return Err(TrackerError::NotAuthenticated.into());
        }
        let pending = self.transaction_form.clone();
        self.transaction_form.submit().map_err(TrackerError::from)?;
        if let Err(err) = self.apply(Action::AddTransaction(pending.clone())) {
            self.transaction_form = pending;
            return Err(err);
        }
        Ok(())
    }

    /// Submits the auth form and signs in with the resulting credentials.
    pub(crate) fn submit_auth(&mut self) -> CommandResult {
        let credentials = self.auth_form.submit().map_err(TrackerError::from)?;
        self.apply(Action::Login(credentials))?;
        self.auth_form = AuthForm::new(self.store.state().auth_mode);
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn process_line(&mut self, line: &str) -> Result<LoopControl, CommandError> {
        let tokens = match crate::cli::shell::parse_command_line(line) {
            Ok(tokens) => tokens,
            Err(err) => {
                self.print_warning(&err.to_string());
                return Ok(LoopControl::Continue);
            }
        };

        if tokens.is_empty() {
            return Ok(LoopControl::Continue);
        }

        let command = tokens[0].to_lowercase();
        let args: Vec<&str> = tokens.iter().skip(1).map(String::as_str).collect();
        self.dispatch(&command, &tokens[0], &args)
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        cli_io::print_warning(format!(
            "Unknown command `{}`. Type `help` to see available commands.",
            input
        ));

        let mut suggestions: Vec<_> = self
            .registry
            .names()
            .map(|key| (levenshtein(key, input), key))
            .collect();
        suggestions.sort_by_key(|(distance, _)| *distance);

        if let Some((distance, best)) = suggestions.first() {
            if *distance <= 3 {
                cli_io::print_info(format!("Suggestion: `{}`?", best));
            }
        }
    }

    pub(crate) fn confirm_exit(&self) -> Result<bool, CliError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        cli_io::confirm_action(&self.theme, "Exit shell?", true).map_err(|err| match err {
            CommandError::Prompt(err) => CliError::Prompt(err),
            CommandError::Io(err) => CliError::Io(err),
            other => CliError::Io(io::Error::new(io::ErrorKind::Other, other.to_string())),
        })
    }

    pub(crate) fn report_error(&self, err: CommandError) {
        match err {
            CommandError::ExitRequested => {}
            CommandError::InvalidArguments(message) => {
                self.print_error(&message);
                cli_io::print_hint("Use `help <command>` for usage details.");
            }
            CommandError::Core(TrackerError::Validation(errors)) => {
                self.print_error("Please fix the highlighted fields:");
                for (field, message) in errors.iter() {
                    cli_io::print_error(format!("  {field}: {message}"));
                }
            }
            CommandError::Core(TrackerError::NotAuthenticated) => {
                self.print_error("You need to sign in first.");
                cli_io::print_hint("Try `login <email>` or `register <name> <email>`.");
            }
            other => self.print_error(&other.to_string()),
        }
    }

    pub(crate) fn print_error(&self, message: &str) {
        cli_io::print_error(message);
    }

    pub(crate) fn print_warning(&self, message: &str) {
        cli_io::print_warning(message);
    }
}
