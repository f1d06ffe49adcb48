use colored::Colorize;
use std::fmt;
use std::sync::{OnceLock, RwLock};

use crate::domain::Theme;

/// Message categories used by the CLI output helpers.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Warning,
    Error,
    Hint,
    Section,
    Separator,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct OutputPreferences {
    pub theme: Theme,
    /// Disables colors entirely, used by script mode.
    pub plain: bool,
}

static PREFERENCES: OnceLock<RwLock<OutputPreferences>> = OnceLock::new();

pub fn set_preferences(prefs: OutputPreferences) {
    let lock = PREFERENCES.get_or_init(|| RwLock::new(OutputPreferences::default()));
    if let Ok(mut guard) = lock.write() {
        *guard = prefs;
    }
}

pub fn set_theme(theme: Theme) {
    let mut prefs = preferences();
    prefs.theme = theme;
    set_preferences(prefs);
}

fn preferences() -> OutputPreferences {
    PREFERENCES
        .get_or_init(|| RwLock::new(OutputPreferences::default()))
        .read()
        .map(|guard| *guard)
        .unwrap_or_default()
}

fn build_label(kind: MessageKind) -> &'static str {
    match kind {
        MessageKind::Info => "[i]",
        MessageKind::Success => "[ok]",
        MessageKind::Warning => "[!]",
        MessageKind::Error => "[x]",
        MessageKind::Hint => "->",
        MessageKind::Section | MessageKind::Separator => "",
    }
}

fn apply_style(kind: MessageKind, message: impl fmt::Display, prefs: &OutputPreferences) -> String {
    let text = message.to_string();

    let formatted = match kind {
        MessageKind::Section => format!("=== {} ===", text.trim()),
        MessageKind::Separator => String::from("----------------------------------------"),
        _ => format!("{} {}", build_label(kind), text),
    };

    if prefs.plain {
        return formatted;
    }

    // Dark terminals get the bright palette, light ones the regular one.
    match (kind, prefs.theme) {
        (MessageKind::Success, Theme::Dark) => formatted.bright_green().to_string(),
        (MessageKind::Success, Theme::Light) => formatted.green().to_string(),
        (MessageKind::Warning, Theme::Dark) => formatted.bright_yellow().to_string(),
        (MessageKind::Warning, Theme::Light) => formatted.yellow().to_string(),
        (MessageKind::Error, Theme::Dark) => formatted.bright_red().to_string(),
        (MessageKind::Error, Theme::Light) => formatted.red().to_string(),
        (MessageKind::Hint, Theme::Dark) => formatted.bright_cyan().to_string(),
        (MessageKind::Hint, Theme::Light) => formatted.cyan().to_string(),
        (MessageKind::Section, _) => formatted.bold().to_string(),
        _ => formatted,
    }
}

pub fn print(kind: MessageKind, message: impl fmt::Display) {
    let prefs = preferences();
    let formatted = apply_style(kind, message, &prefs);
    match kind {
        MessageKind::Section | MessageKind::Separator => println!("\n{}", formatted),
        _ => println!("{}", formatted),
    }
}

/// Colors a money figure green for income and red for expenses.
pub fn tint_amount(text: &str, positive: bool) -> String {
    let prefs = preferences();
    if prefs.plain {
        return text.to_string();
    }
    match (positive, prefs.theme) {
        (true, Theme::Dark) => text.bright_green().to_string(),
        (true, Theme::Light) => text.green().to_string(),
        (false, Theme::Dark) => text.bright_red().to_string(),
        (false, Theme::Light) => text.red().to_string(),
    }
}

pub fn line(message: impl fmt::Display) {
    println!("{}", message);
}

pub fn info(message: impl fmt::Display) {
    print(MessageKind::Info, message);
}

pub fn success(message: impl fmt::Display) {
    print(MessageKind::Success, message);
}

pub fn warning(message: impl fmt::Display) {
    print(MessageKind::Warning, message);
}

pub fn error(message: impl fmt::Display) {
    print(MessageKind::Error, message);
}

pub fn hint(message: impl fmt::Display) {
    print(MessageKind::Hint, message);
}

pub fn section(title: impl fmt::Display) {
    print(MessageKind::Section, title);
}

pub fn separator() {
    print(MessageKind::Separator, "");
}
