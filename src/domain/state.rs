use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::domain::{transaction::Transaction, user::User};

/// Screens the application can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum View {
    Home,
    Auth,
    Dashboard,
    AddTransaction,
    Transactions,
}

impl View {
    /// Views reachable only while a user is signed in.
    pub const AUTHENTICATED: [View; 3] = [View::Dashboard, View::AddTransaction, View::Transactions];

    pub fn requires_auth(self) -> bool {
        Self::AUTHENTICATED.contains(&self)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            View::Home => "home",
            View::Auth => "auth",
            View::Dashboard => "dashboard",
            View::AddTransaction => "add-transaction",
            View::Transactions => "transactions",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for View {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "home" => Ok(View::Home),
            "auth" => Ok(View::Auth),
            "dashboard" => Ok(View::Dashboard),
            "add-transaction" | "add" => Ok(View::AddTransaction),
            "transactions" | "list" => Ok(View::Transactions),
            other => Err(format!("unknown view `{other}`")),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("unknown theme `{other}`")),
        }
    }
}

/// Which variant of the auth form is shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

impl AuthMode {
    pub fn toggled(self) -> Self {
        match self {
            AuthMode::Login => AuthMode::Register,
            AuthMode::Register => AuthMode::Login,
        }
    }
}

impl fmt::Display for AuthMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthMode::Login => f.write_str("login"),
            AuthMode::Register => f.write_str("register"),
        }
    }
}

/// Root of all mutable application data.
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub transactions: Vec<Transaction>,
    pub current_user: Option<User>,
    pub current_view: View,
    pub theme: Theme,
    pub auth_mode: AuthMode,
}

impl AppState {
    /// Builds the startup state: signed-in users land on the dashboard,
    /// everyone else on the home screen.
    pub fn restored(theme: Theme, transactions: Vec<Transaction>, user: Option<User>) -> Self {
        let current_view = if user.is_some() {
            View::Dashboard
        } else {
            View::Home
        };
        Self {
            transactions,
            current_user: user,
            current_view,
            theme,
            auth_mode: AuthMode::Login,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user.is_some()
    }

    pub fn transaction(&self, id: &str) -> Option<&Transaction> {
        self.transactions.iter().find(|txn| txn.id == id)
    }

    /// Whether the view/auth pairing is one the transition layer can produce.
    pub fn is_consistent(&self) -> bool {
        self.current_view.requires_auth() == self.is_authenticated()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::restored(Theme::default(), Vec::new(), None)
    }
}
