//! Maps the persisted slices of [`AppState`] onto a [`KeyValueStore`].
//!
//! Loading never fails: a record that is missing, unreadable or malformed is
//! replaced by its default and the problem is only logged.

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::domain::{AppState, Theme, Transaction, User};

use super::{KeyValueStore, Result, THEME_KEY, TRANSACTIONS_KEY, USER_KEY};

/// What the transaction list falls back to when nothing was stored yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SeedPolicy {
    #[default]
    Demo,
    Empty,
}

/// The three independently stored records.
#[derive(Debug, Clone, PartialEq)]
pub struct PersistedState {
    pub theme: Theme,
    pub transactions: Vec<Transaction>,
    pub user: Option<User>,
}

impl PersistedState {
    pub fn into_app_state(self) -> AppState {
        AppState::restored(self.theme, self.transactions, self.user)
    }
}

pub struct PersistenceAdapter {
    store: Box<dyn KeyValueStore>,
    seed: SeedPolicy,
}

impl PersistenceAdapter {
    pub fn new(store: Box<dyn KeyValueStore>, seed: SeedPolicy) -> Self {
        Self { store, seed }
    }

    pub fn store(&self) -> &dyn KeyValueStore {
        self.store.as_ref()
    }

    /// Reads theme, transactions and user, substituting defaults per record.
    pub fn load(&self, now: DateTime<Utc>) -> PersistedState {
        let theme = self
            .read(THEME_KEY, |raw| raw.parse::<Theme>())
            .unwrap_or_default();
        let transactions = self
            .read(TRANSACTIONS_KEY, |raw| {
                serde_json::from_str::<Vec<Transaction>>(raw).map_err(|err| err.to_string())
            })
            .unwrap_or_else(|| self.seed_transactions(now));
        let user = self.read(USER_KEY, |raw| {
            serde_json::from_str::<User>(raw).map_err(|err| err.to_string())
        });
        debug!(
            %theme,
            transactions = transactions.len(),
            signed_in = user.is_some(),
            "loaded persisted state"
        );
        PersistedState {
            theme,
            transactions,
            user,
        }
    }

    /// Writes theme and transactions, plus the user record while signed in.
    /// A signed-out state leaves the user record alone; see [`Self::clear_user`].
    pub fn save(&self, state: &AppState) -> Result<()> {
        self.save_theme(state.theme)?;
        self.save_transactions(&state.transactions)?;
        if let Some(user) = &state.current_user {
            self.save_user(user)?;
        }
        Ok(())
    }

    pub fn save_theme(&self, theme: Theme) -> Result<()> {
        self.store.set(THEME_KEY, theme.as_str())
    }

    pub fn save_transactions(&self, transactions: &[Transaction]) -> Result<()> {
        let json = serde_json::to_string(transactions)?;
        self.store.set(TRANSACTIONS_KEY, &json)
    }

    pub fn save_user(&self, user: &User) -> Result<()> {
        let json = serde_json::to_string(user)?;
        self.store.set(USER_KEY, &json)
    }

    /// Deletes the stored session so it cannot come back on the next start.
    pub fn clear_user(&self) -> Result<()> {
        self.store.remove(USER_KEY)
    }

    fn seed_transactions(&self, now: DateTime<Utc>) -> Vec<Transaction> {
        match self.seed {
            SeedPolicy::Demo => Transaction::seed(now),
            SeedPolicy::Empty => Vec::new(),
        }
    }

    fn read<T>(
        &self,
        key: &str,
        parse: impl FnOnce(&str) -> std::result::Result<T, String>,
    ) -> Option<T> {
        let raw = match self.store.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(err) => {
                warn!(key, error = %err, "could not read stored record; using default");
                return None;
            }
        };
        match parse(&raw) {
            Ok(value) => Some(value),
            Err(err) => {
                warn!(key, error = %err, "discarding malformed stored record");
                None
            }
        }
    }
}
