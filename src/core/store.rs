//! Owner of the live [`AppState`].
//!
//! The store applies transitions, commits the result and then writes the
//! changed slices through the [`PersistenceAdapter`]. Storage write failures
//! are logged and never undo a transition.

use tracing::{debug, warn};

use crate::core::{
    clock::Clock,
    transitions::{self, Action},
};
use crate::domain::AppState;
use crate::errors::Result;
use crate::storage::PersistenceAdapter;

pub struct Store {
    state: AppState,
    persistence: PersistenceAdapter,
    clock: Box<dyn Clock>,
}

impl Store {
    /// Restores state from `persistence`, defaulting whatever is missing.
    pub fn open(persistence: PersistenceAdapter, clock: Box<dyn Clock>) -> Self {
        let state = persistence.load(clock.now()).into_app_state();
        debug!(view = %state.current_view, "store opened");
        Self {
            state,
            persistence,
            clock,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Applies `action`. On error the state is left untouched.
    pub fn dispatch(&mut self, action: Action) -> Result<()> {
        let is_logout = matches!(action, Action::Logout);
        let next = transitions::apply(&self.state, action, self.clock.as_ref())?;
        let previous = std::mem::replace(&mut self.state, next);

        if persisted_slices_changed(&previous, &self.state) {
            if let Err(err) = self.persistence.save(&self.state) {
                warn!(error = %err, "failed to persist state");
            }
        }
        if is_logout {
            if let Err(err) = self.persistence.clear_user() {
                warn!(error = %err, "failed to clear stored user");
            }
        }
        Ok(())
    }
}

fn persisted_slices_changed(previous: &AppState, next: &AppState) -> bool {
    previous.theme != next.theme
        || previous.transactions != next.transactions
        || previous.current_user != next.current_user
}
