//! The closed set of state transitions.
//!
//! Every function takes the current state by reference and returns the next
//! one; nothing here touches storage. Transitions refuse to produce a state
//! where an authenticated view is shown without a user, or the other way
//! round.

use tracing::debug;

use crate::core::{
    clock::Clock,
    ids,
    services::TransactionService,
    validation::{validate_credentials, TransactionForm},
};
use crate::domain::{AppState, AuthMode, Credentials, Displayable, Transaction, User, View};
use crate::errors::{Result, TrackerError};

/// A user intent that changes application state.
#[derive(Debug, Clone)]
pub enum Action {
    OpenAuth(AuthMode),
    ToggleAuthMode,
    Login(Credentials),
    Logout,
    AddTransaction(TransactionForm),
    DeleteTransaction(String),
    Navigate(View),
    ToggleTheme,
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::OpenAuth(_) => "open_auth",
            Action::ToggleAuthMode => "toggle_auth_mode",
            Action::Login(_) => "login",
            Action::Logout => "logout",
            Action::AddTransaction(_) => "add_transaction",
            Action::DeleteTransaction(_) => "delete_transaction",
            Action::Navigate(_) => "navigate",
            Action::ToggleTheme => "toggle_theme",
        }
    }
}

pub fn apply(state: &AppState, action: Action, clock: &dyn Clock) -> Result<AppState> {
    debug!(action = action.name(), view = %state.current_view, "applying transition");
    match action {
        Action::OpenAuth(mode) => open_auth(state, mode),
        Action::ToggleAuthMode => Ok(toggle_auth_mode(state)),
        Action::Login(credentials) => login(state, &credentials, clock),
        Action::Logout => Ok(logout(state)),
        Action::AddTransaction(form) => add_transaction(state, &form, clock),
        Action::DeleteTransaction(id) => delete_transaction(state, &id),
        Action::Navigate(view) => navigate(state, view),
        Action::ToggleTheme => Ok(toggle_theme(state)),
    }
}

/// Shows the auth screen in `mode`. Only offered from the signed-out screens.
pub fn open_auth(state: &AppState, mode: AuthMode) -> Result<AppState> {
    if state.is_authenticated() {
        return Err(TrackerError::InvalidTransition(
            "already signed in; log out first".into(),
        ));
    }
    Ok(AppState {
        current_view: View::Auth,
        auth_mode: mode,
        ..state.clone()
    })
}

pub fn toggle_auth_mode(state: &AppState) -> AppState {
    AppState {
        auth_mode: state.auth_mode.toggled(),
        ..state.clone()
    }
}

/// Assigns an identity from the submitted form. The password is not checked
/// against anything and is not kept.
pub fn login(state: &AppState, credentials: &Credentials, clock: &dyn Clock) -> Result<AppState> {
    if state.is_authenticated() {
        return Err(TrackerError::InvalidTransition(
            "already signed in; log out first".into(),
        ));
    }
    let errors = validate_credentials(state.auth_mode, credentials);
    if !errors.is_empty() {
        return Err(TrackerError::Validation(errors));
    }
    let user = User {
        id: ids::next_id(clock.now(), |_| false),
        name: credentials.display_name(),
        email: credentials.email.trim().to_string(),
    };
    debug!(user = %user.display_label(), "signed in");
    Ok(AppState {
        current_user: Some(user),
        current_view: View::Dashboard,
        ..state.clone()
    })
}

pub fn logout(state: &AppState) -> AppState {
    AppState {
        current_user: None,
        current_view: View::Home,
        auth_mode: AuthMode::Login,
        ..state.clone()
    }
}

/// Validates the form, stamps id and date, prepends, and returns to the
/// dashboard.
pub fn add_transaction(
    state: &AppState,
    form: &TransactionForm,
    clock: &dyn Clock,
) -> Result<AppState> {
    if !state.is_authenticated() {
        return Err(TrackerError::NotAuthenticated);
    }
    let draft = form.to_draft()?;
    let now = clock.now();
    let id = ids::next_id(now, |candidate| {
        TransactionService::contains(&state.transactions, candidate)
    });
    let transaction = Transaction::from_draft(id, draft, now);
    debug!(transaction = %transaction.display_label(), "recorded transaction");
    Ok(AppState {
        transactions: TransactionService::prepend(&state.transactions, transaction),
        current_view: View::Dashboard,
        ..state.clone()
    })
}

/// Requires a signed-in user, like the history screen it belongs to.
/// Unknown ids are ignored.
pub fn delete_transaction(state: &AppState, id: &str) -> Result<AppState> {
    if !state.is_authenticated() {
        return Err(TrackerError::NotAuthenticated);
    }
    Ok(AppState {
        transactions: TransactionService::remove(&state.transactions, id),
        ..state.clone()
    })
}

pub fn navigate(state: &AppState, view: View) -> Result<AppState> {
    if !view.requires_auth() {
        return Err(TrackerError::InvalidTransition(format!(
            "`{view}` is not a navigation target"
        )));
    }
    if !state.is_authenticated() {
        return Err(TrackerError::NotAuthenticated);
    }
    Ok(AppState {
        current_view: view,
        ..state.clone()
    })
}

pub fn toggle_theme(state: &AppState) -> AppState {
    AppState {
        theme: state.theme.toggled(),
        ..state.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{clock::ManualClock, validation::FormField};
    use crate::domain::{Theme, TransactionKind};
    use chrono::{Duration, TimeZone, Utc};

    fn clock() -> ManualClock {
        ManualClock::new(Utc.with_ymd_and_hms(2024, 2, 1, 10, 0, 0).unwrap())
    }

    fn signed_out() -> AppState {
        AppState::restored(Theme::Light, Transaction::seed(clock().now()), None)
    }

    fn signed_in() -> AppState {
        let creds = Credentials::new(None, "ada@example.com", "pw");
        login(&signed_out(), &creds, &clock()).expect("login")
    }

    fn lunch() -> TransactionForm {
        TransactionForm::filled(TransactionKind::Expense, "12.5", "Food", "  Lunch  ")
    }

    #[test]
    fn login_assigns_user_and_opens_dashboard() {
        let state = signed_in();
        let user = state.current_user.as_ref().expect("user");
        assert_eq!(user.name, "ada");
        assert_eq!(user.email, "ada@example.com");
        assert!(!user.id.is_empty());
        assert_eq!(state.current_view, View::Dashboard);
        assert!(state.is_consistent());
    }

    #[test]
    fn login_with_missing_fields_is_rejected() {
        let creds = Credentials::new(None, "", "");
        let err = login(&signed_out(), &creds, &clock()).expect_err("blank credentials");
        match err {
            TrackerError::Validation(errors) => {
                assert!(errors.contains(FormField::Email));
                assert!(errors.contains(FormField::Password));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn register_mode_requires_a_name() {
        let state = open_auth(&signed_out(), AuthMode::Register).unwrap();
        let creds = Credentials::new(None, "ada@example.com", "pw");
        assert!(matches!(
            login(&state, &creds, &clock()),
            Err(TrackerError::Validation(_))
        ));
        let named = Credentials::new(Some("Ada".into()), "ada@example.com", "pw");
        let next = login(&state, &named, &clock()).unwrap();
        assert_eq!(next.current_user.unwrap().name, "Ada");
    }

    #[test]
    fn logout_returns_home_and_resets_auth_mode() {
        let mut state = signed_in();
        state.auth_mode = AuthMode::Register;
        let next = logout(&state);
        assert!(next.current_user.is_none());
        assert_eq!(next.current_view, View::Home);
        assert_eq!(next.auth_mode, AuthMode::Login);
        assert_eq!(next.transactions, state.transactions);
    }

    #[test]
    fn toggle_auth_mode_flips_back_and_forth() {
        let state = signed_out();
        let once = toggle_auth_mode(&state);
        assert_eq!(once.auth_mode, AuthMode::Register);
        assert_eq!(toggle_auth_mode(&once).auth_mode, AuthMode::Login);
    }

    #[test]
    fn open_auth_is_refused_while_signed_in() {
        assert!(matches!(
            open_auth(&signed_in(), AuthMode::Login),
            Err(TrackerError::InvalidTransition(_))
        ));
    }

    #[test]
    fn add_transaction_prepends_with_fresh_id() {
        let state = navigate(&signed_in(), View::AddTransaction).unwrap();
        let clock = clock();
        clock.advance(Duration::hours(1));
        let next = add_transaction(&state, &lunch(), &clock).unwrap();

        assert_eq!(next.transactions.len(), state.transactions.len() + 1);
        let added = &next.transactions[0];
        assert!(!added.id.is_empty());
        assert!(state.transactions.iter().all(|txn| txn.id != added.id));
        assert_eq!(added.description, "Lunch");
        assert_eq!(added.amount, 12.5);
        assert_eq!(added.date, clock.now());
        assert_eq!(next.current_view, View::Dashboard);
    }

    #[test]
    fn add_transaction_rejects_invalid_form_without_changes() {
        let state = signed_in();
        let form = TransactionForm::filled(TransactionKind::Expense, "-5", "Food", "x");
        let err = add_transaction(&state, &form, &clock()).expect_err("invalid amount");
        assert!(matches!(err, TrackerError::Validation(ref e) if e.contains(FormField::Amount)));
    }

    #[test]
    fn add_transaction_requires_a_user() {
        assert!(matches!(
            add_transaction(&signed_out(), &lunch(), &clock()),
            Err(TrackerError::NotAuthenticated)
        ));
    }

    #[test]
    fn delete_unknown_id_leaves_list_alone() {
        let state = signed_in();
        let next = delete_transaction(&state, "does-not-exist").unwrap();
        assert_eq!(next.transactions, state.transactions);
    }

    #[test]
    fn delete_removes_exactly_the_matching_entry() {
        let state = signed_in();
        let next = delete_transaction(&state, "1").unwrap();
        assert_eq!(next.transactions.len(), state.transactions.len() - 1);
        assert!(next.transaction("1").is_none());
        assert!(next.transaction("2").is_some());
    }

    #[test]
    fn delete_without_user_is_rejected() {
        let state = signed_out();
        assert!(matches!(
            delete_transaction(&state, "1"),
            Err(TrackerError::NotAuthenticated)
        ));
    }

    #[test]
    fn navigate_without_user_is_rejected() {
        let state = signed_out();
        for view in View::AUTHENTICATED {
            assert!(matches!(
                navigate(&state, view),
                Err(TrackerError::NotAuthenticated)
            ));
        }
    }

    #[test]
    fn navigate_refuses_signed_out_views() {
        let state = signed_in();
        assert!(navigate(&state, View::Home).is_err());
        assert!(navigate(&state, View::Auth).is_err());
        assert_eq!(
            navigate(&state, View::Transactions).unwrap().current_view,
            View::Transactions
        );
    }

    #[test]
    fn toggle_theme_flips() {
        let state = signed_out();
        assert_eq!(toggle_theme(&state).theme, Theme::Dark);
        assert_eq!(toggle_theme(&toggle_theme(&state)).theme, Theme::Light);
    }

    #[test]
    fn every_action_keeps_view_and_auth_consistent() {
        let clock = clock();
        let actions = vec![
            Action::Navigate(View::Dashboard),
            Action::OpenAuth(AuthMode::Register),
            Action::ToggleAuthMode,
            Action::Login(Credentials::new(None, "ada@example.com", "pw")),
            Action::Navigate(View::Transactions),
            Action::AddTransaction(lunch()),
            Action::DeleteTransaction("2".into()),
            Action::ToggleTheme,
            Action::OpenAuth(AuthMode::Login),
            Action::Logout,
            Action::Navigate(View::AddTransaction),
        ];
        let mut state = signed_out();
        for action in actions {
            if let Ok(next) = apply(&state, action, &clock) {
                state = next;
            }
            assert!(state.is_consistent(), "inconsistent state: {state:?}");
        }
        assert_eq!(state.current_view, View::Home);
    }
}
