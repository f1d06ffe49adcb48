use crate::domain::{AppState, AuthMode, View};

/// What the UI should draw for the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    Auth { mode: AuthMode },
    Dashboard,
    AddTransaction,
    Transactions,
}

pub fn route(state: &AppState) -> Screen {
    match state.current_view {
        View::Home => Screen::Home,
        View::Auth => Screen::Auth {
            mode: state.auth_mode,
        },
        View::Dashboard => Screen::Dashboard,
        View::AddTransaction => Screen::AddTransaction,
        View::Transactions => Screen::Transactions,
    }
}

/// Navigation entries to offer; empty while signed out.
pub fn navigation_targets(state: &AppState) -> &'static [View] {
    if state.is_authenticated() {
        &View::AUTHENTICATED
    } else {
        &[]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Theme, User};

    #[test]
    fn auth_screen_carries_mode() {
        let mut state = AppState::default();
        state.current_view = View::Auth;
        state.auth_mode = AuthMode::Register;
        assert_eq!(
            route(&state),
            Screen::Auth {
                mode: AuthMode::Register
            }
        );
    }

    #[test]
    fn navigation_is_hidden_until_signed_in() {
        let anonymous = AppState::default();
        assert!(navigation_targets(&anonymous).is_empty());
        assert_eq!(route(&anonymous), Screen::Home);

        let user = User {
            id: "u".into(),
            name: "Ada".into(),
            email: "ada@example.com".into(),
        };
        let signed_in = AppState::restored(Theme::Light, Vec::new(), Some(user));
        assert_eq!(navigation_targets(&signed_in).len(), 3);
        assert_eq!(route(&signed_in), Screen::Dashboard);
    }
}
