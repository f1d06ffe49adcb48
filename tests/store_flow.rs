mod common;

use common::{open_store, temp_base};
use expense_tracker::{
    core::{services::SummaryService, validation::TransactionForm, Action},
    domain::{AuthMode, Credentials, TransactionKind, View},
    errors::TrackerError,
    storage::SeedPolicy,
};

fn sign_up(store: &mut expense_tracker::core::Store) {
    store
        .dispatch(Action::OpenAuth(AuthMode::Register))
        .expect("open register form");
    store
        .dispatch(Action::Login(Credentials::new(
            Some("Grace Hopper".into()),
            "grace@example.com",
            "cobol",
        )))
        .expect("register");
}

#[test]
fn full_session_updates_totals_and_history() {
    let base = temp_base();
    let mut store = open_store(&base, SeedPolicy::Demo);
    assert_eq!(store.state().current_view, View::Home);

    sign_up(&mut store);
    let user = store.state().current_user.clone().expect("signed in");
    assert_eq!(user.name, "Grace Hopper");
    assert_eq!(store.state().current_view, View::Dashboard);

    let before = SummaryService::aggregate(&store.state().transactions);
    store
        .dispatch(Action::Navigate(View::AddTransaction))
        .unwrap();
    store
        .dispatch(Action::AddTransaction(TransactionForm::filled(
            TransactionKind::Expense,
            "215.40",
            "Bills",
            "Electricity",
        )))
        .unwrap();

    let state = store.state();
    assert_eq!(state.current_view, View::Dashboard);
    assert_eq!(state.transactions[0].description, "Electricity");
    let after = SummaryService::aggregate(&state.transactions);
    assert!((after.total_expense - before.total_expense - 215.40).abs() < 1e-9);
    assert!((after.balance - (after.total_income - after.total_expense)).abs() < 1e-9);

    let id = state.transactions[0].id.clone();
    store.dispatch(Action::DeleteTransaction(id.clone())).unwrap();
    assert!(store.state().transaction(&id).is_none());
    assert_eq!(
        SummaryService::aggregate(&store.state().transactions),
        before
    );
}

#[test]
fn rejected_actions_leave_state_untouched() {
    let base = temp_base();
    let mut store = open_store(&base, SeedPolicy::Demo);
    let initial = store.state().clone();

    let err = store
        .dispatch(Action::Navigate(View::Transactions))
        .expect_err("signed out");
    assert!(matches!(err, TrackerError::NotAuthenticated));

    let err = store
        .dispatch(Action::AddTransaction(TransactionForm::filled(
            TransactionKind::Income,
            "10",
            "Gift",
            "Birthday",
        )))
        .expect_err("signed out");
    assert!(matches!(err, TrackerError::NotAuthenticated));
    assert_eq!(store.state(), &initial);

    sign_up(&mut store);
    let err = store
        .dispatch(Action::AddTransaction(TransactionForm::filled(
            TransactionKind::Income,
            "ten",
            "",
            " ",
        )))
        .expect_err("invalid form");
    match err {
        TrackerError::Validation(errors) => assert_eq!(errors.len(), 3),
        other => panic!("unexpected error: {other}"),
    }
    assert!(store.state().is_consistent());
}

#[test]
fn theme_and_history_survive_restart() {
    let base = temp_base();
    {
        let mut store = open_store(&base, SeedPolicy::Empty);
        assert!(store.state().transactions.is_empty());
        sign_up(&mut store);
        store.dispatch(Action::ToggleTheme).unwrap();
        store
            .dispatch(Action::AddTransaction(TransactionForm::filled(
                TransactionKind::Income,
                "99.99",
                "Freelance",
                "Logo design",
            )))
            .unwrap();
    }

    let reopened = open_store(&base, SeedPolicy::Demo);
    let state = reopened.state();
    assert_eq!(state.theme.as_str(), "dark");
    assert_eq!(state.transactions.len(), 1);
    assert_eq!(state.transactions[0].amount, 99.99);
    assert_eq!(state.current_view, View::Dashboard);
}
