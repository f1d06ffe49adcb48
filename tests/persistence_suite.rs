mod common;

use std::fs;

use common::{fixed_clock, open_store, temp_base};
use expense_tracker::{
    core::{Action, Clock},
    domain::{Credentials, Theme, View},
    storage::{
        JsonFileStore, KeyValueStore, PersistenceAdapter, SeedPolicy, THEME_KEY,
        TRANSACTIONS_KEY, USER_KEY,
    },
};

fn login(store: &mut expense_tracker::core::Store) {
    store
        .dispatch(Action::Login(Credentials::new(None, "ada@example.com", "pw")))
        .expect("login");
}

#[test]
fn logout_removes_user_file_and_restart_lands_home() {
    let base = temp_base();
    let mut store = open_store(&base, SeedPolicy::Demo);
    login(&mut store);

    let files = JsonFileStore::new(Some(base.clone())).unwrap();
    assert!(files.path_for(USER_KEY).exists());

    store.dispatch(Action::Logout).unwrap();
    assert!(!files.path_for(USER_KEY).exists());

    let reopened = open_store(&base, SeedPolicy::Demo);
    assert!(reopened.state().current_user.is_none());
    assert_eq!(reopened.state().current_view, View::Home);
}

#[test]
fn records_use_documented_layout() {
    let base = temp_base();
    let mut store = open_store(&base, SeedPolicy::Demo);
    login(&mut store);
    store.dispatch(Action::ToggleTheme).unwrap();

    let files = JsonFileStore::new(Some(base)).unwrap();
    assert_eq!(files.get(THEME_KEY).unwrap().as_deref(), Some("dark"));

    let raw = files.get(TRANSACTIONS_KEY).unwrap().expect("transactions");
    let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let first = &parsed[0];
    assert_eq!(first["id"], "1");
    assert_eq!(first["type"], "income");
    assert!(first["date"].as_str().unwrap().contains('T'));

    let user: serde_json::Value =
        serde_json::from_str(&files.get(USER_KEY).unwrap().unwrap()).unwrap();
    assert_eq!(user["email"], "ada@example.com");
    assert!(user.get("password").is_none());
}

#[test]
fn malformed_records_fall_back_independently() {
    let base = temp_base();
    let files = JsonFileStore::new(Some(base.clone())).unwrap();
    files.set(THEME_KEY, "dark").unwrap();
    files.set(TRANSACTIONS_KEY, "[{\"id\": 1,").unwrap();
    files.set(USER_KEY, "not json").unwrap();

    let adapter = PersistenceAdapter::new(Box::new(files), SeedPolicy::Demo);
    let loaded = adapter.load(fixed_clock().now());
    assert_eq!(loaded.theme, Theme::Dark);
    assert_eq!(loaded.transactions.len(), 3, "seed data replaces bad list");
    assert!(loaded.user.is_none());
}

#[test]
fn failed_write_keeps_previous_value() {
    let base = temp_base();
    let files = JsonFileStore::new(Some(base)).unwrap();
    files.set(THEME_KEY, "light").unwrap();

    // A directory where the temp file should go makes the write fail.
    let path = files.path_for(THEME_KEY);
    let mut tmp = path.clone();
    tmp.set_extension("value.tmp");
    fs::create_dir_all(&tmp).unwrap();

    assert!(files.set(THEME_KEY, "dark").is_err());
    assert_eq!(fs::read_to_string(&path).unwrap(), "light");
}
