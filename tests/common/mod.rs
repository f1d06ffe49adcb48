#![allow(dead_code)]

use std::{path::PathBuf, sync::Mutex};

use chrono::{TimeZone, Utc};
use expense_tracker::{
    core::{ManualClock, Store},
    storage::{JsonFileStore, PersistenceAdapter, SeedPolicy},
};
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Creates a fresh data directory that outlives the calling test.
pub fn temp_base() -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    base
}

pub fn fixed_clock() -> ManualClock {
    ManualClock::new(Utc.with_ymd_and_hms(2024, 9, 1, 8, 30, 0).unwrap())
}

/// Opens a store over the JSON file backend rooted at `base`.
pub fn open_store(base: &PathBuf, seed: SeedPolicy) -> Store {
    let backend = JsonFileStore::new(Some(base.clone())).expect("create json store");
    let persistence = PersistenceAdapter::new(Box::new(backend), seed);
    Store::open(persistence, Box::new(fixed_clock()))
}
