#![doc(test(attr(deny(warnings))))]

//! Expense Tracker keeps a personal list of income and expense entries in a
//! local key-value store and exposes it through an interactive shell.

pub mod cli;
pub mod config;
pub mod core;
pub mod currency;
pub mod domain;
pub mod errors;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log. `log_filter` is
/// used when `RUST_LOG` is not set.
pub fn init(log_filter: Option<&str>) {
    INIT_TRACING.call_once(|| {
        utils::init_tracing(log_filter);
        tracing::info!(
            version = utils::build_info::current().version,
            "expense tracker tracing initialized"
        );
    });
}
