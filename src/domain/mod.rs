pub mod common;
pub mod state;
pub mod transaction;
pub mod user;

pub use common::{Displayable, Identifiable};
pub use state::{AppState, AuthMode, Theme, View};
pub use transaction::{Transaction, TransactionDraft, TransactionKind};
pub use user::{Credentials, User};
