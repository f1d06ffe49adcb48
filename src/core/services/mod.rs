pub mod filter_service;
pub mod summary_service;
pub mod transaction_service;

pub use filter_service::{FilterService, SortKey, TransactionQuery, TypeFilter};
pub use summary_service::{SummaryService, Totals};
pub use transaction_service::TransactionService;
