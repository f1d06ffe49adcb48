pub mod clock;
pub mod ids;
pub mod router;
pub mod services;
pub mod store;
pub mod transitions;
pub mod utils;
pub mod validation;

pub use clock::{Clock, ManualClock, SystemClock};
pub use router::{route, Screen};
pub use store::Store;
pub use transitions::Action;
