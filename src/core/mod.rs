pub mod pager;
pub mod report;
pub mod session;

pub use pager::{Pager, display_data};
pub use session::{get_filters, run_cycle, run_session};
