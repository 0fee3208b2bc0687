pub mod formatting;
pub mod path;
pub mod table;
pub mod time;

pub use formatting::secs2mins;
pub use time::parse_timestamp;
