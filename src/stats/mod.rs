//! Descriptive statistics over a loaded [`TripTable`](crate::models::TripTable).
//!
//! Each report is a plain value computed from the table; printing lives in
//! `core::report`. No computation fails on an empty table.

pub mod duration;
pub mod frequency;
pub mod station;
pub mod time;
pub mod user;

pub use duration::DurationStats;
pub use station::StationStats;
pub use time::TimeStats;
pub use user::{Availability, BirthYears, UserStats};
