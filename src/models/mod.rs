pub mod city;
pub mod filter;
pub mod trip;

pub use city::City;
pub use filter::{DayFilter, Filters, MonthFilter};
pub use trip::{Trip, TripTable};
