//! Closed vocabularies for the month and day filters, plus the validated
//! selection handed to the loader.

use crate::models::city::City;
use chrono::{Month, Weekday};

/// Months that the datasets cover, in calendar order.
pub const FILTER_MONTHS: [Month; 6] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
];

pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Full English weekday name, e.g. "Monday".
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthFilter {
    All,
    Only(Month),
}

impl MonthFilter {
    pub fn from_input(input: &str) -> Option<Self> {
        let wanted = input.trim().to_lowercase();
        if wanted == "all" {
            return Some(MonthFilter::All);
        }
        FILTER_MONTHS
            .into_iter()
            .find(|m| m.name().to_lowercase() == wanted)
            .map(MonthFilter::Only)
    }

    /// Calendar ordinal (january = 1) of the selected month, if any.
    pub fn ordinal(&self) -> Option<u32> {
        match self {
            MonthFilter::All => None,
            MonthFilter::Only(m) => Some(m.number_from_month()),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MonthFilter::All => "all",
            MonthFilter::Only(m) => m.name(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayFilter {
    All,
    Only(Weekday),
}

impl DayFilter {
    pub fn from_input(input: &str) -> Option<Self> {
        let wanted = input.trim().to_lowercase();
        if wanted == "all" {
            return Some(DayFilter::All);
        }
        WEEKDAYS
            .into_iter()
            .find(|d| weekday_name(*d).to_lowercase() == wanted)
            .map(DayFilter::Only)
    }

    pub fn label(&self) -> &'static str {
        match self {
            DayFilter::All => "all",
            DayFilter::Only(d) => weekday_name(*d),
        }
    }
}

/// A validated (city, month, day) selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Filters {
    pub city: City,
    pub month: MonthFilter,
    pub day: DayFilter,
}

impl Filters {
    pub fn new(city: City, month: MonthFilter, day: DayFilter) -> Self {
        Self { city, month, day }
    }
}
