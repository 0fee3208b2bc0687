use chrono::{Datelike, NaiveDateTime, Timelike};
use serde::Serialize;

use crate::models::filter::weekday_name;

pub const COL_START_TIME: &str = "Start Time";
pub const COL_END_TIME: &str = "End Time";
pub const COL_TRIP_DURATION: &str = "Trip Duration";
pub const COL_START_STATION: &str = "Start Station";
pub const COL_END_STATION: &str = "End Station";
pub const COL_USER_TYPE: &str = "User Type";
pub const COL_GENDER: &str = "Gender";
pub const COL_BIRTH_YEAR: &str = "Birth Year";

pub const REQUIRED_COLUMNS: [&str; 4] = [
    COL_START_TIME,
    COL_TRIP_DURATION,
    COL_START_STATION,
    COL_END_STATION,
];

/// One row of bikeshare usage, with the time fields derived from Start Time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trip {
    pub start_time: NaiveDateTime,
    pub end_time: Option<String>,
    /// Seconds; None when the cell is empty
    pub trip_duration: Option<f64>,
    pub start_station: String,
    pub end_station: String,
    pub user_type: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<f64>,

    // derived
    pub month: u32,
    pub day_of_week: &'static str,
    pub hour: u32,
}

impl Trip {
    /// Build a trip and derive month, weekday name and hour from `start_time`.
    pub fn new(
        start_time: NaiveDateTime,
        trip_duration: Option<f64>,
        start_station: impl Into<String>,
        end_station: impl Into<String>,
    ) -> Self {
        Self {
            start_time,
            end_time: None,
            trip_duration,
            start_station: start_station.into(),
            end_station: end_station.into(),
            user_type: None,
            gender: None,
            birth_year: None,
            month: start_time.month(),
            day_of_week: weekday_name(start_time.weekday()),
            hour: start_time.hour(),
        }
    }

    /// Cell text for a given source column, used by the raw-data pager.
    pub fn cell(&self, column: &str) -> String {
        match column {
            COL_START_TIME => self.start_time.format("%Y-%m-%d %H:%M:%S").to_string(),
            COL_END_TIME => self.end_time.clone().unwrap_or_default(),
            COL_TRIP_DURATION => format_number(self.trip_duration),
            COL_START_STATION => self.start_station.clone(),
            COL_END_STATION => self.end_station.clone(),
            COL_USER_TYPE => self.user_type.clone().unwrap_or_default(),
            COL_GENDER => self.gender.clone().unwrap_or_default(),
            COL_BIRTH_YEAR => format_number(self.birth_year),
            "Month" => self.month.to_string(),
            "Day of Week" => self.day_of_week.to_string(),
            "Hour" => self.hour.to_string(),
            _ => String::new(),
        }
    }
}

fn format_number(v: Option<f64>) -> String {
    match v {
        Some(n) if n.fract() == 0.0 => format!("{}", n as i64),
        Some(n) => format!("{n}"),
        None => "NaN".to_string(),
    }
}

/// The in-memory table for one filter/load cycle.
#[derive(Debug, Clone, Default)]
pub struct TripTable {
    /// Header columns as they appear in the file, followed by the derived ones
    pub columns: Vec<String>,
    pub rows: Vec<Trip>,
}

impl TripTable {
    pub fn new(columns: Vec<String>, rows: Vec<Trip>) -> Self {
        Self { columns, rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }
}
