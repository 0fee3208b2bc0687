//! Reading a city file into a [`TripTable`] and applying the month/day filters.

use crate::config::{Config, DayFilterMode};
use crate::errors::{AppError, AppResult};
use crate::models::filter::weekday_name;
use crate::models::trip::{
    COL_BIRTH_YEAR, COL_END_STATION, COL_END_TIME, COL_GENDER, COL_START_STATION, COL_START_TIME,
    COL_TRIP_DURATION, COL_USER_TYPE, REQUIRED_COLUMNS,
};
use crate::models::{City, DayFilter, Filters, MonthFilter, Trip, TripTable};
use crate::utils::parse_timestamp;
use chrono::Weekday;
use serde::Deserialize;
use std::path::Path;

/// Columns added to every table after loading.
pub const DERIVED_COLUMNS: [&str; 3] = ["Month", "Day of Week", "Hour"];

const KNOWN_COLUMNS: [&str; 8] = [
    COL_START_TIME,
    COL_END_TIME,
    COL_TRIP_DURATION,
    COL_START_STATION,
    COL_END_STATION,
    COL_USER_TYPE,
    COL_GENDER,
    COL_BIRTH_YEAR,
];

/// One CSV row as written in the source files. Empty cells become `None`.
#[derive(Debug, Deserialize)]
struct RawTrip {
    #[serde(rename = "Start Time")]
    start_time: String,
    #[serde(rename = "End Time", default)]
    end_time: Option<String>,
    #[serde(rename = "Trip Duration")]
    trip_duration: Option<f64>,
    #[serde(rename = "Start Station")]
    start_station: Option<String>,
    #[serde(rename = "End Station")]
    end_station: Option<String>,
    #[serde(rename = "User Type", default)]
    user_type: Option<String>,
    #[serde(rename = "Gender", default)]
    gender: Option<String>,
    #[serde(rename = "Birth Year", default)]
    birth_year: Option<f64>,
}

/// Load the configured file for `filters.city`, then filter it.
#[tracing::instrument(skip(cfg), fields(city = %filters.city))]
pub fn load_data(cfg: &Config, filters: &Filters) -> AppResult<TripTable> {
    let path = cfg.city_file(filters.city)?;
    let table = read_trips(&path, filters.city)?;

    tracing::debug!(columns = ?table.columns, rows = table.len(), "dataset loaded");

    let filtered = apply_filters(table, filters.month, filters.day, cfg.day_filter);
    tracing::info!(
        month = filters.month.label(),
        day = filters.day.label(),
        rows = filtered.len(),
        "filters applied"
    );
    Ok(filtered)
}

/// Read every row of `path` and derive month, weekday and hour.
pub fn read_trips(path: &Path, city: City) -> AppResult<TripTable> {
    let data_file_err = |source: csv::Error| AppError::DataFile {
        city: city.title().to_string(),
        path: path.to_path_buf(),
        source,
    };

    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(data_file_err)?;
    let headers = rdr.headers().map_err(data_file_err)?.clone();

    for required in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == required) {
            return Err(AppError::MissingColumn {
                column: required.to_string(),
                path: path.to_path_buf(),
            });
        }
    }

    let mut columns: Vec<String> = headers
        .iter()
        .filter(|h| KNOWN_COLUMNS.contains(h))
        .map(str::to_string)
        .collect();
    columns.extend(DERIVED_COLUMNS.iter().map(|c| c.to_string()));

    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        let raw: RawTrip = record.deserialize(Some(&headers))?;
        rows.push(raw.into_trip(line)?);
    }

    Ok(TripTable::new(columns, rows))
}

impl RawTrip {
    fn into_trip(self, line: u64) -> AppResult<Trip> {
        let start_time =
            parse_timestamp(&self.start_time).ok_or_else(|| AppError::InvalidTimestamp {
                value: self.start_time.clone(),
                line,
            })?;

        let mut trip = Trip::new(
            start_time,
            self.trip_duration,
            self.start_station.unwrap_or_default(),
            self.end_station.unwrap_or_default(),
        );
        trip.end_time = self.end_time;
        trip.user_type = self.user_type;
        trip.gender = self.gender;
        trip.birth_year = self.birth_year;
        Ok(trip)
    }
}

/// Keep the rows matching the month and day selection, in original order.
pub fn apply_filters(
    table: TripTable,
    month: MonthFilter,
    day: DayFilter,
    mode: DayFilterMode,
) -> TripTable {
    let TripTable { columns, rows } = table;

    let rows = rows
        .into_iter()
        .filter(|t| month.ordinal().is_none_or(|m| t.month == m))
        .filter(|t| match day {
            DayFilter::All => true,
            DayFilter::Only(d) => matches_day(t, d, mode),
        })
        .collect();

    TripTable::new(columns, rows)
}

fn matches_day(trip: &Trip, day: Weekday, mode: DayFilterMode) -> bool {
    match mode {
        // weekday name vs. numeric index: never equal
        DayFilterMode::Literal => trip.day_of_week == day.num_days_from_monday().to_string(),
        DayFilterMode::ByName => trip.day_of_week == weekday_name(day),
    }
}
