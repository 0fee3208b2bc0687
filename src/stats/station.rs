use crate::models::TripTable;
use crate::stats::frequency::mode;

/// Most popular stations and trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationStats {
    pub common_start: Option<String>,
    pub common_end: Option<String>,
    /// "{start} to {end}"
    pub common_trip: Option<String>,
}

impl StationStats {
    pub fn from_table(table: &TripTable) -> Self {
        let starts = table
            .rows
            .iter()
            .map(|t| t.start_station.as_str())
            .filter(|s| !s.is_empty());
        let ends = table
            .rows
            .iter()
            .map(|t| t.end_station.as_str())
            .filter(|s| !s.is_empty());

        // a trip only counts when both ends are known
        let trips = table
            .rows
            .iter()
            .filter(|t| !t.start_station.is_empty() && !t.end_station.is_empty())
            .map(|t| format!("{} to {}", t.start_station, t.end_station));

        Self {
            common_start: mode(starts).map(str::to_string),
            common_end: mode(ends).map(str::to_string),
            common_trip: mode(trips),
        }
    }
}
