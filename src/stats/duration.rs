use crate::models::TripTable;
use crate::utils::secs2mins;

/// Total and mean trip duration, both in whole minutes.
///
/// Values are `round(seconds / 60)` with round-half-to-even, so a mean of
/// 150 seconds reports 2. Missing durations are ignored by both figures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DurationStats {
    pub total_minutes: Option<i64>,
    pub mean_minutes: Option<i64>,
}

impl DurationStats {
    pub fn from_table(table: &TripTable) -> Self {
        let durations: Vec<f64> = table
            .rows
            .iter()
            .filter_map(|t| t.trip_duration)
            .filter(|d| !d.is_nan())
            .collect();

        if durations.is_empty() {
            return Self {
                total_minutes: None,
                mean_minutes: None,
            };
        }

        let total: f64 = durations.iter().sum();
        let mean = total / durations.len() as f64;

        Self {
            total_minutes: Some(secs2mins(total)),
            mean_minutes: Some(secs2mins(mean)),
        }
    }
}
