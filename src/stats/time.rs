use crate::models::TripTable;
use crate::models::filter::{WEEKDAYS, weekday_name};
use crate::stats::frequency::mode;
use chrono::Datelike;

/// Most frequent times of travel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeStats {
    pub common_month: Option<u32>,
    pub common_day: Option<&'static str>,
    pub common_hour: Option<u32>,
}

impl TimeStats {
    pub fn from_table(table: &TripTable) -> Self {
        let common_month = mode(table.rows.iter().map(|t| t.month));

        // by weekday index so ties go to the earlier day of the week
        let common_day = mode(
            table
                .rows
                .iter()
                .map(|t| t.start_time.weekday().num_days_from_monday()),
        )
        .map(|i| weekday_name(WEEKDAYS[i as usize]));

        let common_hour = mode(table.rows.iter().map(|t| t.hour));

        Self {
            common_month,
            common_day,
            common_hour,
        }
    }
}
