//! Time utilities: parsing trip timestamps, measuring report durations.

use chrono::NaiveDateTime;
use std::time::Instant;

const TIMESTAMP_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
}

/// Seconds elapsed since `start`, as printed under every report.
pub fn elapsed_secs(start: Instant) -> f64 {
    start.elapsed().as_secs_f64()
}
