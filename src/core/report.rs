//! Printing of the four statistics reports.
//!
//! Each function computes its figures from the table, prints them, then the
//! elapsed time and a separator line. Empty inputs print "no data" lines.

use crate::errors::AppResult;
use crate::models::TripTable;
use crate::stats::{Availability, DurationStats, StationStats, TimeStats, UserStats};
use crate::ui::messages::header;
use crate::utils::table::{Column, Table};
use crate::utils::time::elapsed_secs;
use chrono::Month;
use std::io::Write;
use std::time::Instant;

fn footer<W: Write>(out: &mut W, started: Instant, separator: &str) -> AppResult<()> {
    writeln!(out, "\nThis took {:.6} seconds.", elapsed_secs(started))?;
    writeln!(out, "{}", separator)?;
    Ok(())
}

fn month_name(m: u32) -> &'static str {
    u8::try_from(m)
        .ok()
        .and_then(|n| Month::try_from(n).ok())
        .map(|m| m.name())
        .unwrap_or("?")
}

pub fn time_stats<W: Write>(out: &mut W, table: &TripTable, separator: &str) -> AppResult<()> {
    header(out, "Calculating The Most Frequent Times of Travel...")?;
    let started = Instant::now();

    let stats = TimeStats::from_table(table);

    match stats.common_month {
        Some(m) => writeln!(out, "The most common month is: {} ({})", month_name(m), m)?,
        None => writeln!(out, "No data available for the most common month.")?,
    }
    match stats.common_day {
        Some(d) => writeln!(out, "The most common day of the week is: {}", d)?,
        None => writeln!(out, "No data available for the most common day of the week.")?,
    }
    match stats.common_hour {
        Some(h) => writeln!(out, "The most common start hour is: {}", h)?,
        None => writeln!(out, "No data available for the most common start hour.")?,
    }

    footer(out, started, separator)
}

pub fn station_stats<W: Write>(out: &mut W, table: &TripTable, separator: &str) -> AppResult<()> {
    header(out, "Calculating The Most Popular Stations and Trip...")?;
    let started = Instant::now();

    let stats = StationStats::from_table(table);

    match &stats.common_start {
        Some(s) => writeln!(out, "The most common start station is: {}", s)?,
        None => writeln!(out, "No data available for the most common start station.")?,
    }
    match &stats.common_end {
        Some(s) => writeln!(out, "The most common end station is: {}", s)?,
        None => writeln!(out, "No data available for the most common end station.")?,
    }
    match &stats.common_trip {
        Some(s) => writeln!(
            out,
            "The most frequent combination of start station and end station trip is: {}",
            s
        )?,
        None => writeln!(
            out,
            "No data available for the most frequent combination of start station and end station trip."
        )?,
    }

    footer(out, started, separator)
}

pub fn trip_duration_stats<W: Write>(
    out: &mut W,
    table: &TripTable,
    separator: &str,
) -> AppResult<()> {
    header(out, "Calculating Trip Duration...")?;
    let started = Instant::now();

    let stats = DurationStats::from_table(table);

    match stats.total_minutes {
        Some(t) => writeln!(out, "The total travel time is: {} minutes.", t)?,
        None => writeln!(out, "No data available to calculate total travel time.")?,
    }
    match stats.mean_minutes {
        Some(m) => writeln!(out, "The mean travel time is: {} minutes.", m)?,
        None => writeln!(out, "No data available to calculate mean travel time.")?,
    }

    footer(out, started, separator)
}

fn print_counts<W: Write>(
    out: &mut W,
    label: &str,
    counts: &Availability<Vec<(String, usize)>>,
) -> AppResult<()> {
    match counts {
        Availability::Data(rows) => {
            writeln!(out, "{} Counts:", label)?;
            let mut table = Table::new(vec![Column::left(label), Column::right("count")]);
            for (value, n) in rows {
                table.add_row(vec![value.clone(), n.to_string()]);
            }
            writeln!(out, "{}", table.render())?;
        }
        Availability::NoData => writeln!(out, "No {} data available.", label)?,
        Availability::NotAvailable => {
            writeln!(out, "{} information not available for this city.", label)?
        }
    }
    Ok(())
}

pub fn user_stats<W: Write>(out: &mut W, table: &TripTable, separator: &str) -> AppResult<()> {
    header(out, "Calculating User Stats...")?;
    let started = Instant::now();

    let stats = UserStats::from_table(table);

    print_counts(out, "User Type", &stats.user_types)?;
    print_counts(out, "Gender", &stats.genders)?;

    match &stats.birth_years {
        Availability::Data(b) => writeln!(
            out,
            "The most recent birth year is: {}, the earliest birth year is: {}, and the most common birth year is {}.",
            b.most_recent, b.earliest, b.most_common,
        )?,
        Availability::NoData => writeln!(out, "No Birth Year data available.")?,
        Availability::NotAvailable => {
            writeln!(out, "Birth Year information not available for this city.")?
        }
    }

    footer(out, started, separator)
}
