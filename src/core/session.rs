use crate::config::Config;
use crate::core::pager::display_data;
use crate::core::report;
use crate::data::load_data;
use crate::errors::AppResult;
use crate::models::{City, DayFilter, Filters, MonthFilter};
use crate::ui::Console;
use std::io::{BufRead, Write};

/// Ask for city, month and day until each answer is valid.
pub fn get_filters<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    cfg: &Config,
) -> AppResult<Filters> {
    writeln!(console.out(), "Hello! Let's explore some US bikeshare data!")?;

    let city = console.choose(
        "Please select a city, Chicago, New York City or Washington:",
        "Please select a valid city.",
        City::from_input,
    )?;

    let month = console.choose(
        &format!(
            "Please select a month to analyze {} bikeshare data for.\nChoose between January to June, or type 'all':",
            city.title()
        ),
        "Please enter a month between January and June. Or select all.",
        MonthFilter::from_input,
    )?;

    let day = console.choose(
        "Please select a day of week to analyze, or type all:",
        "Please select a valid day.",
        DayFilter::from_input,
    )?;

    writeln!(console.out(), "{}", cfg.separator())?;
    Ok(Filters::new(city, month, day))
}

/// One filter → load → report → pager cycle.
pub fn run_cycle<R: BufRead, W: Write>(console: &mut Console<R, W>, cfg: &Config) -> AppResult<()> {
    let filters = get_filters(console, cfg)?;
    let table = load_data(cfg, &filters)?;
    let sep = cfg.separator();

    report::time_stats(console.out(), &table, &sep)?;
    report::station_stats(console.out(), &table, &sep)?;
    report::trip_duration_stats(console.out(), &table, &sep)?;
    report::user_stats(console.out(), &table, &sep)?;
    display_data(console, &table, cfg.page_size)?;
    Ok(())
}

/// Repeat the cycle while the user answers "yes" to the restart question.
pub fn run_session<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    cfg: &Config,
) -> AppResult<()> {
    let mut round = 0usize;
    loop {
        round += 1;
        tracing::debug!(round, "starting exploration cycle");

        run_cycle(console, cfg)?;

        writeln!(console.out())?;
        if !console.confirm("Would you like to restart? Enter yes or no.")? {
            break;
        }
    }
    Ok(())
}
