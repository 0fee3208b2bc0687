use bikeshare::config::DayFilterMode;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{bks, city_fixtures, fixture_dir, write_config};

#[test]
fn test_explore_session_prints_all_reports() {
    let dir = city_fixtures("cli_explore");
    let cfg = write_config(&dir, DayFilterMode::Literal);

    bks()
        .args(["--config", cfg.to_str().unwrap()])
        .write_stdin("Chicago\nall\nall\nyes\nno\nno\n")
        .assert()
        .success()
        .stdout(contains("The most common month is: June (6)"))
        .stdout(contains("The most common day of the week is: Friday"))
        .stdout(contains("The most common start hour is: 17"))
        .stdout(contains(
            "The most common start station is: Wood St & Hubbard St",
        ))
        .stdout(contains("The total travel time is: 119 minutes."))
        .stdout(contains("Subscriber"))
        .stdout(contains("This took"))
        .stdout(contains("1423854").not());
}

#[test]
fn test_explore_subcommand_with_data_dir_override() {
    let dir = city_fixtures("cli_data_dir");
    let empty = fixture_dir("cli_data_dir_cfg");
    let cfg = write_config(&empty, DayFilterMode::ByName);

    bks()
        .args([
            "--config",
            cfg.to_str().unwrap(),
            "--data-dir",
            dir.to_str().unwrap(),
            "explore",
        ])
        .write_stdin("chicago\nall\nfriday\nno\nno\n")
        .assert()
        .success()
        .stdout(contains("The most common day of the week is: Friday"));
}

#[test]
fn test_invalid_answers_are_reprompted() {
    let dir = city_fixtures("cli_reprompt");
    let cfg = write_config(&dir, DayFilterMode::Literal);

    bks()
        .args(["--config", cfg.to_str().unwrap()])
        .write_stdin("gotham\nwashington\nseptember\nall\nall\nno\nno\n")
        .assert()
        .success()
        .stdout(contains("Please select a valid city."))
        .stdout(contains("Please enter a month between January and June."))
        .stdout(contains("Birth Year information not available for this city."));
}

#[test]
fn test_missing_data_file_exits_with_error() {
    let dir = city_fixtures("cli_missing_file");
    let cfg = write_config(&dir, DayFilterMode::Literal);

    bks()
        .args(["--config", cfg.to_str().unwrap()])
        .write_stdin("new york city\nall\nall\n")
        .assert()
        .failure()
        .stderr(contains("Error:"))
        .stderr(contains("new_york_city.csv"));
}

#[test]
fn test_closed_input_exits_cleanly() {
    let dir = city_fixtures("cli_eof");
    let cfg = write_config(&dir, DayFilterMode::Literal);

    bks()
        .args(["--config", cfg.to_str().unwrap()])
        .write_stdin("chicago\n")
        .assert()
        .success()
        .stdout(contains("goodbye"));
}

#[test]
fn test_init_writes_config_and_respects_force() {
    let dir = fixture_dir("cli_init");
    let cfg = dir.join("conf").join("bikeshare.conf");

    bks()
        .args(["--config", cfg.to_str().unwrap(), "init"])
        .assert()
        .success()
        .stdout(contains("Config file"));

    let content = fs::read_to_string(&cfg).expect("config written");
    assert!(content.contains("new york city: new_york_city.csv"));
    assert!(content.contains("day_filter: literal"));
    assert!(content.contains("page_size: 5"));

    bks()
        .args(["--config", cfg.to_str().unwrap(), "init"])
        .assert()
        .success()
        .stdout(contains("already exists"));

    bks()
        .args(["--config", cfg.to_str().unwrap(), "init", "--force"])
        .assert()
        .success()
        .stdout(contains("Config file"));
}

#[test]
fn test_config_print_shows_effective_settings() {
    let dir = city_fixtures("cli_config_print");
    let cfg = dir.join("bikeshare.conf");
    fs::write(&cfg, "page_size: 3\nday_filter: by_name\n").expect("write config");

    bks()
        .args(["--config", cfg.to_str().unwrap(), "config", "--print"])
        .assert()
        .success()
        .stdout(contains("page_size: 3"))
        .stdout(contains("day_filter: by_name"))
        .stdout(contains("chicago: chicago.csv"));
}

#[test]
fn test_invalid_config_is_reported() {
    let dir = fixture_dir("cli_bad_config");
    let cfg = dir.join("bikeshare.conf");
    fs::write(&cfg, "page_size: 0\n").expect("write config");

    bks()
        .args(["--config", cfg.to_str().unwrap(), "cities"])
        .assert()
        .failure()
        .stderr(contains("page_size"));
}

#[test]
fn test_cities_lists_files_and_status() {
    let dir = city_fixtures("cli_cities");
    let cfg = write_config(&dir, DayFilterMode::Literal);

    bks()
        .args(["--config", cfg.to_str().unwrap(), "cities"])
        .assert()
        .success()
        .stdout(contains("New York City"))
        .stdout(contains("missing"))
        .stdout(contains("washington.csv"));
}
