#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use bikeshare::config::{Config, DayFilterMode};
use bikeshare::models::{Trip, TripTable};
use bikeshare::utils::parse_timestamp;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub fn bks() -> Command {
    cargo_bin_cmd!("bikeshare")
}

/// Twelve Chicago trips, January to June 2017, with every optional column.
pub const CHICAGO_CSV: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
1423854,2017-06-23 15:09:32,2017-06-23 15:14:53,321,Wood St & Hubbard St,Damen Ave & Chicago Ave,Subscriber,Male,1992.0
955915,2017-05-25 18:19:03,2017-05-25 18:45:53,1610,Clark St & Lake St,Canal St & Madison St,Subscriber,Female,1992.0
9031,2017-01-04 08:27:49,2017-01-04 08:34:45,416,Wood St & Hubbard St,Damen Ave & Chicago Ave,Subscriber,Male,1981.0
304487,2017-03-06 13:49:38,2017-03-06 13:55:28,350,Sheffield Ave & Kingsbury St,Larrabee St & Menomonee St,Subscriber,,1986.0
45207,2017-01-17 14:53:07,2017-01-17 15:02:01,534,Wood St & Hubbard St,Canal St & Madison St,Subscriber,Male,1975.0
1473887,2017-06-26 09:01:20,2017-06-26 09:24:34,1394,Clark St & Lake St,Damen Ave & Chicago Ave,Customer,,
961916,2017-05-26 09:41:44,2017-05-26 09:59:34,1070,Wood St & Hubbard St,Damen Ave & Chicago Ave,Subscriber,Female,1992.0
65924,2017-06-16 17:44:53,2017-06-16 17:49:53,300,Racine Ave & 18th St,Halsted St & 18th St,Subscriber,Male,1990.0
123456,2017-02-14 17:24:03,2017-02-14 17:26:08,125,Clark St & Lake St,Canal St & Madison St,Customer,,
654321,2017-06-03 17:09:10,2017-06-03 17:19:10,600,Wood St & Hubbard St,Damen Ave & Chicago Ave,Subscriber,Female,1984.0
222222,2017-04-20 17:10:12,2017-04-20 17:14:12,240,State St & Harrison St,Dearborn St & Monroe St,Subscriber,Male,1992.0
333333,2017-06-30 17:53:38,2017-06-30 17:56:38,180,Clark St & Lake St,Damen Ave & Chicago Ave,Customer,,
";

/// Washington files carry neither Gender nor Birth Year.
pub const WASHINGTON_CSV: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type
1621326,2017-06-21 08:36:34,2017-06-21 08:44:43,489.066,14th & Belmont St NW,15th & K St NW,Subscriber
482740,2017-03-11 10:40:00,2017-03-11 11:02:00,,Yuma St & Tenley Circle NW,Connecticut Ave & Yuma St NW,Subscriber
1330037,2017-05-30 01:02:59,2017-05-30 01:13:37,638.008,17th St & Massachusetts Ave NW,5th & K St NW,Customer
";

/// Start Station column is missing on purpose.
pub const BROKEN_CSV: &str = "\
Start Time,End Time,Trip Duration,End Station
2017-01-01 00:07:57,2017-01-01 00:20:53,776,Columbus Dr & Randolph St
";

/// A clean scratch directory under the system temp dir.
pub fn fixture_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("bikeshare_{}", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create fixture dir");
    path
}

pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let p = dir.join(name);
    fs::write(&p, content).expect("write fixture");
    p
}

/// Fixture directory with chicago.csv and washington.csv (no New York file).
pub fn city_fixtures(name: &str) -> PathBuf {
    let dir = fixture_dir(name);
    write_file(&dir, "chicago.csv", CHICAGO_CSV);
    write_file(&dir, "washington.csv", WASHINGTON_CSV);
    dir
}

pub fn config_for(dir: &Path, mode: DayFilterMode) -> Config {
    Config {
        data_dir: dir.to_string_lossy().to_string(),
        day_filter: mode,
        ..Config::default()
    }
}

/// Write a YAML config pointing at `dir` and return its path.
pub fn write_config(dir: &Path, mode: DayFilterMode) -> PathBuf {
    let path = dir.join("bikeshare.conf");
    config_for(dir, mode)
        .write_to(&path, true)
        .expect("write config");
    path
}

pub fn trip(start: &str, duration: Option<f64>, from: &str, to: &str) -> Trip {
    Trip::new(
        parse_timestamp(start).expect("valid timestamp"),
        duration,
        from,
        to,
    )
}

pub fn table_of(columns: &[&str], rows: Vec<Trip>) -> TripTable {
    TripTable::new(columns.iter().map(|c| c.to_string()).collect(), rows)
}

/// Strip ANSI escape sequences from captured output.
pub fn plain(bytes: &[u8]) -> String {
    let s = String::from_utf8_lossy(bytes);
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            for n in chars.by_ref() {
                if n == 'm' {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}
