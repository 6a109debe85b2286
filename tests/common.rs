#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDateTime;
use rbikeshare::models::city::City;
use rbikeshare::models::table::TripTable;
use rbikeshare::models::trip::Trip;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Binary command with `HOME` pointed at an empty temp dir,
/// so a developer's own ~/.rbikeshare config never leaks into the tests
pub fn rbs() -> Command {
    let mut home: PathBuf = env::temp_dir();
    home.push("rbikeshare_test_home");
    fs::create_dir_all(&home).expect("create test home");

    let mut cmd = cargo_bin_cmd!("rbikeshare");
    cmd.env("HOME", &home);
    cmd
}

pub const CHICAGO_CSV: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
0,2017-01-02 08:10:00,2017-01-02 08:20:00,600,Canal St,Clark St,Subscriber,Male,1980.0
1,2017-01-02 08:30:00,2017-01-02 08:45:00,900,Canal St,Lake St,Subscriber,Female,1992.0
2,2017-06-05 17:00:00,2017-06-05 17:05:00,301,Clark St,Canal St,Customer,,
3,2017-06-06 17:30:00,2017-06-06 17:40:00,600,Canal St,Clark St,Subscriber,Male,1992.0
";

pub const NEW_YORK_CSV: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
0,2017-03-04 10:00:00,2017-03-04 10:10:00,600,Broadway,W 52 St,Subscriber,Female,1975.0
1,2017-03-04 11:00:00,2017-03-04 11:20:00,1200,W 52 St,Broadway,Customer,,
";

pub const WASHINGTON_CSV: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type
0,2017-02-01 09:00:00,2017-02-01 09:10:00,600.75,Union Station,Capitol Hill,Registered
1,2017-02-02 09:15:00,2017-02-02 09:20:00,300.2,Union Station,Dupont Circle,Casual
2,2017-02-08 18:05:00,2017-02-08 18:30:00,1500.9,Capitol Hill,Union Station,Registered
";

/// Create a fresh data directory inside the system temp dir with all three city datasets
pub fn setup_data_dir(name: &str) -> PathBuf {
    let mut dir: PathBuf = env::temp_dir();
    dir.push(format!("{}_rbikeshare_data", name));
    fs::remove_dir_all(&dir).ok();
    fs::create_dir_all(&dir).expect("create data dir");

    fs::write(dir.join("chicago.csv"), CHICAGO_CSV).expect("write chicago.csv");
    fs::write(dir.join("new_york_city.csv"), NEW_YORK_CSV).expect("write new_york_city.csv");
    fs::write(dir.join("washington.csv"), WASHINGTON_CSV).expect("write washington.csv");
    dir
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub fn ts(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").expect("valid timestamp")
}

/// Trip starting at `start` with the given stations and duration
pub fn trip(start: &str, from: &str, to: &str, duration: i64) -> Trip {
    Trip::new(ts(start), from, to, duration as f64, Some("Subscriber".to_string()))
}

pub fn table(city: City, trips: Vec<Trip>) -> TripTable {
    TripTable::new(city, trips)
}
