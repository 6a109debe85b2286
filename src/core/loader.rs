//! Dataset loader: reads a city's CSV file into a [`TripTable`].

use crate::errors::{AppError, AppResult};
use crate::models::{city::City, table::TripTable, trip::Trip};
use chrono::NaiveDateTime;
use log::{debug, info};
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

const START_TIME_FORMATS: [&str; 3] = [
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// One CSV row as written in the dataset files.
/// Columns not listed here (e.g. the unnamed index column) are ignored.
#[derive(Debug, Deserialize)]
struct RawTrip {
    #[serde(rename = "Start Time")]
    start_time: String,
    #[serde(rename = "End Time", default)]
    end_time: Option<String>,
    #[serde(rename = "Trip Duration")]
    trip_duration: f64,
    #[serde(rename = "Start Station")]
    start_station: String,
    #[serde(rename = "End Station")]
    end_station: String,
    #[serde(rename = "User Type", default)]
    user_type: Option<String>,
    #[serde(rename = "Gender", default)]
    gender: Option<String>,
    #[serde(rename = "Birth Year", default)]
    birth_year: Option<f64>,
}

pub fn parse_start_time(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    START_TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
}

/// Load every trip of `city` from its file inside `data_dir`.
pub fn load(city: City, data_dir: &Path) -> AppResult<TripTable> {
    let path = data_dir.join(city.file_name());
    debug!("loading {} from {}", city, path.display());

    let file = File::open(&path).map_err(|_| AppError::DatasetUnavailable {
        city: city.name().to_string(),
        path: path.clone(),
    })?;

    let table = load_from_reader(city, file)?;
    info!("loaded {} trips for {}", table.len(), city);
    Ok(table)
}

/// Parse trips for `city` from any CSV source with a header row.
pub fn load_from_reader<R: Read>(city: City, reader: R) -> AppResult<TripTable> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let headers = rdr.headers()?.clone();

    let mut trips = Vec::new();
    for record in rdr.records() {
        let record = record?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        let raw: RawTrip = record.deserialize(Some(&headers))?;
        trips.push(to_trip(city, raw, line)?);
    }

    Ok(TripTable::new(city, trips))
}

fn to_trip(city: City, raw: RawTrip, line: u64) -> AppResult<Trip> {
    let start_time =
        parse_start_time(&raw.start_time).ok_or_else(|| AppError::InvalidTimestamp {
            line,
            value: raw.start_time.clone(),
        })?;

    let trip = Trip::new(
        start_time,
        raw.start_station,
        raw.end_station,
        raw.trip_duration,
        raw.user_type,
    )
    .with_end_time(raw.end_time);

    if !city.has_demographics() {
        return Ok(trip);
    }

    let birth_year = raw.birth_year.map(|y| y.trunc() as i32);
    Ok(trip.with_demographics(raw.gender, birth_year))
}
