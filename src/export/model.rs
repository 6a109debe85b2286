use crate::models::city::City;
use crate::models::selector::{Selector, weekday_name};
use crate::models::stats::{Demographics, DurationStats, Popular, TripReport};
use crate::models::trip::Trip;
use serde::Serialize;

/// Row struct for CSV/JSON export of raw trips.
#[derive(Debug, Serialize)]
pub struct TripExport {
    pub start_time: String,
    pub end_time: String,
    pub trip_duration: f64,
    pub start_station: String,
    pub end_station: String,
    pub user_type: String,
    pub gender: String,
    pub birth_year: Option<i32>,
    pub month: String,
    pub day_of_week: String,
    pub hour: u32,
}

impl From<&Trip> for TripExport {
    fn from(t: &Trip) -> Self {
        Self {
            start_time: t.start_time_str(),
            end_time: t.end_time.clone().unwrap_or_default(),
            trip_duration: t.duration,
            start_station: t.start_station.clone(),
            end_station: t.end_station.clone(),
            user_type: t.user_type.clone().unwrap_or_default(),
            gender: t.gender.clone().unwrap_or_default(),
            birth_year: t.birth_year,
            month: t.month().name().to_string(),
            day_of_week: weekday_name(t.weekday()).to_string(),
            hour: t.hour(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CountExport {
    pub label: String,
    pub count: usize,
}

/// A popular-value stat; `fixed_by_selector` tells a filtered value from a computed mode.
#[derive(Debug, Serialize)]
pub struct PopularExport {
    pub value: Option<String>,
    pub fixed_by_selector: bool,
}

#[derive(Debug, Serialize)]
pub struct DemographicsExport {
    pub genders: Vec<CountExport>,
    pub earliest_birth_year: Option<i32>,
    pub latest_birth_year: Option<i32>,
    pub common_birth_year: Option<i32>,
}

#[derive(Debug, Serialize)]
pub struct ReportExport {
    pub city: String,
    pub month_filter: String,
    pub day_filter: String,
    pub trips: usize,
    pub popular_month: PopularExport,
    pub popular_day: PopularExport,
    pub popular_hour: Option<u32>,
    pub popular_start_station: Option<String>,
    pub popular_end_station: Option<String>,
    pub popular_route: Option<String>,
    pub total_duration_seconds: Option<i64>,
    pub mean_duration_seconds: Option<i64>,
    pub user_types: Vec<CountExport>,
    /// `None` when the city's dataset has no demographic columns
    pub demographics: Option<DemographicsExport>,
}

fn popular<T>(p: &Popular<T>, name: impl Fn(&T) -> String) -> PopularExport {
    match p {
        Popular::Value(v) => PopularExport {
            value: Some(name(v)),
            fixed_by_selector: false,
        },
        Popular::FixedBySelector(v) => PopularExport {
            value: Some(name(v)),
            fixed_by_selector: true,
        },
        Popular::NoData => PopularExport {
            value: None,
            fixed_by_selector: false,
        },
    }
}

fn counts(c: &[(String, usize)]) -> Vec<CountExport> {
    c.iter()
        .map(|(label, count)| CountExport {
            label: label.clone(),
            count: *count,
        })
        .collect()
}

impl ReportExport {
    pub fn new(city: City, selector: &Selector, trips: usize, report: &TripReport) -> Self {
        let (total, mean) = match report.durations {
            DurationStats::NoData => (None, None),
            DurationStats::Totals {
                total_seconds,
                mean_seconds,
            } => (Some(total_seconds), Some(mean_seconds)),
        };

        let demographics = match &report.users.demographics {
            Demographics::NotAvailable => None,
            Demographics::Available(d) => Some(DemographicsExport {
                genders: counts(&d.genders),
                earliest_birth_year: d.earliest_birth_year,
                latest_birth_year: d.latest_birth_year,
                common_birth_year: d.common_birth_year,
            }),
        };

        Self {
            city: city.name().to_string(),
            month_filter: selector.month.to_string(),
            day_filter: selector.day.to_string(),
            trips,
            popular_month: popular(&report.time.month, |m| m.name().to_string()),
            popular_day: popular(&report.time.day, |d| weekday_name(*d).to_string()),
            popular_hour: report.time.hour,
            popular_start_station: report.stations.start_station.clone(),
            popular_end_station: report.stations.end_station.clone(),
            popular_route: report.stations.route.clone(),
            total_duration_seconds: total,
            mean_duration_seconds: mean,
            user_types: counts(&report.users.user_types),
            demographics,
        }
    }
}
