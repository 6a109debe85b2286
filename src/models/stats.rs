use chrono::{Month, Weekday};

/// Outcome of a "most popular" statistic that the selector may have fixed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Popular<T> {
    Value(T),
    /// Not computed: every row already carries this value because of the selector.
    FixedBySelector(T),
    NoData,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeStats {
    pub month: Popular<Month>,
    pub day: Popular<Weekday>,
    pub hour: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationStats {
    pub start_station: Option<String>,
    pub end_station: Option<String>,
    pub route: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DurationStats {
    NoData,
    Totals {
        total_seconds: i64,
        mean_seconds: i64,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DemographicStats {
    pub genders: Vec<(String, usize)>,
    pub earliest_birth_year: Option<i32>,
    pub latest_birth_year: Option<i32>,
    pub common_birth_year: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Demographics {
    Available(DemographicStats),
    /// The city's dataset has no gender / birth year columns.
    NotAvailable,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserStats {
    pub user_types: Vec<(String, usize)>,
    pub demographics: Demographics,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripReport {
    pub time: TimeStats,
    pub stations: StationStats,
    pub durations: DurationStats,
    pub users: UserStats,
}
