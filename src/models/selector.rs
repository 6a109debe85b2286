use crate::errors::{AppError, AppResult};
use chrono::{Month, Weekday};
use std::fmt;

const MONTHS: [Month; 12] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
    Month::July,
    Month::August,
    Month::September,
    Month::October,
    Month::November,
    Month::December,
];

const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Full English weekday name ("Monday", ...).
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthFilter {
    All,
    Only(Month),
}

impl MonthFilter {
    pub fn from_input(input: &str) -> Option<Self> {
        let s = input.trim();
        if s.eq_ignore_ascii_case("all") {
            return Some(MonthFilter::All);
        }
        MONTHS
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(s))
            .map(MonthFilter::Only)
    }

    pub fn matches(&self, month: Month) -> bool {
        match self {
            MonthFilter::All => true,
            MonthFilter::Only(m) => *m == month,
        }
    }
}

impl fmt::Display for MonthFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthFilter::All => f.write_str("All"),
            MonthFilter::Only(m) => f.write_str(m.name()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayFilter {
    All,
    Only(Weekday),
}

impl DayFilter {
    pub fn from_input(input: &str) -> Option<Self> {
        let s = input.trim();
        if s.eq_ignore_ascii_case("all") {
            return Some(DayFilter::All);
        }
        WEEKDAYS
            .into_iter()
            .find(|d| weekday_name(*d).eq_ignore_ascii_case(s))
            .map(DayFilter::Only)
    }

    pub fn matches(&self, day: Weekday) -> bool {
        match self {
            DayFilter::All => true,
            DayFilter::Only(d) => *d == day,
        }
    }
}

impl fmt::Display for DayFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayFilter::All => f.write_str("All"),
            DayFilter::Only(d) => f.write_str(weekday_name(*d)),
        }
    }
}

/// Month and day constraints chosen for one exploration cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selector {
    pub month: MonthFilter,
    pub day: DayFilter,
}

impl Selector {
    pub fn new(month: MonthFilter, day: DayFilter) -> Self {
        Self { month, day }
    }

    pub fn all() -> Self {
        Self::new(MonthFilter::All, DayFilter::All)
    }

    /// Build a selector from optional command-line values; a missing value means "all".
    pub fn from_args(month: Option<&str>, day: Option<&str>) -> AppResult<Self> {
        let month = match month {
            None => MonthFilter::All,
            Some(m) => MonthFilter::from_input(m)
                .ok_or_else(|| AppError::InvalidSelector(format!("unknown month '{m}'")))?,
        };
        let day = match day {
            None => DayFilter::All,
            Some(d) => DayFilter::from_input(d)
                .ok_or_else(|| AppError::InvalidSelector(format!("unknown day '{d}'")))?,
        };
        Ok(Self::new(month, day))
    }

    pub fn matches(&self, month: Month, day: Weekday) -> bool {
        self.month.matches(month) && self.day.matches(day)
    }
}

impl Default for Selector {
    fn default() -> Self {
        Self::all()
    }
}
