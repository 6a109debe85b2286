use chrono::{Datelike, Month, NaiveDateTime, Timelike, Weekday};

#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    pub start_time: NaiveDateTime, // ⇔ "Start Time"
    pub end_time: Option<String>,  // ⇔ "End Time" (kept verbatim, display only)
    pub start_station: String,     // ⇔ "Start Station"
    pub end_station: String,       // ⇔ "End Station"
    pub duration: f64,             // ⇔ "Trip Duration" (seconds, may be fractional)
    pub user_type: Option<String>, // ⇔ "User Type"
    pub gender: Option<String>,    // ⇔ "Gender" (Chicago / NYC only)
    pub birth_year: Option<i32>,   // ⇔ "Birth Year" (Chicago / NYC only)

    month: Month,
    weekday: Weekday,
    hour: u32,
}

impl Trip {
    /// Build a trip and derive its calendar fields from `start_time`.
    /// Demographic fields start empty, see [`Trip::with_demographics`].
    pub fn new(
        start_time: NaiveDateTime,
        start_station: impl Into<String>,
        end_station: impl Into<String>,
        duration: f64,
        user_type: Option<String>,
    ) -> Self {
        let month = Month::try_from(start_time.month() as u8).unwrap_or(Month::January);
        Self {
            start_time,
            end_time: None,
            start_station: start_station.into(),
            end_station: end_station.into(),
            duration,
            user_type,
            gender: None,
            birth_year: None,
            month,
            weekday: start_time.weekday(),
            hour: start_time.hour(),
        }
    }

    pub fn with_end_time(mut self, end_time: Option<String>) -> Self {
        self.end_time = end_time;
        self
    }

    pub fn with_demographics(mut self, gender: Option<String>, birth_year: Option<i32>) -> Self {
        self.gender = gender;
        self.birth_year = birth_year;
        self
    }

    pub fn month(&self) -> Month {
        self.month
    }

    pub fn weekday(&self) -> Weekday {
        self.weekday
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    /// Composite "start / end" key used for route popularity.
    pub fn route(&self) -> String {
        format!("{} / {}", self.start_station, self.end_station)
    }

    pub fn start_time_str(&self) -> String {
        self.start_time.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}
