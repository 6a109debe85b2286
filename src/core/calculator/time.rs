use super::mode::mode;
use crate::models::selector::{DayFilter, MonthFilter, Selector};
use crate::models::stats::{Popular, TimeStats};
use crate::models::table::TripTable;

pub fn compute(table: &TripTable, selector: &Selector) -> TimeStats {
    let month = match selector.month {
        MonthFilter::Only(m) => Popular::FixedBySelector(m),
        MonthFilter::All => popular(mode(table.iter().map(|t| t.month()))),
    };

    let day = match selector.day {
        DayFilter::Only(d) => Popular::FixedBySelector(d),
        DayFilter::All => popular(mode(table.iter().map(|t| t.weekday()))),
    };

    TimeStats {
        month,
        day,
        hour: mode(table.iter().map(|t| t.hour())),
    }
}

fn popular<T>(value: Option<T>) -> Popular<T> {
    value.map_or(Popular::NoData, Popular::Value)
}
