use crate::core::calculator::{duration, station, time, users};
use crate::core::{filter, loader};
use crate::errors::AppResult;
use crate::models::{
    city::City, selector::Selector, stats::TripReport, table::TripTable,
};
use std::path::Path;

pub struct Core;

impl Core {
    /// Load `city` and keep only the trips matching `selector`.
    pub fn load_filtered(city: City, selector: &Selector, data_dir: &Path) -> AppResult<TripTable> {
        let table = loader::load(city, data_dir)?;
        Ok(filter::apply(&table, selector))
    }

    pub fn build_report(table: &TripTable, selector: &Selector) -> TripReport {
        TripReport {
            time: time::compute(table, selector),
            stations: station::compute(table),
            durations: duration::compute(table),
            users: users::compute(table),
        }
    }
}
