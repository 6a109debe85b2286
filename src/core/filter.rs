use crate::models::{selector::Selector, table::TripTable};
use log::debug;

/// Keep the trips whose derived month and weekday satisfy `selector`.
///
/// Row order is preserved and the source table is left untouched.
pub fn apply(table: &TripTable, selector: &Selector) -> TripTable {
    let trips: Vec<_> = table
        .iter()
        .filter(|t| selector.matches(t.month(), t.weekday()))
        .cloned()
        .collect();

    debug!(
        "filter month={} day={}: {} of {} trips kept",
        selector.month,
        selector.day,
        trips.len(),
        table.len()
    );

    TripTable::new(table.city(), trips)
}
