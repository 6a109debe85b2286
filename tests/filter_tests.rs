use chrono::{Month, Weekday};
use rbikeshare::core::filter::apply;
use rbikeshare::core::loader::load_from_reader;
use rbikeshare::models::city::City;
use rbikeshare::models::selector::{DayFilter, MonthFilter, Selector};
use rbikeshare::models::table::TripTable;

mod common;
use common::CHICAGO_CSV;

fn chicago() -> TripTable {
    load_from_reader(City::Chicago, CHICAGO_CSV.as_bytes()).expect("load chicago")
}

fn all_selectors() -> Vec<Selector> {
    let months = ["all", "january", "june", "december"];
    let days = ["all", "monday", "tuesday", "sunday"];
    let mut out = Vec::new();
    for m in months {
        for d in days {
            out.push(Selector::new(
                MonthFilter::from_input(m).unwrap(),
                DayFilter::from_input(d).unwrap(),
            ));
        }
    }
    out
}

#[test]
fn test_filter_all_all_returns_same_table() {
    let table = chicago();
    let filtered = apply(&table, &Selector::all());
    assert_eq!(filtered, table);
}

#[test]
fn test_filter_is_subset_matching_predicate() {
    let table = chicago();
    for sel in all_selectors() {
        let filtered = apply(&table, &sel);
        assert!(filtered.len() <= table.len());
        assert!(
            filtered
                .iter()
                .all(|t| sel.month.matches(t.month()) && sel.day.matches(t.weekday()))
        );
        assert!(filtered.iter().all(|t| table.trips().contains(t)));
    }
}

#[test]
fn test_filter_is_idempotent() {
    let table = chicago();
    for sel in all_selectors() {
        let once = apply(&table, &sel);
        let twice = apply(&once, &sel);
        assert_eq!(once, twice);
    }
}

#[test]
fn test_filter_preserves_row_order() {
    let table = chicago();
    let sel = Selector::new(MonthFilter::All, DayFilter::Only(Weekday::Mon));
    let filtered = apply(&table, &sel);

    let durations: Vec<f64> = filtered.iter().map(|t| t.duration).collect();
    assert_eq!(durations, vec![600.0, 900.0, 301.0]);
}

#[test]
fn test_filter_month_and_day_combined() {
    let table = chicago();
    let sel = Selector::new(MonthFilter::Only(Month::June), DayFilter::Only(Weekday::Tue));
    let filtered = apply(&table, &sel);

    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered.trips()[0].duration, 600.0);
    assert_eq!(filtered.city(), City::Chicago);
    // source table untouched
    assert_eq!(table.len(), 4);
}

#[test]
fn test_filter_without_matches_is_empty() {
    let table = chicago();
    let sel = Selector::new(MonthFilter::Only(Month::December), DayFilter::All);
    assert!(apply(&table, &sel).is_empty());
}
