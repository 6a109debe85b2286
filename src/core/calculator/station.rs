use super::mode::mode;
use crate::models::stats::StationStats;
use crate::models::table::TripTable;

pub fn compute(table: &TripTable) -> StationStats {
    StationStats {
        start_station: mode(table.iter().map(|t| t.start_station.as_str())).map(str::to_string),
        end_station: mode(table.iter().map(|t| t.end_station.as_str())).map(str::to_string),
        route: mode(table.iter().map(|t| t.route())),
    }
}
