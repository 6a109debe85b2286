use crate::models::stats::DurationStats;
use crate::models::table::TripTable;

/// Total and mean trip duration in seconds.
/// Both are computed on the raw values and only then lose their
/// fractional part (truncation toward zero).
pub fn compute(table: &TripTable) -> DurationStats {
    if table.is_empty() {
        return DurationStats::NoData;
    }

    let total: f64 = table.iter().map(|t| t.duration).sum();
    DurationStats::Totals {
        total_seconds: total.trunc() as i64,
        mean_seconds: (total / table.len() as f64).trunc() as i64,
    }
}
