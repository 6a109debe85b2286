use super::mode::{mode, value_counts};
use crate::models::stats::{DemographicStats, Demographics, UserStats};
use crate::models::table::TripTable;

pub fn compute(table: &TripTable) -> UserStats {
    let user_types = count_labels(table.iter().map(|t| t.user_type.as_deref()));

    let demographics = if table.city().has_demographics() {
        Demographics::Available(demographics(table))
    } else {
        Demographics::NotAvailable
    };

    UserStats {
        user_types,
        demographics,
    }
}

fn demographics(table: &TripTable) -> DemographicStats {
    let years: Vec<i32> = table.iter().filter_map(|t| t.birth_year).collect();

    DemographicStats {
        genders: count_labels(table.iter().map(|t| t.gender.as_deref())),
        earliest_birth_year: years.iter().min().copied(),
        latest_birth_year: years.iter().max().copied(),
        common_birth_year: mode(years.iter().copied()),
    }
}

/// Value counts of a categorical column; empty cells are left out.
fn count_labels<'a, I>(labels: I) -> Vec<(String, usize)>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    value_counts(labels.into_iter().flatten().filter(|s| !s.is_empty()))
        .into_iter()
        .map(|(label, n)| (label.to_string(), n))
        .collect()
}
