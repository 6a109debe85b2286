//! Text rendering of the four statistics sections.

use crate::config::Config;
use crate::core::calculator::{duration, station, time, users};
use crate::errors::AppResult;
use crate::models::selector::{Selector, weekday_name};
use crate::models::stats::{
    Demographics, DurationStats, Popular, StationStats, TimeStats, UserStats,
};
use crate::models::table::TripTable;
use crate::ui::messages::header;
use crate::utils::colors::{label, note, value};
use crate::utils::secs2readable;
use crate::utils::table::{Column, Table};
use std::io::Write;
use std::time::Instant;

fn popular_line<T, F>(name: &str, kind: &str, stat: &Popular<T>, show: F) -> String
where
    F: Fn(&T) -> String,
{
    match stat {
        Popular::Value(v) => format!("{} {}", label(&format!("Most Popular {name}:")), value(Some(show(v)))),
        Popular::NoData => format!("{} {}", label(&format!("Most Popular {name}:")), value::<String>(None)),
        Popular::FixedBySelector(v) => note(&format!(
            "NOTE: The stat of \"Most Common {kind}\" is not shown due to your {} filtering selection of: {}",
            kind.to_lowercase(),
            show(v)
        )),
    }
}

pub fn render_time(stats: &TimeStats) -> String {
    let mut out = String::new();
    out.push_str(&popular_line("Month", "Month", &stats.month, |m| m.name().to_string()));
    out.push('\n');
    out.push_str(&popular_line("Day of Week", "Day", &stats.day, |d| {
        weekday_name(*d).to_string()
    }));
    out.push('\n');
    out.push_str(&format!("{} {}\n", label("Most Popular Start Hour:"), value(stats.hour)));
    out
}

pub fn render_stations(stats: &StationStats) -> String {
    format!(
        "{} {}\n{} {}\n{} {}\n",
        label("Most Popular Start Station:"),
        value(stats.start_station.as_ref()),
        label("Most Popular End Station:"),
        value(stats.end_station.as_ref()),
        label("Most Frequent Combination of Start and End Stations:"),
        value(stats.route.as_ref()),
    )
}

pub fn render_durations(stats: &DurationStats) -> String {
    match stats {
        DurationStats::NoData => format!(
            "{} {}\n{} {}\n",
            label("Total travel time:"),
            value::<i64>(None),
            label("Average travel time:"),
            value::<i64>(None)
        ),
        DurationStats::Totals {
            total_seconds,
            mean_seconds,
        } => format!(
            "{} {} seconds ({})\n{} {} seconds ({})\n",
            label("Total travel time:"),
            value(Some(total_seconds)),
            secs2readable(*total_seconds),
            label("Average travel time:"),
            value(Some(mean_seconds)),
            secs2readable(*mean_seconds)
        ),
    }
}

fn counts_table(title: &str, counts: &[(String, usize)]) -> String {
    if counts.is_empty() {
        return format!("{} {}\n", label(&format!("{title}:")), value::<String>(None));
    }
    let mut table = Table::new(vec![Column::left(title), Column::right("Count")]);
    for (name, n) in counts {
        table.add_row(vec![name.clone(), n.to_string()]);
    }
    table.render()
}

pub fn render_users(stats: &UserStats) -> String {
    let mut out = counts_table("User Type", &stats.user_types);
    out.push('\n');

    match &stats.demographics {
        Demographics::NotAvailable => {
            out.push_str(&note(
                "IMPORTANT: There is no gender or date of birth data for the selected data set!",
            ));
            out.push('\n');
        }
        Demographics::Available(d) => {
            out.push_str(&counts_table("Gender", &d.genders));
            out.push('\n');
            out.push_str(&format!(
                "{} {}\n{} {}\n{} {}\n",
                label("Earliest birth year:"),
                value(d.earliest_birth_year),
                label("Most recent birth year:"),
                value(d.latest_birth_year),
                label("Most common birth year:"),
                value(d.common_birth_year),
            ));
        }
    }
    out
}

/// Run the four calculators in sequence and write each section as it completes.
pub fn write_report<W: Write>(
    out: &mut W,
    table: &TripTable,
    selector: &Selector,
    cfg: &Config,
) -> AppResult<()> {
    let start = Instant::now();
    let body = render_time(&time::compute(table, selector));
    write_section(out, "Calculating The Most Frequent Times of Travel...", &body, start, cfg)?;

    let start = Instant::now();
    let body = render_stations(&station::compute(table));
    write_section(out, "Calculating The Most Popular Stations and Trip...", &body, start, cfg)?;

    let start = Instant::now();
    let body = render_durations(&duration::compute(table));
    write_section(out, "Calculating Trip Duration...", &body, start, cfg)?;

    let start = Instant::now();
    let body = render_users(&users::compute(table));
    write_section(out, "Calculating User Stats...", &body, start, cfg)?;

    Ok(())
}

fn write_section<W: Write>(
    out: &mut W,
    title: &str,
    body: &str,
    start: Instant,
    cfg: &Config,
) -> AppResult<()> {
    writeln!(out, "\n{}\n", header(title))?;
    write!(out, "{body}")?;
    if cfg.show_timing {
        writeln!(out, "\nThis took {:.6} seconds.", start.elapsed().as_secs_f64())?;
    }
    writeln!(out, "{}", cfg.separator())?;
    Ok(())
}
