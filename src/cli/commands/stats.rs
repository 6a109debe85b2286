use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::errors::{AppError, AppResult};
use crate::export::ReportExport;
use crate::models::selector::Selector;
use crate::ui::render::write_report;
use log::info;
use std::io::{self, Write};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Stats { filter, json } = cmd {
        let selector = Selector::from_args(filter.month.as_deref(), filter.day.as_deref())?;
        info!(
            "stats: city={} month={} day={}",
            filter.city, selector.month, selector.day
        );

        let table = Core::load_filtered(filter.city, &selector, &cfg.data_path())?;

        let stdout = io::stdout();
        let mut out = stdout.lock();

        if *json {
            let report = Core::build_report(&table, &selector);
            let export = ReportExport::new(filter.city, &selector, table.len(), &report);
            let text = serde_json::to_string_pretty(&export)
                .map_err(|e| AppError::Other(format!("JSON serialization error: {e}")))?;
            writeln!(out, "{text}")?;
        } else {
            writeln!(
                out,
                "{}: {} trips (month: {}, day: {})",
                filter.city,
                table.len(),
                selector.month,
                selector.day
            )?;
            write_report(&mut out, &table, &selector, cfg)?;
        }
    }
    Ok(())
}
