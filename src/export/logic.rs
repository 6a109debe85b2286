// src/export/logic.rs

use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::TripExport;
use crate::models::table::TripTable;
use crate::ui::messages::warning;
use crate::utils::path::absolute_output_path;

/// High-level export of filtered trips.
pub struct ExportLogic;

impl ExportLogic {
    /// Write `table` to `file` as CSV or JSON.
    ///
    /// `file` must be an absolute path (a leading `~/` is expanded).
    /// An empty table writes nothing and only warns.
    pub fn export(
        table: &TripTable,
        format: &ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        let path = absolute_output_path(file)?;

        ensure_writable(&path, force)?;

        if table.is_empty() {
            warning("No trips match the selected filters, nothing exported.");
            return Ok(());
        }

        let rows: Vec<TripExport> = table.iter().map(TripExport::from).collect();

        match format {
            ExportFormat::Csv => export_csv(&rows, &path)?,
            ExportFormat::Json => export_json(&rows, &path)?,
        }

        Ok(())
    }
}
