use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::models::selector::Selector;
use log::info;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        filter,
        format,
        file,
        force,
    } = cmd
    {
        let selector = Selector::from_args(filter.month.as_deref(), filter.day.as_deref())?;
        let table = Core::load_filtered(filter.city, &selector, &cfg.data_path())?;
        info!("export: {} trips as {} to {}", table.len(), format.as_str(), file);
        ExportLogic::export(&table, format, file, *force)?;
    }
    Ok(())
}
