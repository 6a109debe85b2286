//! rbikeshare library root.
//! Exposes the CLI parser, the high-level run() function and the
//! loading / filtering / statistics modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        None | Some(Commands::Explore) => cli::commands::explore::handle(cfg),
        Some(Commands::Init) => cli::commands::init::handle(cli),
        Some(cmd @ Commands::Config { .. }) => cli::commands::config::handle(cmd, cfg),
        Some(cmd @ Commands::Stats { .. }) => cli::commands::stats::handle(cmd, cfg),
        Some(cmd @ Commands::Export { .. }) => cli::commands::export::handle(cmd, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // config is loaded once, then CLI overrides are applied
    let mut cfg = Config::load()?;
    if let Some(dir) = &cli.data_dir {
        cfg.data_dir = dir.clone();
    }

    dispatch(&cli, &cfg)
}
