use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Handle the `init` command
///
/// Creates `~/.rbikeshare/rbikeshare.conf` with default values;
/// `--data-dir` is stored as the dataset directory.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let path = Config::init(cli.data_dir.clone(), cli.test)?;

    if cli.test {
        success(format!("Test mode: configuration not written to {}", path.display()));
    } else {
        success(format!("Config file: {}", path.display()));
    }
    Ok(())
}
