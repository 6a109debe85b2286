use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::city::City;
use crate::ui::messages::{error, success, warning};

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Current configuration ({}):\n", Config::config_file().display());
            println!("{}", serde_yaml::to_string(cfg)?);
        }

        // ---- CHECK DATASETS ----
        if *check {
            let dir = cfg.data_path();
            let mut missing = 0;
            for city in City::ALL {
                let path = dir.join(city.file_name());
                if path.is_file() {
                    success(format!("{}: {}", city, path.display()));
                } else {
                    error(format!("{}: missing {}", city, path.display()));
                    missing += 1;
                }
            }
            if missing > 0 {
                warning(format!("{missing} dataset(s) not found in {}", dir.display()));
            }
        }

        if !*print_config && !*check {
            warning("Nothing to do: use --print or --check");
        }
    }

    Ok(())
}
