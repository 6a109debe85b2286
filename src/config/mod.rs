use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding chicago.csv, new_york_city.csv and washington.csv
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
    #[serde(default = "default_separator_width")]
    pub separator_width: usize,
    #[serde(default = "default_show_timing")]
    pub show_timing: bool,
}

fn default_data_dir() -> String {
    ".".to_string()
}
fn default_page_size() -> usize {
    5
}
fn default_separator_char() -> String {
    "-".to_string()
}
fn default_separator_width() -> usize {
    40
}
fn default_show_timing() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            page_size: default_page_size(),
            separator_char: default_separator_char(),
            separator_width: default_separator_width(),
            show_timing: default_show_timing(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory (`~/.rbikeshare`)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".rbikeshare")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rbikeshare.conf")
    }

    pub fn data_path(&self) -> PathBuf {
        crate::utils::path::expand_home(&self.data_dir)
    }

    /// Horizontal rule printed after each report section
    pub fn separator(&self) -> String {
        let ch = self.separator_char.chars().next().unwrap_or('-');
        ch.to_string().repeat(self.separator_width)
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;
        let cfg: Config = serde_yaml::from_str(&content)?;

        if cfg.page_size == 0 {
            return Err(AppError::Config("page_size must be at least 1".into()));
        }
        Ok(cfg)
    }

    /// Create the config directory and write a default config file.
    /// In test mode nothing is written.
    pub fn init(data_dir: Option<String>, is_test: bool) -> AppResult<PathBuf> {
        let path = Self::config_file();
        let mut config = Config::default();
        if let Some(dir) = data_dir {
            config.data_dir = dir;
        }

        if !is_test {
            fs::create_dir_all(Self::config_dir())?;
            let yaml = serde_yaml::to_string(&config)?;
            let mut file = fs::File::create(&path)?;
            file.write_all(yaml.as_bytes())?;
        }

        Ok(path)
    }
}
