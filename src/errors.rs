//! Unified application error type.
//! All modules (core, cli, ui, export) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Input closed while waiting for an answer")]
    InputClosed,

    // ---------------------------
    // Dataset-related
    // ---------------------------
    #[error("Dataset for {city} is not available at {}", .path.display())]
    DatasetUnavailable { city: String, path: PathBuf },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid start time on line {line}: '{value}'")]
    InvalidTimestamp { line: u64, value: String },

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid selector: {0}")]
    InvalidSelector(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
