//! User-supplied paths: home expansion and the absolute-path rule for output files.

use crate::errors::{AppError, AppResult};
use std::path::PathBuf;

/// Expand a leading `~` or `~/` to the home directory.
/// Paths like `~alice/data` are left alone.
pub fn expand_home(path: &str) -> PathBuf {
    let Some(rest) = path.strip_prefix('~') else {
        return PathBuf::from(path);
    };
    match dirs::home_dir() {
        Some(home) if rest.is_empty() => home,
        Some(home) if rest.starts_with('/') => home.join(rest.trim_start_matches('/')),
        _ => PathBuf::from(path),
    }
}

/// Resolve an export target; it must be absolute once `~` is expanded.
pub fn absolute_output_path(path: &str) -> AppResult<PathBuf> {
    let resolved = expand_home(path);
    if resolved.is_absolute() {
        Ok(resolved)
    } else {
        Err(AppError::Export(format!(
            "output file path must be absolute: {path}"
        )))
    }
}
