//! Output file checks run before an export writes anything.

use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use crate::ui::prompt::Prompter;
use std::io;
use std::path::Path;

/// An existing file is replaced only with `force` or after the user agrees.
/// Closed stdin counts as an error, not as a refusal.
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if force || !path.exists() {
        return Ok(());
    }

    warning(format!("The file '{}' already exists.", path.display()));

    let mut prompter = Prompter::new(io::stdin().lock(), io::stdout());
    if !prompter.confirm("Overwrite? [y/N]: ")? {
        return Err(AppError::Export(
            "export cancelled: existing file not overwritten".into(),
        ));
    }

    info("Existing file will be overwritten.");
    Ok(())
}
