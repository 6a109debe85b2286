use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::shell::Shell;
use std::io;

/// Handle `explore` (and the bare command): run the interactive shell on stdin/stdout
pub fn handle(cfg: &Config) -> AppResult<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(stdin.lock(), stdout.lock());
    shell.run(cfg)
}
