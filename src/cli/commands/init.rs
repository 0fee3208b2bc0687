use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use std::io;
use std::path::Path;

/// Handle the `init` command
///
/// Writes the default settings (city → file mapping, page size, day filter
/// mode) to the configuration file. An existing file is left alone unless
/// `--force` is given.
pub fn handle(cmd: &Commands, path: &Path) -> AppResult<()> {
    if let Commands::Init { force } = cmd {
        let mut out = io::stdout();

        if Config::default().write_to(path, *force)? {
            success(&mut out, format!("Config file: {}", path.display()))?;
        } else {
            warning(
                &mut out,
                format!(
                    "The file '{}' already exists. Use --force to overwrite it.",
                    path.display()
                ),
            )?;
        }
    }

    Ok(())
}
