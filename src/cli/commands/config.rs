use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::info;
use std::io;
use std::path::Path;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config, path: &Path) -> AppResult<()> {
    if let Commands::Config { print_config } = cmd {
        let mut out = io::stdout();

        if *print_config {
            println!("📄 Current configuration ({}):\n", path.display());
            println!("{}", serde_yaml::to_string(cfg)?);
        } else {
            info(&mut out, format!("Configuration file: {}", path.display()))?;
            info(&mut out, "Use --print to show the effective settings.")?;
        }
    }

    Ok(())
}
