//! bikeshare library root.
//! Exposes the CLI parser, the high-level run() function, and the loader,
//! statistics and session modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod data;
pub mod errors;
pub mod logging;
pub mod models;
pub mod stats;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::{Path, PathBuf};

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, config_path: &Path) -> AppResult<()> {
    match &cli.command {
        None | Some(Commands::Explore) => cli::commands::explore::handle(cfg),
        Some(cmd @ Commands::Config { .. }) => {
            cli::commands::config::handle(cmd, cfg, config_path)
        }
        Some(cmd @ Commands::Init { .. }) => cli::commands::init::handle(cmd, config_path),
        Some(Commands::Cities) => cli::commands::cities::handle(cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    logging::init_logging();

    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config once
    let config_path = cli
        .config
        .as_ref()
        .map(PathBuf::from)
        .unwrap_or_else(Config::config_file);
    let mut cfg = Config::load(&config_path)?;

    // 3️⃣ command-line override of the data directory
    if let Some(dir) = &cli.data_dir {
        cfg.data_dir = dir.clone();
    }

    // 4️⃣ hand everything to the dispatcher
    dispatch(&cli, &cfg, &config_path)
}
