use clap::{Parser, Subcommand};

/// Command-line interface definition for bikeshare
/// Interactive explorer for US bikeshare trip data
#[derive(Parser)]
#[command(
    name = "bikeshare",
    version = env!("CARGO_PKG_VERSION"),
    about = "Explore US bikeshare data: filter by city, month and day, then print trip statistics",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Override the directory the city files are read from
    #[arg(global = true, long = "data-dir", value_name = "DIR")]
    pub data_dir: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the interactive session (default when no subcommand is given)
    Explore,

    /// Show the effective configuration
    Config {
        #[arg(long = "print", help = "Print the effective configuration as YAML")]
        print_config: bool,
    },

    /// Write a configuration file with the default settings
    Init {
        /// Overwrite an existing configuration file
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// List the supported cities and their data files
    Cities,
}
