//! Unified application error type.
//! Every module (config, data, stats, core, cli) returns AppError so the
//! error path stays the same from the loader up to main().

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

    #[error("Standard input was closed")]
    InputClosed,

    // ---------------------------
    // Data files
    // ---------------------------
    #[error("Cannot read data file for {city} ({}): {source}", path.display())]
    DataFile {
        city: String,
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Missing required column '{column}' in {}", path.display())]
    MissingColumn { column: String, path: PathBuf },

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid timestamp '{value}' on line {line}")]
    InvalidTimestamp { value: String, line: u64 },

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type AppResult<T> = Result<T, AppError>;
