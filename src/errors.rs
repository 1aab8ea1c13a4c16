//! Unified application error type.
//! Every module (config, core, cli, export) returns AppError so the error
//! handling stays consistent from the checker up to `main`.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Serialization
    // ---------------------------
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date-time format: {0}")]
    InvalidDateTime(String),

    #[error("Unsupported input file: {0}")]
    InvalidInputFile(String),

    // ---------------------------
    // Shift input errors
    // ---------------------------
    #[error("Invalid span: end {end} is not after start {start}")]
    InvalidSpan { start: String, end: String },

    #[error("Invalid break: {0}")]
    InvalidBreak(String),

    #[error("Invalid shift record for '{employee}' starting {start}: {source}")]
    InvalidRecord {
        employee: String,
        start: String,
        #[source]
        source: Box<AppError>,
    },

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
