//! Unified application error type.
//! Every module (archive, core, export, config, cli) returns AppError so the
//! error reaching `main` is always printable the same way.

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
    // Archive
    // ---------------------------
    #[error("Invalid archive: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("Unsupported or corrupted archive: {0}")]
    ArchiveFormat(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Failed to parse '{entry}': {message}")]
    Parse { entry: String, message: String },

    #[error("Invalid timestamp: '{0}'")]
    InvalidTimestamp(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

impl AppError {
    pub fn parse(entry: &str, message: impl ToString) -> Self {
        AppError::Parse {
            entry: entry.to_string(),
            message: message.to_string(),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
