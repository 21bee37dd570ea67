//! Unified application error type.
//! All modules (core, input, db, export, cli) return AppError to keep the
//! error handling consistent and easy to manage.

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
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Input adapter errors
    // ---------------------------
    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid JSON case: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Core errors
    // ---------------------------
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

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
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

impl AppError {
    /// Shorthand for a text-format parse error at a 1-based line number.
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        AppError::Parse {
            line,
            message: message.into(),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
