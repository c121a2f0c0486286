//! Unified application error type.
//! All modules (logfile, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

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
    // Command line
    // ---------------------------
    #[error(transparent)]
    Usage(#[from] clap::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Malformed log record: {0}")]
    MalformedRecord(String),

    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid date range: {0}")]
    InvalidRange(String),
}

impl AppError {
    /// Process exit code for this error: usage problems exit 1, an
    /// unreadable input file or undecodable date bound exits 3.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Usage(_) => 1,
            AppError::Io(_) | AppError::InvalidDate(_) | AppError::InvalidRange(_) => 3,
            AppError::MalformedRecord(_) => 1,
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
