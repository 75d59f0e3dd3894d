//! CLI error types with miette diagnostics.
//!
//! Maps core errors into user-facing errors with actionable help text
//! and process exit codes.

use miette::Diagnostic;
use thiserror::Error;

use genlottery_core::{SessionError, StoreError};

/// Exit codes for the text surface.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    #[error("{lines} lines is invalid")]
    #[diagnostic(
        code(genlottery::invalid_lines),
        help("The valid range is 1-100.")
    )]
    InvalidLineCount { lines: usize },

    #[error(transparent)]
    #[diagnostic(
        code(genlottery::store),
        help("Check that the save directory is writable, or set save_dir in the config.")
    )]
    Store(#[from] StoreError),
}

impl From<SessionError> for CliError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::InvalidLineCount { lines } => Self::InvalidLineCount { lines },
            SessionError::Store(store) => Self::Store(store),
        }
    }
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidLineCount { .. } => exit_code::USAGE,
            Self::Store(_) => exit_code::GENERAL,
        }
    }
}
