// crates/tui/src/error.rs
//! Error types for the TUI

use thiserror::Error;

/// Result type for TUI operations
pub type TuiResult<T> = Result<T, TuiError>;

/// Errors that can occur in the TUI
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Terminal error
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// Reader engine error
    #[error("Reader error: {0}")]
    Reader(#[from] picturebook_reader::ReaderError),

    /// Custom error
    #[error("{0}")]
    Custom(String),
}
