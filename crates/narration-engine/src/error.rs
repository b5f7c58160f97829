// FILE: crates/narration-engine/src/error.rs

use thiserror::Error;

#[derive(Error, Debug)]
pub enum NarrationError {
    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Output error: {0}")]
    Output(String),

    #[error("No narration source set")]
    NoSource,

    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type NarrationResult<T> = Result<T, NarrationError>;
