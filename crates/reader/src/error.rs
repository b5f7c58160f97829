use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReaderError {
    #[error("Book has no pages")]
    NoPages,

    #[error("Invalid state: {0}")]
    InvalidState(String),
}

pub type ReaderResult<T> = Result<T, ReaderError>;

/// A playback attempt the player declined
///
/// The engine swallows these (narration is optional); the reason is kept for
/// debug logging only.
#[derive(Error, Debug)]
#[error("Playback rejected: {reason}")]
pub struct PlayRejected {
    pub reason: String,
}

impl PlayRejected {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_rejected_display() {
        let err = PlayRejected::new("no user gesture yet");
        assert_eq!(err.to_string(), "Playback rejected: no user gesture yet");
    }

    #[test]
    fn test_reader_error_display() {
        assert_eq!(ReaderError::NoPages.to_string(), "Book has no pages");
    }
}
