pub mod error;
pub mod types;

// Re-export commonly used types
pub use error::{AppError, ErrorSeverity, Result};
pub use types::{
    mode_toggle_label, mute_label, page_progress_percent, play_pause_label, NarrationStatus,
    ReaderMode, ReaderState,
};
