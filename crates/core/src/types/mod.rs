//! Domain types shared across the workspace

mod reader;

pub use reader::{
    mode_toggle_label, mute_label, page_progress_percent, play_pause_label, NarrationStatus,
    ReaderMode, ReaderState,
};
