//! Narration engine - clip playback for the picturebook reader
//!
//! One clip at a time: point the player at a narration file, ask it to play,
//! and listen for the `Ended` event that drives automatic page turns. Decode
//! runs on a worker thread; a missing or undecodable clip is a rejected play
//! attempt, not a crash.

mod decoder;
mod error;
mod output;
mod player;

pub use decoder::{ClipDecoder, DecodedChunk};
pub use error::{NarrationError, NarrationResult};
pub use output::ClipOutput;
pub use player::{ClipEvent, ClipPlayer};
