//! Page-navigation and playback state machine for the picturebook reader
//!
//! The engine owns the session state and turns `ReaderEvent`s into calls on
//! three seams the frontend provides: a `ReaderSurface` (displays, labels,
//! indicator, notices), an `ImageLoader` (asynchronous page-image loads and
//! best-effort preloads) and a `NarrationPlayer` (clip playback). All
//! transitions run on the caller's thread; asset completions come back in as
//! events carrying the load ticket they answer.

mod assets;
mod engine;
mod error;
mod events;
mod gesture;
mod surface;

pub use assets::AssetLocator;
pub use engine::ReaderEngine;
pub use error::{PlayRejected, ReaderError, ReaderResult};
pub use events::{LoadTicket, ReaderEvent, ReaderKey};
pub use gesture::{SwipeDirection, SwipeTracker};
pub use surface::{ImageLoader, NarrationPlayer, ReaderSurface};
