//! Events the reader engine consumes
//!
//! Frontends translate their native input (clicks, keys, touches) and asset
//! callbacks into these; the engine is the only consumer.

use picturebook_core::ReaderMode;

/// Identifies one image-load invocation
///
/// Completion events echo the ticket they answer; the engine honors only the
/// ticket of the in-flight load, which is how a late load, error, or timeout
/// for a superseded invocation gets ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LoadTicket(pub u64);

/// Keys the reader view reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReaderKey {
    /// ArrowRight: next page
    Right,
    /// ArrowLeft: previous page
    Left,
    /// `m`: toggle mute
    Mute,
}

/// Everything that can drive a state transition
#[derive(Debug, Clone, PartialEq)]
pub enum ReaderEvent {
    /// A start-screen control was activated
    StartRequested(ReaderMode),
    /// Next control clicked
    NextPressed,
    /// Previous control clicked
    PrevPressed,
    /// Restart control clicked
    RestartPressed,
    /// Mode-toggle control clicked
    ModeTogglePressed,
    /// Play/pause control clicked
    PlayPausePressed,
    /// Mute-toggle control clicked
    MuteTogglePressed,
    /// Tap on the page image (advances)
    PageTapped,
    /// Horizontal gesture began at `x`
    TouchStarted { x: i32 },
    /// Horizontal gesture ended at `x`
    TouchEnded { x: i32 },
    /// Keyboard input while the reader view is active
    Key(ReaderKey),

    /// The image load identified by `ticket` completed
    ImageLoaded { ticket: LoadTicket },
    /// The image load identified by `ticket` reported an error
    ImageFailed { ticket: LoadTicket },
    /// The narration clip for the current page finished
    NarrationEnded,

    /// Periodic tick; drives the image-load timeout
    Tick,
}
