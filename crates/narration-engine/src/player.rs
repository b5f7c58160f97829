// FILE: crates/narration-engine/src/player.rs
//! Worker-thread clip player
//!
//! The handle lives on the UI thread; decode and output run on one worker
//! fed by a command channel. Clip completion is reported on the event
//! channel so the caller can auto-advance.

use crate::decoder::ClipDecoder;
use crate::error::{NarrationError, NarrationResult};
use crate::output::ClipOutput;
use crossbeam_channel::{bounded, unbounded, Receiver, Sender, SendTimeoutError, TryRecvError};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// Commands sent to the playback worker
#[derive(Debug, Clone)]
enum ClipCommand {
    SetSource(PathBuf),
    Play,
    Pause,
    SetMuted(bool),
    Shutdown,
}

/// Events the worker reports back
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipEvent {
    /// The current clip played to its end
    Ended,
}

/// Handle to the playback worker
pub struct ClipPlayer {
    handle: Option<thread::JoinHandle<()>>,
    command_tx: Sender<ClipCommand>,
    event_rx: Receiver<ClipEvent>,
    source: Option<PathBuf>,
    running: Arc<AtomicBool>,
}

impl ClipPlayer {
    /// Spawns the playback worker
    pub fn new() -> NarrationResult<Self> {
        let (command_tx, command_rx) = bounded(16);
        let (event_tx, event_rx) = unbounded();
        let running = Arc::new(AtomicBool::new(true));

        let running_clone = Arc::clone(&running);
        let handle = thread::Builder::new()
            .name("narration".to_string())
            .spawn(move || worker_loop(command_rx, event_tx, running_clone))?;

        Ok(Self {
            handle: Some(handle),
            command_tx,
            event_rx,
            source: None,
            running,
        })
    }

    /// Channel on which `ClipEvent::Ended` arrives
    pub fn events(&self) -> Receiver<ClipEvent> {
        self.event_rx.clone()
    }

    /// Points the player at a clip; stops any current playback
    pub fn set_source(&mut self, path: &Path) {
        self.source = Some(path.to_path_buf());
        self.send(ClipCommand::SetSource(path.to_path_buf()));
    }

    /// Attempts to start (or restart) the current clip
    ///
    /// A missing source file is reported as an error so the caller can treat
    /// it as a rejected play attempt. Decode failures discovered later on
    /// the worker are logged and the clip simply never ends.
    pub fn play(&mut self) -> NarrationResult<()> {
        let source = self.source.as_ref().ok_or(NarrationError::NoSource)?;

        if !source.exists() {
            return Err(NarrationError::Decode(format!(
                "Clip not found: {}",
                source.display()
            )));
        }

        if !self.running.load(Ordering::Relaxed) {
            return Err(NarrationError::InvalidState(
                "Narration worker is not running".to_string(),
            ));
        }

        self.send(ClipCommand::Play);
        Ok(())
    }

    /// Pauses playback; a no-op when already paused
    pub fn pause(&mut self) {
        self.send(ClipCommand::Pause);
    }

    /// Applies the mute flag to current and future clips
    pub fn set_muted(&mut self, muted: bool) {
        self.send(ClipCommand::SetMuted(muted));
    }

    fn send(&self, command: ClipCommand) {
        if self.command_tx.send(command).is_err() {
            log::warn!("Narration worker is gone; command dropped");
        }
    }
}

impl Drop for ClipPlayer {
    fn drop(&mut self) {
        let _ = self.command_tx.send(ClipCommand::Shutdown);
        self.running.store(false, Ordering::Relaxed);

        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

/// A clip that is currently open: decoder plus a live output stream
struct ActiveClip {
    decoder: ClipDecoder,
    output: ClipOutput,
    audio_tx: Sender<Vec<f32>>,
}

impl ActiveClip {
    fn open(path: &Path) -> NarrationResult<Self> {
        let decoder = ClipDecoder::open(path)?;
        let spec = *decoder.spec();

        let (audio_tx, audio_rx) = bounded(4);
        let mut output = ClipOutput::new(spec.rate, spec.channels.count() as u16)?;

        // The stream flips this off when the sample channel disconnects;
        // the worker only needs it to hand the stream a kill-switch
        let stream_running = Arc::new(AtomicBool::new(true));
        output.play(audio_rx, stream_running)?;

        Ok(Self {
            decoder,
            output,
            audio_tx,
        })
    }
}

/// The worker: decode the active clip, feed the output, report endings
fn worker_loop(
    command_rx: Receiver<ClipCommand>,
    event_tx: Sender<ClipEvent>,
    running: Arc<AtomicBool>,
) {
    let mut source: Option<PathBuf> = None;
    let mut active: Option<ActiveClip> = None;
    let mut playing = false;
    let mut muted = false;

    while running.load(Ordering::Relaxed) {
        match command_rx.try_recv() {
            Ok(ClipCommand::SetSource(path)) => {
                if let Some(mut clip) = active.take() {
                    clip.output.stop();
                }
                playing = false;
                source = Some(path);
            }
            Ok(ClipCommand::Play) => {
                if active.is_none() {
                    active = match source.as_deref() {
                        Some(path) => match ActiveClip::open(path) {
                            Ok(clip) => Some(clip),
                            Err(e) => {
                                log::debug!("Narration clip unavailable: {}", e);
                                None
                            }
                        },
                        None => None,
                    };
                }
                playing = active.is_some();
            }
            Ok(ClipCommand::Pause) => {
                playing = false;
            }
            Ok(ClipCommand::SetMuted(m)) => {
                muted = m;
            }
            Ok(ClipCommand::Shutdown) | Err(TryRecvError::Disconnected) => {
                break;
            }
            Err(TryRecvError::Empty) => {}
        }

        if !playing {
            thread::sleep(Duration::from_millis(10));
            continue;
        }

        let Some(clip) = active.as_mut() else {
            playing = false;
            continue;
        };

        match clip.decoder.decode_next() {
            Ok(Some(mut chunk)) => {
                if muted {
                    for sample in &mut chunk.samples {
                        *sample = 0.0;
                    }
                }
                // Bounded send with a timeout: a stalled device must not
                // wedge the worker against Shutdown
                match clip
                    .audio_tx
                    .send_timeout(chunk.samples, Duration::from_millis(200))
                {
                    Ok(()) => {}
                    Err(SendTimeoutError::Timeout(_)) => {
                        log::trace!("Output stalled; dropped a chunk");
                    }
                    Err(SendTimeoutError::Disconnected(_)) => {
                        active = None;
                        playing = false;
                    }
                }
            }
            Ok(None) => {
                log::debug!("Narration clip finished");
                if let Some(mut clip) = active.take() {
                    clip.output.stop();
                }
                playing = false;
                let _ = event_tx.send(ClipEvent::Ended);
            }
            Err(e) => {
                log::warn!("Narration decode failed: {}", e);
                if let Some(mut clip) = active.take() {
                    clip.output.stop();
                }
                playing = false;
            }
        }
    }
}
