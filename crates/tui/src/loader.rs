// crates/tui/src/loader.rs
//! Background-thread image loader
//!
//! Stands in for the browser's image element: a load request reads the file
//! on a worker and reports back as loaded or failed with the ticket it was
//! given. Preloads read and drop the bytes (warming the OS cache) and never
//! report anything.

use crossbeam_channel::{unbounded, Receiver, Sender};
use picturebook_reader::{ImageLoader, LoadTicket};
use std::fs;
use std::path::{Path, PathBuf};
use std::thread;

/// Completions the loader reports back
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageEvent {
    Loaded { ticket: LoadTicket },
    Failed { ticket: LoadTicket },
}

#[derive(Debug)]
enum LoadJob {
    Load { ticket: LoadTicket, path: PathBuf },
    Warm { path: PathBuf },
    Shutdown,
}

/// Image loader backed by one worker thread
pub struct ThreadImageLoader {
    work_tx: Sender<LoadJob>,
    event_rx: Receiver<ImageEvent>,
    handle: Option<thread::JoinHandle<()>>,
}

impl ThreadImageLoader {
    pub fn new() -> std::io::Result<Self> {
        let (work_tx, work_rx) = unbounded::<LoadJob>();
        let (event_tx, event_rx) = unbounded();

        let handle = thread::Builder::new()
            .name("image-loader".to_string())
            .spawn(move || worker_loop(work_rx, event_tx))?;

        Ok(Self {
            work_tx,
            event_rx,
            handle: Some(handle),
        })
    }

    /// Channel on which load completions arrive
    pub fn events(&self) -> Receiver<ImageEvent> {
        self.event_rx.clone()
    }

    fn submit(&self, job: LoadJob) {
        if self.work_tx.send(job).is_err() {
            log::warn!("Image loader worker is gone; job dropped");
        }
    }
}

impl ImageLoader for ThreadImageLoader {
    fn begin_load(&mut self, ticket: LoadTicket, path: &Path) {
        self.submit(LoadJob::Load {
            ticket,
            path: path.to_path_buf(),
        });
    }

    fn preload(&mut self, path: &Path) {
        self.submit(LoadJob::Warm {
            path: path.to_path_buf(),
        });
    }
}

impl Drop for ThreadImageLoader {
    fn drop(&mut self) {
        let _ = self.work_tx.send(LoadJob::Shutdown);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

fn worker_loop(work_rx: Receiver<LoadJob>, event_tx: Sender<ImageEvent>) {
    while let Ok(job) = work_rx.recv() {
        match job {
            LoadJob::Load { ticket, path } => {
                let event = match fs::read(&path) {
                    Ok(bytes) if !bytes.is_empty() => ImageEvent::Loaded { ticket },
                    Ok(_) => {
                        log::warn!("Image at {} is empty", path.display());
                        ImageEvent::Failed { ticket }
                    }
                    Err(e) => {
                        log::warn!("Image read failed for {}: {}", path.display(), e);
                        ImageEvent::Failed { ticket }
                    }
                };
                if event_tx.send(event).is_err() {
                    break;
                }
            }
            LoadJob::Warm { path } => {
                // Best effort; failures are silent
                let _ = fs::read(&path);
            }
            LoadJob::Shutdown => break,
        }
    }
}
