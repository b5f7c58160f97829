// crates/narration-engine/src/output.rs
//! cpal output stream fed from a sample channel

use crate::error::{NarrationError, NarrationResult};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{Device, SampleRate, Stream, StreamConfig};
use crossbeam_channel::{Receiver, TryRecvError};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Audio output on the default device at the clip's native rate
pub struct ClipOutput {
    device: Device,
    config: StreamConfig,
    stream: Option<Stream>,
    sample_rate: u32,
}

impl ClipOutput {
    pub fn new(sample_rate: u32, channels: u16) -> NarrationResult<Self> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or_else(|| NarrationError::Output("No audio output device".to_string()))?;

        let config = StreamConfig {
            channels,
            sample_rate: SampleRate(sample_rate),
            buffer_size: cpal::BufferSize::Default,
        };

        Ok(Self {
            device,
            config,
            stream: None,
            sample_rate,
        })
    }

    /// Starts draining `rx` into the device
    ///
    /// The channel disconnecting clears `running`, which is how the worker
    /// learns the stream is done with it.
    pub fn play(&mut self, rx: Receiver<Vec<f32>>, running: Arc<AtomicBool>) -> NarrationResult<()> {
        let mut buffer = Vec::new();
        let mut position = 0;

        let stream = self
            .device
            .build_output_stream(
                &self.config,
                move |data: &mut [f32], _: &cpal::OutputCallbackInfo| {
                    for sample in data.iter_mut() {
                        while position >= buffer.len() {
                            match rx.try_recv() {
                                Ok(new_data) => {
                                    buffer = new_data;
                                    position = 0;
                                }
                                Err(TryRecvError::Empty) => {
                                    *sample = 0.0;
                                    return;
                                }
                                Err(TryRecvError::Disconnected) => {
                                    running.store(false, Ordering::Relaxed);
                                    *sample = 0.0;
                                    return;
                                }
                            }
                        }

                        if position < buffer.len() {
                            *sample = buffer[position];
                            position += 1;
                        } else {
                            *sample = 0.0;
                        }
                    }
                },
                move |err| {
                    log::error!("Audio output error: {}", err);
                },
                None,
            )
            .map_err(|e| NarrationError::Output(format!("Failed to build stream: {}", e)))?;

        stream
            .play()
            .map_err(|e| NarrationError::Output(format!("Failed to start stream: {}", e)))?;

        self.stream = Some(stream);
        log::debug!("Narration output started at {} Hz", self.sample_rate);
        Ok(())
    }

    /// Stops the stream
    pub fn stop(&mut self) {
        if self.stream.take().is_some() {
            log::debug!("Narration output stopped");
        }
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }
}

impl Drop for ClipOutput {
    fn drop(&mut self) {
        self.stop();
    }
}
