// FILE: crates/narration-engine/src/decoder.rs

use crate::error::{NarrationError, NarrationResult};
use std::path::Path;
use symphonia::core::audio::{AudioBufferRef, SampleBuffer, Signal, SignalSpec};
use symphonia::core::codecs::{Decoder, DecoderOptions};
use symphonia::core::errors::Error as SymphoniaError;
use symphonia::core::formats::{FormatOptions, FormatReader};
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

/// Streaming decoder for one narration clip
///
/// Always starts at the beginning of the clip; re-opening the file is how a
/// clip restarts.
pub struct ClipDecoder {
    reader: Box<dyn FormatReader>,
    decoder: Box<dyn Decoder>,
    track_id: u32,
    spec: SignalSpec,
}

/// One decoded block of interleaved f32 samples
pub struct DecodedChunk {
    pub samples: Vec<f32>,
    pub spec: SignalSpec,
}

impl ClipDecoder {
    pub fn open(path: &Path) -> NarrationResult<Self> {
        let file = std::fs::File::open(path)
            .map_err(|e| NarrationError::Decode(format!("Failed to open clip: {}", e)))?;

        let mss = MediaSourceStream::new(Box::new(file), Default::default());

        let mut hint = Hint::new();
        if let Some(extension) = path.extension().and_then(|e| e.to_str()) {
            hint.with_extension(extension);
        }

        let probed = symphonia::default::get_probe()
            .format(
                &hint,
                mss,
                &FormatOptions::default(),
                &MetadataOptions::default(),
            )
            .map_err(|e| NarrationError::Decode(format!("Failed to probe format: {}", e)))?;

        let reader = probed.format;

        let track = reader
            .default_track()
            .ok_or_else(|| NarrationError::Decode("No audio track found".to_string()))?;

        let track_id = track.id;
        let codec_params = track.codec_params.clone();

        let decoder = symphonia::default::get_codecs()
            .make(&codec_params, &DecoderOptions::default())
            .map_err(|e| NarrationError::Decode(format!("Failed to create decoder: {}", e)))?;

        let spec = SignalSpec::new(
            codec_params.sample_rate.unwrap_or(44100),
            codec_params.channels.unwrap_or_default(),
        );

        Ok(Self {
            reader,
            decoder,
            track_id,
            spec,
        })
    }

    /// Decodes the next block; `None` means the clip finished
    pub fn decode_next(&mut self) -> NarrationResult<Option<DecodedChunk>> {
        loop {
            let packet = match self.reader.next_packet() {
                Ok(packet) => packet,
                Err(SymphoniaError::IoError(e))
                    if e.kind() == std::io::ErrorKind::UnexpectedEof =>
                {
                    return Ok(None);
                }
                Err(e) => {
                    return Err(NarrationError::Decode(format!(
                        "Failed to read packet: {}",
                        e
                    )));
                }
            };

            if packet.track_id() != self.track_id {
                continue;
            }

            let decoded = match self.decoder.decode(&packet) {
                Ok(decoded) => decoded,
                Err(SymphoniaError::DecodeError(e)) => {
                    log::warn!("Decode error, skipping packet: {}", e);
                    continue;
                }
                Err(e) => {
                    return Err(NarrationError::Decode(format!(
                        "Failed to decode packet: {}",
                        e
                    )));
                }
            };

            let samples = interleave_f32(&decoded)?;
            let spec = *decoded.spec();

            return Ok(Some(DecodedChunk { samples, spec }));
        }
    }

    pub fn spec(&self) -> &SignalSpec {
        &self.spec
    }
}

/// Converts any supported buffer into interleaved f32 samples
fn interleave_f32(decoded: &AudioBufferRef) -> NarrationResult<Vec<f32>> {
    macro_rules! via_sample_buffer {
        ($variant:ident, $buf:expr) => {{
            let mut sample_buf = SampleBuffer::<f32>::new($buf.capacity() as u64, *$buf.spec());
            sample_buf.copy_interleaved_ref(AudioBufferRef::$variant($buf.clone()));
            Ok(sample_buf.samples().to_vec())
        }};
    }

    match decoded {
        AudioBufferRef::F32(buf) => {
            let mut samples = Vec::with_capacity(buf.frames() * buf.spec().channels.count());
            for plane in buf.planes().planes() {
                samples.extend_from_slice(plane);
            }
            Ok(samples)
        }
        AudioBufferRef::S16(buf) => via_sample_buffer!(S16, buf),
        AudioBufferRef::S32(buf) => via_sample_buffer!(S32, buf),
        AudioBufferRef::U8(buf) => via_sample_buffer!(U8, buf),
        AudioBufferRef::U16(buf) => via_sample_buffer!(U16, buf),
        AudioBufferRef::U32(buf) => via_sample_buffer!(U32, buf),
        _ => Err(NarrationError::Decode(
            "Unsupported sample format".to_string(),
        )),
    }
}
