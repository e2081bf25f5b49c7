//! WAV encoder
//!
//! Serializes a [`MixResult`] to a 16-bit PCM RIFF/WAVE byte stream with the
//! canonical 44-byte header, little-endian throughout:
//!
//! ```text
//! offset  0  "RIFF"            12  "fmt "            34  bitsPerSample (16)
//!         4  chunkSize         16  fmt size (16)     36  "data"
//!         8  "WAVE"            20  format (1 = PCM)  40  dataSize
//!                              22  numChannels       44  samples
//!                              24  sampleRate
//!                              28  byteRate
//!                              32  blockAlign
//! ```
//!
//! Encoding always succeeds for a non-empty mix; a zero-frame mix is
//! rejected rather than producing a header-only file.

use crate::audio::types::MixResult;
use crate::error::{Error, Result};

/// RIFF header length in bytes
const HEADER_LEN: usize = 44;

/// Output sample width (16-bit signed PCM)
const BYTES_PER_SAMPLE: u32 = 2;

/// Encode an assembled mix as WAV bytes.
///
/// Deterministic: the same `MixResult` always produces byte-identical
/// output. Fails with [`Error::EmptyRender`] if the mix contains no frames.
pub fn encode_wav(mix: &MixResult) -> Result<Vec<u8>> {
    if mix.frame_count() == 0 {
        return Err(Error::EmptyRender);
    }

    let channels = mix.channels as u32;
    let data_size = mix.samples.len() as u32 * BYTES_PER_SAMPLE;
    let byte_rate = mix.sample_rate * channels * BYTES_PER_SAMPLE;
    let block_align = mix.channels * BYTES_PER_SAMPLE as u16;

    let mut out = Vec::with_capacity(HEADER_LEN + data_size as usize);
    out.extend_from_slice(b"RIFF");
    out.extend_from_slice(&(36 + data_size).to_le_bytes());
    out.extend_from_slice(b"WAVE");
    out.extend_from_slice(b"fmt ");
    out.extend_from_slice(&16u32.to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes()); // PCM
    out.extend_from_slice(&mix.channels.to_le_bytes());
    out.extend_from_slice(&mix.sample_rate.to_le_bytes());
    out.extend_from_slice(&byte_rate.to_le_bytes());
    out.extend_from_slice(&block_align.to_le_bytes());
    out.extend_from_slice(&16u16.to_le_bytes()); // bits per sample
    out.extend_from_slice(b"data");
    out.extend_from_slice(&data_size.to_le_bytes());

    for &sample in &mix.samples {
        out.extend_from_slice(&quantize(sample).to_le_bytes());
    }

    Ok(out)
}

/// Quantize one float sample to signed 16-bit PCM.
///
/// Asymmetric scaling to use the full signed range: non-negative samples
/// scale by 32767, negative samples by 32768, both rounding toward zero.
/// The input is clamped to [-1, 1] first, so 1.0 → 32767 and -1.0 → -32768.
pub(crate) fn quantize(sample: f32) -> i16 {
    let s = sample.clamp(-1.0, 1.0);
    if s >= 0.0 {
        (s * 32767.0) as i16
    } else {
        (s * 32768.0) as i16
    }
}
