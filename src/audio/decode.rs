//! Audio decoder using symphonia
//!
//! Decodes the raw encoded bytes of one track (MP3, FLAC, AAC, M4A, Vorbis,
//! WAV) to interleaved f32 PCM. Input arrives as an in-memory byte buffer
//! from the asset fetcher, not as a file on disk.
//!
//! Any probe, codec, or packet error is fatal for the whole mix: the engine
//! never produces output from a partially decoded track.

use crate::audio::types::DecodedBuffer;
use crate::error::{Error, Result};
use std::io::Cursor;
use symphonia::core::audio::SampleBuffer;
use symphonia::core::codecs::{DecoderOptions, CODEC_TYPE_NULL};
use symphonia::core::errors::Error as SymphoniaError;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;
use tracing::debug;

/// Decode one track's encoded bytes to PCM.
///
/// Returns the source's native sample rate and channel count unchanged; the
/// render engine decides whether formats are compatible across tracks. A
/// stream that probes successfully but yields zero frames is an error, since
/// an empty track can never contribute to a mixdown.
pub fn decode_bytes(bytes: Vec<u8>) -> Result<DecodedBuffer> {
    let byte_len = bytes.len();
    let mss = MediaSourceStream::new(Box::new(Cursor::new(bytes)), Default::default());

    // No filename available for an in-memory asset, so probe with an empty
    // hint and let symphonia identify the container.
    let probed = symphonia::default::get_probe()
        .format(
            &Hint::new(),
            mss,
            &FormatOptions::default(),
            &MetadataOptions::default(),
        )
        .map_err(|e| Error::Decode(format!("unsupported or corrupt container: {}", e)))?;

    let mut format = probed.format;

    let track = format
        .tracks()
        .iter()
        .find(|t| t.codec_params.codec != CODEC_TYPE_NULL)
        .ok_or_else(|| Error::Decode("no audio track found".to_string()))?;

    let track_id = track.id;
    let codec_params = track.codec_params.clone();

    let sample_rate = codec_params
        .sample_rate
        .ok_or_else(|| Error::Decode("sample rate not found".to_string()))?;

    let channels = codec_params
        .channels
        .map(|c| c.count() as u16)
        .ok_or_else(|| Error::Decode("channel count not found".to_string()))?;

    let mut decoder = symphonia::default::get_codecs()
        .make(&codec_params, &DecoderOptions::default())
        .map_err(|e| Error::Decode(format!("failed to create decoder: {}", e)))?;

    let mut samples = Vec::new();
    let mut sample_buf: Option<SampleBuffer<f32>> = None;

    loop {
        let packet = match format.next_packet() {
            Ok(packet) => packet,
            Err(SymphoniaError::IoError(ref e))
                if e.kind() == std::io::ErrorKind::UnexpectedEof =>
            {
                break;
            }
            Err(e) => {
                return Err(Error::Decode(format!("error reading packet: {}", e)));
            }
        };

        // Skip packets for other tracks
        if packet.track_id() != track_id {
            continue;
        }

        let decoded = decoder
            .decode(&packet)
            .map_err(|e| Error::Decode(format!("packet decode failed: {}", e)))?;

        if sample_buf.is_none() {
            let spec = *decoded.spec();
            let duration = decoded.capacity() as u64;
            sample_buf = Some(SampleBuffer::<f32>::new(duration, spec));
        }

        if let Some(buf) = sample_buf.as_mut() {
            buf.copy_interleaved_ref(decoded);
            samples.extend_from_slice(buf.samples());
        }
    }

    if samples.is_empty() {
        return Err(Error::Decode("stream contained no audio frames".to_string()));
    }

    debug!(
        "decoded {} bytes -> {} frames at {} Hz, {} ch",
        byte_len,
        samples.len() / channels as usize,
        sample_rate,
        channels
    );

    Ok(DecodedBuffer::new(sample_rate, channels, samples))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_garbage_bytes_rejected() {
        let result = decode_bytes(vec![0xde, 0xad, 0xbe, 0xef, 0x00, 0x01, 0x02, 0x03]);
        assert!(matches!(result, Err(Error::Decode(_))));
    }

    #[test]
    fn test_empty_bytes_rejected() {
        let result = decode_bytes(Vec::new());
        assert!(matches!(result, Err(Error::Decode(_))));
    }

    // Decoding real containers is covered by the integration tests, which
    // generate WAV fixtures with hound.
}
