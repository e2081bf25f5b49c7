//! Core audio data types
//!
//! Defines the structures passed between the fetcher, decoder, render engine,
//! and WAV encoder. All of them live for a single mix invocation; nothing
//! here is cached or shared between requests.

use serde::{Deserialize, Serialize};

/// Raw encoded audio for one track, as returned by the asset fetcher.
///
/// `duration_hint` is caller-supplied and untrusted. It exists for display
/// only and plays no part in mixing; the authoritative duration comes from
/// decoding.
#[derive(Debug, Clone)]
pub struct TrackAsset {
    /// Asset identifier (resolved by the fetcher collaborator)
    pub id: String,

    /// Raw compressed audio bytes
    pub bytes: Vec<u8>,

    /// Optional display-only duration in seconds (untrusted)
    pub duration_hint: Option<f64>,
}

/// Decoded PCM audio for one track.
///
/// **Format:**
/// - Samples are f32 in [-1.0, 1.0]
/// - Channel-interleaved: [ch0, ch1, ch0, ch1, ...]
/// - Sample rate and channel count are the source file's native values;
///   no resampling or channel conversion is performed
///
/// Immutable after decode.
#[derive(Debug, Clone)]
pub struct DecodedBuffer {
    /// Native sample rate of the decoded audio
    pub sample_rate: u32,

    /// Channel count (1 = mono, 2 = stereo, ...)
    pub channels: u16,

    /// Interleaved PCM samples
    pub samples: Vec<f32>,
}

impl DecodedBuffer {
    pub fn new(sample_rate: u32, channels: u16, samples: Vec<f32>) -> Self {
        Self {
            sample_rate,
            channels,
            samples,
        }
    }

    /// Number of frames (samples per channel)
    pub fn frame_count(&self) -> usize {
        self.samples.len() / self.channels.max(1) as usize
    }

    /// Duration in seconds
    pub fn duration_seconds(&self) -> f32 {
        self.frame_count() as f32 / self.sample_rate as f32
    }
}

/// One entry of the caller's track selection.
///
/// Invariants (enforced by [`crate::audio::selection::validate_selection`]):
/// ranks are unique across the selection, `gain` is clamped to [0, 1], and
/// the selection is non-empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackSelection {
    /// Identifier resolved by the asset fetcher
    pub asset_id: String,

    /// Playback order on the timeline (ascending, unique)
    pub rank: i32,

    /// Linear amplitude multiplier, clamped to [0, 1]
    pub gain: f32,
}

/// The assembled pre-encoding PCM timeline.
///
/// Total frame count equals the sum of all selected tracks' frame counts:
/// tracks are concatenated in rank order, never overlaid.
#[derive(Debug, Clone)]
pub struct MixResult {
    /// Sample rate, taken from the first track in rank order
    pub sample_rate: u32,

    /// Channel count, taken from the first track in rank order
    pub channels: u16,

    /// Interleaved PCM samples for the full timeline
    pub samples: Vec<f32>,
}

impl MixResult {
    /// Number of frames (samples per channel)
    pub fn frame_count(&self) -> usize {
        self.samples.len() / self.channels.max(1) as usize
    }

    /// Duration in seconds
    pub fn duration_seconds(&self) -> f32 {
        self.frame_count() as f32 / self.sample_rate as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decoded_buffer_frame_count() {
        let buffer = DecodedBuffer::new(44100, 2, vec![0.1, 0.2, 0.3, 0.4, 0.5, 0.6]);
        assert_eq!(buffer.frame_count(), 3);
    }

    #[test]
    fn test_decoded_buffer_duration() {
        // 44100 mono samples = 1 second at 44.1kHz
        let buffer = DecodedBuffer::new(44100, 1, vec![0.0; 44100]);
        assert_eq!(buffer.duration_seconds(), 1.0);
    }

    #[test]
    fn test_mix_result_frame_count() {
        let mix = MixResult {
            sample_rate: 48000,
            channels: 2,
            samples: vec![0.0; 96000],
        };
        assert_eq!(mix.frame_count(), 48000);
        assert_eq!(mix.duration_seconds(), 1.0);
    }

    #[test]
    fn test_track_selection_deserialize() {
        let entry: TrackSelection =
            toml::from_str("asset_id = \"loop-a\"\nrank = 1\ngain = 0.8\n").unwrap();
        assert_eq!(entry.asset_id, "loop-a");
        assert_eq!(entry.rank, 1);
        assert_eq!(entry.gain, 0.8);
    }
}
