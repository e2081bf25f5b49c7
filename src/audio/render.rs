//! Timeline assembly (render engine)
//!
//! Turns an ordered list of decoded buffers + gains into one PCM timeline.
//!
//! Tracks are placed **sequentially**: each track starts exactly where the
//! previous one ends, so the output duration is the sum of the input
//! durations. This mirrors the product's export behavior: despite being
//! called a "mixdown" it concatenates loops rather than overlaying them.
//! Whether that is the intended product behavior or a latent defect is an
//! open question; it is preserved deliberately because downstream duration
//! expectations (and UI labeling) assume it.
//!
//! The output format is the first track's sample rate and channel count. A
//! later track with a different format is rejected with an explicit error
//! instead of being copied as-is (which would produce distorted audio); no
//! resampling is performed.

use crate::audio::types::{DecodedBuffer, MixResult};
use crate::error::{Error, Result};
use tracing::debug;

/// One planned track placement on the timeline.
#[derive(Debug)]
pub struct PlanEntry {
    /// Decoded PCM for this track
    pub buffer: DecodedBuffer,

    /// Gain to apply per sample, already clamped to [0, 1] by validation
    pub gain: f32,

    /// Frame position where this track starts: the sum of frame counts of
    /// all tracks preceding it in rank order
    pub frame_offset: usize,
}

/// The full render plan: rank-ordered placements plus the output format.
#[derive(Debug)]
pub struct RenderPlan {
    /// Output sample rate (first track's)
    pub sample_rate: u32,

    /// Output channel count (first track's)
    pub channels: u16,

    /// Placements in rank order with cumulative frame offsets
    pub entries: Vec<PlanEntry>,

    /// Sum of all entries' frame counts
    pub total_frames: usize,
}

/// Build a render plan from decoded buffers in rank order.
///
/// Fails with [`Error::FormatMismatch`] if any track's sample rate or channel
/// count differs from the first track's.
pub fn plan(decoded: Vec<(DecodedBuffer, f32)>) -> Result<RenderPlan> {
    let (first, _) = decoded.first().ok_or(Error::EmptySelection)?;
    let sample_rate = first.sample_rate;
    let channels = first.channels;

    let mut entries = Vec::with_capacity(decoded.len());
    let mut offset = 0usize;

    for (position, (buffer, gain)) in decoded.into_iter().enumerate() {
        if buffer.sample_rate != sample_rate || buffer.channels != channels {
            return Err(Error::FormatMismatch(format!(
                "track at position {} is {} Hz / {} ch, expected {} Hz / {} ch",
                position, buffer.sample_rate, buffer.channels, sample_rate, channels
            )));
        }

        let frames = buffer.frame_count();
        entries.push(PlanEntry {
            buffer,
            gain,
            frame_offset: offset,
        });
        offset += frames;
    }

    Ok(RenderPlan {
        sample_rate,
        channels,
        entries,
        total_frames: offset,
    })
}

/// Assemble the planned timeline into one buffer.
///
/// Allocates `total_frames × channels` zero-initialized samples, then for
/// each entry writes `clamp(sample × gain, -1.0, 1.0)` at its cumulative
/// frame offset, channel-interleaved. Gain is applied per sample before
/// quantization; the clamp prevents overflow on encode. Deterministic: the
/// same plan always yields a byte-identical buffer.
pub fn assemble(plan: RenderPlan) -> MixResult {
    let channels = plan.channels as usize;
    let mut samples = vec![0.0f32; plan.total_frames * channels];

    for entry in &plan.entries {
        let start = entry.frame_offset * channels;
        for (i, &sample) in entry.buffer.samples.iter().enumerate() {
            samples[start + i] = (sample * entry.gain).clamp(-1.0, 1.0);
        }
    }

    debug!(
        "assembled {} tracks into {} frames at {} Hz, {} ch",
        plan.entries.len(),
        plan.total_frames,
        plan.sample_rate,
        plan.channels
    );

    MixResult {
        sample_rate: plan.sample_rate,
        channels: plan.channels,
        samples,
    }
}
