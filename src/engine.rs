//! Mixdown engine
//!
//! Orchestrates one mix invocation end to end: validate the selection, fetch
//! and decode every selected asset in parallel, join all results, assemble
//! the timeline, and encode WAV bytes.
//!
//! The join is all-or-nothing: assembly does not begin until every decode has
//! completed, and any single fetch or decode failure aborts the invocation
//! with no output. Results are re-associated with their selection entries by
//! position (rank order, never completion order). There is no cancellation
//! of an in-flight mix; a long-running mix runs to completion or error. The
//! engine holds no mutable state, so one instance can serve concurrent
//! invocations.

use crate::audio::decode::decode_bytes;
use crate::audio::render;
use crate::audio::selection::validate_selection;
use crate::audio::types::TrackSelection;
use crate::audio::wav::encode_wav;
use crate::error::{Error, Result};
use crate::fetch::AssetFetcher;
use futures::future::try_join_all;
use std::sync::Arc;
use tracing::{debug, info};

/// MIME type of the produced artifact
pub const WAV_MIME_TYPE: &str = "audio/wav";

/// A finished mixdown: the WAV bytes plus summary metadata.
#[derive(Debug, Clone)]
pub struct Mixdown {
    /// Complete WAV file contents
    pub wav: Vec<u8>,

    /// Output sample rate (first track's)
    pub sample_rate: u32,

    /// Output channel count (first track's)
    pub channels: u16,

    /// Total frames on the timeline (sum over all tracks)
    pub total_frames: usize,

    /// Suggested download filename, `mixdown_<unix_timestamp_ms>.wav`
    pub filename: String,
}

/// The mixdown engine. Cheap to clone-by-Arc and safe to share.
pub struct MixdownEngine {
    fetcher: Arc<dyn AssetFetcher>,
}

impl MixdownEngine {
    pub fn new(fetcher: Arc<dyn AssetFetcher>) -> Self {
        Self { fetcher }
    }

    /// Run one mix invocation.
    ///
    /// Validation runs first, before any fetch or decode work, so a bad
    /// selection costs nothing. Each selected asset is then fetched and
    /// decoded on its own task; decoding is CPU-bound and runs on the
    /// blocking pool.
    pub async fn mix(&self, selection: Vec<TrackSelection>) -> Result<Mixdown> {
        let selection = validate_selection(selection)?;

        info!("mixing {} tracks", selection.len());

        let mut tasks = Vec::with_capacity(selection.len());
        for entry in &selection {
            let fetcher = Arc::clone(&self.fetcher);
            let asset_id = entry.asset_id.clone();
            tasks.push(tokio::spawn(async move {
                let asset = fetcher.fetch(&asset_id).await?;
                if let Some(hint) = asset.duration_hint {
                    // Display-only; decoding determines the real duration
                    debug!("asset {} reports ~{:.1}s", asset.id, hint);
                }
                tokio::task::spawn_blocking(move || decode_bytes(asset.bytes))
                    .await
                    .map_err(|e| Error::Join(e.to_string()))?
            }));
        }

        // Single join point: assembly must not start until every decode has
        // completed. Results are paired with their selection entry by
        // position, so rank order wins over completion order.
        let results = try_join_all(tasks)
            .await
            .map_err(|e| Error::Join(e.to_string()))?;

        let mut decoded = Vec::with_capacity(selection.len());
        for (entry, result) in selection.iter().zip(results) {
            let buffer = result?;
            debug!(
                "track {} (rank {}): {} frames at {} Hz, gain {:.2}",
                entry.asset_id,
                entry.rank,
                buffer.frame_count(),
                buffer.sample_rate,
                entry.gain
            );
            decoded.push((buffer, entry.gain));
        }

        let plan = render::plan(decoded)?;
        let mix = render::assemble(plan);
        let total_frames = mix.frame_count();
        let wav = encode_wav(&mix)?;

        info!(
            "mixdown complete: {} frames ({:.2}s) at {} Hz, {} ch, {} bytes",
            total_frames,
            mix.duration_seconds(),
            mix.sample_rate,
            mix.channels,
            wav.len()
        );

        Ok(Mixdown {
            wav,
            sample_rate: mix.sample_rate,
            channels: mix.channels,
            total_frames,
            filename: suggested_filename(),
        })
    }
}

/// Suggested download filename for a mixdown produced now.
pub fn suggested_filename() -> String {
    format!("mixdown_{}.wav", chrono::Utc::now().timestamp_millis())
}
