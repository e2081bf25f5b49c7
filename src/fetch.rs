//! Asset retrieval
//!
//! The engine does not know where track bytes live; an [`AssetFetcher`]
//! collaborator resolves an asset id to its raw encoded bytes. Network-backed
//! fetchers (blob storage, CDN) are out of scope for this crate;
//! [`FileFetcher`] resolves ids against a local folder for the CLI and tests.

use crate::audio::types::TrackAsset;
use crate::error::{Error, Result};
use async_trait::async_trait;
use std::path::PathBuf;
use tracing::debug;

/// Resolves a track reference to raw encoded audio bytes.
///
/// Fetch failures map to [`Error::Fetch`] and abort the whole mix invocation.
#[async_trait]
pub trait AssetFetcher: Send + Sync {
    /// Fetch the encoded bytes for one asset.
    async fn fetch(&self, asset_id: &str) -> Result<TrackAsset>;
}

/// Fetcher that resolves asset ids as file names under a root folder.
pub struct FileFetcher {
    root: PathBuf,
}

impl FileFetcher {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl AssetFetcher for FileFetcher {
    async fn fetch(&self, asset_id: &str) -> Result<TrackAsset> {
        let path = self.root.join(asset_id);
        let bytes = tokio::fs::read(&path)
            .await
            .map_err(|e| Error::Fetch(format!("failed to read {}: {}", path.display(), e)))?;

        debug!("fetched {} ({} bytes)", path.display(), bytes.len());

        Ok(TrackAsset {
            id: asset_id.to_string(),
            bytes,
            duration_hint: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_file_fetcher_reads_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("loop.bin");
        std::fs::File::create(&path)
            .unwrap()
            .write_all(&[1, 2, 3])
            .unwrap();

        let fetcher = FileFetcher::new(dir.path());
        let asset = fetcher.fetch("loop.bin").await.unwrap();
        assert_eq!(asset.id, "loop.bin");
        assert_eq!(asset.bytes, vec![1, 2, 3]);
        assert!(asset.duration_hint.is_none());
    }

    #[tokio::test]
    async fn test_file_fetcher_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let fetcher = FileFetcher::new(dir.path());
        let result = fetcher.fetch("missing.wav").await;
        assert!(matches!(result, Err(Error::Fetch(_))));
    }
}
