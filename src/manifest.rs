//! Mix manifest for the CLI
//!
//! A TOML file describing one mixdown request: where the source files live,
//! which tracks to include with which rank and gain, and optionally where to
//! write the result.
//!
//! ```toml
//! root_folder = "loops"
//! output = "session.wav"       # optional
//!
//! [[track]]
//! file = "drums.wav"
//! rank = 1
//! gain = 1.0
//!
//! [[track]]
//! file = "bass.flac"
//! rank = 2                      # gain defaults to 1.0
//! ```

use crate::audio::types::TrackSelection;
use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// One track entry in the manifest.
#[derive(Debug, Clone, Deserialize)]
pub struct ManifestTrack {
    /// File name, resolved relative to `root_folder`
    pub file: String,

    /// Timeline position (unique per manifest)
    pub rank: i32,

    /// Linear gain, clamped to [0, 1] during validation
    #[serde(default = "default_gain")]
    pub gain: f32,
}

fn default_gain() -> f32 {
    1.0
}

/// A parsed mix manifest.
#[derive(Debug, Clone, Deserialize)]
pub struct MixManifest {
    /// Folder containing the source audio files
    pub root_folder: PathBuf,

    /// Optional output path for the WAV file
    pub output: Option<PathBuf>,

    /// Tracks to place on the timeline
    #[serde(rename = "track", default)]
    pub tracks: Vec<ManifestTrack>,
}

impl MixManifest {
    /// Load and parse a manifest file.
    ///
    /// A relative `root_folder` is resolved against the manifest's own
    /// directory, so a manifest can be invoked from anywhere.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read {}: {}", path.display(), e)))?;

        let mut manifest: MixManifest = toml::from_str(&text)
            .map_err(|e| Error::Config(format!("failed to parse {}: {}", path.display(), e)))?;

        if manifest.root_folder.is_relative() {
            if let Some(parent) = path.parent() {
                manifest.root_folder = parent.join(&manifest.root_folder);
            }
        }

        Ok(manifest)
    }

    /// Convert the track list to a selection for the engine.
    ///
    /// Rank and gain validation is the engine's job, not the parser's.
    pub fn selection(&self) -> Vec<TrackSelection> {
        self.tracks
            .iter()
            .map(|t| TrackSelection {
                asset_id: t.file.clone(),
                rank: t.rank,
                gain: t.gain,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_manifest() {
        let manifest: MixManifest = toml::from_str(
            r#"
            root_folder = "loops"
            output = "out.wav"

            [[track]]
            file = "drums.wav"
            rank = 1
            gain = 0.9

            [[track]]
            file = "bass.wav"
            rank = 2
            "#,
        )
        .unwrap();

        assert_eq!(manifest.root_folder, PathBuf::from("loops"));
        assert_eq!(manifest.output, Some(PathBuf::from("out.wav")));
        assert_eq!(manifest.tracks.len(), 2);
        assert_eq!(manifest.tracks[0].gain, 0.9);
        // Omitted gain defaults to unity
        assert_eq!(manifest.tracks[1].gain, 1.0);
    }

    #[test]
    fn test_selection_preserves_manifest_order() {
        let manifest: MixManifest = toml::from_str(
            r#"
            root_folder = "."

            [[track]]
            file = "b.wav"
            rank = 2

            [[track]]
            file = "a.wav"
            rank = 1
            "#,
        )
        .unwrap();

        // The manifest is not pre-sorted; rank ordering happens in validation
        let selection = manifest.selection();
        assert_eq!(selection[0].asset_id, "b.wav");
        assert_eq!(selection[1].asset_id, "a.wav");
    }

    #[test]
    fn test_malformed_manifest_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mix.toml");
        std::fs::write(&path, "not = [valid").unwrap();

        let result = MixManifest::load(&path);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_relative_root_resolved_against_manifest_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mix.toml");
        std::fs::write(&path, "root_folder = \"loops\"\n").unwrap();

        let manifest = MixManifest::load(&path).unwrap();
        assert_eq!(manifest.root_folder, dir.path().join("loops"));
    }
}
