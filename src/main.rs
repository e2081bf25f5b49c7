//! loopmix - Command-line mixdown tool
//!
//! Reads a TOML mix manifest, runs the mixdown engine over the listed loop
//! files, and writes the resulting WAV to disk.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use loopmix::fetch::FileFetcher;
use loopmix::manifest::MixManifest;
use loopmix::MixdownEngine;

/// Command-line arguments for loopmix
#[derive(Parser, Debug)]
#[command(name = "loopmix")]
#[command(about = "Mixdown engine for a collaborative loop recorder")]
#[command(version)]
struct Args {
    /// Path to the mix manifest (TOML)
    #[arg(short, long, env = "LOOPMIX_MANIFEST")]
    manifest: PathBuf,

    /// Output WAV path (overrides the manifest's `output`)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "loopmix=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let manifest = MixManifest::load(&args.manifest)
        .with_context(|| format!("failed to load manifest {}", args.manifest.display()))?;

    info!(
        "mixing {} tracks from {}",
        manifest.tracks.len(),
        manifest.root_folder.display()
    );

    let fetcher = Arc::new(FileFetcher::new(manifest.root_folder.clone()));
    let engine = MixdownEngine::new(fetcher);

    let mixdown = engine
        .mix(manifest.selection())
        .await
        .context("mixdown failed")?;

    // CLI flag wins over the manifest; fall back to the engine's suggested name
    let output = args
        .output
        .or(manifest.output)
        .unwrap_or_else(|| PathBuf::from(&mixdown.filename));

    tokio::fs::write(&output, &mixdown.wav)
        .await
        .with_context(|| format!("failed to write {}", output.display()))?;

    info!(
        "wrote {} ({} frames at {} Hz, {} ch, {} bytes)",
        output.display(),
        mixdown.total_frames,
        mixdown.sample_rate,
        mixdown.channels,
        mixdown.wav.len()
    );

    Ok(())
}
