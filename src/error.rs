//! Error types for loopmix
//!
//! Defines module-specific error types using thiserror for clear error
//! propagation. Every error is terminal for the mix invocation that raised
//! it: the engine performs no internal retries and never returns a partial
//! WAV. Retry is the caller's responsibility (re-submit the whole request).

use thiserror::Error;

/// Main error type for the mixdown engine
#[derive(Error, Debug)]
pub enum Error {
    /// Selection contained no tracks
    #[error("Empty selection: a mixdown requires at least one track")]
    EmptySelection,

    /// Two selection entries shared the same rank
    #[error("Duplicate rank {0} in selection")]
    DuplicateRank(i32),

    /// Asset retrieval errors (external fetcher collaborator)
    #[error("Asset fetch error: {0}")]
    Fetch(String),

    /// Audio decoding errors (unsupported or corrupt container)
    #[error("Audio decode error: {0}")]
    Decode(String),

    /// A track's sample rate or channel count differs from the first track's
    #[error("Track format mismatch: {0}")]
    FormatMismatch(String),

    /// Assembled mix contained zero frames
    #[error("Empty render: assembled mix contains no audio frames")]
    EmptyRender,

    /// Manifest / configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Background task failed to join
    #[error("Task join error: {0}")]
    Join(String),
}

/// Convenience Result type using the loopmix Error
pub type Result<T> = std::result::Result<T, Error>;
