//! # loopmix
//!
//! Mixdown engine for a collaborative loop recorder.
//!
//! **Purpose:** Decode a set of independently recorded audio loops, place them
//! on a single timeline in caller-specified order with per-track gain, and
//! encode the result as a 16-bit PCM WAV file.
//!
//! **Architecture:** stateless pipeline of selection validation → parallel
//! fetch + decode (symphonia) → timeline assembly → WAV encoding. Fetching
//! the source bytes and persisting the produced mixdown are external
//! collaborators behind traits ([`fetch::AssetFetcher`],
//! [`registry::MixdownRegistry`]); the engine itself holds no state across
//! invocations.

pub mod audio;
pub mod engine;
pub mod error;
pub mod fetch;
pub mod manifest;
pub mod registry;

pub use engine::{Mixdown, MixdownEngine};
pub use error::{Error, Result};
