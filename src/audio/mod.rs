//! Audio pipeline modules
//!
//! Decode → validate → assemble → encode, in dependency order:
//! - [`types`]: PCM buffer and selection types shared across the pipeline
//! - [`selection`]: caller selection validation (ranks, gains)
//! - [`decode`]: compressed bytes → interleaved f32 PCM via symphonia
//! - [`render`]: ordered decoded buffers → one concatenated timeline
//! - [`wav`]: timeline → byte-exact 16-bit PCM WAV

pub mod decode;
pub mod render;
pub mod selection;
pub mod types;
pub mod wav;
