//! Mixdown registration
//!
//! After the engine has produced WAV bytes, the caller may record a pointer
//! to wherever it uploaded them (`{ room_id, url }`). That registration is a
//! distinct, separately-failable step: it runs after the bytes already exist,
//! so the caller can retry it without re-running the decode/render pipeline.
//! Actual persistence (database, HTTP) is out of scope for this crate.

use crate::error::Result;
use async_trait::async_trait;

/// Records a pointer to a produced mixdown.
#[async_trait]
pub trait MixdownRegistry: Send + Sync {
    /// Register `url` as a mixdown of `room_id`.
    ///
    /// Idempotency is the implementor's concern; the engine never calls this
    /// itself.
    async fn register(&self, room_id: &str, url: &str) -> Result<()>;
}
