// ── Core error types ──
//
// Projection itself never fails: absence and unknown values resolve to
// defaults. Errors only arise at the boundary with the discovery source.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Discovery source {origin} is unavailable: {source}")]
    SourceUnavailable {
        origin: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Discovery snapshot from {origin} could not be decoded: {source}")]
    Decode {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Discovery failed: {message}")]
    Fetch { message: String },
}
