//! Payload-specific error types.

use thiserror::Error;

/// Failure modes of the palette → canvas drag payload.
///
/// The drop handler recovers from all of these locally: a bad payload is
/// discarded without creating a node and without surfacing an error to the
/// user.
#[derive(Debug, Error)]
pub enum PayloadError {
    /// The transfer channel delivered no data at all.
    #[error("empty drag payload")]
    Empty,

    /// The payload was present but not the expected JSON record.
    #[error("unparseable drag payload: {0}")]
    Json(#[from] serde_json::Error),
}
