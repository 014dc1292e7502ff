//! Network error types.
//!
//! Construction operations that anchor onto existing entities fail with
//! these when the anchor is missing. The failure is checked before any
//! mutation, so a returned error never leaves a partial track behind.

use super::{StationId, TrackId};

/// Errors raised by network construction operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NetworkError {
    /// Referenced station identifier does not exist in the network
    #[error("station {0} not found")]
    StationNotFound(StationId),

    /// Referenced track identifier does not exist in the network
    #[error("track {0} not found")]
    TrackNotFound(TrackId),
}
