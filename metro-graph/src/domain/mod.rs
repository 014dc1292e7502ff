//! Domain types for the transit-network container.
//!
//! This module contains the leaf model types: station and track identities,
//! the closed kind enumerations, and per-kind edge slots. Topology
//! invariants (edge symmetry, identifier uniqueness) are maintained by the
//! [`Network`](crate::network::Network) construction operations, so code
//! holding these types can trust them.

mod error;
mod station;
mod track;

pub use error::NetworkError;
pub use station::{EdgeMap, Station, StationId, StationKind, Transfer};
pub use track::{Track, TrackId, TrackKind};
