//! The network aggregate: owner of all stations and tracks.
//!
//! A [`Network`] is an append-only container. Stations and tracks are
//! created exclusively through the construction operations in this module's
//! submodules and are destroyed only when the network itself is dropped.
//! Stations reference each other by identifier, never by ownership, so the
//! cyclic topology (bidirectional chains, loops, express shortcuts) never
//! forms an ownership cycle: the two maps here are the sole owners.

mod build;
mod insert;
mod stats;

pub use stats::NetworkStats;

use std::collections::HashMap;

use crate::domain::{Station, StationId, Track, TrackId, TrackKind};

/// A transit-network-shaped container for data items of type `T`.
///
/// Items live in stations, stations are organized into tracks of four kinds
/// (main, branch, express, loop), and stations may additionally be linked by
/// junction branches, transfer edges, express shortcuts and loop
/// connections. Single-writer: concurrent mutation is unsupported and must
/// be serialized by the caller.
///
/// # Examples
///
/// ```
/// use metro_graph::network::Network;
///
/// let mut network = Network::new();
/// network.create_main_line("M1_Line", vec!["a", "b", "c"], "blue");
///
/// assert_eq!(network.station_count(), 3);
/// assert_eq!(network.find_optimal_route(&"a", &"c").len(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Network<T> {
    stations: HashMap<StationId, Station<T>>,
    tracks: HashMap<TrackId, Track>,
    total_data_items: usize,
}

impl<T> Network<T> {
    /// Creates an empty network.
    pub fn new() -> Self {
        Self {
            stations: HashMap::new(),
            tracks: HashMap::new(),
            total_data_items: 0,
        }
    }

    /// Looks up a station by identifier.
    pub fn station(&self, id: &str) -> Option<&Station<T>> {
        self.stations.get(id)
    }

    /// Looks up a track by identifier.
    pub fn track(&self, id: &str) -> Option<&Track> {
        self.tracks.get(id)
    }

    /// Iterates all stations, in unspecified order.
    pub fn stations(&self) -> impl Iterator<Item = &Station<T>> {
        self.stations.values()
    }

    /// Iterates all tracks, in unspecified order.
    pub fn tracks(&self) -> impl Iterator<Item = &Track> {
        self.tracks.values()
    }

    /// Number of stations in the network.
    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    /// Number of tracks in the network.
    pub fn track_count(&self) -> usize {
        self.tracks.len()
    }

    /// Running count of data items inserted through construction operations.
    pub fn total_data_items(&self) -> usize {
        self.total_data_items
    }

    /// Links `from -> to` for `kind`, keeping the next/prev pair symmetric.
    ///
    /// Both stations must already be registered; the caller guarantees it.
    fn chain(&mut self, kind: TrackKind, from: &StationId, to: &StationId) {
        if let Some(station) = self.stations.get_mut(from.as_str()) {
            station.next.set(kind, to.clone());
        }
        if let Some(station) = self.stations.get_mut(to.as_str()) {
            station.prev.set(kind, from.clone());
        }
    }

    /// Registers a track and returns a reference to the stored copy.
    ///
    /// Identifier collisions are not checked: a track registered under an
    /// existing id replaces it.
    fn register_track(&mut self, track: Track) -> &Track {
        let id = track.id().clone();
        self.tracks.insert(id.clone(), track);
        // Registered on the line above, so the lookup cannot miss.
        self.tracks.get(id.as_str()).expect("track just registered")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_network() {
        let network: Network<u32> = Network::new();
        assert_eq!(network.station_count(), 0);
        assert_eq!(network.track_count(), 0);
        assert_eq!(network.total_data_items(), 0);
        assert!(network.station("anything").is_none());
        assert!(network.track("anything").is_none());
    }

    #[test]
    fn default_matches_new() {
        let network: Network<u32> = Network::default();
        assert_eq!(network.station_count(), 0);
        assert_eq!(network.total_data_items(), 0);
    }

    #[test]
    fn lookup_after_construction() {
        let mut network = Network::new();
        network.create_main_line("M1_Line", vec!["a", "b"], "blue");

        assert!(network.station("M1_Line_station_0").is_some());
        assert!(network.station("M1_Line_station_2").is_none());
        assert!(network.track("M1_Line").is_some());
        assert_eq!(network.stations().count(), 2);
        assert_eq!(network.tracks().count(), 1);
    }
}
