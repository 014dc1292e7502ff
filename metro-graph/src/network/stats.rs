//! Aggregate metrics over a network snapshot.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::{StationKind, TrackKind};
use crate::network::Network;

/// A point-in-time summary of network shape and load.
///
/// Counts are computed fresh on every call to
/// [`Network::get_network_statistics`]; nothing here is cached. Station
/// kind counts reflect the current tag only, so a terminal later retagged
/// as a junction counts once, as a junction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NetworkStats {
    pub total_stations: usize,
    pub total_tracks: usize,
    pub total_data_items: usize,
    pub junction_count: usize,
    pub express_stations: usize,
    pub transfer_hubs: usize,
    pub terminal_points: usize,
    /// Number of tracks per kind; kinds with no tracks are absent.
    pub track_distribution: BTreeMap<TrackKind, usize>,
    /// Mean number of outgoing references per station
    /// (per-kind edges both ways, branch entries and transfers).
    pub avg_connectivity: f64,
}

impl<T> Network<T> {
    /// Computes summary statistics for the current network state.
    pub fn get_network_statistics(&self) -> NetworkStats {
        let mut junction_count = 0;
        let mut express_stations = 0;
        let mut transfer_hubs = 0;
        let mut terminal_points = 0;
        let mut total_connections = 0usize;

        for station in self.stations.values() {
            match station.kind() {
                StationKind::Junction => junction_count += 1,
                StationKind::Express => express_stations += 1,
                StationKind::Transfer => transfer_hubs += 1,
                StationKind::Terminal => terminal_points += 1,
                StationKind::Regular => {}
            }
            total_connections += station.connection_count();
        }

        let mut track_distribution: BTreeMap<TrackKind, usize> = BTreeMap::new();
        for track in self.tracks.values() {
            *track_distribution.entry(track.kind()).or_insert(0) += 1;
        }

        let avg_connectivity = if self.stations.is_empty() {
            0.0
        } else {
            total_connections as f64 / self.stations.len() as f64
        };

        NetworkStats {
            total_stations: self.stations.len(),
            total_tracks: self.tracks.len(),
            total_data_items: self.total_data_items,
            junction_count,
            express_stations,
            transfer_hubs,
            terminal_points,
            track_distribution,
            avg_connectivity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_network_is_all_zeroes() {
        let network: Network<u32> = Network::new();
        let stats = network.get_network_statistics();
        assert_eq!(stats.total_stations, 0);
        assert_eq!(stats.total_tracks, 0);
        assert_eq!(stats.total_data_items, 0);
        assert!(stats.track_distribution.is_empty());
        assert_eq!(stats.avg_connectivity, 0.0);
    }

    #[test]
    fn counts_station_kinds_by_current_tag() {
        let mut network = Network::new();
        network.create_main_line("M1", vec!["a", "b", "c", "d"], "blue");
        network
            .create_branch_line("B1", "M1_station_1", vec!["x"], "green")
            .unwrap();
        network.add_transfer_connection("M1_station_2", "B1_station_0", 1);

        let stats = network.get_network_statistics();
        assert_eq!(stats.total_stations, 5);
        assert_eq!(stats.total_tracks, 2);
        assert_eq!(stats.total_data_items, 5);
        assert_eq!(stats.junction_count, 1);
        // The branch terminal was retagged as a transfer hub.
        assert_eq!(stats.transfer_hubs, 2);
        assert_eq!(stats.terminal_points, 2);
        assert_eq!(stats.express_stations, 0);
    }

    #[test]
    fn track_distribution_by_kind() {
        let mut network = Network::new();
        network.create_main_line("M1", vec!["a", "b", "c"], "blue");
        network.create_main_line("M2", vec!["d"], "red");
        network.create_express_line("E1", "M1", &[0, 2], "yellow").unwrap();
        network
            .create_loop_connection("M1_station_2", "M2_station_0", "orange")
            .unwrap();

        let stats = network.get_network_statistics();
        assert_eq!(stats.track_distribution.get(&TrackKind::Main), Some(&2));
        assert_eq!(stats.track_distribution.get(&TrackKind::Express), Some(&1));
        assert_eq!(stats.track_distribution.get(&TrackKind::Loop), Some(&1));
        assert_eq!(stats.track_distribution.get(&TrackKind::Branch), None);
    }

    #[test]
    fn three_station_line_scenario() {
        let mut network = Network::new();
        network.create_main_line("M1", vec!["a", "b", "c"], "blue");

        let stats = network.get_network_statistics();
        assert_eq!(stats.total_stations, 3);
        assert_eq!(stats.terminal_points, 2);
        assert_eq!(stats.junction_count, 0);
        // a: next=1, b: next+prev=2, c: prev=1, total 4 over 3 stations.
        assert!((stats.avg_connectivity - 4.0 / 3.0).abs() < 1e-9);

        network.add_transfer_connection("M1_station_0", "M1_station_2", 1);
        // Two more references, one per endpoint.
        let stats = network.get_network_statistics();
        assert!((stats.avg_connectivity - 2.0).abs() < 1e-9);
    }

    #[test]
    fn serializes_with_lowercase_kind_keys() {
        let mut network = Network::new();
        network.create_main_line("M1", vec!["a"], "blue");
        let stats = network.get_network_statistics();
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["total_stations"], 1);
        assert_eq!(json["track_distribution"]["main"], 1);
    }
}
