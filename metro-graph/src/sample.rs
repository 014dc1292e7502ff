//! A ready-made concrete network: the Ankara metro.
//!
//! Handy as demo data and as a realistic fixture covering every construction
//! operation at once: a trunk line, two branches, an express overlay, a loop
//! shortcut and two transfer hubs.

use crate::network::Network;

/// Builds the Ankara metro as a `Network<String>` of station names.
///
/// Layout: the M1 trunk runs Kızılay to Ostim; M2 branches toward Çayyolu
/// from the Kızılay end and M3 toward Törekent from the Ostim end; an
/// express overlay joins the two trunk termini; a loop shortcut links the
/// outer ends of the branches; both branch entrances are transfer hubs with
/// their trunk anchor.
pub fn ankara_metro() -> Network<String> {
    let mut network = Network::new();

    let m1 = ["Kızılay", "Sıhhiye", "Ulus", "Akköprü", "İvedik", "Ostim"];
    network.create_main_line("M1_Line", m1.iter().map(|s| s.to_string()).collect(), "blue");

    // Kızılay toward Çayyolu
    let m2 = ["Kavaklıdere", "Bilkent", "Çayyolu"];
    network
        .create_branch_line(
            "M2_Branch",
            "M1_Line_station_0",
            m2.iter().map(|s| s.to_string()).collect(),
            "green",
        )
        .expect("M1_Line_station_0 exists");

    // Ostim toward Törekent
    let m3 = ["Batıkent", "Törekent"];
    network
        .create_branch_line(
            "M3_Branch",
            "M1_Line_station_5",
            m3.iter().map(|s| s.to_string()).collect(),
            "red",
        )
        .expect("M1_Line_station_5 exists");

    // Express service between the trunk termini
    network
        .create_express_line("Express_Line", "M1_Line", &[0, 5], "yellow")
        .expect("M1_Line exists");

    // Çayyolu to Törekent shortcut
    network
        .create_loop_connection("M2_Branch_station_2", "M3_Branch_station_1", "orange")
        .expect("branch ends exist");

    network.add_transfer_connection("M1_Line_station_0", "M2_Branch_station_0", 1);
    network.add_transfer_connection("M1_Line_station_5", "M3_Branch_station_0", 1);

    network
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{StationKind, TrackKind};

    #[test]
    fn has_the_expected_shape() {
        let network = ankara_metro();
        // 6 trunk + 3 + 2 branch stations; express and loop add none.
        assert_eq!(network.station_count(), 11);
        assert_eq!(network.track_count(), 5);
        assert_eq!(network.total_data_items(), 11);

        let stats = network.get_network_statistics();
        assert_eq!(stats.track_distribution.get(&TrackKind::Main), Some(&1));
        assert_eq!(stats.track_distribution.get(&TrackKind::Branch), Some(&2));
        assert_eq!(stats.track_distribution.get(&TrackKind::Express), Some(&1));
        assert_eq!(stats.track_distribution.get(&TrackKind::Loop), Some(&1));
    }

    #[test]
    fn anchors_carry_their_later_roles() {
        let network = ankara_metro();
        // Both trunk ends were junctioned, expressed, then transferred;
        // the last applied role wins.
        assert_eq!(
            network.station("M1_Line_station_0").unwrap().kind(),
            StationKind::Transfer
        );
        assert_eq!(
            network.station("M1_Line_station_5").unwrap().kind(),
            StationKind::Transfer
        );
        assert_eq!(
            network.station("M2_Branch_station_2").unwrap().kind(),
            StationKind::Terminal
        );
    }

    #[test]
    fn payloads_resolve_by_name() {
        let network = ankara_metro();
        let station = network.station("M1_Line_station_2").unwrap();
        assert_eq!(station.payload(), "Ulus");
    }

    #[test]
    fn branches_are_reachable_from_the_trunk() {
        let network = ankara_metro();
        let route =
            network.find_optimal_route(&"Sıhhiye".to_string(), &"Törekent".to_string());
        assert!(!route.is_empty());
        assert_eq!(route.first().unwrap().as_str(), "M1_Line_station_1");
        assert_eq!(route.last().unwrap().as_str(), "M3_Branch_station_1");
    }

    #[test]
    fn loop_shortcut_joins_the_branch_ends() {
        let network = ankara_metro();
        let route =
            network.find_optimal_route(&"Çayyolu".to_string(), &"Törekent".to_string());
        assert_eq!(route.len(), 2);
    }

    #[test]
    fn bilkent_reaches_torekent_over_the_loop() {
        let network = ankara_metro();
        let route = network.find_optimal_route(&"Bilkent".to_string(), &"Törekent".to_string());
        let ids: Vec<&str> = route.iter().map(|id| id.as_str()).collect();
        assert_eq!(
            ids,
            [
                "M2_Branch_station_1",
                "M2_Branch_station_2",
                "M3_Branch_station_1",
            ]
        );
    }
}
