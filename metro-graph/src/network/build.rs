//! Incremental construction of lines and connections.
//!
//! Every operation here validates its anchors before touching the network,
//! so a returned error leaves the network exactly as it was. Station
//! identifiers are derived from the owning track id and are not checked for
//! collisions; reusing a line id overwrites the earlier stations.

use tracing::debug;

use crate::domain::{
    NetworkError, Station, StationId, StationKind, Track, TrackId, TrackKind, Transfer,
};
use crate::network::Network;

impl<T> Network<T> {
    /// Creates a main line of `items.len()` stations chained in order.
    ///
    /// Station ids are `{line_id}_station_{i}`. The first and last stations
    /// are tagged [`StationKind::Terminal`], interior ones
    /// [`StationKind::Regular`]; a single-station line is a terminal on its
    /// own.
    pub fn create_main_line(&mut self, line_id: &str, items: Vec<T>, color: &str) -> &Track {
        let mut track = Track::new(TrackId::from(line_id), TrackKind::Main, color);
        let item_count = items.len();
        let last_index = item_count.saturating_sub(1);
        let mut prev_id: Option<StationId> = None;

        for (i, item) in items.into_iter().enumerate() {
            let id = StationId::from(format!("{line_id}_station_{i}"));
            let kind = if i == 0 || i == last_index {
                StationKind::Terminal
            } else {
                StationKind::Regular
            };
            let mut station = Station::new(id.clone(), item, kind);
            station.line_colors.insert(color.to_string());
            self.stations.insert(id.clone(), station);
            if let Some(prev) = &prev_id {
                self.chain(TrackKind::Main, prev, &id);
            }
            track.stations.push(id.clone());
            prev_id = Some(id);
        }

        self.total_data_items += item_count;
        debug!(line = line_id, stations = item_count, "created main line");
        self.register_track(track)
    }

    /// Creates a branch line hanging off an existing station.
    ///
    /// The anchor station is retagged [`StationKind::Junction`] and records
    /// the branch's first station in its branch list. Branch stations are
    /// chained with [`TrackKind::Branch`] edges starting from the junction;
    /// only the last one is a terminal. The junction itself is not part of
    /// the branch track and does not pick up its color.
    ///
    /// # Errors
    ///
    /// [`NetworkError::StationNotFound`] if the junction station does not
    /// exist; the network is left unchanged.
    pub fn create_branch_line(
        &mut self,
        branch_id: &str,
        junction_station_id: &str,
        items: Vec<T>,
        color: &str,
    ) -> Result<&Track, NetworkError> {
        let Some(junction) = self.stations.get_mut(junction_station_id) else {
            return Err(NetworkError::StationNotFound(StationId::from(
                junction_station_id,
            )));
        };
        junction.kind = StationKind::Junction;
        let junction_id = junction.id.clone();

        let mut track = Track::new(TrackId::from(branch_id), TrackKind::Branch, color);
        let item_count = items.len();
        let last_index = item_count.saturating_sub(1);
        let mut prev_id = junction_id.clone();

        for (i, item) in items.into_iter().enumerate() {
            let id = StationId::from(format!("{branch_id}_station_{i}"));
            let kind = if i == last_index {
                StationKind::Terminal
            } else {
                StationKind::Regular
            };
            let mut station = Station::new(id.clone(), item, kind);
            station.line_colors.insert(color.to_string());
            self.stations.insert(id.clone(), station);
            self.chain(TrackKind::Branch, &prev_id, &id);
            if i == 0 {
                if let Some(junction) = self.stations.get_mut(junction_id.as_str()) {
                    junction.branches.push(id.clone());
                }
            }
            track.stations.push(id.clone());
            prev_id = id;
        }

        self.total_data_items += item_count;
        debug!(
            branch = branch_id,
            junction = junction_station_id,
            stations = item_count,
            "created branch line"
        );
        Ok(self.register_track(track))
    }

    /// Creates an express overlay on top of an existing main line.
    ///
    /// `station_indices` select stations of the main line by position;
    /// out-of-range indices are skipped without error. Selected stations are
    /// retagged [`StationKind::Express`], chained with
    /// [`TrackKind::Express`] edges, and each non-final stop records the
    /// following one as its express shortcut. No new stations or items are
    /// created.
    ///
    /// # Errors
    ///
    /// [`NetworkError::TrackNotFound`] if the main line does not exist.
    pub fn create_express_line(
        &mut self,
        express_id: &str,
        main_line_id: &str,
        station_indices: &[usize],
        color: &str,
    ) -> Result<&Track, NetworkError> {
        let main_stations: Vec<StationId> = match self.tracks.get(main_line_id) {
            Some(track) => track.stations.clone(),
            None => {
                return Err(NetworkError::TrackNotFound(TrackId::from(main_line_id)));
            }
        };

        let mut track = Track::new(TrackId::from(express_id), TrackKind::Express, color);
        let mut prev_stop: Option<StationId> = None;

        for &index in station_indices {
            let Some(id) = main_stations.get(index) else {
                continue;
            };
            if let Some(station) = self.stations.get_mut(id.as_str()) {
                station.kind = StationKind::Express;
                station.line_colors.insert(color.to_string());
            }
            if let Some(prev) = &prev_stop {
                self.chain(TrackKind::Express, prev, id);
                if let Some(station) = self.stations.get_mut(prev.as_str()) {
                    station.express_skip = Some(id.clone());
                }
            }
            track.stations.push(id.clone());
            track.express_stops.insert(id.clone());
            prev_stop = Some(id.clone());
        }

        debug!(
            express = express_id,
            over = main_line_id,
            stops = track.stations.len(),
            "created express line"
        );
        Ok(self.register_track(track))
    }

    /// Creates a one-way loop shortcut from one station to another.
    ///
    /// The connection is a single directed [`TrackKind::Loop`] edge from
    /// `start_station_id` to `end_station_id`, recorded as a two-station
    /// track named `loop_{start}_{end}`. It does not cycle back.
    ///
    /// # Errors
    ///
    /// [`NetworkError::StationNotFound`] naming the first missing endpoint;
    /// the network is left unchanged.
    pub fn create_loop_connection(
        &mut self,
        start_station_id: &str,
        end_station_id: &str,
        color: &str,
    ) -> Result<&Track, NetworkError> {
        if !self.stations.contains_key(start_station_id) {
            return Err(NetworkError::StationNotFound(StationId::from(
                start_station_id,
            )));
        }
        if !self.stations.contains_key(end_station_id) {
            return Err(NetworkError::StationNotFound(StationId::from(
                end_station_id,
            )));
        }

        let start = StationId::from(start_station_id);
        let end = StationId::from(end_station_id);
        let loop_id = format!("loop_{start_station_id}_{end_station_id}");
        let mut track = Track::new(TrackId::from(loop_id), TrackKind::Loop, color);

        self.chain(TrackKind::Loop, &start, &end);
        for id in [&start, &end] {
            if let Some(station) = self.stations.get_mut(id.as_str()) {
                station.line_colors.insert(color.to_string());
            }
        }
        track.stations = vec![start, end];

        debug!(
            from = start_station_id,
            to = end_station_id,
            "created loop connection"
        );
        Ok(self.register_track(track))
    }

    /// Adds a symmetric transfer edge between two stations.
    ///
    /// Both stations record a [`Transfer`] to the other with the same cost
    /// and are retagged [`StationKind::Transfer`]. If either station is
    /// missing the call does nothing; no track is created either way.
    pub fn add_transfer_connection(&mut self, station1_id: &str, station2_id: &str, cost: u32) {
        let Some(id1) = self.stations.get(station1_id).map(|s| s.id.clone()) else {
            return;
        };
        let Some(id2) = self.stations.get(station2_id).map(|s| s.id.clone()) else {
            return;
        };

        if let Some(station) = self.stations.get_mut(id1.as_str()) {
            station.transfers.push(Transfer {
                to: id2.clone(),
                cost,
            });
            station.kind = StationKind::Transfer;
        }
        if let Some(station) = self.stations.get_mut(id2.as_str()) {
            station.transfers.push(Transfer { to: id1, cost });
            station.kind = StationKind::Transfer;
        }
        debug!(a = station1_id, b = station2_id, cost, "added transfer");
    }
}
