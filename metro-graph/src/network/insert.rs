//! Least-loaded placement of individual data items.

use tracing::debug;

use crate::domain::{Station, StationId, StationKind, TrackKind};
use crate::network::Network;

impl<T> Network<T> {
    /// Inserts one item, appending a station to the least-loaded line.
    ///
    /// An existing `preferred_line` wins regardless of its kind or load.
    /// Otherwise the target is the main or branch line with the fewest
    /// stations; among equally short lines the winner is unspecified.
    /// Express and loop tracks are never targeted. On an empty network a
    /// fresh main line `main_0` is opened for the item.
    ///
    /// The appended station is named `{track_id}_auto_{n}` (`n` the track's
    /// station count before the append), chained to the previous end of the
    /// line via the track's own edge kind, and takes over the terminal tag
    /// from it. Appending to a registered but empty track leaves the new
    /// station unlinked and untagged.
    ///
    /// Returns the id of the station holding the item.
    pub fn insert_data_optimally(&mut self, item: T, preferred_line: Option<&str>) -> StationId {
        let picked = preferred_line
            .and_then(|line| self.tracks.get(line))
            .or_else(|| {
                self.tracks
                    .values()
                    .filter(|track| matches!(track.kind(), TrackKind::Main | TrackKind::Branch))
                    .min_by_key(|track| track.len())
            });

        let Some(track) = picked else {
            debug!("no main or branch line yet, opening main_0");
            let track = self.create_main_line("main_0", vec![item], "blue");
            // The fresh line holds exactly the one station just created.
            return track.stations()[0].clone();
        };
        let track_id = track.id().clone();
        let kind = track.kind();
        let color = track.color().to_string();
        let position = track.len();
        let last_id = track.stations().last().cloned();

        let id = StationId::from(format!("{track_id}_auto_{position}"));
        let kind_tag = if last_id.is_some() {
            StationKind::Terminal
        } else {
            StationKind::Regular
        };
        let mut station = Station::new(id.clone(), item, kind_tag);
        station.line_colors.insert(color);
        self.stations.insert(id.clone(), station);

        if let Some(last) = &last_id {
            if let Some(previous_end) = self.stations.get_mut(last.as_str()) {
                if previous_end.kind == StationKind::Terminal {
                    previous_end.kind = StationKind::Regular;
                }
            }
            self.chain(kind, last, &id);
        }

        if let Some(track) = self.tracks.get_mut(track_id.as_str()) {
            track.stations.push(id.clone());
        }
        self.total_data_items += 1;
        debug!(station = %id, track = %track_id, "inserted item");
        id
    }
}
