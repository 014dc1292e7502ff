//! Textual rendering of a network's track layout.
//!
//! Presentation only: everything here reads the public accessors and owns no
//! state. Tracks render sorted by id so the output is stable across runs
//! even though the underlying maps are unordered.

use crate::domain::{StationKind, Track, TrackKind};
use crate::network::Network;

/// Renders every track as a header line plus its chain of stations.
///
/// Station markers encode the current kind: `[T]`erminal, `[J]`unction,
/// `[E]`xpress, transfer `[X]`, and `[ ]` for regular stations. Express
/// tracks join their stations with `═══`, all others with `───`.
pub fn network_structure<T>(network: &Network<T>) -> String {
    let mut out = String::from("=== NETWORK STRUCTURE ===\n\n");

    let mut tracks: Vec<&Track> = network.tracks().collect();
    tracks.sort_by(|a, b| a.id().cmp(b.id()));

    for track in tracks {
        out.push_str(&format!(
            "{} LINE: {} ({})\n",
            track.kind().as_str().to_uppercase(),
            track.id(),
            track.color()
        ));

        let connector = if track.kind() == TrackKind::Express {
            "═══"
        } else {
            "───"
        };
        let mut row = String::from("  ");
        for (i, id) in track.stations().iter().enumerate() {
            let mark = network
                .station(id.as_str())
                .map(|station| marker(station.kind()))
                .unwrap_or("[?]");
            row.push_str(mark);
            row.push_str(id.as_str());
            if i + 1 < track.stations().len() {
                row.push_str(connector);
            }
        }
        out.push_str(&row);
        out.push_str("\n\n");
    }

    out
}

fn marker(kind: StationKind) -> &'static str {
    match kind {
        StationKind::Terminal => "[T]",
        StationKind::Junction => "[J]",
        StationKind::Express => "[E]",
        StationKind::Transfer => "[X]",
        StationKind::Regular => "[ ]",
    }
}
