//! Track types: ordered, colored lines grouping stations.
//!
//! A `Track` records which stations were appended to a line and in what
//! order. The edges between stations live on the stations themselves; the
//! track's sequence is construction history, not connectivity.

use std::borrow::Borrow;
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use super::StationId;

/// Unique identifier of a track within a network.
///
/// # Examples
///
/// ```
/// use metro_graph::domain::TrackId;
///
/// let id = TrackId::from("M1_Line");
/// assert_eq!(id.as_str(), "M1_Line");
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TrackId(Arc<str>);

impl TrackId {
    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TrackId {
    fn from(value: &str) -> Self {
        TrackId(Arc::from(value))
    }
}

impl From<String> for TrackId {
    fn from(value: String) -> Self {
        TrackId(Arc::from(value))
    }
}

impl Borrow<str> for TrackId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TrackId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TrackId({})", self.0)
    }
}

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Kind of a track, doubling as the edge kind on stations.
///
/// A closed enumeration: stations index their per-kind edge slots by it, and
/// the statistics histogram is keyed by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackKind {
    /// Ordinary line built station by station.
    Main,
    /// Line originating at a junction on another line.
    Branch,
    /// Overlay line connecting selected stops of a main line.
    Express,
    /// One-directional "U" shortcut between two stations.
    Loop,
}

impl TrackKind {
    /// Number of kinds; sizes the per-station edge slot arrays.
    pub const COUNT: usize = 4;

    /// All kinds in declaration order.
    pub const ALL: [TrackKind; TrackKind::COUNT] = [
        TrackKind::Main,
        TrackKind::Branch,
        TrackKind::Express,
        TrackKind::Loop,
    ];

    /// Slot index of this kind.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Lowercase name, used in rendered output and serialized histograms.
    pub fn as_str(self) -> &'static str {
        match self {
            TrackKind::Main => "main",
            TrackKind::Branch => "branch",
            TrackKind::Express => "express",
            TrackKind::Loop => "loop",
        }
    }
}

impl fmt::Display for TrackKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An ordered, named, colored line of stations sharing one edge kind.
///
/// The station sequence reflects only the order in which stations were
/// appended to this track.
#[derive(Debug, Clone)]
pub struct Track {
    pub(crate) id: TrackId,
    pub(crate) kind: TrackKind,
    pub(crate) color: String,
    pub(crate) stations: Vec<StationId>,
    pub(crate) express_stops: HashSet<StationId>,
    pub(crate) bidirectional: bool,
}

impl Track {
    pub(crate) fn new(id: TrackId, kind: TrackKind, color: &str) -> Self {
        Self {
            id,
            kind,
            color: color.to_string(),
            stations: Vec::new(),
            express_stops: HashSet::new(),
            bidirectional: true,
        }
    }

    /// The track's identifier.
    pub fn id(&self) -> &TrackId {
        &self.id
    }

    /// The track's kind.
    pub fn kind(&self) -> TrackKind {
        self.kind
    }

    /// Display color of the line.
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Stations on this track, in append order.
    pub fn stations(&self) -> &[StationId] {
        &self.stations
    }

    /// Number of stations on this track.
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Returns true if the track has no stations.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Returns true if `station_id` is an express stop of this track.
    pub fn is_express_stop(&self, station_id: &str) -> bool {
        self.express_stops.contains(station_id)
    }

    /// The subset of this track's stations marked as express stops.
    pub fn express_stops(&self) -> &HashSet<StationId> {
        &self.express_stops
    }

    /// Whether the line runs both ways (always true in practice).
    pub fn is_bidirectional(&self) -> bool {
        self.bidirectional
    }
}
