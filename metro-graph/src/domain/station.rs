//! Station types: the nodes of the network.
//!
//! A `Station` holds one data item plus its typed edges. Edges are stored on
//! the station itself (per-kind successor/predecessor slots, branch and
//! transfer lists), not derived from track membership at query time.

use std::borrow::Borrow;
use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use super::TrackKind;

/// Unique identifier of a station within a network.
///
/// Wraps `Arc<str>` so that cloning is cheap: route search clones the
/// path-so-far (a `Vec<StationId>`) for every frontier candidate.
///
/// Identifiers are generated by the network's construction operations
/// (`{line_id}_station_{i}`, `{track_id}_auto_{n}`) and are never reused.
///
/// # Examples
///
/// ```
/// use metro_graph::domain::StationId;
///
/// let id = StationId::from("M1_Line_station_0");
/// assert_eq!(id.as_str(), "M1_Line_station_0");
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StationId(Arc<str>);

impl StationId {
    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for StationId {
    fn from(value: &str) -> Self {
        StationId(Arc::from(value))
    }
}

impl From<String> for StationId {
    fn from(value: String) -> Self {
        StationId(Arc::from(value))
    }
}

impl Borrow<str> for StationId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for StationId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Role a station currently plays in the network.
///
/// Advisory metadata, not an exclusive partition: a junction can also carry
/// transfers. Construction operations reassign it in place, last write wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StationKind {
    /// Ordinary intermediate station.
    Regular,
    /// A branch line originates here.
    Junction,
    /// Start or end of a line.
    Terminal,
    /// Stop on an express line.
    Express,
    /// Endpoint of a transfer connection.
    Transfer,
}

impl StationKind {
    /// Lowercase name, matching the track-kind naming used in output.
    pub fn as_str(self) -> &'static str {
        match self {
            StationKind::Regular => "regular",
            StationKind::Junction => "junction",
            StationKind::Terminal => "terminal",
            StationKind::Express => "express",
            StationKind::Transfer => "transfer",
        }
    }
}

impl fmt::Display for StationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-kind successor (or predecessor) slots.
///
/// A station has at most one neighbour per track kind, so edges are a
/// fixed-size record indexed by the closed `TrackKind` enumeration rather
/// than a growable map. Lookup by kind is O(1).
#[derive(Debug, Clone, Default)]
pub struct EdgeMap {
    slots: [Option<StationId>; TrackKind::COUNT],
}

impl EdgeMap {
    /// Returns the neighbour for `kind`, if one is set.
    pub fn get(&self, kind: TrackKind) -> Option<&StationId> {
        self.slots[kind.index()].as_ref()
    }

    /// Sets the neighbour for `kind`, replacing any previous one.
    pub fn set(&mut self, kind: TrackKind, id: StationId) {
        self.slots[kind.index()] = Some(id);
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Returns true if no slot is occupied.
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(|slot| slot.is_none())
    }

    /// Iterates occupied slots in `TrackKind` declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (TrackKind, &StationId)> {
        TrackKind::ALL
            .iter()
            .filter_map(|&kind| self.get(kind).map(|id| (kind, id)))
    }
}

/// A cost-weighted transfer edge to another station.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transfer {
    /// Destination station.
    pub to: StationId,
    /// Cost of making the transfer, in whole hops.
    pub cost: u32,
}

/// A node of the network: one data item plus its typed edges.
///
/// Stations are created exclusively by [`Network`](crate::network::Network)
/// construction operations; the payload is never mutated after creation,
/// while the kind and edge fields may be reassigned by later construction
/// calls (e.g. attaching a branch turns a regular station into a junction).
#[derive(Debug, Clone)]
pub struct Station<T> {
    pub(crate) id: StationId,
    pub(crate) payload: T,
    pub(crate) kind: StationKind,
    pub(crate) next: EdgeMap,
    pub(crate) prev: EdgeMap,
    pub(crate) branches: Vec<StationId>,
    pub(crate) express_skip: Option<StationId>,
    pub(crate) transfers: Vec<Transfer>,
    pub(crate) line_colors: BTreeSet<String>,
}

impl<T> Station<T> {
    pub(crate) fn new(id: StationId, payload: T, kind: StationKind) -> Self {
        Self {
            id,
            payload,
            kind,
            next: EdgeMap::default(),
            prev: EdgeMap::default(),
            branches: Vec::new(),
            express_skip: None,
            transfers: Vec::new(),
            line_colors: BTreeSet::new(),
        }
    }

    /// The station's identifier.
    pub fn id(&self) -> &StationId {
        &self.id
    }

    /// The data item stored at this station.
    pub fn payload(&self) -> &T {
        &self.payload
    }

    /// The role this station currently plays (last write wins).
    pub fn kind(&self) -> StationKind {
        self.kind
    }

    /// Per-kind successors.
    pub fn next(&self) -> &EdgeMap {
        &self.next
    }

    /// Per-kind predecessors.
    pub fn prev(&self) -> &EdgeMap {
        &self.prev
    }

    /// Stations that begin a branch line originating here, in attach order.
    pub fn branches(&self) -> &[StationId] {
        &self.branches
    }

    /// Express shortcut to the next express stop, if this station has one.
    pub fn express_skip(&self) -> Option<&StationId> {
        self.express_skip.as_ref()
    }

    /// Transfer edges leaving this station.
    pub fn transfers(&self) -> &[Transfer] {
        &self.transfers
    }

    /// Colors of every line passing through this station.
    pub fn line_colors(&self) -> &BTreeSet<String> {
        &self.line_colors
    }

    /// Total number of edges touching this station: occupied next and prev
    /// slots plus branch and transfer entries. Feeds the network's average
    /// connectivity statistic.
    pub fn connection_count(&self) -> usize {
        self.next.len() + self.prev.len() + self.branches.len() + self.transfers.len()
    }
}
