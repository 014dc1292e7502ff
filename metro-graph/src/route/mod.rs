//! Route finding over the network.
//!
//! The search is a greedy breadth-first traversal, not Dijkstra: the
//! frontier is a FIFO queue, each expansion sorts only the freshly
//! generated candidates by accumulated cost before appending them, and a
//! station is expanded at most once. Costs steer which of a station's
//! neighbours are tried first but never reorder the queue as a whole, so
//! the first path to reach the destination wins even when a cheaper one is
//! still queued. This trades optimality for bounded, predictable work and
//! is the intended behaviour, not an approximation to fix.

mod cost;
mod search;

pub use cost::RouteCost;
