//! A transit-network-shaped container.
//!
//! Data items live in stations, stations are chained into tracks of four
//! kinds (main, branch, express, loop), and extra edges (junction branches,
//! transfers, express skips, loop shortcuts) knit the lines into one
//! network. On top of the topology sit a least-loaded insertion policy, a
//! greedy multi-edge-kind route search and statistics aggregation.

pub mod domain;
pub mod network;
pub mod render;
pub mod route;
pub mod sample;
