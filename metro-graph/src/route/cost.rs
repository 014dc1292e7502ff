//! Route cost arithmetic.
//!
//! Edge costs are fractional (an express hop is half a normal hop, the skip
//! pointer three tenths) but always exact tenths, so costs are fixed-point
//! tenths of a hop rather than floats. That keeps `Ord` — the search sorts
//! candidates by cost — without floating-point comparison.

use std::fmt;
use std::ops::Add;

/// Accumulated or incremental cost of moving through the network, in tenths
/// of a hop.
///
/// # Examples
///
/// ```
/// use metro_graph::route::RouteCost;
///
/// // An express hop is cheaper than a normal hop, the skip cheaper still.
/// assert!(RouteCost::EXPRESS_SKIP < RouteCost::EXPRESS_HOP);
/// assert!(RouteCost::EXPRESS_HOP < RouteCost::HOP);
///
/// let two_hops = RouteCost::HOP + RouteCost::HOP;
/// assert_eq!(two_hops.to_string(), "2.0");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RouteCost(u32);

impl RouteCost {
    /// No cost; the starting accumulated cost of a search.
    pub const ZERO: RouteCost = RouteCost(0);

    /// One ordinary hop along a main, branch or loop edge (1.0).
    pub const HOP: RouteCost = RouteCost(10);

    /// One hop along an express edge (0.5).
    pub const EXPRESS_HOP: RouteCost = RouteCost(5);

    /// Taking an express skip pointer (0.3).
    pub const EXPRESS_SKIP: RouteCost = RouteCost(3);

    /// The loop-specific surcharge hop (2.0).
    pub const LOOP_HOP: RouteCost = RouteCost(20);

    /// Cost of a transfer edge with the given stored whole-hop cost.
    pub fn transfer(cost: u32) -> RouteCost {
        RouteCost(cost.saturating_mul(10))
    }

    /// Raw value in tenths of a hop.
    pub fn tenths(self) -> u32 {
        self.0
    }
}

impl Add for RouteCost {
    type Output = RouteCost;

    fn add(self, rhs: RouteCost) -> RouteCost {
        RouteCost(self.0.saturating_add(rhs.0))
    }
}

impl fmt::Display for RouteCost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.0 / 10, self.0 % 10)
    }
}
