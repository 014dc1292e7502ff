//! Greedy breadth-first route search.

use std::collections::{HashSet, VecDeque};

use tracing::{debug, trace};

use crate::domain::{Station, StationId, TrackKind};
use crate::network::Network;
use crate::route::RouteCost;

/// One frontier entry: a station reached by `path` at accumulated `cost`.
struct RouteState {
    station: StationId,
    path: Vec<StationId>,
    cost: RouteCost,
}

impl RouteState {
    fn start(station: &StationId) -> RouteState {
        RouteState {
            station: station.clone(),
            path: vec![station.clone()],
            cost: RouteCost::ZERO,
        }
    }

    fn step_to(&self, next: &StationId, step: RouteCost) -> RouteState {
        let mut path = self.path.clone();
        path.push(next.clone());
        RouteState {
            station: next.clone(),
            path,
            cost: self.cost + step,
        }
    }
}

impl<T: PartialEq> Network<T> {
    /// Finds a route between the stations holding two items.
    ///
    /// Items are located by equality against station payloads; when several
    /// stations hold an equal payload, an arbitrary one of them anchors the
    /// search. The returned path lists station ids from start to end
    /// inclusive, so a route from an item to itself is a single-station
    /// path. An empty vector means either item was not found or no
    /// connection exists.
    ///
    /// Traversal is directed: it follows forward chain edges, express
    /// skips, branch entries, loop edges and transfers, and never walks a
    /// chain against its travel direction. Transfers are symmetric, so
    /// they are the one way back.
    ///
    /// The path is found greedily (see the [module docs](crate::route)) and
    /// is not guaranteed to be the cheapest one.
    pub fn find_optimal_route(&self, start_item: &T, end_item: &T) -> Vec<StationId> {
        let Some(start) = self.find_station_by_payload(start_item) else {
            return Vec::new();
        };
        let Some(end) = self.find_station_by_payload(end_item) else {
            return Vec::new();
        };
        let end_id = end.id().clone();

        let mut visited: HashSet<StationId> = HashSet::new();
        let mut frontier: VecDeque<RouteState> = VecDeque::new();
        frontier.push_back(RouteState::start(start.id()));
        let mut expanded = 0usize;

        while let Some(state) = frontier.pop_front() {
            if visited.contains(&state.station) {
                continue;
            }
            visited.insert(state.station.clone());

            if state.station == end_id {
                debug!(
                    expanded,
                    hops = state.path.len() - 1,
                    cost = %state.cost,
                    "route found"
                );
                return state.path;
            }

            let Some(current) = self.station(state.station.as_str()) else {
                continue;
            };
            expanded += 1;
            trace!(
                station = %state.station,
                frontier = frontier.len(),
                cost = %state.cost,
                "expanding station"
            );

            let mut candidates: Vec<RouteState> = Vec::new();

            // 1. Follow each per-kind edge; express ones ride faster.
            for (kind, next) in current.next().iter() {
                if visited.contains(next) {
                    continue;
                }
                let step = if kind == TrackKind::Express {
                    RouteCost::EXPRESS_HOP
                } else {
                    RouteCost::HOP
                };
                candidates.push(state.step_to(next, step));
            }

            // 2. Take the express skip pointer.
            if let Some(skip) = current.express_skip() {
                if !visited.contains(skip) {
                    candidates.push(state.step_to(skip, RouteCost::EXPRESS_SKIP));
                }
            }

            // 3. Enter branches at a junction.
            for branch in current.branches() {
                if !visited.contains(branch) {
                    candidates.push(state.step_to(branch, RouteCost::HOP));
                }
            }

            // 4. Change lines over transfer edges.
            for transfer in current.transfers() {
                if !visited.contains(&transfer.to) {
                    candidates.push(state.step_to(&transfer.to, RouteCost::transfer(transfer.cost)));
                }
            }

            // 5. The loop edge once more, at its surcharge. Step 1 already
            // offered it at the ordinary rate; both entries stay queued.
            if let Some(next) = current.next().get(TrackKind::Loop) {
                if !visited.contains(next) {
                    candidates.push(state.step_to(next, RouteCost::LOOP_HOP));
                }
            }

            // Stable sort: equal costs keep the enumeration order above.
            candidates.sort_by_key(|candidate| candidate.cost);
            frontier.extend(candidates);
        }

        debug!(expanded, "frontier exhausted, no route");
        Vec::new()
    }

    fn find_station_by_payload(&self, payload: &T) -> Option<&Station<T>> {
        self.stations().find(|station| station.payload() == payload)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Along one main line, every downstream station is reachable and
        /// every upstream one is not; reachable paths never revisit a
        /// station.
        #[test]
        fn main_line_routes_run_with_the_chain(
            len in 1usize..12,
            from in 0usize..12,
            to in 0usize..12,
        ) {
            let from = from % len;
            let to = to % len;
            let items: Vec<String> = (0..len).map(|i| format!("item_{i}")).collect();
            let mut network = Network::new();
            network.create_main_line("M1", items, "blue");

            let route = network.find_optimal_route(
                &format!("item_{from}"),
                &format!("item_{to}"),
            );
            if from <= to {
                prop_assert_eq!(route.len(), to - from + 1);
                prop_assert_eq!(route.first().unwrap().as_str(), format!("M1_station_{from}"));
                prop_assert_eq!(route.last().unwrap().as_str(), format!("M1_station_{to}"));
                let mut seen = std::collections::HashSet::new();
                for id in &route {
                    prop_assert!(seen.insert(id.clone()), "revisited {}", id);
                }
            } else {
                prop_assert!(route.is_empty());
            }
        }

        /// Consecutive stations of a returned path are always joined by a
        /// forward traversal option.
        #[test]
        fn paths_follow_real_edges(len in 2usize..10, extra in 0usize..5) {
            let items: Vec<String> = (0..len).map(|i| format!("item_{i}")).collect();
            let mut network = Network::new();
            network.create_main_line("M1", items, "blue");
            for i in 0..extra {
                network.insert_data_optimally(format!("extra_{i}"), None);
            }

            let route = network.find_optimal_route(
                &"item_0".to_string(),
                &format!("item_{}", len - 1),
            );
            prop_assert!(!route.is_empty());
            for pair in route.windows(2) {
                let here = network.station(pair[0].as_str()).unwrap();
                let next = &pair[1];
                let joined = here.next().iter().any(|(_, id)| id == next)
                    || here.branches().contains(next)
                    || here.transfers().iter().any(|t| &t.to == next)
                    || here.express_skip() == Some(next);
                prop_assert!(joined, "{} -> {} has no edge", pair[0], next);
            }
        }
    }
}
