//! Best-first shortest-path search over effective road weights.
//!
//! Lazy-deletion Dijkstra: relaxation pushes duplicate heap entries instead
//! of decreasing keys in place, and a pop whose distance is worse than the
//! node's current best is discarded. Blocked roads are skipped entirely at
//! relaxation time, so they can never contribute to a finite total.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use crate::congestion::effective_weight;
use crate::error::NavError;
use crate::network::{LocationId, RoadNetwork};

/// A computed route: ordered stops from source to target and the total
/// effective cost of traversing them.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    pub stops: Vec<LocationId>,
    pub total_cost: f64,
}

/// Heap entry: the tentative distance to `node` at push time.
///
/// Ordered so `BinaryHeap` pops the smallest distance first. Entries
/// superseded by a later relaxation stay in the heap and are dropped on pop.
#[derive(Debug, Clone, Copy)]
struct QueueEntry {
    cost: f64,
    node: LocationId,
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueueEntry {}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: BinaryHeap is a max-heap, we want the cheapest entry on
        // top. Node id breaks cost ties to keep the ordering total.
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

/// Lowest-cost route from `source` to `target` under current road statuses.
///
/// Returns `Ok(None)` when no usable path exists. `source == target` yields
/// the single-stop route at cost 0 without consulting any road.
///
/// The search is stateless: each call allocates its own distance map,
/// parent map, and heap, and observes the network as it is at call time.
pub fn find_route(
    network: &RoadNetwork,
    source: LocationId,
    target: LocationId,
) -> Result<Option<Route>, NavError> {
    if !network.contains_location(source) {
        return Err(NavError::UnknownLocation(source));
    }
    if !network.contains_location(target) {
        return Err(NavError::UnknownLocation(target));
    }

    #[cfg(feature = "trace")]
    let _span =
        tracing::info_span!("find_route", source = source.0, target = target.0).entered();

    if source == target {
        return Ok(Some(Route {
            stops: vec![source],
            total_cost: 0.0,
        }));
    }

    let mut dist: HashMap<LocationId, f64> = HashMap::new();
    let mut parent: HashMap<LocationId, LocationId> = HashMap::new();
    let mut heap: BinaryHeap<QueueEntry> = BinaryHeap::new();

    dist.insert(source, 0.0);
    heap.push(QueueEntry {
        cost: 0.0,
        node: source,
    });

    while let Some(QueueEntry { cost, node }) = heap.pop() {
        // Lazy deletion: skip entries superseded by a cheaper relaxation.
        if dist.get(&node).is_some_and(|&best| cost > best) {
            continue;
        }
        // First pop of the target is its final distance.
        if node == target {
            break;
        }

        for (next, base, status) in network.neighbors(node) {
            let Some(weight) = effective_weight(base, status) else {
                continue;
            };
            let candidate = cost + weight;
            if dist.get(&next).is_none_or(|&current| candidate < current) {
                dist.insert(next, candidate);
                parent.insert(next, node);
                heap.push(QueueEntry {
                    cost: candidate,
                    node: next,
                });
            }
        }
    }

    let Some(&total_cost) = dist.get(&target) else {
        return Ok(None);
    };

    let mut stops = vec![target];
    let mut current = target;
    while let Some(&prev) = parent.get(&current) {
        stops.push(prev);
        current = prev;
    }
    stops.reverse();

    Ok(Some(Route { stops, total_cost }))
}
