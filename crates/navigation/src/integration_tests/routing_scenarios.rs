//! Pinned route scenarios on the seed city.
//!
//! Expected paths and costs are fixed numbers; a wrong multiplier, a
//! premature search cutoff, or a finite "blocked" weight shows up here.

use crate::congestion::{effective_weight, RoadStatus};
use crate::network::{LocationId, RoadNetwork};
use crate::routing::{find_route, Route};

use super::seed_network;

fn id(n: u32) -> LocationId {
    LocationId(n)
}

fn stops(route: &Route) -> Vec<u32> {
    route.stops.iter().map(|s| s.0).collect()
}

/// Recompute a route's cost from the store, edge by edge.
fn cost_from_edges(network: &RoadNetwork, route: &Route) -> f64 {
    route
        .stops
        .windows(2)
        .map(|pair| {
            let (next, base, status) = network
                .neighbors(pair[0])
                .find(|(n, _, _)| *n == pair[1])
                .expect("consecutive stops must be connected");
            assert_eq!(next, pair[1]);
            effective_weight(base, status).expect("route must avoid blocked roads")
        })
        .sum()
}

#[test]
fn test_all_clear_hub_to_south_station() {
    let network = seed_network();
    let route = find_route(&network, id(0), id(4)).unwrap().unwrap();
    assert_eq!(stops(&route), vec![0, 2, 3, 4]);
    assert!((route.total_cost - 25.0).abs() < 1e-9);
}

#[test]
fn test_all_clear_airport_to_east_gate_finds_the_cheaper_detour() {
    // 1 -> 0 -> 3 costs 35; the optimum threads through West_End for 30.
    // A search that stops at the first settled candidate gets this wrong.
    let network = seed_network();
    let route = find_route(&network, id(1), id(3)).unwrap().unwrap();
    assert_eq!(stops(&route), vec![1, 0, 2, 3]);
    assert!((route.total_cost - 30.0).abs() < 1e-9);
}

#[test]
fn test_heavy_west_road_makes_direct_road_win() {
    // 0-2 at Heavy: 10 × 3.5 + 5 = 40 loses to the direct 0-3 at 20.
    let mut network = seed_network();
    network
        .update_status(id(0), id(2), RoadStatus::Heavy)
        .unwrap();
    let route = find_route(&network, id(0), id(3)).unwrap().unwrap();
    assert_eq!(stops(&route), vec![0, 3]);
    assert!((route.total_cost - 20.0).abs() < 1e-9);
}

#[test]
fn test_blocked_west_east_road_reroutes_via_east_gate() {
    let mut network = seed_network();
    network
        .update_status(id(2), id(3), RoadStatus::Blocked)
        .unwrap();
    let route = find_route(&network, id(0), id(4)).unwrap().unwrap();
    assert_eq!(stops(&route), vec![0, 3, 4]);
    assert!((route.total_cost - 30.0).abs() < 1e-9);
}

#[test]
fn test_blocking_every_hub_road_isolates_the_hub() {
    let mut network = seed_network();
    for other in [1, 2, 3] {
        network
            .update_status(id(0), id(other), RoadStatus::Blocked)
            .unwrap();
    }
    assert_eq!(find_route(&network, id(0), id(4)).unwrap(), None);
    // The rest of the network still routes.
    let route = find_route(&network, id(2), id(4)).unwrap().unwrap();
    assert_eq!(stops(&route), vec![2, 3, 4]);
}

#[test]
fn test_moderate_west_road_keeps_direct_road_optimal() {
    // 0-2 at Moderate: 10 × 1.8 + 5 = 23 still loses to the direct 20.
    let mut network = seed_network();
    network
        .update_status(id(0), id(2), RoadStatus::Moderate)
        .unwrap();
    let route = find_route(&network, id(0), id(3)).unwrap().unwrap();
    assert_eq!(stops(&route), vec![0, 3]);
    assert!((route.total_cost - 20.0).abs() < 1e-9);
}

#[test]
fn test_route_to_self_is_single_stop_and_free() {
    let network = seed_network();
    for n in 0..5 {
        let route = find_route(&network, id(n), id(n)).unwrap().unwrap();
        assert_eq!(stops(&route), vec![n]);
        assert_eq!(route.total_cost, 0.0);
    }
}

#[test]
fn test_route_to_self_ignores_blocked_surroundings() {
    let mut network = seed_network();
    for other in [1, 2, 3] {
        network
            .update_status(id(0), id(other), RoadStatus::Blocked)
            .unwrap();
    }
    let route = find_route(&network, id(0), id(0)).unwrap().unwrap();
    assert_eq!(stops(&route), vec![0]);
    assert_eq!(route.total_cost, 0.0);
}

#[test]
fn test_reported_cost_matches_edge_by_edge_sum() {
    let mut network = seed_network();
    network
        .update_status(id(0), id(2), RoadStatus::Moderate)
        .unwrap();
    network
        .update_status(id(3), id(4), RoadStatus::Heavy)
        .unwrap();

    for s in 0..5 {
        for t in 0..5 {
            if let Some(route) = find_route(&network, id(s), id(t)).unwrap() {
                let recomputed = cost_from_edges(&network, &route);
                assert!(
                    (route.total_cost - recomputed).abs() < 1e-9,
                    "{s}->{t}: reported {} but edges sum to {recomputed}",
                    route.total_cost
                );
            }
        }
    }
}

#[test]
fn test_routes_are_symmetric_in_cost() {
    // Undirected network: s->t and t->s cost the same.
    let mut network = seed_network();
    network
        .update_status(id(1), id(4), RoadStatus::Heavy)
        .unwrap();
    for s in 0..5 {
        for t in 0..5 {
            let forward = find_route(&network, id(s), id(t)).unwrap();
            let back = find_route(&network, id(t), id(s)).unwrap();
            match (forward, back) {
                (Some(f), Some(b)) => {
                    assert!((f.total_cost - b.total_cost).abs() < 1e-9)
                }
                (None, None) => {}
                (f, b) => panic!("{s}<->{t} asymmetric reachability: {f:?} vs {b:?}"),
            }
        }
    }
}
