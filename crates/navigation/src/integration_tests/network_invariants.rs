//! Store-level invariants: undirected consistency, idempotence, and
//! all-or-nothing mutation failure.

use crate::congestion::RoadStatus;
use crate::network::{LocationId, RoadNetwork};
use crate::routing::find_route;

use super::seed_network;

fn id(n: u32) -> LocationId {
    LocationId(n)
}

/// Flat comparable snapshot of every road.
fn edge_snapshot(network: &RoadNetwork) -> Vec<(u32, u32, f64, RoadStatus)> {
    network
        .enumerate_edges()
        .map(|(a, b, edge)| (a.0, b.0, edge.base_cost, edge.status))
        .collect()
}

/// Assert that the status of every road agrees between both endpoints'
/// adjacency views and both `road_status` orientations.
fn assert_views_consistent(network: &RoadNetwork) {
    for (a, b, edge) in network.enumerate_edges() {
        let from_a = network
            .neighbors(a)
            .find(|(n, _, _)| *n == b)
            .expect("edge visible from a");
        let from_b = network
            .neighbors(b)
            .find(|(n, _, _)| *n == a)
            .expect("edge visible from b");
        assert_eq!(from_a.2, edge.status);
        assert_eq!(from_b.2, edge.status);
        assert_eq!(network.road_status(a, b), Some(edge.status));
        assert_eq!(network.road_status(b, a), Some(edge.status));
    }
}

#[test]
fn test_seed_city_views_consistent() {
    assert_views_consistent(&seed_network());
}

#[test]
fn test_views_consistent_after_update_sequence() {
    let mut network = seed_network();
    let updates = [
        (0, 2, RoadStatus::Heavy),
        (2, 0, RoadStatus::Moderate),
        (3, 4, RoadStatus::Blocked),
        (4, 3, RoadStatus::Clear),
        (0, 1, RoadStatus::Blocked),
    ];
    for (a, b, status) in updates {
        network.update_status(id(a), id(b), status).unwrap();
        assert_views_consistent(&network);
    }
    // Last writer wins, regardless of orientation.
    assert_eq!(network.road_status(id(0), id(2)), Some(RoadStatus::Moderate));
    assert_eq!(network.road_status(id(3), id(4)), Some(RoadStatus::Clear));
}

#[test]
fn test_update_status_is_idempotent() {
    let mut network = seed_network();
    network
        .update_status(id(0), id(2), RoadStatus::Heavy)
        .unwrap();
    let once = edge_snapshot(&network);
    network
        .update_status(id(0), id(2), RoadStatus::Heavy)
        .unwrap();
    assert_eq!(edge_snapshot(&network), once);
}

#[test]
fn test_restoring_status_restores_routing_results() {
    let mut network = seed_network();
    let baseline: Vec<_> = (0..5)
        .flat_map(|s| (0..5).map(move |t| (s, t)))
        .map(|(s, t)| find_route(&network, id(s), id(t)).unwrap())
        .collect();

    network
        .update_status(id(2), id(3), RoadStatus::Blocked)
        .unwrap();
    network
        .update_status(id(2), id(3), RoadStatus::Clear)
        .unwrap();

    let restored: Vec<_> = (0..5)
        .flat_map(|s| (0..5).map(move |t| (s, t)))
        .map(|(s, t)| find_route(&network, id(s), id(t)).unwrap())
        .collect();
    assert_eq!(baseline, restored);
}

#[test]
fn test_failed_mutations_leave_store_unchanged() {
    let mut network = seed_network();
    let before = edge_snapshot(&network);
    let labels_before: Vec<_> = network
        .locations()
        .map(|(i, l)| (i, l.to_string()))
        .collect();

    // Every failure mode in turn.
    assert!(network.add_location(id(0), "Imposter").is_err());
    assert!(network.add_road(id(0), id(1), 99.0).is_err());
    assert!(network.add_road(id(0), id(0), 1.0).is_err());
    assert!(network.add_road(id(0), id(9), 1.0).is_err());
    assert!(network.add_road(id(0), id(4), -1.0).is_err());
    assert!(network
        .update_status(id(1), id(2), RoadStatus::Blocked)
        .is_err());

    assert_eq!(edge_snapshot(&network), before);
    let labels_after: Vec<_> = network
        .locations()
        .map(|(i, l)| (i, l.to_string()))
        .collect();
    assert_eq!(labels_after, labels_before);

    // Routing is unaffected too.
    let route = find_route(&network, id(0), id(4)).unwrap().unwrap();
    assert!((route.total_cost - 25.0).abs() < 1e-9);
}

#[test]
fn test_update_is_immediately_observable() {
    let mut network = seed_network();
    network
        .update_status(id(2), id(3), RoadStatus::Blocked)
        .unwrap();
    // Next enumeration and next route query both see the write.
    let (_, _, edge) = network
        .enumerate_edges()
        .find(|&(a, b, _)| (a.0, b.0) == (2, 3))
        .unwrap();
    assert_eq!(edge.status, RoadStatus::Blocked);
    let route = find_route(&network, id(0), id(4)).unwrap().unwrap();
    assert_eq!(
        route.stops.iter().map(|s| s.0).collect::<Vec<_>>(),
        vec![0, 3, 4]
    );
}

#[test]
fn test_growing_the_network_reroutes() {
    // A new shortcut road immediately participates in routing.
    let mut network = seed_network();
    network.add_location(id(5), "Bypass_Junction").unwrap();
    network.add_road(id(0), id(5), 2.0).unwrap();
    network.add_road(id(5), id(4), 2.0).unwrap();

    let route = find_route(&network, id(0), id(4)).unwrap().unwrap();
    assert_eq!(
        route.stops.iter().map(|s| s.0).collect::<Vec<_>>(),
        vec![0, 5, 4]
    );
    assert!((route.total_cost - 4.0).abs() < 1e-9);
}
