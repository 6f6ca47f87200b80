use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::congestion::RoadStatus;
use crate::error::NavError;

/// Stable integer id of a city location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LocationId(pub u32);

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Per-road state: the fixed base cost and the mutable traffic status.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RoadEdge {
    pub base_cost: f64,
    pub status: RoadStatus,
}

/// The road network: locations plus undirected, weighted roads.
///
/// Each road is stored once under its canonical `(min, max)` endpoint key,
/// with an adjacency index kept from both endpoints. Status updates touch
/// the single record, so the view from either endpoint can never disagree.
///
/// The store is the sole owner of graph state. All mutations validate first
/// and commit second; a failed call leaves the network untouched.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct RoadNetwork {
    locations: BTreeMap<LocationId, String>,
    adjacency: BTreeMap<LocationId, Vec<LocationId>>,
    edges: BTreeMap<(LocationId, LocationId), RoadEdge>,
}

/// Canonical key for an unordered endpoint pair.
fn edge_key(a: LocationId, b: LocationId) -> (LocationId, LocationId) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

impl RoadNetwork {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new location under `id`.
    pub fn add_location(
        &mut self,
        id: LocationId,
        label: impl Into<String>,
    ) -> Result<(), NavError> {
        let label = label.into();
        if label.is_empty() {
            return Err(NavError::InvalidLabel);
        }
        if self.locations.contains_key(&id) {
            return Err(NavError::DuplicateId(id));
        }
        self.locations.insert(id, label);
        self.adjacency.insert(id, Vec::new());
        Ok(())
    }

    /// Insert an undirected road between `a` and `b` with status Clear.
    pub fn add_road(
        &mut self,
        a: LocationId,
        b: LocationId,
        base_cost: f64,
    ) -> Result<(), NavError> {
        if a == b {
            return Err(NavError::SelfLoop(a));
        }
        if !self.locations.contains_key(&a) {
            return Err(NavError::UnknownLocation(a));
        }
        if !self.locations.contains_key(&b) {
            return Err(NavError::UnknownLocation(b));
        }
        // `!(x > 0.0)` also rejects NaN.
        if !base_cost.is_finite() || !(base_cost > 0.0) {
            return Err(NavError::InvalidCost(base_cost));
        }
        let key = edge_key(a, b);
        if self.edges.contains_key(&key) {
            return Err(NavError::DuplicateEdge(a, b));
        }

        self.edges.insert(
            key,
            RoadEdge {
                base_cost,
                status: RoadStatus::Clear,
            },
        );
        self.adjacency.entry(a).or_default().push(b);
        self.adjacency.entry(b).or_default().push(a);
        Ok(())
    }

    /// Set the traffic status of the road between `a` and `b`.
    ///
    /// The road is a single record indexed from both endpoints, so the
    /// update is observed identically from either side.
    pub fn update_status(
        &mut self,
        a: LocationId,
        b: LocationId,
        status: RoadStatus,
    ) -> Result<(), NavError> {
        match self.edges.get_mut(&edge_key(a, b)) {
            Some(edge) => {
                edge.status = status;
                Ok(())
            }
            None => Err(NavError::UnknownEdge(a, b)),
        }
    }

    /// Roads incident to `id` as `(other_endpoint, base_cost, status)`.
    ///
    /// Order is insertion order and stays stable between mutations.
    /// Unregistered ids yield nothing.
    pub fn neighbors(
        &self,
        id: LocationId,
    ) -> impl Iterator<Item = (LocationId, f64, RoadStatus)> + '_ {
        self.adjacency
            .get(&id)
            .into_iter()
            .flatten()
            .filter_map(move |&other| {
                self.edges
                    .get(&edge_key(id, other))
                    .map(|edge| (other, edge.base_cost, edge.status))
            })
    }

    /// Every undirected road exactly once, endpoints ordered by id.
    pub fn enumerate_edges(
        &self,
    ) -> impl Iterator<Item = (LocationId, LocationId, RoadEdge)> + '_ {
        self.edges.iter().map(|(&(a, b), &edge)| (a, b, edge))
    }

    /// Display label of a registered location.
    pub fn lookup_label(&self, id: LocationId) -> Option<&str> {
        self.locations.get(&id).map(String::as_str)
    }

    /// Registered locations in id order.
    pub fn locations(&self) -> impl Iterator<Item = (LocationId, &str)> + '_ {
        self.locations.iter().map(|(&id, label)| (id, label.as_str()))
    }

    pub fn contains_location(&self, id: LocationId) -> bool {
        self.locations.contains_key(&id)
    }

    /// Current status of the road between `a` and `b`, if one exists.
    pub fn road_status(&self, a: LocationId, b: LocationId) -> Option<RoadStatus> {
        self.edges.get(&edge_key(a, b)).map(|edge| edge.status)
    }

    pub fn location_count(&self) -> usize {
        self.locations.len()
    }

    pub fn road_count(&self) -> usize {
        self.edges.len()
    }
}
