//! Data-driven network scenarios.
//!
//! The network a session starts from is data, not code: a [`Scenario`] can
//! be deserialized from JSON, and `Scenario::default()` carries the shipped
//! five-location seed city. `build` assembles a [`RoadNetwork`], surfacing
//! any structural error in the data.

use serde::{Deserialize, Serialize};

use crate::error::NavError;
use crate::network::{LocationId, RoadNetwork};

/// One location entry: stable id plus display label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioLocation {
    pub id: u32,
    pub name: String,
}

/// One road entry. Roads always start Clear.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioRoad {
    pub a: u32,
    pub b: u32,
    pub base_cost: f64,
}

/// A complete startup network.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    pub locations: Vec<ScenarioLocation>,
    pub roads: Vec<ScenarioRoad>,
}

impl Default for Scenario {
    /// The seed city: five locations, six roads.
    fn default() -> Self {
        let location = |id: u32, name: &str| ScenarioLocation {
            id,
            name: name.to_string(),
        };
        let road = |a: u32, b: u32, base_cost: f64| ScenarioRoad { a, b, base_cost };

        Self {
            locations: vec![
                location(0, "Central_Hub"),
                location(1, "Airport"),
                location(2, "West_End"),
                location(3, "East_Gate"),
                location(4, "South_Station"),
            ],
            roads: vec![
                road(0, 1, 15.0),
                road(0, 2, 10.0),
                road(1, 4, 25.0),
                road(2, 3, 5.0),
                road(3, 4, 10.0),
                road(0, 3, 20.0),
            ],
        }
    }
}

impl Scenario {
    /// Assemble a [`RoadNetwork`] from the scenario data.
    pub fn build(&self) -> Result<RoadNetwork, NavError> {
        let mut network = RoadNetwork::new();
        for loc in &self.locations {
            network.add_location(LocationId(loc.id), loc.name.clone())?;
        }
        for road in &self.roads {
            network.add_road(LocationId(road.a), LocationId(road.b), road.base_cost)?;
        }
        Ok(network)
    }
}
