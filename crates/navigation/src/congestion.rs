//! Traffic-condition weight model.
//!
//! Maps an edge's base cost and its current [`RoadStatus`] to the effective
//! traversal cost used by the route search:
//!
//! | Status   | Effective cost |
//! |----------|----------------|
//! | Clear    | base           |
//! | Moderate | base × 1.8     |
//! | Heavy    | base × 3.5     |
//! | Blocked  | unusable       |
//!
//! A blocked road is reported as `None` rather than a large finite number so
//! it can never be summed into a total that looks like a reachable route.

use serde::{Deserialize, Serialize};

/// Cost multiplier for a road under moderate congestion.
pub const MODERATE_FACTOR: f64 = 1.8;

/// Cost multiplier for a road under heavy congestion.
pub const HEAVY_FACTOR: f64 = 3.5;

/// Traffic condition of a single road.
///
/// Ordering follows severity: `Clear < Moderate < Heavy < Blocked`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RoadStatus {
    Clear,
    Moderate,
    Heavy,
    Blocked,
}

impl RoadStatus {
    /// Every status, in severity order.
    pub const ALL: [RoadStatus; 4] = [
        RoadStatus::Clear,
        RoadStatus::Moderate,
        RoadStatus::Heavy,
        RoadStatus::Blocked,
    ];

    /// Canonical numeric code used across textual interfaces:
    /// `0=Clear, 1=Moderate, 2=Heavy, 3=Blocked`.
    pub fn code(self) -> u8 {
        match self {
            RoadStatus::Clear => 0,
            RoadStatus::Moderate => 1,
            RoadStatus::Heavy => 2,
            RoadStatus::Blocked => 3,
        }
    }

    /// Inverse of [`RoadStatus::code`]. Returns `None` for codes above 3.
    pub fn from_code(code: u8) -> Option<RoadStatus> {
        match code {
            0 => Some(RoadStatus::Clear),
            1 => Some(RoadStatus::Moderate),
            2 => Some(RoadStatus::Heavy),
            3 => Some(RoadStatus::Blocked),
            _ => None,
        }
    }

    /// Upper-case display name, as shown in the network monitor.
    pub fn name(self) -> &'static str {
        match self {
            RoadStatus::Clear => "CLEAR",
            RoadStatus::Moderate => "MODERATE",
            RoadStatus::Heavy => "HEAVY",
            RoadStatus::Blocked => "BLOCKED",
        }
    }

    /// Multiplier applied to a road's base cost, or `None` when the road is
    /// unusable.
    pub fn congestion_factor(self) -> Option<f64> {
        match self {
            RoadStatus::Clear => Some(1.0),
            RoadStatus::Moderate => Some(MODERATE_FACTOR),
            RoadStatus::Heavy => Some(HEAVY_FACTOR),
            RoadStatus::Blocked => None,
        }
    }
}

/// Effective traversal cost of a road: `base` scaled by the congestion
/// factor of `status`. `None` means the road cannot be traversed at all.
pub fn effective_weight(base: f64, status: RoadStatus) -> Option<f64> {
    status.congestion_factor().map(|factor| base * factor)
}
