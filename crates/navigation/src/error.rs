// ---------------------------------------------------------------------------
// NavError: typed errors for graph store mutations and route queries
// ---------------------------------------------------------------------------

use std::fmt;

use crate::network::LocationId;

/// Errors surfaced by the control surface.
///
/// Every mutation is all-or-nothing: after any of these is returned the
/// store is in its pre-call state. An unreachable route is *not* an error
/// (`find_route` reports it as `Ok(None)`).
#[derive(Debug, Clone, PartialEq)]
pub enum NavError {
    /// A location with this id is already registered.
    DuplicateId(LocationId),
    /// The location id is not registered.
    UnknownLocation(LocationId),
    /// An edge between these endpoints already exists.
    DuplicateEdge(LocationId, LocationId),
    /// No edge joins these endpoints.
    UnknownEdge(LocationId, LocationId),
    /// Road base cost must be a finite number greater than zero.
    InvalidCost(f64),
    /// A road may not join a location to itself.
    SelfLoop(LocationId),
    /// Location labels must be non-empty.
    InvalidLabel,
}

impl fmt::Display for NavError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavError::DuplicateId(id) => {
                write!(f, "location {id} is already registered")
            }
            NavError::UnknownLocation(id) => write!(f, "unknown location {id}"),
            NavError::DuplicateEdge(a, b) => {
                write!(f, "a road between {a} and {b} already exists")
            }
            NavError::UnknownEdge(a, b) => {
                write!(f, "no road joins {a} and {b}")
            }
            NavError::InvalidCost(cost) => {
                write!(f, "invalid road cost {cost}: must be finite and > 0")
            }
            NavError::SelfLoop(id) => {
                write!(f, "a road may not join location {id} to itself")
            }
            NavError::InvalidLabel => write!(f, "location label must be non-empty"),
        }
    }
}

impl std::error::Error for NavError {}
