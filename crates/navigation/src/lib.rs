//! Core library for the city traffic navigation system.
//!
//! Holds a small undirected road network whose traversal costs vary with a
//! per-road traffic status, and answers lowest-cost route queries over the
//! effective weights. The crate performs no I/O: front-ends (the `citynav`
//! terminal binary, the headless JSON driver, test harnesses) compose the
//! control surface exposed here.
//!
//! Module map:
//! - [`network`] — the graph store (locations, roads, status mutations)
//! - [`congestion`] — the status → effective-weight model
//! - [`routing`] — lazy-deletion best-first route search
//! - [`scenario`] — data-driven startup networks (seed city as `Default`)
//! - [`network_view`] — on-demand plain-text views
//! - [`protocol`] — JSON envelope types for the headless driver mode

pub mod congestion;
pub mod error;
pub mod network;
pub mod network_view;
pub mod protocol;
pub mod routing;
pub mod scenario;


pub use congestion::{effective_weight, RoadStatus};
pub use error::NavError;
pub use network::{LocationId, RoadEdge, RoadNetwork};
pub use routing::{find_route, Route};
pub use scenario::Scenario;
