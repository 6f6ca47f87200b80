//! Driver text protocol types for the `--agent` headless mode.
//!
//! Defines the JSON command/response envelope that external programs
//! (scripts, test harnesses) use to drive the navigator over
//! newline-delimited JSON on stdin/stdout.
//!
//! These types live in the core crate so they can be unit-tested without
//! pulling in the binary. The actual I/O loop lives in
//! `crates/app/src/agent_mode.rs`.

use serde::{Deserialize, Serialize};

use crate::congestion::RoadStatus;
use crate::network::RoadNetwork;

// ---------------------------------------------------------------------------
// Commands (stdin → navigator)
// ---------------------------------------------------------------------------

/// A single command sent by the external driver over stdin.
///
/// Each line of stdin is parsed as one `NavCommand`. The `cmd` field acts as
/// the discriminator tag. Status values travel as their canonical codes
/// (`0=Clear, 1=Moderate, 2=Heavy, 3=Blocked`).
#[derive(Debug, Deserialize)]
#[serde(tag = "cmd")]
pub enum NavCommand {
    /// Request the live network status (every road with its condition).
    #[serde(rename = "status")]
    Status,

    /// Compute the lowest-cost route between two locations.
    #[serde(rename = "route")]
    Route { from: u32, to: u32 },

    /// Set the traffic status of the road between `a` and `b`.
    #[serde(rename = "set_status")]
    SetStatus { a: u32, b: u32, status: u8 },

    /// Register a new location.
    #[serde(rename = "add_location")]
    AddLocation { id: u32, name: String },

    /// Insert a new road (initial status Clear).
    #[serde(rename = "add_road")]
    AddRoad { a: u32, b: u32, base_cost: f64 },

    /// Request one or more text layers (`overview`, `locations`).
    #[serde(rename = "query")]
    Query { layers: Vec<String> },

    /// Gracefully end the session.
    #[serde(rename = "quit")]
    Quit,
}

// ---------------------------------------------------------------------------
// Responses (navigator → stdout)
// ---------------------------------------------------------------------------

/// Every response includes the protocol version and a tagged payload.
#[derive(Debug, Serialize)]
pub struct NavResponse {
    /// Monotonically increasing protocol version (currently 1).
    pub protocol_version: u32,
    /// The response payload, flattened into this object.
    #[serde(flatten)]
    pub payload: ResponsePayload,
}

/// One road in a `network_status` response.
#[derive(Debug, Clone, Serialize)]
pub struct EdgeReport {
    pub from: u32,
    pub from_name: String,
    pub to: u32,
    pub to_name: String,
    pub base_cost: f64,
    pub status: RoadStatus,
}

impl EdgeReport {
    /// Snapshot every road of `network`, canonical order.
    pub fn collect(network: &RoadNetwork) -> Vec<EdgeReport> {
        network
            .enumerate_edges()
            .map(|(a, b, edge)| EdgeReport {
                from: a.0,
                from_name: network.lookup_label(a).unwrap_or_default().to_string(),
                to: b.0,
                to_name: network.lookup_label(b).unwrap_or_default().to_string(),
                base_cost: edge.base_cost,
                status: edge.status,
            })
            .collect()
    }
}

/// Tagged payload variants for driver responses.
#[derive(Debug, Serialize)]
#[serde(tag = "type")]
pub enum ResponsePayload {
    /// The navigator is ready to accept commands.
    #[serde(rename = "ready")]
    Ready,

    /// Result of a `status` command.
    #[serde(rename = "network_status")]
    NetworkStatus { edges: Vec<EdgeReport> },

    /// A route was found: stop ids, their labels, and the total cost.
    #[serde(rename = "route")]
    RouteFound {
        stops: Vec<u32>,
        names: Vec<String>,
        total_cost: f64,
    },

    /// No usable path exists under current road statuses.
    #[serde(rename = "no_path")]
    NoPath,

    /// Results of a `query` command — a JSON object keyed by layer name.
    #[serde(rename = "query_result")]
    QueryResult { layers: serde_json::Value },

    /// Generic success acknowledgement (mutations).
    #[serde(rename = "ok")]
    Ok,

    /// An error occurred while processing the command.
    #[serde(rename = "error")]
    Error { message: String },

    /// The session is ending (response to `quit`).
    #[serde(rename = "goodbye")]
    Goodbye,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Current protocol version. Bump when the command/response schema changes.
pub const PROTOCOL_VERSION: u32 = 1;

/// Convenience constructor that wraps a payload with the current protocol
/// version.
pub fn make_response(payload: ResponsePayload) -> NavResponse {
    NavResponse {
        protocol_version: PROTOCOL_VERSION,
        payload,
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
