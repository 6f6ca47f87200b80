//! Plain-text views of the network.
//!
//! Views are built on demand from `&RoadNetwork` — no color, no I/O. The
//! front-end decides how to style them; the headless driver serves them as
//! query layers.

use crate::network::{LocationId, RoadNetwork};
use crate::routing::Route;

/// Label for `id`, falling back to `#id` for unregistered locations.
fn label_or_id(network: &RoadNetwork, id: LocationId) -> String {
    match network.lookup_label(id) {
        Some(label) => label.to_string(),
        None => format!("#{id}"),
    }
}

/// Live status table: one row per undirected road, canonical order.
pub fn build_status_table(network: &RoadNetwork) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<15} {:<5} {:<15} {:<10} {:>6}\n",
        "From", "", "To", "Status", "Base"
    ));
    out.push_str(&"-".repeat(54));
    out.push('\n');
    for (a, b, edge) in network.enumerate_edges() {
        out.push_str(&format!(
            "{:<15} {:<5} {:<15} {:<10} {:>6.1}\n",
            label_or_id(network, a),
            "<->",
            label_or_id(network, b),
            edge.status.name(),
            edge.base_cost,
        ));
    }
    out
}

/// Registered locations, one `id: label` line each, id order.
pub fn build_location_index(network: &RoadNetwork) -> String {
    let mut out = String::new();
    for (id, label) in network.locations() {
        out.push_str(&format!("{id}: {label}\n"));
    }
    out
}

/// Route summary line: labels joined by ` >> `.
pub fn format_route(network: &RoadNetwork, route: &Route) -> String {
    route
        .stops
        .iter()
        .map(|&stop| label_or_id(network, stop))
        .collect::<Vec<_>>()
        .join(" >> ")
}
