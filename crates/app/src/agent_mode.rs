//! Headless `--agent` mode: a blocking synchronous loop that reads JSON
//! commands from stdin and writes JSON responses to stdout.
//!
//! When the `--agent` CLI flag is passed, the binary skips the interactive
//! menu and enters this loop instead.
//!
//! ## Protocol
//!
//! Each line of stdin is a JSON object with a `"cmd"` discriminator.
//! Each line of stdout is a JSON response with `"protocol_version"` and
//! `"type"` fields. See [`navigation::protocol`] for the full schema.
//! Diagnostics go to stderr only, so they never interleave with responses.

use std::io::{BufRead, Write};

use navigation::network::{LocationId, RoadNetwork};
use navigation::network_view;
use navigation::protocol::{
    make_response, EdgeReport, NavCommand, NavResponse, ResponsePayload, PROTOCOL_VERSION,
};
use navigation::routing::find_route;
use navigation::{NavError, RoadStatus};

pub fn run_agent_mode(network: &mut RoadNetwork) {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut stdout = stdout.lock();

    // Send the "ready" message so the external program knows we are live.
    respond(&mut stdout, make_response(ResponsePayload::Ready));
    tracing::info!("citynav agent mode v{PROTOCOL_VERSION} ready — waiting for commands on stdin");

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                tracing::warn!("stdin read error: {e}");
                break;
            }
        };

        if line.trim().is_empty() {
            continue;
        }

        let cmd: NavCommand = match serde_json::from_str(&line) {
            Ok(c) => c,
            Err(e) => {
                respond(
                    &mut stdout,
                    make_response(ResponsePayload::Error {
                        message: format!("Parse error: {e}"),
                    }),
                );
                continue;
            }
        };

        let response = process_command(cmd, network);
        let is_goodbye = matches!(response.payload, ResponsePayload::Goodbye);
        respond(&mut stdout, response);

        if is_goodbye {
            break;
        }
    }

    tracing::info!("citynav agent mode shutting down");
}

fn respond(stdout: &mut impl Write, response: NavResponse) {
    match serde_json::to_string(&response) {
        Ok(json) => {
            let _ = writeln!(stdout, "{json}");
            let _ = stdout.flush();
        }
        Err(e) => tracing::warn!("failed to serialize response: {e}"),
    }
}

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

fn process_command(cmd: NavCommand, network: &mut RoadNetwork) -> NavResponse {
    match cmd {
        NavCommand::Status => make_response(ResponsePayload::NetworkStatus {
            edges: EdgeReport::collect(network),
        }),

        NavCommand::Route { from, to } => {
            match find_route(network, LocationId(from), LocationId(to)) {
                Ok(Some(route)) => {
                    let names = route
                        .stops
                        .iter()
                        .map(|&stop| {
                            network.lookup_label(stop).unwrap_or_default().to_string()
                        })
                        .collect();
                    make_response(ResponsePayload::RouteFound {
                        stops: route.stops.iter().map(|s| s.0).collect(),
                        names,
                        total_cost: route.total_cost,
                    })
                }
                Ok(None) => make_response(ResponsePayload::NoPath),
                Err(err) => error_response(err),
            }
        }

        NavCommand::SetStatus { a, b, status } => match RoadStatus::from_code(status) {
            Some(parsed) => {
                match network.update_status(LocationId(a), LocationId(b), parsed) {
                    Ok(()) => make_response(ResponsePayload::Ok),
                    Err(err) => error_response(err),
                }
            }
            None => make_response(ResponsePayload::Error {
                message: format!("invalid status code {status}: expected 0..=3"),
            }),
        },

        NavCommand::AddLocation { id, name } => {
            match network.add_location(LocationId(id), name) {
                Ok(()) => make_response(ResponsePayload::Ok),
                Err(err) => error_response(err),
            }
        }

        NavCommand::AddRoad { a, b, base_cost } => {
            match network.add_road(LocationId(a), LocationId(b), base_cost) {
                Ok(()) => make_response(ResponsePayload::Ok),
                Err(err) => error_response(err),
            }
        }

        NavCommand::Query { layers } => {
            let mut map = serde_json::Map::new();
            for layer in layers {
                let value = match layer.as_str() {
                    "overview" => network_view::build_status_table(network),
                    "locations" => network_view::build_location_index(network),
                    other => format!("unknown layer: {other}"),
                };
                map.insert(layer, serde_json::Value::String(value));
            }
            make_response(ResponsePayload::QueryResult {
                layers: serde_json::Value::Object(map),
            })
        }

        NavCommand::Quit => make_response(ResponsePayload::Goodbye),
    }
}

fn error_response(err: NavError) -> NavResponse {
    make_response(ResponsePayload::Error {
        message: err.to_string(),
    })
}
