//! `citynav` — terminal front-end for the navigation core.
//!
//! Two modes:
//! - default: a colored interactive menu loop for a human operator
//! - `--agent`: headless newline-delimited JSON on stdin/stdout (see
//!   [`navigation::protocol`])
//!
//! `--scenario <path>` loads an alternative startup network from a JSON
//! [`navigation::Scenario`] file; otherwise the seed city is used. All core state lives
//! in the `navigation` crate — this binary only renders and parses input.

mod agent_mode;

use std::io::{self, Write};
use std::process::ExitCode;
use std::thread;
use std::time::Duration;

use crossterm::style::Stylize;
use crossterm::{cursor, execute, terminal};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use navigation::network_view;
use navigation::routing::find_route;
use navigation::{LocationId, RoadNetwork, RoadStatus, Scenario};

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "citynav=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    let scenario = match load_scenario(&args) {
        Ok(scenario) => scenario,
        Err(message) => {
            eprintln!("citynav: {message}");
            return ExitCode::FAILURE;
        }
    };
    let custom_scenario = args.iter().any(|a| a == "--scenario");

    let mut network = match scenario.build() {
        Ok(network) => network,
        Err(err) => {
            eprintln!("citynav: scenario does not build: {err}");
            return ExitCode::FAILURE;
        }
    };
    tracing::debug!(
        locations = network.location_count(),
        roads = network.road_count(),
        "network ready"
    );

    if args.iter().any(|a| a == "--agent") {
        agent_mode::run_agent_mode(&mut network);
    } else {
        interactive_loop(&mut network, custom_scenario);
    }
    ExitCode::SUCCESS
}

/// Resolve the startup scenario from CLI arguments.
fn load_scenario(args: &[String]) -> Result<Scenario, String> {
    match args.iter().position(|a| a == "--scenario") {
        None => Ok(Scenario::default()),
        Some(i) => {
            let path = args
                .get(i + 1)
                .ok_or_else(|| "--scenario requires a file path".to_string())?;
            let text = std::fs::read_to_string(path)
                .map_err(|e| format!("cannot read {path}: {e}"))?;
            serde_json::from_str(&text).map_err(|e| format!("invalid scenario {path}: {e}"))
        }
    }
}

// ---------------------------------------------------------------------------
// Interactive menu loop
// ---------------------------------------------------------------------------

fn interactive_loop(network: &mut RoadNetwork, custom_scenario: bool) {
    let stdin = io::stdin();
    loop {
        clear_screen();
        draw_header();
        if custom_scenario {
            println!("{}", "\n[ LOCATIONS ]".bold());
            print!("{}", network_view::build_location_index(network));
        } else {
            draw_seed_map();
        }
        println!("\n1. VIEW Detailed Network Status");
        println!("2. FIND Shortest Path (Navigation)");
        println!("3. UPDATE Traffic Intensity (Dynamic)");
        println!("4. EXIT");

        let Some(choice) = prompt(&stdin, "\nInput: ") else {
            break;
        };
        match choice.trim() {
            "1" => {
                clear_screen();
                show_network_status(network);
                wait_for_enter(&stdin);
            }
            "2" => {
                run_route_query(network, &stdin);
                wait_for_enter(&stdin);
            }
            "3" => {
                run_status_update(network, &stdin);
                thread::sleep(Duration::from_millis(1000));
            }
            _ => break,
        }
    }
}

fn clear_screen() {
    let mut stdout = io::stdout();
    let _ = execute!(
        stdout,
        terminal::Clear(terminal::ClearType::All),
        cursor::MoveTo(0, 0)
    );
}

fn draw_header() {
    let rule = "=".repeat(58);
    println!("{}", rule.as_str().cyan());
    println!("{}", "       CITY TRAFFIC NAVIGATION & CONTROL SYSTEM".cyan());
    println!("{}", rule.as_str().cyan());
}

/// Fixed sketch of the seed city. Only drawn when running the default
/// scenario; custom scenarios get the location index instead.
fn draw_seed_map() {
    println!("{}", "\n[ SPATIAL CITY VIEW ]".bold());
    println!("    (1)Airport -------- (4)South_Station");
    println!("       |                    ^");
    println!("       |                    |");
    println!("    (0)Central_Hub ---- (3)East_Gate");
    println!("       |                    ^");
    println!("       |                    |");
    println!("    (2)West_End ------------|");
    println!("\n* IDs: 0:Hub, 1:Airport, 2:West, 3:East, 4:South");
}

fn show_network_status(network: &RoadNetwork) {
    println!("{}", "\n[ LIVE NETWORK MONITOR ]".bold());
    println!("{:<15} {:<5} {:<15} {}", "From", "", "To", "Status");
    println!("{}", "-".repeat(54));
    for (a, b, edge) in network.enumerate_edges() {
        let status = match edge.status {
            RoadStatus::Clear => edge.status.name().green(),
            RoadStatus::Moderate => edge.status.name().yellow(),
            RoadStatus::Heavy => edge.status.name().red(),
            RoadStatus::Blocked => edge.status.name().red().bold(),
        };
        println!(
            "{:<15} {:<5} {:<15} {}",
            label(network, a),
            "<->",
            label(network, b),
            status
        );
    }
}

fn run_route_query(network: &RoadNetwork, stdin: &io::Stdin) {
    let Some(source) = prompt_id(stdin, "Starting Location ID: ") else {
        return;
    };
    let Some(target) = prompt_id(stdin, "Destination Location ID: ") else {
        return;
    };

    println!("{}", "\n>>> COMPUTING OPTIMAL ROUTE...".blue());
    thread::sleep(Duration::from_millis(600));

    match find_route(network, source, target) {
        Ok(Some(route)) => {
            println!("{}", "SUCCESS: Route Found.".green());
            println!(
                "{} {}",
                "OPTIMIZED PATH:".bold(),
                network_view::format_route(network, &route).cyan().bold()
            );
            println!(
                "ESTIMATED TRAVEL TIME: {} mins",
                format!("{:.1}", route.total_cost).bold()
            );
        }
        Ok(None) => println!(
            "{}",
            "!! ALERT: NO PATH AVAILABLE !! Road closures detected.".red()
        ),
        Err(err) => println!("{}", format!("!! ERROR: {err}").red()),
    }
}

fn run_status_update(network: &mut RoadNetwork, stdin: &io::Stdin) {
    let Some(a) = prompt_id(stdin, "Enter Node A ID: ") else {
        return;
    };
    let Some(b) = prompt_id(stdin, "Enter Node B ID: ") else {
        return;
    };
    let Some(line) = prompt(stdin, "Status (0:Clear, 1:Moderate, 2:Heavy, 3:Blocked): ")
    else {
        return;
    };
    let Some(status) = line.trim().parse::<u8>().ok().and_then(RoadStatus::from_code)
    else {
        println!("{}", "Invalid status — expected 0, 1, 2 or 3.".yellow());
        return;
    };

    match network.update_status(a, b, status) {
        Ok(()) => println!("{}", "\n[SYSTEM] Traffic Update Broadcasted!".green()),
        Err(err) => println!("{}", format!("\n[SYSTEM] Update rejected: {err}").red()),
    }
}

// ---------------------------------------------------------------------------
// Input helpers
// ---------------------------------------------------------------------------

fn prompt(stdin: &io::Stdin, text: &str) -> Option<String> {
    print!("{text}");
    let _ = io::stdout().flush();
    let mut line = String::new();
    match stdin.read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line),
    }
}

fn prompt_id(stdin: &io::Stdin, text: &str) -> Option<LocationId> {
    let line = prompt(stdin, text)?;
    match line.trim().parse::<u32>() {
        Ok(n) => Some(LocationId(n)),
        Err(_) => {
            println!("{}", "Invalid id — expected a number.".yellow());
            None
        }
    }
}

fn wait_for_enter(stdin: &io::Stdin) {
    let _ = prompt(stdin, "\nPress Enter to return to Menu...");
}

fn label(network: &RoadNetwork, id: LocationId) -> String {
    network
        .lookup_label(id)
        .map(str::to_string)
        .unwrap_or_else(|| format!("#{id}"))
}
