//! Balance simulator CLI.
//!
//! Run Monte Carlo simulations to analyze combat and progression balance.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                          # 1000 human warriors to level 10
//!   cargo run --bin simulate -- -n 100 -l 20          # 100 runs to level 20
//!   cargo run --bin simulate -- -r gnome -c mage      # Gnome mages
//!   cargo run --bin simulate -- --seed 42             # Reproducible run

use autobattle::catalog::Catalog;
use autobattle::simulator::{run_simulation, SimConfig};
use std::env;
use std::process::ExitCode;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    let (config, options) = parse_args(&args);

    let catalog = match options.catalog_path.as_deref() {
        Some(path) => match load_catalog(path) {
            Ok(catalog) => catalog,
            Err(message) => {
                eprintln!("{}", message);
                return ExitCode::FAILURE;
            }
        },
        None => Catalog::default(),
    };

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║              AUTO-BATTLE BALANCE SIMULATOR                    ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Runs:           {}", config.num_runs);
    println!("  Character:      {} {}", config.race, config.class);
    println!("  Start Zone:     {}", config.zone_id);
    println!("  Target Level:   {}", config.target_level);
    println!("  Max Ticks:      {}", config.max_ticks_per_run);
    println!("  Advance Zones:  {}", config.auto_advance_zones);
    println!("  Revive:         {}", config.revive_on_death);
    if let Some(seed) = config.seed {
        println!("  Seed:           {}", seed);
    }
    println!();
    println!("Running simulation...");
    println!();

    let report = match run_simulation(Arc::new(catalog), &config) {
        Ok(report) => report,
        Err(error) => {
            tracing::error!(%error, "simulation failed");
            eprintln!("Simulation failed: {}", error);
            return ExitCode::FAILURE;
        }
    };

    println!("{}", report.to_text());

    if options.show_level_curve {
        println!("{}", report.level_curve_text());
    }

    if options.write_json {
        let filename = format!(
            "sim_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        let written = report
            .to_json()
            .map_err(|e| e.to_string())
            .and_then(|json| std::fs::write(&filename, json).map_err(|e| e.to_string()));
        match written {
            Ok(()) => println!("JSON report saved to: {}", filename),
            Err(error) => {
                eprintln!("Failed to write JSON report: {}", error);
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}

#[derive(Default)]
struct CliOptions {
    show_level_curve: bool,
    write_json: bool,
    catalog_path: Option<String>,
}

fn load_catalog(path: &str) -> Result<Catalog, String> {
    let json = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read catalog {}: {}", path, e))?;
    Catalog::from_json(&json).map_err(|e| format!("Invalid catalog {}: {}", path, e))
}

fn parse_args(args: &[String]) -> (SimConfig, CliOptions) {
    let mut config = SimConfig::default();
    let mut options = CliOptions::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--runs" => {
                if i + 1 < args.len() {
                    config.num_runs = args[i + 1].parse().unwrap_or(1000);
                    i += 1;
                }
            }
            "-l" | "--level" => {
                if i + 1 < args.len() {
                    config.target_level = args[i + 1].parse().unwrap_or(10);
                    i += 1;
                }
            }
            "-z" | "--zone" => {
                if i + 1 < args.len() {
                    config.zone_id = args[i + 1].clone();
                    i += 1;
                }
            }
            "-r" | "--race" => {
                if i + 1 < args.len() {
                    config.race = args[i + 1].clone();
                    i += 1;
                }
            }
            "-c" | "--class" => {
                if i + 1 < args.len() {
                    config.class = args[i + 1].clone();
                    i += 1;
                }
            }
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    config.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "-t" | "--ticks" => {
                if i + 1 < args.len() {
                    config.max_ticks_per_run = args[i + 1].parse().unwrap_or(100_000);
                    i += 1;
                }
            }
            "--catalog" => {
                if i + 1 < args.len() {
                    options.catalog_path = Some(args[i + 1].clone());
                    i += 1;
                }
            }
            "--stay" => {
                config.auto_advance_zones = false;
            }
            "--hardcore" => {
                config.revive_on_death = false;
            }
            "--level-curve" => {
                options.show_level_curve = true;
            }
            "--json" => {
                options.write_json = true;
            }
            "-v" | "--verbose" => {
                config.verbosity = 2;
            }
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "--quick" => {
                config = SimConfig::quick(5);
            }
            "--full" => {
                config = SimConfig::full_progression();
            }
            _ => {}
        }
        i += 1;
    }

    (config, options)
}

fn print_help() {
    println!("Auto-Battle Balance Simulator");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin simulate -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -n, --runs <N>      Number of simulation runs (default: 1000)");
    println!("    -l, --level <L>     Target level to reach (default: 10)");
    println!("    -z, --zone <ID>     Starting zone id (default: elwynn_forest)");
    println!("    -r, --race <ID>     Race id (default: human)");
    println!("    -c, --class <ID>    Class id (default: warrior)");
    println!("    -s, --seed <S>      Random seed for reproducibility");
    println!("    -t, --ticks <T>     Max ticks per run (default: 100,000)");
    println!("    --catalog <PATH>    Load game data from a JSON catalog");
    println!("    --stay              Never leave the starting zone");
    println!("    --hardcore          End a run on the first death");
    println!("    --level-curve       Show detailed level-up pacing");
    println!("    -v, --verbose       Verbose output");
    println!("    --json              Save JSON report");
    println!("    --quick             Quick test (100 runs to level 5)");
    println!("    --full              Full climb (50 runs to level 30)");
    println!("    -h, --help          Show this help");
    println!();
    println!("    Set RUST_LOG=debug to trace individual rounds.");
}
