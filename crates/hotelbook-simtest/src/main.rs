//! hotelbook headless harness.
//!
//! Drives the pure allocation logic without any UI: runs self-checks,
//! applies one-shot bookings, or reads session commands from stdin.
//!
//! Usage:
//!   cargo run -p hotelbook-simtest
//!   cargo run -p hotelbook-simtest -- --verbose book 3 2 5 --randomize
//!   echo "random\nbook 4\nshow" | cargo run -p hotelbook-simtest -- --seed 7 session

mod checks;
mod render;
mod session;

use std::io::{self, BufRead};

use clap::{Parser, Subcommand};
use hotelbook_logic::occupancy::{BookingReport, Hotel};
use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use crate::session::{apply, parse_command, Outcome};

#[derive(Parser)]
#[command(name = "hotelbook-simtest")]
#[command(version)]
#[command(about = "Headless harness for the hotelbook room allocator")]
struct Cli {
    /// Seed for randomized occupancy (OS entropy when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Show passing checks and info-level logs
    #[arg(short, long)]
    verbose: bool,

    /// Print reports and summaries as JSON
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the logic self-checks (default)
    Check,
    /// Apply bookings in order to a fresh hotel
    Book {
        /// Room counts, one booking each
        #[arg(required = true, allow_negative_numbers = true)]
        counts: Vec<i64>,

        /// Randomize occupancy before the first booking
        #[arg(long)]
        randomize: bool,
    },
    /// Read commands from stdin (book N, random, reset, show, status, quit)
    Session,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string(value) {
        Ok(line) => println!("{}", line),
        Err(e) => eprintln!("failed to encode output: {}", e),
    }
}

fn print_report(report: &BookingReport, json: bool) {
    if json {
        print_json(report);
    } else {
        let icon = if report.success { "✓" } else { "✗" };
        println!("{} {}", icon, report.message);
    }
}

/// Print an outcome. Returns `false` when the session should end.
fn print_outcome(hotel: &Hotel, outcome: Outcome, json: bool) -> bool {
    match outcome {
        Outcome::Booking(report) => print_report(&report, json),
        Outcome::Summary(summary) => {
            if json {
                print_json(&summary);
            } else {
                println!(
                    "{} rooms: {} free, {} occupied, {} in last booking",
                    summary.total, summary.available, summary.occupied, summary.booked
                );
                println!("free per floor (1-10): {:?}", summary.available_by_floor);
            }
        }
        Outcome::Map => {
            if json {
                print_json(&hotel.rooms());
            } else {
                print!("{}", render::floor_map(hotel));
            }
        }
        Outcome::Notice(text) => {
            if !json {
                println!("{}", text);
            }
        }
        Outcome::Quit => return false,
    }
    true
}

fn run_checks(seed: u64, verbose: bool, json: bool) -> bool {
    if !json {
        println!("=== hotelbook self-check (seed {}) ===\n", seed);
    }
    let results = checks::run_all(seed);
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.len() - passed;

    if json {
        print_json(&results);
    } else {
        for r in &results {
            let icon = if r.passed { "✓" } else { "✗" };
            if !r.passed || verbose {
                println!("  {} {}: {}", icon, r.name, r.detail);
            }
        }
        println!(
            "\n=== RESULT: {}/{} passed, {} failed ===",
            passed,
            results.len(),
            failed
        );
    }
    failed == 0
}

fn run_bookings(counts: &[i64], randomize: bool, rng: &mut StdRng, json: bool) {
    let mut hotel = Hotel::new();
    if randomize {
        hotel.randomize_occupancy(rng);
        debug!("{} rooms free after randomize", hotel.available_count());
    }
    for &count in counts {
        print_report(&BookingReport::from(hotel.book(count)), json);
    }
    print_outcome(&hotel, Outcome::Map, json);
}

fn run_session(rng: &mut StdRng, json: bool) -> io::Result<()> {
    let mut hotel = Hotel::new();
    for line in io::stdin().lock().lines() {
        let line = line?;
        if line.trim().is_empty() || line.trim_start().starts_with('#') {
            continue;
        }
        match parse_command(&line) {
            Ok(command) => {
                debug!("session command {:?}", command);
                let outcome = apply(&mut hotel, command, rng);
                if !print_outcome(&hotel, outcome, json) {
                    break;
                }
            }
            Err(e) => eprintln!("{}", e),
        }
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let mut rng = make_rng(cli.seed);

    match cli.command.unwrap_or(Commands::Check) {
        Commands::Check => {
            if !run_checks(cli.seed.unwrap_or(42), cli.verbose, cli.json) {
                std::process::exit(1);
            }
        }
        Commands::Book { counts, randomize } => {
            run_bookings(&counts, randomize, &mut rng, cli.json);
        }
        Commands::Session => {
            if let Err(e) = run_session(&mut rng, cli.json) {
                eprintln!("failed to read session input: {}", e);
                std::process::exit(1);
            }
        }
    }
}
