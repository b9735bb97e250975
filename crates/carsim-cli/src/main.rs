//! CarSim console front end
//!
//! Reads menu choices from stdin, plays them through the engine and prints
//! the vehicle status after every turn.
//!
//! Usage:
//!   cargo run -p carsim-cli
//!   cargo run -p carsim-cli -- --seed 42 --config carsim.json --json
//!
//! Logging goes through `env_logger`; set `RUST_LOG=debug` to see dispatch
//! decisions.

use std::fmt;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use carsim_core::prelude::*;
use carsim_logic::config::ConfigError;
use clap::Parser;

// ── Arguments ───────────────────────────────────────────────────────────

/// CarSim - keep the car fueled and the driver fed
#[derive(Parser, Debug)]
#[command(name = "carsim")]
#[command(version, about, long_about = None)]
struct Args {
    /// Random seed (default: random)
    #[arg(short, long)]
    seed: Option<u64>,

    /// JSON file overriding resource maxima and depletion
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print one JSON turn report per line instead of the menu
    #[arg(long)]
    json: bool,
}

#[derive(Debug)]
enum CliError {
    Config(ConfigError),
    Io(io::Error),
}

impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        CliError::Config(e)
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        CliError::Io(e)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Config(e) => write!(f, "{}", e),
            CliError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for CliError {}

// ── Main ────────────────────────────────────────────────────────────────

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), CliError> {
    let config = match &args.config {
        Some(path) => SimulationConfig::from_path(path)?,
        None => SimulationConfig::default(),
    };
    let seed = args.seed.unwrap_or_else(rand::random);
    log::info!("starting session with seed {}", seed);

    let mut engine = SimulationEngine::with_config(config, seed);
    let stdin = io::stdin();
    let mut out = io::stdout().lock();

    if !args.json {
        writeln!(out, "=== CarSim ===")?;
        write_status(&mut out, &engine.status, engine.config())?;
    }

    let mut lines = stdin.lock().lines();
    while !engine.is_over() {
        if !args.json {
            write_menu(&mut out)?;
        }
        out.flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let report = engine.step(Action::parse(&line?));

        if args.json {
            let json = serde_json::to_string(&report).map_err(io::Error::from)?;
            writeln!(out, "{}", json)?;
        } else {
            write_report(&mut out, &report, engine.config())?;
        }
    }

    if !args.json {
        let summary = match engine.state() {
            GameState::Starved => "You starved. Game over.",
            GameState::Quit => "Goodbye!",
            GameState::Running => "Input closed.",
        };
        writeln!(out, "\n{} ({} turns)", summary, engine.turn())?;
    }

    Ok(())
}

// ── Output ──────────────────────────────────────────────────────────────

fn write_menu(out: &mut impl Write) -> io::Result<()> {
    writeln!(out)?;
    for action in Action::MENU {
        writeln!(out, "  {}. {}", action.code(), action.label())?;
    }
    write!(out, "> ")
}

fn write_report(
    out: &mut impl Write,
    report: &TurnReport,
    config: &SimulationConfig,
) -> io::Result<()> {
    let message = match report.outcome {
        ActionOutcome::Moved(_) => format!(
            "{}. Now facing {}.",
            report.action.label(),
            report.status.heading.name()
        ),
        ActionOutcome::OutOfGas => "The tank is empty. Refuel before driving.".to_string(),
        ActionOutcome::Rested => "You take a rest.".to_string(),
        ActionOutcome::Refueled => "You fill up the tank.".to_string(),
        ActionOutcome::Ate => "You grab something to eat.".to_string(),
        ActionOutcome::Exit => return Ok(()),
        ActionOutcome::Ignored => "Invalid choice, try 1-8.".to_string(),
    };
    writeln!(out, "\n{}", message)?;
    write_status(out, &report.status, config)
}

fn write_status(
    out: &mut impl Write,
    status: &Status,
    config: &SimulationConfig,
) -> io::Result<()> {
    writeln!(out, "  Energy {}", bar(status.energy, config.max_energy))?;
    writeln!(out, "  Gas    {}", bar(status.gas, config.max_gas))?;
    writeln!(out, "  Hunger {}", bar(status.hunger, config.max_hunger))?;
    writeln!(
        out,
        "  Heading {} at ({}, {})",
        status.heading.name(),
        status.position.x,
        status.position.y
    )
}

/// Fixed-width meter, e.g. `[#####-----] 10/20`.
fn bar(value: i32, max: i32) -> String {
    const WIDTH: i64 = 10;
    // value * WIDTH overflows i32 once max exceeds i32::MAX / 10
    let filled = if max > 0 {
        (i64::from(value.clamp(0, max)) * WIDTH / i64::from(max)) as usize
    } else {
        0
    };
    format!(
        "[{}{}] {}/{}",
        "#".repeat(filled),
        "-".repeat(WIDTH as usize - filled),
        value,
        max
    )
}
