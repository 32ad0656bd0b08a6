//! Creature Sim - Entry Point
//!
//! Builds the sample roster, runs a number of engagement rounds and prints
//! the final state as text or JSON.

use std::path::PathBuf;

use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use creature_sim::core::{EncounterConfig, EncounterRng, Result};
use creature_sim::creature::CreatureSnapshot;
use creature_sim::simulation::{Roster, RoundEngagement};

/// Run creature encounters
#[derive(Parser, Debug)]
#[command(name = "creature-sim")]
#[command(about = "Run rounds of creature engagements and report the survivors")]
struct Args {
    /// Random seed for deterministic runs (overrides the config file)
    #[arg(long)]
    seed: Option<u64>,

    /// Number of rounds to run (overrides the config file)
    #[arg(long)]
    rounds: Option<u32>,

    /// TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output format: json or text
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable per-engagement logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

/// JSON output structure
#[derive(Serialize)]
struct RunResult {
    seed: u64,
    rounds: Vec<Vec<RoundEngagement>>,
    creatures: Vec<CreatureSnapshot>,
    survivors: usize,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let directive = if args.verbose {
        "creature_sim=debug"
    } else {
        "creature_sim=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive)),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut config = match &args.config {
        Some(path) => EncounterConfig::load(path)?,
        None => EncounterConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if let Some(rounds) = args.rounds {
        config.rounds = rounds;
    }
    config.validate()?;

    let seed = config.seed.unwrap_or_else(rand::random);
    let mut rng = EncounterRng::new(seed);
    let rules = config.rules();
    tracing::info!(seed, rounds = config.rounds, "Creature Sim starting");

    let mut roster = Roster::sample_in(&mut rng, config.id_min, config.id_max);
    let initial = roster.to_string();

    let rounds = roster.run_rounds(&mut rng, &rules, config.rounds);

    match args.format.as_str() {
        "json" => {
            let result = RunResult {
                seed,
                rounds,
                creatures: roster.snapshots(),
                survivors: roster.alive_count(),
            };
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        _ => {
            println!("=== CREATURE SIM (seed {}) ===", seed);
            println!();
            print!("{}", initial);
            for (i, round) in rounds.iter().enumerate() {
                println!();
                println!("--- Round {} ---", i + 1);
                for e in round {
                    let attacker = roster.get(e.attacker).map(|c| c.name()).unwrap_or("?");
                    let defender = roster.get(e.defender).map(|c| c.name()).unwrap_or("?");
                    let kill = if e.report.instant_kill { " (instant kill)" } else { "" };
                    println!(
                        "  {} vs {}: fight {}{} -> {} / {}",
                        attacker,
                        defender,
                        e.report.fight,
                        kill,
                        e.report.attacker_life,
                        e.report.defender_life
                    );
                }
            }
            println!();
            print!("{}", roster);
            println!("{} of {} creatures alive", roster.alive_count(), roster.len());
        }
    }

    Ok(())
}
