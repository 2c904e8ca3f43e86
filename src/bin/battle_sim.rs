//! Headless Battle Simulator
//!
//! Drives a full battle without any UI: steps the gauge tick manually,
//! attacks with every ally the moment their gauge fills, and reports the
//! outcome as JSON or text.

use std::path::PathBuf;

use chrono_gate::battle::{ActionKind, GameSession, LogEntry};
use chrono_gate::combatant::{enemy_roster, load_roster_config, party_roster};
use chrono_gate::core::{load_balance_config, BalanceConfig, CombatantId};
use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

/// Headless Battle Simulator - scripted party vs the enemy roster
#[derive(Parser, Debug)]
#[command(name = "battle_sim")]
#[command(about = "Run a headless battle and output the result")]
struct Args {
    /// Random seed for deterministic runs
    #[arg(long)]
    seed: Option<u64>,

    /// Maximum ticks before giving up (stalemate)
    #[arg(long, default_value_t = 2000)]
    max_ticks: u64,

    /// Output format: json or text
    #[arg(long, default_value = "text")]
    format: String,

    /// Print every log entry as it is produced
    #[arg(long, short = 'v')]
    verbose: bool,

    /// TOML file overriding the built-in enemy roster
    #[arg(long)]
    roster: Option<PathBuf>,

    /// TOML file overriding the balance defaults
    #[arg(long)]
    config: Option<PathBuf>,
}

/// JSON output structure
#[derive(Serialize)]
struct SimResult {
    victory: bool,
    ticks: u64,
    actions_resolved: u64,
    log_entries: Vec<LogEntry>,
    seed: u64,
}

fn main() {
    // Initialize tracing; stdout is reserved for the result output
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    // Determine seed
    let seed = args.seed.unwrap_or_else(|| rand::random());
    tracing::info!("battle sim starting with seed {}", seed);

    // Load overrides, falling back to the built-in defaults
    let enemies = match &args.roster {
        Some(path) => load_roster_config(path)
            .map(|cfg| cfg.to_combatants())
            .unwrap_or_else(|e| {
                eprintln!("Warning: Failed to load roster '{}': {}", path.display(), e);
                eprintln!("Using built-in enemies");
                enemy_roster()
            }),
        None => enemy_roster(),
    };
    let config = match &args.config {
        Some(path) => load_balance_config(path).unwrap_or_else(|e| {
            eprintln!("Warning: Failed to load config '{}': {}", path.display(), e);
            eprintln!("Using default balance");
            BalanceConfig::default()
        }),
        None => BalanceConfig::default(),
    };

    let mut session = GameSession::new(
        config,
        party_roster(),
        enemies,
        ChaCha8Rng::seed_from_u64(seed),
    );
    session.start_battle();

    if args.verbose {
        eprintln!("=== Battle Started ===");
        eprintln!(
            "Party: {} allies vs {} enemies",
            session.roster.allies.len(),
            session.roster.enemies.len()
        );
        for entry in &session.log.entries {
            eprintln!("  [{}] {:?}: {}", entry.tick, entry.kind, entry.message);
        }
        eprintln!();
    }

    // Run battle loop: every ready ally attacks the default target
    let mut actions_resolved: u64 = 0;
    while session.roster.live_enemy_count() > 0 && session.battle_tick < args.max_ticks {
        session.tick();

        let ready: Vec<CombatantId> = session
            .roster
            .allies
            .iter()
            .filter(|a| a.is_live() && a.is_ready())
            .map(|a| a.id)
            .collect();

        for id in ready {
            if let Some(entry) = session.resolve(id, ActionKind::Attack, None) {
                actions_resolved += 1;
                if args.verbose {
                    eprintln!("  [{}] {:?}: {}", entry.tick, entry.kind, entry.message);
                }
            }
        }
    }

    // Capture the outcome before end_battle wipes the log
    let victory = session.roster.live_enemy_count() == 0;
    let ticks = session.battle_tick;
    let log_entries = session.log.entries.clone();
    session.end_battle();

    let result = SimResult {
        victory,
        ticks,
        actions_resolved,
        log_entries,
        seed,
    };

    match args.format.as_str() {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&result).unwrap());
        }
        "text" => {
            println!("Battle Result");
            println!("=============");
            println!("Victory: {}", result.victory);
            println!("Ticks: {}", result.ticks);
            println!("Actions resolved: {}", result.actions_resolved);
            println!();
            for entry in &result.log_entries {
                println!("[{}] {:?}: {}", entry.tick, entry.kind, entry.message);
            }
            println!();
            println!("Seed: {}", result.seed);
        }
        _ => {
            eprintln!("Unknown format '{}', defaulting to json", args.format);
            println!("{}", serde_json::to_string_pretty(&result).unwrap());
        }
    }
}
