//! Headless driver: plays whole games with seeded dice and prints the
//! leaderboard.
//!
//! Stands in for a UI scheduler. Every seat, human or computer, rolls as
//! soon as it has the turn, and a new game starts right after each win.

use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

use anyhow::{Context, Result};
use clap::Parser;
use snakes_ladders::board::{Shortcut, ShortcutKind};
use snakes_ladders::core::{Difficulty, GameConfig, UndoPolicy};
use snakes_ladders::events::{EventKind, GameEvent};
use snakes_ladders::game::GameEngine;
use tracing::{info, instrument, warn};
use tracing_subscriber::EnvFilter;

/// Play Snakes & Ladders games without a UI
#[derive(Parser, Debug)]
#[command(name = "autoplay")]
#[command(about = "Play seeded Snakes & Ladders games headlessly", long_about = None)]
#[command(version)]
struct Args {
    /// Number of human seats (1 adds a computer opponent)
    #[arg(short, long, default_value_t = 1)]
    mode: usize,

    /// easy, medium, or hard (E/M/H also accepted)
    #[arg(short, long, default_value = "medium")]
    difficulty: Difficulty,

    /// Dice seed
    #[arg(short, long)]
    seed: Option<u64>,

    /// Games to play
    #[arg(short, long, default_value_t = 10)]
    games: u32,

    /// Reset undo/redo caps every turn instead of every game
    #[arg(long)]
    per_turn_undo: bool,

    /// JSON game config; overrides mode and difficulty
    #[arg(long)]
    config: Option<PathBuf>,

    /// Give up on a game after this many rolls
    #[arg(long, default_value_t = 10_000)]
    max_rolls: u32,

    /// Print the final snapshot as JSON
    #[arg(long)]
    json: bool,
}

/// Snakes and ladders taken across all games.
#[derive(Debug, Default)]
struct ShortcutCounts {
    snakes: u32,
    ladders: u32,
}

impl ShortcutCounts {
    fn record(&mut self, shortcut: Shortcut) {
        match shortcut.kind() {
            Some(ShortcutKind::Snake) => self.snakes += 1,
            Some(ShortcutKind::Ladder) => self.ladders += 1,
            None => {}
        }
    }
}

impl std::fmt::Display for ShortcutCounts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} snakes, {} ladders", self.snakes, self.ladders)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();
    let config = load_config(&args)?;
    let mut engine = GameEngine::new_game(config).context("invalid game configuration")?;

    let counts = Rc::new(RefCell::new(ShortcutCounts::default()));
    let sink = Rc::clone(&counts);
    engine.subscribe_to(&[EventKind::MoveApplied], move |event| {
        if let GameEvent::MoveApplied {
            shortcut: Some(shortcut),
            ..
        } = event
        {
            sink.borrow_mut().record(*shortcut);
        }
    });

    let mut total_rolls = 0u64;
    for game in 1..=args.games {
        total_rolls += u64::from(play_one(&mut engine, game, args.max_rolls)?);
        engine.restart_game();
    }

    println!(
        "{} games, {} rolls, difficulty {}",
        args.games,
        total_rolls,
        engine.difficulty()
    );
    println!("{}", counts.borrow());
    println!("Leaderboard:");
    for (rank, player) in engine.wins_leaderboard().into_iter().enumerate() {
        println!(
            "  {}. {:<12} {:>4} wins ({})",
            rank + 1,
            player.name(),
            player.wins(),
            player.color()
        );
    }

    if args.json {
        let snapshot = serde_json::to_string_pretty(&engine.snapshot())?;
        println!("{snapshot}");
    }

    Ok(())
}

fn load_config(args: &Args) -> Result<GameConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))?
        }
        None => GameConfig::new(args.mode).with_difficulty(args.difficulty),
    };

    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    if args.per_turn_undo {
        config.rules = config.rules.with_undo_policy(UndoPolicy::PerTurn);
    }
    Ok(config)
}

/// Roll until someone wins. Returns the number of rolls.
#[instrument(skip(engine))]
fn play_one(engine: &mut GameEngine, game: u32, max_rolls: u32) -> Result<u32> {
    for rolls in 1..=max_rolls {
        let outcome = engine.roll_for_current_player()?;
        if outcome.won {
            let winner = engine
                .player(outcome.player)
                .map_or("?", |player| player.name());
            info!(game, winner, rolls, "Game over");
            return Ok(rolls);
        }
    }

    warn!(game, max_rolls, "No winner, abandoning game");
    Ok(max_rolls)
}
