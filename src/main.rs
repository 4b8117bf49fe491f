//! Gobang-AI: a five-in-a-row engine.
//!
//! ## Usage
//!
//! - `gobang-ai` - Speak the line protocol on stdin/stdout
//! - `gobang-ai serve` - Same, explicitly
//! - `gobang-ai demo` - Let the engine play itself from the opening

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use gobang_ai::board::Stone;
use gobang_ai::config::EngineConfig;
use gobang_ai::constants::{BEAM_WIDTH, DEFENSE_WEIGHT, SCORE_FIVE, SEARCH_DEPTH, TT_CAPACITY};
use gobang_ai::engine::Engine;
use gobang_ai::protocol::Protocol;

/// Gobang-AI: alpha-beta five-in-a-row engine
#[derive(Parser)]
#[command(name = "gobang-ai")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    engine: EngineArgs,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args)]
struct EngineArgs {
    /// Search depth below each root move
    #[arg(long, default_value_t = SEARCH_DEPTH, global = true)]
    depth: u32,

    /// Candidates kept per node
    #[arg(long, default_value_t = BEAM_WIDTH, global = true)]
    beam: usize,

    /// Transposition table entries
    #[arg(long, default_value_t = TT_CAPACITY, global = true)]
    tt_entries: usize,

    /// Multiplier for the defender's pattern scores
    #[arg(long, default_value_t = DEFENSE_WEIGHT, global = true)]
    defense_weight: i64,

    /// Hash key seed (random if omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,
}

impl From<EngineArgs> for EngineConfig {
    fn from(args: EngineArgs) -> Self {
        Self {
            search_depth: args.depth,
            beam_width: args.beam,
            tt_capacity: args.tt_entries,
            defense_weight: args.defense_weight,
            seed: args.seed,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Read START/PLACE/TURN/END commands from stdin (default)
    Serve,
    /// Let the engine play both sides from the opening
    Demo {
        /// Maximum number of moves to play
        #[arg(long, default_value_t = 20)]
        moves: usize,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .target(env_logger::Target::Stderr)
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("gobang-ai: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let engine = Engine::new(cli.engine.into()).context("engine initialization failed")?;

    match cli.command {
        Some(Commands::Serve) | None => {
            let mut protocol = Protocol::new(engine);
            let stdin = io::stdin();
            protocol
                .run(stdin.lock(), io::stdout())
                .context("protocol I/O failed")
        }
        Some(Commands::Demo { moves }) => run_demo(engine, moves),
    }
}

fn run_demo(mut engine: Engine, moves: usize) -> Result<()> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "Gobang-AI self-play\n")?;
    writeln!(stdout, "{}", engine.board())?;

    let mut side = Stone::Black;
    for n in 1..=moves {
        // the engine always plays as `side`; keep the board, swap colors
        engine.set_ai(side);
        let Some(point) = engine.play_turn() else {
            writeln!(stdout, "Board full")?;
            break;
        };
        let stats = engine.last_stats();
        writeln!(
            stdout,
            "Move {n}: {side:?} plays {} {} ({} nodes, {} tt hits)",
            point.0, point.1, stats.nodes, stats.tt_hits
        )?;
        writeln!(stdout, "{}", engine.board())?;

        if engine.threat_score(point, side) >= SCORE_FIVE {
            writeln!(stdout, "{side:?} wins")?;
            break;
        }
        side = side.opponent();
    }
    Ok(())
}
