//! Tallytoe - console tic-tac-toe.
//!
//! Plays a game by default; `analyze` scores a given board instead.

use anyhow::Result;
use clap::Parser;
use std::io::{self, Write};
use tallytoe::{play, run_analysis, Cli, Command, FirstPlayer, GameConfig};
use tallytoe_core::ScoringPolicy;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so the board on stdout stays readable.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = GameConfig::load_or_default(&cli.config)?;

    match cli.command.unwrap_or_default() {
        Command::Play(args) => {
            let mut config = config;
            if args.computer_first {
                config = config.with_first_player(FirstPlayer::Computer);
            }
            if args.legacy_scoring {
                config = config.with_scoring(ScoringPolicy::legacy());
            }
            run_game(&config)
        }
        Command::Analyze(args) => {
            let config = if args.legacy_scoring {
                config.with_scoring(ScoringPolicy::legacy())
            } else {
                config
            };
            let stdout = io::stdout();
            let mut out = stdout.lock();
            run_analysis(&config, &args.board, args.to_move, args.json, &mut out)?;
            out.flush()?;
            Ok(())
        }
    }
}

/// Plays one game on stdin/stdout.
#[instrument(skip(config))]
fn run_game(config: &GameConfig) -> Result<()> {
    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    let outcome = play(config, stdin, stdout)?;
    info!(%outcome, "Session finished");
    Ok(())
}
