//! Terminal rock, paper & scissors against an adaptive computer.

mod banner;
mod logging;
mod pacing;
mod terminal;

use std::io;
use std::process;
use std::thread;

use clap::Parser;
use tracing::{info, warn};

use rps_core::player::computer::COMPUTER_NAME;
use rps_core::{CancelToken, GameConfig, Release, launch};

use crate::pacing::Pacing;
use crate::terminal::{TerminalAnnouncer, TerminalInput};

#[derive(Parser)]
#[command(
    name = "rps",
    about = "Rock, paper & scissors against a computer that learns from the last round",
    version
)]
struct Cli {
    /// RNG seed for reproducible computer play
    #[arg(short, long)]
    seed: Option<u64>,

    /// Points needed to win a game unless changed at the prompt
    #[arg(short, long, default_value_t = 3, value_parser = clap::value_parser!(u32).range(1..))]
    points: u32,

    /// Name of the computer opponent
    #[arg(long, default_value = COMPUTER_NAME)]
    computer_name: String,

    /// Skip the spinner, screen clearing and pauses
    #[arg(long)]
    fast: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

fn main() {
    let cli = Cli::parse();
    logging::init();

    if let Err(e) = run(cli) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), String> {
    if cli.no_color {
        colored::control::set_override(false);
    }
    let pacing = if cli.fast {
        Pacing::instant()
    } else {
        Pacing::standard()
    };
    let mut config = GameConfig::default()
        .with_winning_score(cli.points)
        .with_computer_name(cli.computer_name.to_uppercase());
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }

    banner::opening(&mut io::stdout(), &pacing).map_err(|e| e.to_string())?;

    let (cancel, waiter) = CancelToken::with_waiter();
    let session = thread::Builder::new()
        .name("session".into())
        .spawn(move || {
            let input =
                TerminalInput::new(io::stdin().lock(), io::stdout(), cancel.clone(), pacing);
            let announcer = TerminalAnnouncer::new(io::stdout(), pacing);
            let rng = config.rng();
            launch(&config, input, announcer, rng, cancel)
        })
        .map_err(|e| format!("failed to start session: {e}"))?;

    // Every token lives on the session thread, so this also returns if it dies.
    if waiter.wait() == Release::Abandoned {
        warn!("session ended without cancelling");
    }
    let summary = session
        .join()
        .map_err(|_| "session thread panicked".to_string())?;

    match summary {
        Some(summary) => info!(
            games = summary.games_completed,
            rounds = summary.rounds_played,
            last_winner = summary.last_winner.as_deref().unwrap_or("-"),
            "goodbye"
        ),
        None => info!("no game played"),
    }
    Ok(())
}
