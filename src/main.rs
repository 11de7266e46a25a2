//! Mastermind in the terminal.
//!
//! Type four colors per line (`red red blue green`, or packed letters
//! `rrbg`; grey is `e`, and a lone four-letter word like `grey` is read as
//! packed letters). Each row prints the guess followed by one `B` per
//! exact peg and one `W` per color-only peg.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use mastermind_core::{
    parse_pegs, Code, Color, FeedbackSymbol, FileStore, GameSession, Scoreboard, SessionConfig,
    SessionError, Turn,
};
use tracing::{info, instrument, warn};
use tracing_subscriber::EnvFilter;

/// Guess the hidden four-peg code.
#[derive(Parser, Debug)]
#[command(name = "mastermind")]
#[command(about = "Guess the hidden four-peg code", long_about = None)]
#[command(version)]
struct Cli {
    /// Seed for the secret (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Play against a fixed secret, e.g. "rrbg"
    #[arg(long)]
    secret: Option<Code>,

    /// File that keeps the win/loss tally
    #[arg(long, default_value = "mastermind_scores.bin")]
    scores: PathBuf,

    /// Guesses allowed before the game is lost
    #[arg(long)]
    max_guesses: Option<usize>,

    /// TOML session config; flags override its values
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = session_config(&cli)?;

    let mut game = match cli.secret {
        Some(secret) => GameSession::with_config(secret, &config)?,
        None => GameSession::from_config(&config)?,
    };
    let mut board = Scoreboard::load(FileStore::new(&cli.scores))
        .with_context(|| format!("loading scores from {}", cli.scores.display()))?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "{}", board.tally().summary_line())?;
    play(&mut game, stdin.lock(), &mut out)?;

    let Some(outcome) = game.outcome() else {
        info!("input closed before the game finished");
        return Ok(());
    };

    writeln!(out, "{}", outcome.message())?;
    if let Some(secret) = game.reveal_secret() {
        writeln!(out, "The code was: {secret}")?;
    }
    let tally = board
        .record(outcome)
        .with_context(|| format!("saving scores to {}", cli.scores.display()))?;
    writeln!(out, "{}", tally.summary_line())?;

    Ok(())
}

/// Merge the optional config file with command-line overrides.
fn session_config(cli: &Cli) -> Result<SessionConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            SessionConfig::from_toml_str(&text)?
        }
        None => SessionConfig::default(),
    };
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    if let Some(max_guesses) = cli.max_guesses {
        config = config.with_max_guesses(max_guesses);
    }
    config.validate()?;
    Ok(config)
}

/// Read guesses until the game ends or input runs out.
#[instrument(skip_all)]
fn play(game: &mut GameSession, input: impl BufRead, out: &mut impl Write) -> Result<()> {
    write!(out, "{}", prompt(game))?;
    out.flush()?;

    for line in input.lines() {
        let line = line?;
        let text = line.trim();
        if text.eq_ignore_ascii_case("quit") || text.eq_ignore_ascii_case("q") {
            break;
        }
        if text.is_empty() {
            write!(out, "{}", prompt(game))?;
            out.flush()?;
            continue;
        }

        match parse_pegs(text) {
            Ok(pegs) => match game.submit_guess(&pegs) {
                Ok(_) => {
                    if let Some(turn) = game.history().last() {
                        writeln!(out, "{}", render_row(game.turns_taken(), turn))?;
                    }
                }
                Err(err @ SessionError::InvalidGuess { .. }) => {
                    writeln!(out, "{err}; try again")?;
                }
                Err(err @ SessionError::GameAlreadyOver { .. }) => {
                    warn!(%err, "guess after game end");
                    break;
                }
            },
            Err(err) => writeln!(out, "{err}; colors are {}", color_names())?,
        }

        if game.state().is_terminal() {
            break;
        }
        write!(out, "{}", prompt(game))?;
        out.flush()?;
    }

    Ok(())
}

fn prompt(game: &GameSession) -> String {
    format!("[{} left] guess> ", game.turns_remaining())
}

fn color_names() -> String {
    Color::ALL
        .iter()
        .map(|c| format!("{c} ({})", c.letter()))
        .collect::<Vec<_>>()
        .join(", ")
}

/// `" 3. red red blue green  BW"`
fn render_row(number: usize, turn: &Turn) -> String {
    let symbols: String = turn
        .feedback
        .symbols()
        .iter()
        .map(|s| match s {
            FeedbackSymbol::Black => 'B',
            FeedbackSymbol::White => 'W',
        })
        .collect();
    format!("{number:>2}. {}  {symbols}", turn.guess)
}
