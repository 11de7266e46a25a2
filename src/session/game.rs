//! The game session state machine.
//!
//! ```text
//! InProgress ──guess──▶ InProgress
//!      │
//!      ├──4 exact──▶ Won   (terminal)
//!      └──limit hit─▶ Lost  (terminal)
//! ```
//!
//! The win check runs before the exhaustion check, so a correct final guess
//! wins.

use std::fmt;

use derive_more::{Display, Error};
use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use super::secret::generate_secret;
use crate::core::{
    Code, Color, ConfigError, GameRng, InvalidLength, SessionConfig, DEFAULT_MAX_GUESSES,
};
use crate::scoring::{score_codes, Feedback};

/// Where a session is in its lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum GameState {
    #[default]
    #[display("in progress")]
    InProgress,
    #[display("won")]
    Won,
    #[display("lost")]
    Lost,
}

impl GameState {
    /// Won or Lost.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameState::InProgress)
    }

    /// The outcome, once the game has ended.
    #[must_use]
    pub fn outcome(self) -> Option<Outcome> {
        match self {
            GameState::InProgress => None,
            GameState::Won => Some(Outcome::Won),
            GameState::Lost => Some(Outcome::Lost),
        }
    }
}

/// How a finished game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Won,
    Lost,
}

impl Outcome {
    /// Message shown to the player when the game ends.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Outcome::Won => "You Win! Play again?",
            Outcome::Lost => "You Lose! Try again?",
        }
    }
}

/// One accepted guess and its feedback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Turn {
    pub guess: Code,
    pub feedback: Feedback,
}

/// What `submit_guess` reports back.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TurnResult {
    pub feedback: Feedback,
    pub state: GameState,
}

/// A guess was rejected. The session is unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
pub enum SessionError {
    /// Wrong number of pegs; the player can retry.
    #[display("guess must have 4 pegs, got {actual}")]
    InvalidGuess { actual: usize },
    /// The session already ended.
    #[display("game is already over ({state})")]
    GameAlreadyOver { state: GameState },
}

impl From<InvalidLength> for SessionError {
    fn from(err: InvalidLength) -> Self {
        SessionError::InvalidGuess { actual: err.actual }
    }
}

/// One game: the secret, the turns played so far and the current state.
///
/// The secret has no accessor while the game is running; the only way to
/// learn about it is through feedback.
#[derive(Clone)]
pub struct GameSession {
    secret: Code,
    history: Vector<Turn>,
    state: GameState,
    max_guesses: usize,
}

impl GameSession {
    /// Start a game with an explicit secret and the default guess limit.
    #[must_use]
    pub fn new(secret: Code) -> Self {
        Self {
            secret,
            history: Vector::new(),
            state: GameState::InProgress,
            max_guesses: DEFAULT_MAX_GUESSES,
        }
    }

    /// Start a game with an explicit secret and a custom configuration.
    ///
    /// The configuration's seed is ignored since the secret is given.
    pub fn with_config(secret: Code, config: &SessionConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            max_guesses: config.max_guesses,
            ..Self::new(secret)
        })
    }

    /// Start a game with a secret drawn from `rng`.
    #[must_use]
    pub fn random(rng: &mut GameRng) -> Self {
        Self::new(generate_secret(rng))
    }

    /// Start a game from configuration alone, drawing the secret from the
    /// configured seed (or OS entropy when unset).
    ///
    /// The seed determines the secret, so it is never recorded in spans or
    /// events.
    #[instrument(skip(config), fields(max_guesses = config.max_guesses))]
    pub fn from_config(config: &SessionConfig) -> Result<Self, ConfigError> {
        let mut rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        debug!(seeded = config.seed.is_some(), "drawing secret");
        Self::with_config(generate_secret(&mut rng), config)
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Accepted turns, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<Turn> {
        &self.history
    }

    /// Number of guesses accepted so far.
    #[must_use]
    pub fn turns_taken(&self) -> usize {
        self.history.len()
    }

    /// Guesses left before the game is lost.
    #[must_use]
    pub fn turns_remaining(&self) -> usize {
        self.max_guesses.saturating_sub(self.history.len())
    }

    /// Guess limit for this session.
    #[must_use]
    pub fn max_guesses(&self) -> usize {
        self.max_guesses
    }

    /// The outcome, once the game has ended.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        self.state.outcome()
    }

    /// The secret, but only after the game has ended.
    #[must_use]
    pub fn reveal_secret(&self) -> Option<Code> {
        self.state.is_terminal().then_some(self.secret)
    }

    /// Score a guess and advance the game.
    ///
    /// Fails without touching the session if the game is over or the guess
    /// is not exactly four pegs.
    #[instrument(skip(self), fields(turn = self.history.len() + 1))]
    pub fn submit_guess(&mut self, guess: &[Color]) -> Result<TurnResult, SessionError> {
        self.ensure_in_progress()?;
        let guess = Code::try_from(guess).map_err(|err| {
            warn!(actual = err.actual, "rejecting malformed guess");
            SessionError::from(err)
        })?;
        Ok(self.apply(guess))
    }

    /// Score a guess that is already a [`Code`].
    pub fn submit_code(&mut self, guess: Code) -> Result<TurnResult, SessionError> {
        self.ensure_in_progress()?;
        Ok(self.apply(guess))
    }

    fn ensure_in_progress(&self) -> Result<(), SessionError> {
        if self.state.is_terminal() {
            warn!(state = %self.state, "guess submitted after game ended");
            return Err(SessionError::GameAlreadyOver { state: self.state });
        }
        Ok(())
    }

    fn apply(&mut self, guess: Code) -> TurnResult {
        let feedback = score_codes(&self.secret, &guess);
        self.history.push_back(Turn { guess, feedback });

        self.state = if feedback.is_solved() {
            GameState::Won
        } else if self.history.len() >= self.max_guesses {
            GameState::Lost
        } else {
            GameState::InProgress
        };

        debug!(
            exact = feedback.exact(),
            color_only = feedback.color_only(),
            state = %self.state,
            "scored guess"
        );
        if self.state.is_terminal() {
            info!(state = %self.state, turns = self.history.len(), "game finished");
        }

        TurnResult {
            feedback,
            state: self.state,
        }
    }
}

impl fmt::Debug for GameSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameSession")
            .field("secret", &"<hidden>")
            .field("history", &self.history)
            .field("state", &self.state)
            .field("max_guesses", &self.max_guesses)
            .finish()
    }
}

/// Start a game, drawing a secret from `rng` when none is given.
#[must_use]
pub fn new_game(secret: Option<Code>, rng: &mut GameRng) -> GameSession {
    match secret {
        Some(secret) => GameSession::new(secret),
        None => GameSession::random(rng),
    }
}
