//! # mastermind-core
//!
//! A four-peg, six-color Mastermind engine.
//!
//! ## Design Principles
//!
//! 1. **Pure scoring**: `score` is a side-effect-free function of a secret
//!    and a guess. Duplicate colors are handled with consumed-slot markers,
//!    so no peg is ever counted twice.
//!
//! 2. **Host-agnostic sessions**: `GameSession` knows nothing about screens,
//!    buttons or storage. Hosts submit guesses and re-render from `state()`
//!    and `history()`.
//!
//! 3. **Injected persistence**: cumulative scores go through the
//!    `ScoreStore` trait; the engine never touches storage itself.
//!
//! ## Modules
//!
//! - `core`: colors, codes, RNG, configuration
//! - `scoring`: the guess-evaluation algorithm and `Feedback`
//! - `session`: the `GameSession` state machine, secret generation, guess input
//! - `scores`: win/loss tally and its storage backends
//!
//! ## Example
//!
//! ```
//! use mastermind_core::{Code, Color, GameSession, GameState};
//!
//! let secret = Code::new([Color::Red, Color::Red, Color::Blue, Color::Green]);
//! let mut game = GameSession::new(secret);
//!
//! let turn = game.submit_guess(&[Color::Red, Color::Blue, Color::Grey, Color::Grey]).unwrap();
//! assert_eq!((turn.feedback.exact(), turn.feedback.color_only()), (1, 1));
//! assert_eq!(turn.state, GameState::InProgress);
//! ```

pub mod core;
pub mod scores;
pub mod scoring;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    parse_pegs, Code, Color, ConfigError, GameRng, InvalidLength, ParseCodeError, ParseColorError,
    SessionConfig, CODE_LENGTH, COLOR_COUNT, DEFAULT_MAX_GUESSES,
};

pub use crate::scoring::{
    score, score_codes, Feedback, FeedbackSymbol, InvalidFeedback, Operand, ScoringError,
};

pub use crate::session::{
    generate_secret, new_game, GameSession, GameState, GuessBuilder, Outcome, SessionError, Turn,
    TurnResult,
};

pub use crate::scores::{FileStore, MemoryStore, ScoreStore, Scoreboard, StoreError, Tally};
