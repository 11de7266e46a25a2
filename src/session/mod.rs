//! Game sessions.
//!
//! - `game`: the `GameSession` state machine
//! - `secret`: random secret generation
//! - `input`: peg-by-peg guess entry for hosts
//!
//! A session is owned by one caller and mutated through `&mut self`; hosts
//! that share one across threads must wrap it in a lock.

pub mod game;
pub mod input;
pub mod secret;

pub use game::{new_game, GameSession, GameState, Outcome, SessionError, Turn, TurnResult};
pub use input::GuessBuilder;
pub use secret::generate_secret;
