//! Cumulative win/loss scores.
//!
//! - `tally`: the counts themselves
//! - `store`: the `ScoreStore` persistence seam and its backends
//! - `board`: `Scoreboard`, which loads once and saves after every game
//!
//! Nothing in `scoring` or `session` depends on this module.

pub mod board;
pub mod store;
pub mod tally;

pub use board::Scoreboard;
pub use store::{FileStore, MemoryStore, ScoreStore, StoreError};
pub use tally::{games_label, Tally};
