//! Core types: colors, codes, RNG, configuration.
//!
//! Nothing in here knows about turns or scoring; the `scoring` and
//! `session` modules build on these types.

pub mod color;
pub mod config;
pub mod rng;

pub use color::{
    parse_pegs, Code, Color, InvalidLength, ParseCodeError, ParseColorError, CODE_LENGTH,
    COLOR_COUNT,
};
pub use config::{ConfigError, SessionConfig, DEFAULT_MAX_GUESSES};
pub use rng::GameRng;
