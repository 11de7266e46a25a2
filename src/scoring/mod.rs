//! Guess evaluation.
//!
//! `score` is a pure function of a secret and a guess: no state, no I/O.
//! Sessions and hosts call into it but it never calls out.

pub mod engine;

pub use engine::{
    score, score_codes, Feedback, FeedbackSymbol, InvalidFeedback, Operand, ScoringError,
};
