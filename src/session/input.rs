//! Peg-by-peg guess entry.
//!
//! Hosts feed button presses into a `GuessBuilder` and only hand a guess to
//! the session once all four slots are filled.

use smallvec::SmallVec;

use super::game::SessionError;
use crate::core::{Code, Color, CODE_LENGTH};

/// Buffer of pegs entered for the guess in progress.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GuessBuilder {
    pegs: SmallVec<[Color; CODE_LENGTH]>,
}

impl GuessBuilder {
    /// Create an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a peg. Returns `false` (and ignores the peg) when full.
    pub fn push(&mut self, color: Color) -> bool {
        if self.is_complete() {
            return false;
        }
        self.pegs.push(color);
        true
    }

    /// Remove the most recently entered peg.
    pub fn pop(&mut self) -> Option<Color> {
        self.pegs.pop()
    }

    /// Drop every entered peg.
    pub fn clear(&mut self) {
        self.pegs.clear();
    }

    /// Pegs entered so far.
    #[must_use]
    pub fn pegs(&self) -> &[Color] {
        &self.pegs
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pegs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pegs.is_empty()
    }

    /// All four slots are filled.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.pegs.len() == CODE_LENGTH
    }

    /// Take the completed guess, leaving the buffer empty.
    ///
    /// Fails with [`SessionError::InvalidGuess`] and keeps the buffer
    /// intact if fewer than four pegs were entered.
    pub fn build(&mut self) -> Result<Code, SessionError> {
        let code = Code::try_from(self.pegs.as_slice())?;
        self.pegs.clear();
        Ok(code)
    }
}
