//! Duplicate-safe guess evaluation.
//!
//! Scoring runs in two passes over fixed-size "consumed" markers:
//!
//! 1. **Exact pass**: every slot where secret and guess agree counts as an
//!    exact match, and that slot is consumed on both sides.
//! 2. **Color pass**: each unconsumed guess peg, left to right, claims the
//!    first unconsumed secret peg of the same color. Each secret peg can be
//!    claimed once.
//!
//! Marking instead of removing keeps slot indices stable, so a peg can never
//! be counted both as an exact match and as a color-only match.

use derive_more::{Display, Error};
use serde::{Deserialize, Deserializer, Serialize};
use smallvec::SmallVec;

use crate::core::{Code, Color, CODE_LENGTH};

/// Result of scoring one guess.
///
/// `exact + color_only <= 4` always holds, including for deserialized
/// values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Feedback {
    exact: u8,
    color_only: u8,
}

impl Feedback {
    /// Create feedback from raw counts.
    ///
    /// # Panics
    ///
    /// Panics if the counts sum to more than [`CODE_LENGTH`].
    #[must_use]
    pub fn new(exact: u8, color_only: u8) -> Self {
        assert!(
            usize::from(exact) + usize::from(color_only) <= CODE_LENGTH,
            "Feedback counts exceed code length"
        );
        Self { exact, color_only }
    }

    /// Create feedback from raw counts, rejecting impossible totals.
    pub fn try_new(exact: u8, color_only: u8) -> Result<Self, InvalidFeedback> {
        if usize::from(exact) + usize::from(color_only) > CODE_LENGTH {
            return Err(InvalidFeedback { exact, color_only });
        }
        Ok(Self { exact, color_only })
    }

    /// Pegs correct in both color and position.
    #[must_use]
    pub fn exact(&self) -> u8 {
        self.exact
    }

    /// Pegs correct in color only.
    #[must_use]
    pub fn color_only(&self) -> u8 {
        self.color_only
    }

    /// All four pegs are exact.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        usize::from(self.exact) == CODE_LENGTH
    }

    /// Feedback symbols in display order: all black, then all white.
    ///
    /// The ordering is cosmetic and carries no positional information.
    #[must_use]
    pub fn symbols(&self) -> SmallVec<[FeedbackSymbol; CODE_LENGTH]> {
        let black = std::iter::repeat(FeedbackSymbol::Black).take(self.exact.into());
        let white = std::iter::repeat(FeedbackSymbol::White).take(self.color_only.into());
        black.chain(white).collect()
    }
}

impl<'de> Deserialize<'de> for Feedback {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Counts {
            exact: u8,
            color_only: u8,
        }

        let Counts { exact, color_only } = Counts::deserialize(deserializer)?;
        Feedback::try_new(exact, color_only).map_err(serde::de::Error::custom)
    }
}

/// Feedback counts that no guess could produce.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
#[display("feedback {exact} exact + {color_only} color-only exceeds 4 pegs")]
pub struct InvalidFeedback {
    pub exact: u8,
    pub color_only: u8,
}

/// One feedback marker rendered next to a guess row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeedbackSymbol {
    /// Right color, right position.
    Black,
    /// Right color, wrong position.
    White,
}

impl FeedbackSymbol {
    /// Image asset name for this symbol.
    #[must_use]
    pub const fn asset_name(self) -> &'static str {
        match self {
            FeedbackSymbol::Black => "black-symbol",
            FeedbackSymbol::White => "white-symbol",
        }
    }
}

/// Which argument of [`score`] was malformed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
pub enum Operand {
    #[display("secret")]
    Secret,
    #[display("guess")]
    Guess,
}

/// `score` was handed a sequence that is not four pegs long.
///
/// Hosts always build fixed-length sequences, so this indicates a caller
/// bug rather than bad player input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
pub enum ScoringError {
    #[display("{operand} must have 4 pegs, got {actual}")]
    InvalidLength { operand: Operand, actual: usize },
}

/// Score `guess` against `secret`.
///
/// Both slices must have exactly [`CODE_LENGTH`] elements. The secret is
/// checked first, so when both are malformed the error names the secret.
pub fn score(secret: &[Color], guess: &[Color]) -> Result<Feedback, ScoringError> {
    let secret = Code::try_from(secret).map_err(|e| ScoringError::InvalidLength {
        operand: Operand::Secret,
        actual: e.actual,
    })?;
    let guess = Code::try_from(guess).map_err(|e| ScoringError::InvalidLength {
        operand: Operand::Guess,
        actual: e.actual,
    })?;
    Ok(score_codes(&secret, &guess))
}

/// Score two codes whose shape is already guaranteed.
#[must_use]
pub fn score_codes(secret: &Code, guess: &Code) -> Feedback {
    let secret = secret.pegs();
    let guess = guess.pegs();

    let mut secret_used = [false; CODE_LENGTH];
    let mut guess_used = [false; CODE_LENGTH];
    let mut exact = 0u8;
    let mut color_only = 0u8;

    for i in 0..CODE_LENGTH {
        if secret[i] == guess[i] {
            exact += 1;
            secret_used[i] = true;
            guess_used[i] = true;
        }
    }

    for (g, &peg) in guess.iter().enumerate() {
        if guess_used[g] {
            continue;
        }
        let claimed = (0..CODE_LENGTH).find(|&s| !secret_used[s] && secret[s] == peg);
        if let Some(s) = claimed {
            secret_used[s] = true;
            color_only += 1;
        }
    }

    Feedback { exact, color_only }
}
