//! Peg colors and fixed-length codes.
//!
//! A [`Code`] is the unit both the secret and every guess are made of:
//! exactly [`CODE_LENGTH`] pegs, each one of the six [`Color`]s. Duplicates
//! are allowed.
//!
//! ## Text format
//!
//! Codes parse from four color tokens separated by whitespace or commas
//! (`"red red blue green"`), or from four packed single-letter
//! abbreviations (`"rrbg"`). Grey abbreviates to `e` because `g` is Green.

use std::fmt;
use std::str::FromStr;

use derive_more::{Display, Error, From};
use serde::{Deserialize, Serialize};

/// Number of pegs in a secret or a guess.
pub const CODE_LENGTH: usize = 4;

/// Number of distinct peg colors.
pub const COLOR_COUNT: usize = 6;

/// A peg color.
///
/// Only equality carries meaning; the declaration order matches the
/// palette's button tags and is otherwise arbitrary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Blue,
    Green,
    Grey,
    Orange,
    Red,
    Yellow,
}

impl Color {
    /// All colors, in button-tag order.
    pub const ALL: [Color; COLOR_COUNT] = [
        Color::Blue,
        Color::Green,
        Color::Grey,
        Color::Orange,
        Color::Red,
        Color::Yellow,
    ];

    /// Map an input button tag to a color.
    ///
    /// Tags 0-4 select Blue, Green, Grey, Orange and Red; every other tag
    /// selects Yellow.
    #[must_use]
    pub const fn from_tag(tag: u8) -> Self {
        match tag {
            0 => Color::Blue,
            1 => Color::Green,
            2 => Color::Grey,
            3 => Color::Orange,
            4 => Color::Red,
            _ => Color::Yellow,
        }
    }

    /// The button tag for this color (inverse of [`Color::from_tag`]).
    #[must_use]
    pub const fn tag(self) -> u8 {
        self as u8
    }

    /// Lowercase display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Color::Blue => "blue",
            Color::Green => "green",
            Color::Grey => "grey",
            Color::Orange => "orange",
            Color::Red => "red",
            Color::Yellow => "yellow",
        }
    }

    /// Single-letter abbreviation used by the packed text format.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Color::Blue => 'b',
            Color::Green => 'g',
            Color::Grey => 'e',
            Color::Orange => 'o',
            Color::Red => 'r',
            Color::Yellow => 'y',
        }
    }

    /// Image asset name for a peg of this color.
    #[must_use]
    pub const fn asset_name(self) -> &'static str {
        match self {
            Color::Blue => "blue-peg",
            Color::Green => "green-peg",
            Color::Grey => "grey-peg",
            Color::Orange => "orange-peg",
            Color::Red => "red-peg",
            Color::Yellow => "yellow-peg",
        }
    }

    fn from_letter(c: char) -> Option<Self> {
        Color::ALL
            .into_iter()
            .find(|color| color.letter() == c.to_ascii_lowercase())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A color token that matched neither a name nor a letter.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
#[display("unknown color {input:?}")]
pub struct ParseColorError {
    /// The rejected token.
    pub input: String,
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        let mut chars = token.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if let Some(color) = Color::from_letter(c) {
                return Ok(color);
            }
        }

        match token.to_ascii_lowercase().as_str() {
            "gray" => return Ok(Color::Grey),
            lower => {
                if let Some(color) = Color::ALL.into_iter().find(|c| c.name() == lower) {
                    return Ok(color);
                }
            }
        }

        Err(ParseColorError {
            input: token.to_string(),
        })
    }
}

/// A sequence had the wrong number of pegs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
#[display("expected {expected} pegs, got {actual}")]
pub struct InvalidLength {
    /// Required length (always [`CODE_LENGTH`]).
    pub expected: usize,
    /// Length that was supplied.
    pub actual: usize,
}

impl InvalidLength {
    /// Length error for a sequence of `actual` pegs.
    #[must_use]
    pub const fn new(actual: usize) -> Self {
        Self {
            expected: CODE_LENGTH,
            actual,
        }
    }
}

/// Exactly [`CODE_LENGTH`] pegs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Code([Color; CODE_LENGTH]);

impl Code {
    /// Create a code from four pegs.
    #[must_use]
    pub const fn new(pegs: [Color; CODE_LENGTH]) -> Self {
        Self(pegs)
    }

    /// The pegs, slot 0 first.
    #[must_use]
    pub const fn pegs(&self) -> &[Color; CODE_LENGTH] {
        &self.0
    }

    /// Iterate pegs in slot order.
    pub fn iter(&self) -> impl Iterator<Item = Color> + '_ {
        self.0.iter().copied()
    }

    /// Packed single-letter form, e.g. `"rrbg"`.
    #[must_use]
    pub fn to_letters(&self) -> String {
        self.iter().map(Color::letter).collect()
    }
}

impl From<[Color; CODE_LENGTH]> for Code {
    fn from(pegs: [Color; CODE_LENGTH]) -> Self {
        Self(pegs)
    }
}

impl TryFrom<&[Color]> for Code {
    type Error = InvalidLength;

    fn try_from(pegs: &[Color]) -> Result<Self, Self::Error> {
        <[Color; CODE_LENGTH]>::try_from(pegs)
            .map(Self)
            .map_err(|_| InvalidLength::new(pegs.len()))
    }
}

impl AsRef<[Color]> for Code {
    fn as_ref(&self) -> &[Color] {
        &self.0
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, color) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{color}")?;
        }
        Ok(())
    }
}

/// Text could not be read as a code.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error, From)]
pub enum ParseCodeError {
    /// One of the tokens was not a color.
    #[display("{_0}")]
    Color(ParseColorError),
    /// Wrong number of tokens.
    #[display("{_0}")]
    Length(InvalidLength),
}

/// Read any number of pegs from text.
///
/// Accepts color tokens separated by whitespace or commas, or a single
/// packed token of abbreviation letters. The length is not checked.
///
/// A lone token of exactly [`CODE_LENGTH`] abbreviation letters is always
/// packed, so `"grey"` reads as green, red, grey, yellow.
pub fn parse_pegs(s: &str) -> Result<Vec<Color>, ParseColorError> {
    let tokens: Vec<&str> = s
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .collect();

    match tokens.as_slice() {
        [packed] if is_packed(packed) => {
            Ok(packed.chars().filter_map(Color::from_letter).collect())
        }
        _ => tokens.iter().map(|t| t.parse::<Color>()).collect(),
    }
}

fn is_packed(token: &str) -> bool {
    if !token.chars().all(|c| Color::from_letter(c).is_some()) {
        return false;
    }
    token.chars().count() == CODE_LENGTH || token.parse::<Color>().is_err()
}

impl FromStr for Code {
    type Err = ParseCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let pegs = parse_pegs(s)?;
        Ok(Code::try_from(pegs.as_slice())?)
    }
}
