//! Cumulative win/loss counts.

use serde::{Deserialize, Serialize};

use crate::session::Outcome;

/// Wins and losses across all games played.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    pub wins: u32,
    pub loses: u32,
}

impl Tally {
    /// Count one more game with the given outcome.
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Won => self.wins = self.wins.saturating_add(1),
            Outcome::Lost => self.loses = self.loses.saturating_add(1),
        }
    }

    /// Total games counted.
    #[must_use]
    pub fn games(&self) -> u32 {
        self.wins.saturating_add(self.loses)
    }

    /// e.g. `"Won: 1 game, Lost: 3 games"`.
    #[must_use]
    pub fn summary_line(&self) -> String {
        format!(
            "Won: {}, Lost: {}",
            games_label(self.wins),
            games_label(self.loses)
        )
    }
}

/// `"1 game"`, `"0 games"`, `"2 games"`.
#[must_use]
pub fn games_label(count: u32) -> String {
    let plural = if count == 1 { "" } else { "s" };
    format!("{count} game{plural}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record() {
        let mut tally = Tally::default();
        tally.record(Outcome::Won);
        tally.record(Outcome::Lost);
        tally.record(Outcome::Lost);

        assert_eq!(tally, Tally { wins: 1, loses: 2 });
        assert_eq!(tally.games(), 3);
    }

    #[test]
    fn test_labels() {
        assert_eq!(games_label(0), "0 games");
        assert_eq!(games_label(1), "1 game");
        assert_eq!(games_label(2), "2 games");
        assert_eq!(
            Tally { wins: 1, loses: 3 }.summary_line(),
            "Won: 1 game, Lost: 3 games"
        );
    }
}
