//! Load-once, save-after-each-game scoreboard.

use tracing::{info, instrument};

use super::store::{ScoreStore, StoreError};
use super::tally::Tally;
use crate::session::Outcome;

/// A tally bound to the store it persists to.
#[derive(Debug)]
pub struct Scoreboard<S: ScoreStore> {
    store: S,
    tally: Tally,
}

impl<S: ScoreStore> Scoreboard<S> {
    /// Read the current tally from `store`.
    pub fn load(store: S) -> Result<Self, StoreError> {
        let tally = store.load()?;
        Ok(Self { store, tally })
    }

    /// Current counts.
    #[must_use]
    pub fn tally(&self) -> Tally {
        self.tally
    }

    /// Count a finished game and save immediately.
    ///
    /// On a save failure the in-memory count is rolled back so the
    /// scoreboard never runs ahead of what was persisted.
    #[instrument(skip(self))]
    pub fn record(&mut self, outcome: Outcome) -> Result<Tally, StoreError> {
        let mut next = self.tally;
        next.record(outcome);
        self.store.save(&next)?;
        self.tally = next;
        info!(wins = next.wins, loses = next.loses, "score recorded");
        Ok(next)
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}
