//! Score storage backends.
//!
//! The game only needs two operations from storage: load the tally once at
//! startup and save it after each game. `ScoreStore` is that seam;
//! [`MemoryStore`] and [`FileStore`] are the provided backends.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use derive_more::{Display, Error, From};
use tracing::{debug, instrument};

use super::tally::Tally;

/// Score storage failed.
#[derive(Debug, Display, Error, From)]
pub enum StoreError {
    #[display("score store I/O failed: {_0}")]
    Io(io::Error),
    #[display("score data is corrupt: {_0}")]
    Encoding(bincode::Error),
}

/// Persistence for a [`Tally`].
pub trait ScoreStore {
    /// Load the saved tally. An empty store yields zero counts.
    fn load(&self) -> Result<Tally, StoreError>;

    /// Replace the saved tally.
    fn save(&mut self, tally: &Tally) -> Result<(), StoreError>;
}

/// In-process store; nothing survives the process.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    tally: Tally,
    saves: usize,
}

impl MemoryStore {
    /// Store pre-seeded with a tally.
    #[must_use]
    pub fn with_tally(tally: Tally) -> Self {
        Self { tally, saves: 0 }
    }

    /// Number of `save` calls so far.
    #[must_use]
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl ScoreStore for MemoryStore {
    fn load(&self) -> Result<Tally, StoreError> {
        Ok(self.tally)
    }

    fn save(&mut self, tally: &Tally) -> Result<(), StoreError> {
        self.tally = *tally;
        self.saves += 1;
        Ok(())
    }
}

/// Bincode-encoded tally in a single file.
#[derive(Clone, Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Store backed by `path`. The file is created on first save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ScoreStore for FileStore {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn load(&self) -> Result<Tally, StoreError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!("no score file yet");
                return Ok(Tally::default());
            }
            Err(err) => return Err(err.into()),
        };
        let tally: Tally = bincode::deserialize(&bytes)?;
        debug!(wins = tally.wins, loses = tally.loses, "loaded scores");
        Ok(tally)
    }

    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn save(&mut self, tally: &Tally) -> Result<(), StoreError> {
        let bytes = bincode::serialize(tally)?;
        fs::write(&self.path, bytes)?;
        debug!("scores saved");
        Ok(())
    }
}
