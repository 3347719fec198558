use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::ScoreStore;
use crate::constants::HIGH_SCORE_STORAGE_KEY;
use crate::mode::GuessMode;

/// Per-mode best scores, persisted as one JSON document under a single
/// key. Loading is forgiving: absent or malformed data reads as an empty
/// table (every mode at zero). Writing is explicit; the controller saves
/// once per completed run, and only on a new record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct HighScoreTable {
    #[serde(default)]
    scores: BTreeMap<GuessMode, u32>,
}

impl HighScoreTable {
    /// Best score achieved under a mode; zero when never played.
    #[must_use]
    pub fn best(&self, mode: GuessMode) -> u32 {
        self.scores.get(&mode).copied().unwrap_or(0)
    }

    /// Record a finished run. Returns true when the score strictly beat
    /// the stored best and the table changed.
    pub fn record(&mut self, mode: GuessMode, score: u32) -> bool {
        if score > self.best(mode) {
            self.scores.insert(mode, score);
            return true;
        }
        false
    }

    /// Read the table from the backing store. Read failures and
    /// malformed payloads degrade to an empty table rather than
    /// surfacing an error.
    pub fn load<S: ScoreStore>(store: &S) -> Self {
        match store.read(HIGH_SCORE_STORAGE_KEY) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|err| {
                log::warn!("discarding malformed high-score data: {err}");
                Self::default()
            }),
            Ok(None) => Self::default(),
            Err(err) => {
                log::warn!("high-score store unreadable: {err}");
                Self::default()
            }
        }
    }

    /// Write the table to the backing store.
    ///
    /// # Errors
    ///
    /// Returns the store's error when the write is rejected.
    pub fn save<S: ScoreStore>(&self, store: &S) -> Result<(), S::Error> {
        let raw = serde_json::to_string(self).unwrap_or_else(|_| String::from("{}"));
        store.write(HIGH_SCORE_STORAGE_KEY, &raw)
    }
}
