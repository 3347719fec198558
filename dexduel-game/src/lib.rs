//! Dexduel Game Engine
//!
//! Platform-agnostic core logic for the Dexduel higher/lower stat duel.
//! This crate provides the dataset query layer, the round lifecycle state
//! machine, and the high-score persistence contract without UI or
//! platform-specific dependencies.

pub mod config;
pub mod constants;
pub mod dex;
pub mod highscore;
pub mod mode;
pub mod round;
pub mod species;
pub mod timer;

// Re-export commonly used types
pub use config::{GameConfig, RevealTiming};
pub use dex::{Dex, DexError, pick, pick_excluding};
pub use highscore::HighScoreTable;
pub use mode::GuessMode;
pub use round::{GamePhase, Guess, RoundController};
pub use species::{BaseStats, Species};
pub use timer::TimerQueue;

/// Trait for abstracting the key/value score store.
/// Platform-specific implementations should provide this.
pub trait ScoreStore {
    type Error: std::error::Error + 'static;

    /// Read the raw value stored under a key, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be reached.
    fn read(&self, key: &str) -> Result<Option<String>, Self::Error>;

    /// Write a raw value under a key.
    ///
    /// # Errors
    ///
    /// Returns an error if the store rejects the write.
    fn write(&self, key: &str, value: &str) -> Result<(), Self::Error>;
}
