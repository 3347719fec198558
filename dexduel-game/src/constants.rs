//! Centralized tuning and contract constants for Dexduel game logic.
//!
//! Timing values are presentation affordances consumed through
//! `RevealTiming`; the pool and generation bounds are part of the data
//! provider contract.

// Round timing -------------------------------------------------------------
/// Reveal hold after a correct guess, before the pair rotates.
pub const REVEAL_CORRECT_MS: u64 = 1_500;
/// Reveal hold after an incorrect guess, before the run ends.
pub const REVEAL_INCORRECT_MS: u64 = 2_000;
/// Settle window after the pair rotates, before input re-enables.
pub const SETTLE_MS: u64 = 300;

// Pool contract ------------------------------------------------------------
/// A round needs two distinct candidates on screen.
pub const MIN_POOL_FOR_START: usize = 2;
pub const MIN_GENERATION: u8 = 1;
pub const MAX_GENERATION: u8 = 9;

// Persistence --------------------------------------------------------------
/// Single key/value slot holding the serialized high-score table.
pub const HIGH_SCORE_STORAGE_KEY: &str = "dexduel.highscores.v1";

// Sprites ------------------------------------------------------------------
pub const SPRITE_URL_BASE: &str =
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/other/official-artwork";
