use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::GameConfig;
use crate::species::Species;

/// Bundled dataset snapshot used when no external data is supplied.
const BUILTIN_SPECIES_JSON: &str = include_str!("../data/species.json");

#[derive(Debug, Error)]
pub enum DexError {
    #[error("species data failed to parse: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("species data contains no entries")]
    Empty,
}

/// Container for the species dataset. Entries are immutable after load;
/// the round controller queries this through `eligible` and the pick
/// helpers and never depends on entry order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Dex {
    pub species: Vec<Species>,
}

impl Dex {
    /// Create an empty dex (useful for tests).
    #[must_use]
    pub fn empty() -> Self {
        Self {
            species: Vec::new(),
        }
    }

    /// Load a dex from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed or holds no entries.
    pub fn from_json(json: &str) -> Result<Self, DexError> {
        let dex: Self = serde_json::from_str(json)?;
        if dex.species.is_empty() {
            return Err(DexError::Empty);
        }
        Ok(dex)
    }

    /// Create a dex from pre-parsed species records.
    #[must_use]
    pub fn from_species(species: Vec<Species>) -> Self {
        Self { species }
    }

    /// Load the dataset bundled into the crate. The bundled JSON is
    /// validated by tests, so a parse failure degrades to an empty dex
    /// rather than failing construction.
    #[must_use]
    pub fn load_builtin() -> Self {
        Self::from_json(BUILTIN_SPECIES_JSON).unwrap_or_else(|err| {
            log::error!("builtin species data rejected: {err}");
            Self::empty()
        })
    }

    /// Every candidate eligible under the given configuration:
    /// generation within the inclusive window, alternate formes excluded,
    /// zero-valued entries excluded for weight-based modes, and entries
    /// with a further evolution excluded when `fully_evolved_only` is
    /// set. Order is unspecified.
    #[must_use]
    pub fn eligible(&self, config: &GameConfig) -> Vec<&Species> {
        self.species
            .iter()
            .filter(|s| !s.forme)
            .filter(|s| s.gen >= config.min_gen && s.gen <= config.max_gen)
            .filter(|s| !config.fully_evolved_only || !s.has_evolutions)
            .filter(|s| !config.mode.is_weight_based() || s.weight_kg > 0.0)
            .collect()
    }
}

/// Draw uniformly at random from a pool. `None` only for an empty pool.
pub fn pick<'a, R: Rng + ?Sized>(pool: &[&'a Species], rng: &mut R) -> Option<&'a Species> {
    if pool.is_empty() {
        return None;
    }
    let index = rng.gen_range(0..pool.len());
    Some(pool[index])
}

/// Draw uniformly at random from the pool minus one excluded id, keeping
/// the two displayed candidates distinct. `None` when nothing but the
/// excluded id remains.
pub fn pick_excluding<'a, R: Rng + ?Sized>(
    pool: &[&'a Species],
    exclude_id: u16,
    rng: &mut R,
) -> Option<&'a Species> {
    let remaining: Vec<&Species> = pool
        .iter()
        .copied()
        .filter(|s| s.id != exclude_id)
        .collect();
    pick(&remaining, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mode::GuessMode;
    use crate::species::BaseStats;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn entry(id: u16, gen: u8, weight_kg: f32, has_evolutions: bool, forme: bool) -> Species {
        Species {
            id,
            name: format!("species-{id}"),
            gen,
            weight_kg,
            base_stats: BaseStats {
                hp: 50,
                atk: 50,
                def: 50,
                spa: 50,
                spd: 50,
                spe: 50,
            },
            has_evolutions,
            forme,
        }
    }

    fn fixture() -> Dex {
        Dex::from_species(vec![
            entry(1, 1, 6.9, true, false),
            entry(3, 1, 100.0, false, false),
            entry(3, 6, 155.5, false, true),
            entry(152, 2, 6.4, true, false),
            entry(906, 9, 4.1, true, false),
            entry(908, 9, 31.2, false, false),
            entry(92, 1, 0.1, true, false),
            entry(999, 9, 0.0, false, false),
        ])
    }

    #[test]
    fn eligible_respects_generation_window() {
        let dex = fixture();
        let config = GameConfig {
            min_gen: 2,
            max_gen: 9,
            ..GameConfig::default()
        };
        let pool = dex.eligible(&config);
        assert!(pool.iter().all(|s| s.gen >= 2 && s.gen <= 9));
        assert!(pool.iter().any(|s| s.id == 152));
        assert!(!pool.iter().any(|s| s.id == 1));
    }

    #[test]
    fn eligible_never_returns_formes() {
        let dex = fixture();
        let pool = dex.eligible(&GameConfig::default());
        assert!(pool.iter().all(|s| !s.forme));
    }

    #[test]
    fn eligible_drops_zero_weight_in_weight_mode_only() {
        let dex = fixture();
        let weight = dex.eligible(&GameConfig::default());
        assert!(weight.iter().all(|s| s.weight_kg > 0.0));

        let bst = dex.eligible(&GameConfig {
            mode: GuessMode::Bst,
            ..GameConfig::default()
        });
        assert!(bst.iter().any(|s| s.id == 999));
    }

    #[test]
    fn eligible_honors_fully_evolved_only() {
        let dex = fixture();
        let pool = dex.eligible(&GameConfig {
            fully_evolved_only: true,
            ..GameConfig::default()
        });
        assert!(pool.iter().all(|s| !s.has_evolutions));
        assert!(!pool.is_empty());
    }

    #[test]
    fn pick_excluding_never_returns_excluded_id() {
        let dex = fixture();
        let pool = dex.eligible(&GameConfig::default());
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..50 {
            let picked = pick_excluding(&pool, 3, &mut rng).unwrap();
            assert_ne!(picked.id, 3);
        }
    }

    #[test]
    fn pick_from_exhausted_remainder_is_none() {
        let dex = Dex::from_species(vec![entry(25, 1, 6.0, true, false)]);
        let pool = dex.eligible(&GameConfig::default());
        let mut rng = SmallRng::seed_from_u64(7);
        assert!(pick_excluding(&pool, 25, &mut rng).is_none());
        assert!(pick(&[], &mut rng).is_none());
    }

    #[test]
    fn from_json_rejects_empty_dataset() {
        assert!(matches!(
            Dex::from_json(r#"{ "species": [] }"#),
            Err(DexError::Empty)
        ));
        assert!(matches!(Dex::from_json("not json"), Err(DexError::Parse(_))));
    }

    #[test]
    fn builtin_dataset_loads_and_is_plural() {
        let dex = Dex::load_builtin();
        assert!(dex.species.len() >= 2);
    }
}
