use serde::{Deserialize, Serialize};

use crate::constants::SPRITE_URL_BASE;

/// The six base stats carried by every species entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct BaseStats {
    pub hp: u16,
    pub atk: u16,
    pub def: u16,
    pub spa: u16,
    pub spd: u16,
    pub spe: u16,
}

impl BaseStats {
    /// Base stat total: the aggregate of all six sub-stats.
    #[must_use]
    pub const fn total(&self) -> u16 {
        self.hp + self.atk + self.def + self.spa + self.spd + self.spe
    }
}

/// One comparable dataset entry. Immutable once loaded; the round
/// controller only ever holds copies handed out by the dex.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Species {
    /// National dex number. Formes share the number of their base species.
    pub id: u16,
    pub name: String,
    pub gen: u8,
    pub weight_kg: f32,
    pub base_stats: BaseStats,
    /// True when a further evolution exists for this entry.
    #[serde(default)]
    pub has_evolutions: bool,
    /// Alternate forms never enter the guessing pool.
    #[serde(default)]
    pub forme: bool,
}

impl Species {
    /// Official-artwork sprite location for this entry's dex number.
    ///
    /// Not game logic; the mapping is deterministic and the view relies
    /// on it, so it lives next to the id it is derived from.
    #[must_use]
    pub fn sprite_url(&self) -> String {
        format!("{SPRITE_URL_BASE}/{}.png", self.id)
    }
}
