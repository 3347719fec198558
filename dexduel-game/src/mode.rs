use serde::{Deserialize, Serialize};

use crate::species::Species;

/// Which numeric attribute the higher/lower judgment compares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum GuessMode {
    #[default]
    Weight,
    Bst,
    Hp,
    Attack,
    Defense,
    SpecialAttack,
    SpecialDefense,
    Speed,
}

impl GuessMode {
    pub const ALL: [Self; 8] = [
        Self::Weight,
        Self::Bst,
        Self::Hp,
        Self::Attack,
        Self::Defense,
        Self::SpecialAttack,
        Self::SpecialDefense,
        Self::Speed,
    ];

    /// The comparison scalar for a species under this mode.
    #[must_use]
    pub fn value_of(self, species: &Species) -> f32 {
        let stats = &species.base_stats;
        match self {
            Self::Weight => species.weight_kg,
            Self::Bst => f32::from(stats.total()),
            Self::Hp => f32::from(stats.hp),
            Self::Attack => f32::from(stats.atk),
            Self::Defense => f32::from(stats.def),
            Self::SpecialAttack => f32::from(stats.spa),
            Self::SpecialDefense => f32::from(stats.spd),
            Self::Speed => f32::from(stats.spe),
        }
    }

    /// Stable key used for serialization and the high-score table.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Weight => "weight",
            Self::Bst => "bst",
            Self::Hp => "hp",
            Self::Attack => "attack",
            Self::Defense => "defense",
            Self::SpecialAttack => "special_attack",
            Self::SpecialDefense => "special_defense",
            Self::Speed => "speed",
        }
    }

    /// Display unit for the comparison value. Stat modes are unitless.
    #[must_use]
    pub const fn unit(self) -> &'static str {
        match self {
            Self::Weight => "kg",
            _ => "",
        }
    }

    /// Human-readable label for menus.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Weight => "Weight",
            Self::Bst => "Base stat total",
            Self::Hp => "HP",
            Self::Attack => "Attack",
            Self::Defense => "Defense",
            Self::SpecialAttack => "Sp. Attack",
            Self::SpecialDefense => "Sp. Defense",
            Self::Speed => "Speed",
        }
    }

    /// Weight-based modes drop zero-valued entries from the pool; a 0 kg
    /// candidate would make every "lower" guess unwinnable.
    #[must_use]
    pub const fn is_weight_based(self) -> bool {
        matches!(self, Self::Weight)
    }

    /// Parse the stable key back into a mode. Used by the menu UI.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|mode| mode.key() == key)
    }
}
