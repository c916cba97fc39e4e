//! Species definitions

use serde::{Deserialize, Serialize};

use crate::types::Type;

/// A species as it appears in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Species {
    /// Display name (lookups are case-insensitive)
    pub name: String,

    /// One or two types, in order
    pub types: Vec<Type>,

    #[serde(default)]
    pub base_stats: BaseStats,

    /// Level-up learnset, in source order (ascending level by convention)
    #[serde(default)]
    pub level_up_moves: Vec<LevelUpMove>,

    /// Moves taught by TM or HM
    #[serde(default)]
    pub tm_moves: Vec<String>,

    #[serde(default)]
    pub egg_moves: Vec<String>,

    #[serde(default)]
    pub tutor_moves: Vec<String>,
}

impl Species {
    /// Check if this species has the given type
    pub fn has_type(&self, t: Type) -> bool {
        self.types.contains(&t)
    }

    pub fn speed(&self) -> u16 {
        self.base_stats.speed
    }
}

/// Base stat block; stats missing from the data are 0
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BaseStats {
    pub hp: u16,
    pub attack: u16,
    pub defense: u16,
    pub sp_attack: u16,
    pub sp_defense: u16,
    pub speed: u16,
}

/// One entry of a level-up learnset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelUpMove {
    #[serde(rename = "move")]
    pub name: String,
    pub level: i32,
}

impl LevelUpMove {
    pub fn new(name: impl Into<String>, level: i32) -> Self {
        Self {
            name: name.into(),
            level,
        }
    }
}
