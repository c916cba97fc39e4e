//! Trainer rosters

use serde::{Deserialize, Serialize};

/// A trainer and the team they field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trainer {
    pub name: String,

    /// Fielded team, in lead order
    #[serde(default)]
    pub team: Vec<TeamMember>,
}

/// One fielded Pokemon
///
/// Only `name` is used when building counters. The remaining fields are
/// passed through unchanged for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    /// Species name
    pub name: String,

    pub level: u8,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ability: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub moves: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nature: Option<String>,

    /// Individual values
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ivs: Option<StatValues>,
}

impl TeamMember {
    pub fn new(name: impl Into<String>, level: u8) -> Self {
        Self {
            name: name.into(),
            level,
            ability: None,
            moves: Vec::new(),
            item: None,
            nature: None,
            ivs: None,
        }
    }
}

/// Per-stat values (IVs)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatValues {
    pub hp: u8,
    pub atk: u8,
    pub def: u8,
    pub spa: u8,
    pub spd: u8,
    pub spe: u8,
}
