//! Move definitions

use serde::{Deserialize, Serialize};

use crate::types::Type;

/// A move as it appears in the catalog
///
/// Only `name` and `move_type` drive any logic; the rest is carried for
/// display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveData {
    pub name: String,

    #[serde(rename = "type")]
    pub move_type: Type,

    /// Physical, Special or Status
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub power: Option<u16>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accuracy: Option<u8>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pp: Option<u8>,
}

impl MoveData {
    pub fn new(name: impl Into<String>, move_type: Type) -> Self {
        Self {
            name: name.into(),
            move_type,
            category: None,
            power: None,
            accuracy: None,
            pp: None,
        }
    }
}
