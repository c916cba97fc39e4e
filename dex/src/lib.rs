//! Reference data and type relationships for PK-Engine.
//!
//! This crate holds everything the query engine treats as static:
//!
//! ```text
//! pkengine-command (query text)
//!        │
//!        ▼
//! pkengine-engine (progression, movesets, counters)
//!        │
//!        └─> pkengine-dex (reference data + type chart) ← THIS CRATE
//! ```
//!
//! # Main Types
//!
//! ## Types
//! - [`Type`] - The 18 elemental types
//! - [`TypeChart`] - Weaknesses, resistances and immunities per defending type
//!
//! ## Reference Data
//! - [`Species`] - Types, base stats and the four learnsets
//! - [`MoveData`] - Move type plus display metadata
//! - [`GateTable`] / [`TmMapping`] - Which badge unlocks each TM/HM
//! - [`Trainer`] / [`TeamMember`] - Opponent rosters
//! - [`Dex`] - The indexed store over all of the above
//!
//! # Example Usage
//!
//! ```ignore
//! use pkengine_dex::{Dex, Type, TypeChart};
//!
//! let dex = Dex::load("data")?;
//! let chart = TypeChart::partial();
//!
//! let geodude = dex.species("geodude").unwrap();
//! assert!(chart.weaknesses(&geodude.types).contains(&Type::Water));
//! ```

use thiserror::Error;

pub mod data;
pub mod types;

pub use data::{
    BaseStats, DataPaths, Dex, GateTable, LevelUpMove, LoadWarning, MoveData, Species,
    StatValues, TeamMember, TmListing, TmMapping, Trainer, lookup_key, parse_tm_line,
    parse_tm_listing,
};
pub use types::{ChartKind, Type, TypeChart, TypeRelations};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DexError {
    #[error("Duplicate species: {0}")]
    DuplicateSpecies(String),

    #[error("Duplicate move: {0}")]
    DuplicateMove(String),

    #[error("Duplicate trainer: {0}")]
    DuplicateTrainer(String),

    #[error("Species {species} has {count} types, expected 1 or 2")]
    InvalidTypes { species: String, count: usize },
}
