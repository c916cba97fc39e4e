//! Moveset legality and counter-team heuristics for PK-Engine.
//!
//! # Overview
//!
//! ```text
//! pkengine-command (query text) ──┐
//!                                 ▼
//!              pkengine-engine ← THIS CRATE
//!                                 ▲
//! pkengine-dex (reference data) ──┘
//! ```
//!
//! - [`Progression`] - Badge count and level cap, the only mutable state
//! - [`resolve_moves`] - Which moves a species may use under a progression
//! - [`build_counter_team`] - Up to six species that hit a trainer's weaknesses
//! - [`Engine`] - Owns the data and progression, routes free-text queries
//! - [`Response`] - Query results, renderable as text or JSON
//!
//! # Example Usage
//!
//! ```ignore
//! use pkengine_dex::{Dex, TypeChart};
//! use pkengine_engine::Engine;
//!
//! let mut engine = Engine::new(Dex::load("data")?, TypeChart::partial());
//!
//! engine.handle("badge 4")?;
//! println!("{}", engine.handle("moveset for Garchomp")?);
//! println!("{}", engine.handle("counterteam for Roxanne using only monotype Water")?);
//! ```

use std::fmt;

use thiserror::Error;

pub mod counter;
mod engine;
pub mod moveset;
pub mod progression;
pub mod response;

pub use counter::{
    CounterCandidate, MAX_COUNTER_TEAM, MAX_LISTED_MOVES, build_counter_team, counters_for,
};
pub use engine::{Engine, UNRECOGNIZED};
pub use moveset::{LegalMoveset, legal_moveset, resolve_moves};
pub use progression::{DEFAULT_GATE_COUNT, DEFAULT_LEVEL_CAP, Progression};
pub use response::{MoveEntry, Response};

pub use pkengine_command::{MoveCategory, ParseError, Query, parse_query};

/// What kind of name failed to resolve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotFoundKind {
    Species,
    Trainer,
}

impl fmt::Display for NotFoundKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotFoundKind::Species => write!(f, "Pokémon"),
            NotFoundKind::Trainer => write!(f, "Trainer"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Name as the caller gave it
    #[error("{kind} {name} not found.")]
    NotFound { kind: NotFoundKind, name: String },
}

impl EngineError {
    pub fn species_not_found(name: &str) -> Self {
        EngineError::NotFound {
            kind: NotFoundKind::Species,
            name: name.trim().to_string(),
        }
    }

    pub fn trainer_not_found(name: &str) -> Self {
        EngineError::NotFound {
            kind: NotFoundKind::Trainer,
            name: name.trim().to_string(),
        }
    }
}
