//! Reference data records and the [`Dex`] that indexes them

mod dex;
mod loader;
mod moves;
mod species;
mod tm;
mod trainer;

pub use dex::Dex;
pub use loader::{
    DataPaths, MOVES_FILE, SPECIES_FILE, TM_FILE, TRAINERS_FILE, load_moves, load_species,
    load_tm_listing, load_trainers,
};
pub use moves::MoveData;
pub use species::{BaseStats, LevelUpMove, Species};
pub use tm::{GateTable, LoadWarning, TmListing, TmMapping, parse_tm_line, parse_tm_listing};
pub use trainer::{StatValues, TeamMember, Trainer};

/// Normalize a name for lookup: trimmed and lowercased
///
/// Every name comparison goes through this, so two spellings that differ
/// only in case or padding are the same species, move or trainer.
pub fn lookup_key(name: &str) -> String {
    name.trim().to_lowercase()
}
