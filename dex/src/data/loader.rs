//! Load reference data from a directory of files

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

use super::dex::Dex;
use super::moves::MoveData;
use super::species::Species;
use super::tm::{TmListing, parse_tm_listing};
use super::trainer::Trainer;

pub const SPECIES_FILE: &str = "species.json";
pub const MOVES_FILE: &str = "moves.json";
pub const TM_FILE: &str = "tm-locations.txt";
pub const TRAINERS_FILE: &str = "trainers.json";

/// Where each data file lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    pub species: PathBuf,
    pub moves: PathBuf,
    pub tm_listing: PathBuf,
    pub trainers: PathBuf,
}

impl DataPaths {
    /// Standard file names inside one directory
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            species: dir.join(SPECIES_FILE),
            moves: dir.join(MOVES_FILE),
            tm_listing: dir.join(TM_FILE),
            trainers: dir.join(TRAINERS_FILE),
        }
    }
}

impl Dex {
    /// Load every data file from `dir`
    pub fn load(dir: impl AsRef<Path>) -> Result<Self> {
        Self::load_from(&DataPaths::in_dir(dir))
    }

    pub fn load_from(paths: &DataPaths) -> Result<Self> {
        let species = load_species(&paths.species)?;
        let moves = load_moves(&paths.moves)?;
        let listing = load_tm_listing(&paths.tm_listing)?;
        let trainers = load_trainers(&paths.trainers)?;

        for warning in &listing.warnings {
            tracing::warn!(
                file = %paths.tm_listing.display(),
                line = warning.line,
                content = %warning.content,
                "Skipping unrecognised TM listing entry"
            );
        }

        let dex = Dex::new(species, moves, listing.mappings, trainers)
            .context("Reference data failed validation")?;

        tracing::info!(
            species = dex.species_list().len(),
            moves = dex.move_count(),
            machines = dex.gates().len(),
            trainers = dex.trainers().len(),
            "Loaded reference data"
        );

        Ok(dex)
    }
}

pub fn load_species(path: &Path) -> Result<Vec<Species>> {
    read_json(path)
}

pub fn load_moves(path: &Path) -> Result<Vec<MoveData>> {
    read_json(path)
}

pub fn load_trainers(path: &Path) -> Result<Vec<Trainer>> {
    read_json(path)
}

pub fn load_tm_listing(path: &Path) -> Result<TmListing> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(parse_tm_listing(&text))
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("Failed to parse {}", path.display()))
}
