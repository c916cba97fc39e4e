//! Dex - the indexed, read-only reference data store

use std::collections::HashMap;

use crate::DexError;

use super::lookup_key;
use super::moves::MoveData;
use super::species::Species;
use super::tm::{GateTable, TmMapping};
use super::trainer::Trainer;

/// All reference data, loaded once and never mutated
///
/// Species and trainers keep the order they were given in. The counter
/// builder walks species in that order, so it is part of the contract and is
/// never replaced by hash order. Name lookups are case-insensitive.
#[derive(Debug, Clone, Default)]
pub struct Dex {
    species: Vec<Species>,
    species_index: HashMap<String, usize>,
    moves: HashMap<String, MoveData>,
    gates: GateTable,
    trainers: Vec<Trainer>,
    trainer_index: HashMap<String, usize>,
}

impl Dex {
    /// Build and index a dex from already-parsed records
    pub fn new(
        species: Vec<Species>,
        moves: Vec<MoveData>,
        machines: Vec<TmMapping>,
        trainers: Vec<Trainer>,
    ) -> Result<Self, DexError> {
        let mut species_index = HashMap::with_capacity(species.len());
        for (i, s) in species.iter().enumerate() {
            if s.types.is_empty() || s.types.len() > 2 {
                return Err(DexError::InvalidTypes {
                    species: s.name.clone(),
                    count: s.types.len(),
                });
            }
            if species_index.insert(lookup_key(&s.name), i).is_some() {
                return Err(DexError::DuplicateSpecies(s.name.clone()));
            }
        }

        let mut move_index = HashMap::with_capacity(moves.len());
        for m in moves {
            let key = lookup_key(&m.name);
            if move_index.contains_key(&key) {
                return Err(DexError::DuplicateMove(m.name));
            }
            move_index.insert(key, m);
        }

        let mut trainer_index = HashMap::with_capacity(trainers.len());
        for (i, t) in trainers.iter().enumerate() {
            if trainer_index.insert(lookup_key(&t.name), i).is_some() {
                return Err(DexError::DuplicateTrainer(t.name.clone()));
            }
        }

        Ok(Self {
            species,
            species_index,
            moves: move_index,
            gates: GateTable::new(machines),
            trainers,
            trainer_index,
        })
    }

    /// Look up a species by name (case-insensitive)
    pub fn species(&self, name: &str) -> Option<&Species> {
        self.species_index
            .get(&lookup_key(name))
            .map(|&i| &self.species[i])
    }

    /// All species in catalog order
    pub fn species_list(&self) -> &[Species] {
        &self.species
    }

    /// Look up a move by name (case-insensitive)
    pub fn move_data(&self, name: &str) -> Option<&MoveData> {
        self.moves.get(&lookup_key(name))
    }

    /// Every known move, in no particular order
    pub fn moves(&self) -> impl Iterator<Item = &MoveData> {
        self.moves.values()
    }

    pub fn move_count(&self) -> usize {
        self.moves.len()
    }

    pub fn gates(&self) -> &GateTable {
        &self.gates
    }

    /// Look up a trainer by exact name (case-insensitive)
    pub fn trainer(&self, name: &str) -> Option<&Trainer> {
        self.trainer_index
            .get(&lookup_key(name))
            .map(|&i| &self.trainers[i])
    }

    /// All trainers in file order
    pub fn trainers(&self) -> &[Trainer] {
        &self.trainers
    }
}
