//! Legal moveset resolution

use std::collections::HashSet;

use pkengine_command::MoveCategory;
use pkengine_dex::{Dex, LevelUpMove, Species, lookup_key};
use serde::Serialize;

use crate::EngineError;
use crate::progression::Progression;

/// The moves a species can use right now, split by how they are learned
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegalMoveset {
    /// Canonical species name
    pub species: String,

    /// Level-up moves at or below the level cap, in learnset order
    pub level_up: Vec<LevelUpMove>,

    /// TM/HM moves whose badge requirement is met (or that have none)
    pub tmhm: Vec<String>,

    pub egg: Vec<String>,

    pub tutor: Vec<String>,

    /// Deduplicated union: level-up, then TM/HM, then egg, then tutor
    pub all: Vec<String>,
}

impl LegalMoveset {
    /// Move names in one category
    pub fn category(&self, category: MoveCategory) -> Vec<&str> {
        match category {
            MoveCategory::LevelUp => self.level_up.iter().map(|m| m.name.as_str()).collect(),
            MoveCategory::Tmhm => self.tmhm.iter().map(String::as_str).collect(),
            MoveCategory::Egg => self.egg.iter().map(String::as_str).collect(),
            MoveCategory::Tutor => self.tutor.iter().map(String::as_str).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }

    pub fn contains(&self, move_name: &str) -> bool {
        self.all.iter().any(|m| m.eq_ignore_ascii_case(move_name))
    }
}

/// Resolve the legal moveset of a species by name (case-insensitive)
pub fn resolve_moves(
    dex: &Dex,
    progression: &Progression,
    species_name: &str,
) -> Result<LegalMoveset, EngineError> {
    let species = dex
        .species(species_name)
        .ok_or_else(|| EngineError::species_not_found(species_name))?;
    Ok(legal_moveset(dex, progression, species))
}

/// Filter a species' learnsets against the current progression
pub fn legal_moveset(dex: &Dex, progression: &Progression, species: &Species) -> LegalMoveset {
    let level_up: Vec<LevelUpMove> = species
        .level_up_moves
        .iter()
        .filter(|m| progression.allows_level(m.level))
        .cloned()
        .collect();

    // A move with no machine mapping has no requirement to fail
    let gates = dex.gates();
    let tmhm: Vec<String> = species
        .tm_moves
        .iter()
        .filter(|m| {
            gates
                .required_gate(m)
                .is_none_or(|gate| progression.allows_gate(gate))
        })
        .cloned()
        .collect();

    let egg = species.egg_moves.clone();
    let tutor = species.tutor_moves.clone();

    // Names match case-insensitively here as everywhere else; the first
    // spelling seen is the one kept
    let mut seen = HashSet::new();
    let all: Vec<String> = level_up
        .iter()
        .map(|m| &m.name)
        .chain(&tmhm)
        .chain(&egg)
        .chain(&tutor)
        .filter(|name| seen.insert(lookup_key(name)))
        .cloned()
        .collect();

    tracing::debug!(
        species = %species.name,
        level_cap = progression.level_cap(),
        gate_count = progression.gate_count(),
        legal = all.len(),
        "Resolved legal moveset"
    );

    LegalMoveset {
        species: species.name.clone(),
        level_up,
        tmhm,
        egg,
        tutor,
        all,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pkengine_dex::{BaseStats, MoveData, TmMapping, Type};

    fn dex() -> Dex {
        let gible = Species {
            name: "Gible".to_string(),
            types: vec![Type::Dragon, Type::Ground],
            base_stats: BaseStats::default(),
            level_up_moves: vec![
                LevelUpMove::new("Tackle", 1),
                LevelUpMove::new("Sand Attack", 3),
                LevelUpMove::new("Dragon Rage", 7),
                LevelUpMove::new("Dig", 25),
            ],
            tm_moves: vec![
                "Earthquake".to_string(),
                "Dig".to_string(),
                "Secret Power".to_string(),
            ],
            egg_moves: vec!["Outrage".to_string()],
            tutor_moves: vec!["Draco Meteor".to_string(), "Outrage".to_string()],
        };
        Dex::new(
            vec![gible],
            vec![MoveData::new("Tackle", Type::Normal)],
            vec![
                TmMapping::new("TM26", "Earthquake", 6),
                TmMapping::new("TM28", "Dig", 2),
            ],
            vec![],
        )
        .unwrap()
    }

    #[test]
    fn test_defaults_allow_everything() {
        let moveset = resolve_moves(&dex(), &Progression::default(), "gible").unwrap();
        assert_eq!(moveset.species, "Gible");
        assert_eq!(moveset.level_up.len(), 4);
        assert_eq!(moveset.tmhm, vec!["Earthquake", "Dig", "Secret Power"]);
        assert_eq!(moveset.egg, vec!["Outrage"]);
        assert_eq!(moveset.tutor, vec!["Draco Meteor", "Outrage"]);
    }

    #[test]
    fn test_all_is_ordered_deduplicated_union() {
        let moveset = resolve_moves(&dex(), &Progression::default(), "Gible").unwrap();
        assert_eq!(
            moveset.all,
            vec![
                "Tackle",
                "Sand Attack",
                "Dragon Rage",
                "Dig",
                "Earthquake",
                "Secret Power",
                "Outrage",
                "Draco Meteor",
            ]
        );
    }

    #[test]
    fn test_level_cap_filters_level_up() {
        let moveset = resolve_moves(&dex(), &Progression::new(8, 5), "Gible").unwrap();
        let names = moveset.category(MoveCategory::LevelUp);
        assert_eq!(names, vec!["Tackle", "Sand Attack"]);
    }

    #[test]
    fn test_negative_level_cap_yields_no_level_up() {
        let moveset = resolve_moves(&dex(), &Progression::new(8, -1), "Gible").unwrap();
        assert!(moveset.level_up.is_empty());
        assert!(!moveset.is_empty());
    }

    #[test]
    fn test_gates_filter_machines_but_unmapped_moves_stay() {
        let moveset = resolve_moves(&dex(), &Progression::new(1, 100), "Gible").unwrap();
        assert_eq!(moveset.tmhm, vec!["Secret Power"]);

        let moveset = resolve_moves(&dex(), &Progression::new(2, 100), "Gible").unwrap();
        assert_eq!(moveset.tmhm, vec!["Dig", "Secret Power"]);
    }

    #[test]
    fn test_egg_and_tutor_ignore_progression() {
        let moveset = resolve_moves(&dex(), &Progression::new(0, 0), "Gible").unwrap();
        assert_eq!(moveset.category(MoveCategory::Egg), vec!["Outrage"]);
        assert_eq!(moveset.category(MoveCategory::Tutor).len(), 2);
        assert!(moveset.contains("draco meteor"));
    }

    #[test]
    fn test_all_ignores_case_when_deduplicating() {
        let larvitar = Species {
            name: "Larvitar".to_string(),
            types: vec![Type::Rock, Type::Ground],
            base_stats: BaseStats::default(),
            level_up_moves: vec![LevelUpMove::new("Bite", 1), LevelUpMove::new("Dig", 10)],
            tm_moves: vec!["dig".to_string(), "Rock Slide".to_string()],
            egg_moves: vec![" DIG ".to_string()],
            tutor_moves: vec!["rock slide".to_string()],
        };
        let dex = Dex::new(vec![larvitar], vec![], vec![], vec![]).unwrap();

        let moveset = resolve_moves(&dex, &Progression::default(), "Larvitar").unwrap();
        assert_eq!(moveset.tmhm, vec!["dig", "Rock Slide"]);
        assert_eq!(moveset.all, vec!["Bite", "Dig", "Rock Slide"]);
    }

    #[test]
    fn test_unknown_species() {
        let err = resolve_moves(&dex(), &Progression::default(), "Missingno").unwrap_err();
        assert_eq!(err.to_string(), "Pokémon Missingno not found.");
    }
}
