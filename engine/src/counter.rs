//! Counter-team heuristic
//!
//! Walks the species catalog in order and accepts the first six species that
//! have a legal same-type move hitting a weakness of at least one fielded
//! foe. This is a cap on a scan, not a ranking: with more than six qualifiers,
//! catalog order decides who makes the cut.

use std::collections::BTreeSet;

use pkengine_dex::{Dex, Trainer, Type, TypeChart};
use serde::Serialize;

use crate::EngineError;
use crate::moveset::legal_moveset;
use crate::progression::Progression;

/// Most species a counter team can hold
pub const MAX_COUNTER_TEAM: usize = 6;

/// Moves listed per counter
pub const MAX_LISTED_MOVES: usize = 4;

/// One species picked to counter a trainer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CounterCandidate {
    pub name: String,
    pub types: Vec<Type>,

    /// Base speed (0 when the data has none)
    pub speed: u16,

    /// First legal moves in moveset order, not curated
    pub moves: Vec<String>,
}

/// Build a counter team against `trainer_name`
///
/// When `monotype` is given only species of that type are considered. A
/// filter that names no known type matches nothing.
pub fn build_counter_team(
    dex: &Dex,
    chart: &TypeChart,
    progression: &Progression,
    trainer_name: &str,
    monotype: Option<&str>,
) -> Result<Vec<CounterCandidate>, EngineError> {
    let trainer = dex
        .trainer(trainer_name)
        .ok_or_else(|| EngineError::trainer_not_found(trainer_name))?;
    Ok(counters_for(dex, chart, progression, trainer, monotype))
}

/// Build a counter team against an already resolved trainer
///
/// The roster does not have to come from `dex`; only its species are looked
/// up there.
pub fn counters_for(
    dex: &Dex,
    chart: &TypeChart,
    progression: &Progression,
    trainer: &Trainer,
    monotype: Option<&str>,
) -> Vec<CounterCandidate> {
    let monotype = match monotype {
        Some(raw) => match Type::from_name(raw) {
            Some(t) => Some(t),
            None => {
                tracing::warn!(monotype = raw, "Unknown monotype filter, nothing can match");
                return Vec::new();
            }
        },
        None => None,
    };

    // Foe weaknesses do not depend on the candidate, so work them out once
    let foe_weaknesses: Vec<BTreeSet<Type>> = trainer
        .team
        .iter()
        .filter_map(|member| match dex.species(&member.name) {
            Some(foe) => Some(chart.weaknesses(&foe.types)),
            None => {
                tracing::warn!(
                    trainer = %trainer.name,
                    foe = %member.name,
                    "Fielded species missing from the dex, ignoring it"
                );
                None
            }
        })
        .collect();

    let mut accepted: Vec<CounterCandidate> = Vec::new();

    for species in dex.species_list() {
        if accepted.len() >= MAX_COUNTER_TEAM {
            break;
        }

        if let Some(t) = monotype {
            if !species.has_type(t) {
                continue;
            }
        }

        let moveset = legal_moveset(dex, progression, species);
        if moveset.is_empty() {
            continue;
        }

        // Types of legal moves that also get the same-type bonus
        let stab_attacks: BTreeSet<Type> = moveset
            .all
            .iter()
            .filter_map(|name| dex.move_data(name))
            .map(|m| m.move_type)
            .filter(|t| species.has_type(*t))
            .collect();

        let hits = foe_weaknesses
            .iter()
            .any(|weak| stab_attacks.iter().any(|t| weak.contains(t)));
        if !hits {
            continue;
        }

        tracing::debug!(
            trainer = %trainer.name,
            candidate = %species.name,
            "Accepted counter candidate"
        );

        accepted.push(CounterCandidate {
            name: species.name.clone(),
            types: species.types.clone(),
            speed: species.speed(),
            moves: moveset.all.into_iter().take(MAX_LISTED_MOVES).collect(),
        });
    }

    // Stable: equal speeds keep catalog order
    accepted.sort_by(|a, b| b.speed.cmp(&a.speed));

    accepted
}
