//! Engine - routes queries to the resolver, the counter builder and the
//! progression setters

use pkengine_command::{MoveCategory, ParseError, Query, parse_query};
use pkengine_dex::{Dex, Trainer, TypeChart};

use crate::EngineError;
use crate::counter::{CounterCandidate, build_counter_team, counters_for};
use crate::moveset::{LegalMoveset, resolve_moves};
use crate::progression::Progression;
use crate::response::{MoveEntry, Response};

/// Reply to input that matches no query form
pub const UNRECOGNIZED: &str = "Unrecognized query.";

/// Reference data plus the one piece of mutable state, the progression
///
/// Queries that change progression take `&mut self`, so a shared engine has
/// to be wrapped by the caller (a `Mutex`, or a single owning task).
#[derive(Debug, Clone)]
pub struct Engine {
    dex: Dex,
    chart: TypeChart,
    progression: Progression,
}

impl Engine {
    /// Create an engine with default (fully permissive) progression
    pub fn new(dex: Dex, chart: TypeChart) -> Self {
        Self {
            dex,
            chart,
            progression: Progression::default(),
        }
    }

    pub fn with_progression(mut self, progression: Progression) -> Self {
        self.progression = progression;
        self
    }

    pub fn dex(&self) -> &Dex {
        &self.dex
    }

    pub fn chart(&self) -> &TypeChart {
        &self.chart
    }

    pub fn progression(&self) -> Progression {
        self.progression
    }

    pub fn set_badges(&mut self, count: i32) {
        self.progression.set_gate_count(count);
        tracing::info!(gate_count = count, "Badge count updated");
    }

    pub fn set_level_cap(&mut self, level: i32) {
        self.progression.set_level_cap(level);
        tracing::info!(level_cap = level, "Level cap updated");
    }

    pub fn resolve_moves(&self, species: &str) -> Result<LegalMoveset, EngineError> {
        resolve_moves(&self.dex, &self.progression, species)
    }

    pub fn build_counter_team(
        &self,
        trainer: &str,
        monotype: Option<&str>,
    ) -> Result<Vec<CounterCandidate>, EngineError> {
        build_counter_team(&self.dex, &self.chart, &self.progression, trainer, monotype)
    }

    /// Look up the team a trainer fields
    pub fn trainer_team(&self, trainer: &str) -> Result<&Trainer, EngineError> {
        self.dex
            .trainer(trainer)
            .ok_or_else(|| EngineError::trainer_not_found(trainer))
    }

    /// Parse and run one line of input
    ///
    /// Unrecognised input and malformed arguments come back as a
    /// `Response::Message` with guidance; only lookups of unknown names fail.
    pub fn handle(&mut self, line: &str) -> Result<Response, EngineError> {
        match parse_query(line) {
            Ok(query) => self.execute(query),
            Err(err) => Ok(Response::message(guidance(&err))),
        }
    }

    pub fn execute(&mut self, query: Query) -> Result<Response, EngineError> {
        match query {
            Query::SetBadges(count) => {
                self.set_badges(count);
                Ok(Response::message(format!("Badge count set to {}", count)))
            }
            Query::SetLevelCap(level) => {
                self.set_level_cap(level);
                Ok(Response::message(format!("Level cap set to {}", level)))
            }
            Query::CategoryMoveset { category, species } => {
                let moveset = self.resolve_moves(&species)?;
                let moves = category_entries(&moveset, category);
                if moves.is_empty() {
                    return Ok(Response::message(format!(
                        "No such category: {} has no legal {} moves.",
                        moveset.species, category
                    )));
                }
                Ok(Response::Moves {
                    species: moveset.species,
                    category,
                    moves,
                })
            }
            Query::Moveset { species } => self.resolve_moves(&species).map(Response::Moveset),
            Query::CounterTeam { trainer, monotype } => {
                let trainer = self.trainer_team(&trainer)?;
                let members = counters_for(
                    &self.dex,
                    &self.chart,
                    &self.progression,
                    trainer,
                    monotype.as_deref(),
                );
                // Report the trainer under its canonical name
                Ok(Response::CounterTeam {
                    trainer: trainer.name.clone(),
                    members,
                })
            }
            Query::Team { trainer } => self.trainer_team(&trainer).cloned().map(Response::Team),
            Query::Unrecognized(_) => Ok(Response::message(UNRECOGNIZED)),
        }
    }
}

fn category_entries(moveset: &LegalMoveset, category: MoveCategory) -> Vec<MoveEntry> {
    match category {
        MoveCategory::LevelUp => moveset
            .level_up
            .iter()
            .map(|m| MoveEntry {
                name: m.name.clone(),
                level: Some(m.level),
            })
            .collect(),
        _ => moveset
            .category(category)
            .into_iter()
            .map(|name| MoveEntry {
                name: name.to_string(),
                level: None,
            })
            .collect(),
    }
}

fn guidance(err: &ParseError) -> String {
    format!("{}. Usage: {}", err, err.usage())
}
