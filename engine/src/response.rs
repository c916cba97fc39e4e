//! Query results and their text rendering

use std::fmt;

use pkengine_command::MoveCategory;
use pkengine_dex::{Trainer, Type};
use serde::Serialize;

use crate::counter::CounterCandidate;
use crate::moveset::LegalMoveset;

/// What a query produced
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Response {
    /// Confirmation or guidance text
    Message { text: String },

    /// A single category of a legal moveset
    Moves {
        species: String,
        category: MoveCategory,
        moves: Vec<MoveEntry>,
    },

    /// Every category of a legal moveset
    Moveset(LegalMoveset),

    CounterTeam {
        trainer: String,
        members: Vec<CounterCandidate>,
    },

    /// A trainer's fielded team
    Team(Trainer),
}

/// A move name, with its level for level-up moves
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveEntry {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<i32>,
}

impl Response {
    pub fn message(text: impl Into<String>) -> Self {
        Response::Message { text: text.into() }
    }

    /// The text of a `Message`, if this is one
    pub fn as_message(&self) -> Option<&str> {
        match self {
            Response::Message { text } => Some(text),
            _ => None,
        }
    }
}

impl fmt::Display for MoveEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.level {
            Some(level) => write!(f, "{} (Lv. {})", self.name, level),
            None => write!(f, "{}", self.name),
        }
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Response::Message { text } => write!(f, "{}", text),
            Response::Moves {
                species,
                category,
                moves,
            } => {
                writeln!(f, "{} moves for {}:", capitalize(category.as_str()), species)?;
                write!(f, "  {}", join(moves))
            }
            Response::Moveset(moveset) => write_moveset(f, moveset),
            Response::CounterTeam { trainer, members } => write_counter_team(f, trainer, members),
            Response::Team(trainer) => write_team(f, trainer),
        }
    }
}

fn write_moveset(f: &mut fmt::Formatter<'_>, moveset: &LegalMoveset) -> fmt::Result {
    let level_up: Vec<MoveEntry> = moveset
        .level_up
        .iter()
        .map(|m| MoveEntry {
            name: m.name.clone(),
            level: Some(m.level),
        })
        .collect();

    writeln!(f, "Legal moveset for {}", moveset.species)?;
    writeln!(f, "  Level up: {}", or_none(join(&level_up)))?;
    writeln!(f, "  TM/HM:    {}", or_none(join(&moveset.tmhm)))?;
    writeln!(f, "  Egg:      {}", or_none(join(&moveset.egg)))?;
    writeln!(f, "  Tutor:    {}", or_none(join(&moveset.tutor)))?;
    write!(f, "  All ({}): {}", moveset.all.len(), or_none(join(&moveset.all)))
}

fn write_counter_team(
    f: &mut fmt::Formatter<'_>,
    trainer: &str,
    members: &[CounterCandidate],
) -> fmt::Result {
    if members.is_empty() {
        return write!(f, "No counters found for {}.", trainer);
    }

    write!(f, "Counter team for {} ({}):", trainer, members.len())?;
    for (i, member) in members.iter().enumerate() {
        write!(
            f,
            "\n  {}. {} [{}] Spe {} | {}",
            i + 1,
            member.name,
            type_list(&member.types),
            member.speed,
            or_none(join(&member.moves))
        )?;
    }
    Ok(())
}

fn write_team(f: &mut fmt::Formatter<'_>, trainer: &Trainer) -> fmt::Result {
    write!(f, "{}'s team ({}):", trainer.name, trainer.team.len())?;
    for member in &trainer.team {
        write!(f, "\n  - {} Lv. {}", member.name, member.level)?;
        if let Some(ability) = &member.ability {
            write!(f, " | Ability: {}", ability)?;
        }
        if let Some(item) = &member.item {
            write!(f, " | Item: {}", item)?;
        }
        if let Some(nature) = &member.nature {
            write!(f, " | Nature: {}", nature)?;
        }
        if let Some(ivs) = &member.ivs {
            write!(
                f,
                " | IVs: {}/{}/{}/{}/{}/{}",
                ivs.hp, ivs.atk, ivs.def, ivs.spa, ivs.spd, ivs.spe
            )?;
        }
        if !member.moves.is_empty() {
            write!(f, " | Moves: {}", join(&member.moves))?;
        }
    }
    Ok(())
}

fn join<T: fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn type_list(types: &[Type]) -> String {
    types
        .iter()
        .map(Type::as_str)
        .collect::<Vec<_>>()
        .join("/")
}

fn or_none(text: String) -> String {
    if text.is_empty() {
        "none".to_string()
    } else {
        text
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
