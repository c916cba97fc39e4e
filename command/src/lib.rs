//! Query vocabulary for PK-Engine.
//!
//! Turns one line of free text into a [`Query`]. Command keywords are matched
//! case-insensitively with whitespace collapsed; identifiers (species and
//! trainer names, type filters) keep the case the user typed and are resolved
//! downstream.

use thiserror::Error;

pub mod query;

pub use query::{MoveCategory, Query, parse_query};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid number for '{command}': {value}")]
    InvalidNumber { command: &'static str, value: String },

    #[error("Missing {argument} for '{command}'")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("No such move category: {0}")]
    UnknownCategory(String),
}

impl ParseError {
    /// Usage line for the command that failed to parse
    pub fn usage(&self) -> &'static str {
        let command = match self {
            ParseError::InvalidNumber { command, .. } => command,
            ParseError::MissingArgument { command, .. } => command,
            ParseError::UnknownCategory(_) => "category moveset",
        };
        query::usage_for(command)
    }
}
