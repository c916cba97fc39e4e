//! TM/HM gate mapping
//!
//! Parsed from a text listing with one machine per line:
//!
//! ```text
//! TM26: Earthquake (Requires badge 6)
//! HM03: Surf (Requires badge 5)
//! ```
//!
//! Blank lines and `#` comments are skipped. Any other line that does not
//! match is reported as a [`LoadWarning`] instead of being silently dropped.

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

use super::lookup_key;

const REQUIREMENT: &str = "(requires badge";

/// One machine and the badge count it needs
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TmMapping {
    /// Machine id, uppercased ("TM26", "HM03")
    pub id: String,
    pub move_name: String,
    pub required_gate: i32,
}

impl TmMapping {
    pub fn new(id: impl Into<String>, move_name: impl Into<String>, required_gate: i32) -> Self {
        Self {
            id: id.into().to_ascii_uppercase(),
            move_name: move_name.into(),
            required_gate,
        }
    }
}

/// A listing line that could not be parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadWarning {
    /// 1-based line number
    pub line: usize,
    pub content: String,
}

impl fmt::Display for LoadWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: unrecognised entry '{}'", self.line, self.content)
    }
}

/// Result of parsing a listing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TmListing {
    pub mappings: Vec<TmMapping>,
    pub warnings: Vec<LoadWarning>,
}

/// Parse a full TM/HM listing
pub fn parse_tm_listing(text: &str) -> TmListing {
    let mut listing = TmListing::default();

    for (index, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        match parse_tm_line(line) {
            Some(mapping) => listing.mappings.push(mapping),
            None => listing.warnings.push(LoadWarning {
                line: index + 1,
                content: line.to_string(),
            }),
        }
    }

    listing
}

/// Parse a single `ID: Move (Requires badge N)` line
pub fn parse_tm_line(line: &str) -> Option<TmMapping> {
    let (id, rest) = line.split_once(':')?;
    let id = id.trim();
    if !is_machine_id(id) {
        return None;
    }

    let open = rest.to_ascii_lowercase().find(REQUIREMENT)?;
    let move_name = rest[..open].trim();
    if move_name.is_empty() {
        return None;
    }

    // Anything after the closing paren (locations, notes) is ignored
    let requirement = &rest[open + REQUIREMENT.len()..];
    let close = requirement.find(')')?;
    let required_gate = requirement[..close].trim().parse::<i32>().ok()?;

    Some(TmMapping::new(id, move_name, required_gate))
}

fn is_machine_id(id: &str) -> bool {
    let upper = id.to_ascii_uppercase();
    let digits = upper
        .strip_prefix("TM")
        .or_else(|| upper.strip_prefix("HM"));
    matches!(digits, Some(d) if !d.is_empty() && d.chars().all(|c| c.is_ascii_digit()))
}

/// Machine mappings indexed by the move they teach
#[derive(Debug, Clone, Default)]
pub struct GateTable {
    mappings: Vec<TmMapping>,
    by_move: HashMap<String, i32>,
}

impl GateTable {
    pub fn new(mappings: Vec<TmMapping>) -> Self {
        let mut by_move: HashMap<String, i32> = HashMap::new();
        for mapping in &mappings {
            // When two machines teach the same move, the easier one applies
            by_move
                .entry(lookup_key(&mapping.move_name))
                .and_modify(|gate| *gate = (*gate).min(mapping.required_gate))
                .or_insert(mapping.required_gate);
        }
        Self { mappings, by_move }
    }

    /// Badge count needed to use the machine teaching this move, if any
    pub fn required_gate(&self, move_name: &str) -> Option<i32> {
        self.by_move.get(&lookup_key(move_name)).copied()
    }

    pub fn mappings(&self) -> &[TmMapping] {
        &self.mappings
    }

    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }
}
