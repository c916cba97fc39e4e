
use serde::Serialize;

use crate::ParseError;

/// A recognised query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// badge N
    SetBadges(i32),

    /// level cap N
    SetLevelCap(i32),

    /// CATEGORY moveset for SPECIES
    CategoryMoveset {
        category: MoveCategory,
        species: String,
    },

    /// moveset for SPECIES
    Moveset { species: String },

    /// counterteam for TRAINER[ using only monotype TYPE]
    CounterTeam {
        trainer: String,
        monotype: Option<String>,
    },

    /// team for TRAINER
    Team { trainer: String },

    /// Anything else, kept verbatim
    Unrecognized(String),
}

/// How a move is acquired
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveCategory {
    LevelUp,
    Tmhm,
    Egg,
    Tutor,
}

impl MoveCategory {
    pub const ALL: [MoveCategory; 4] = [
        MoveCategory::LevelUp,
        MoveCategory::Tmhm,
        MoveCategory::Egg,
        MoveCategory::Tutor,
    ];

    /// Parse a category phrase (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "level up" | "level-up" | "levelup" => Some(MoveCategory::LevelUp),
            "tmhm" | "tm/hm" | "tm" | "hm" => Some(MoveCategory::Tmhm),
            "egg" => Some(MoveCategory::Egg),
            "tutor" => Some(MoveCategory::Tutor),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MoveCategory::LevelUp => "level up",
            MoveCategory::Tmhm => "tmhm",
            MoveCategory::Egg => "egg",
            MoveCategory::Tutor => "tutor",
        }
    }
}

impl std::fmt::Display for MoveCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

pub(crate) fn usage_for(command: &str) -> &'static str {
    match command {
        "badge" => "badge <number>",
        "level cap" => "level cap <number>",
        "moveset" => "moveset for <pokemon>",
        "category moveset" => "<level up|tmhm|egg|tutor> moveset for <pokemon>",
        "counterteam" => "counterteam for <trainer> [using only monotype <type>]",
        "team" => "team for <trainer>",
        _ => "badge <n> | level cap <n> | moveset for <pokemon> | counterteam for <trainer>",
    }
}

/// Parse one input line into a query
///
/// Forms are tried in order and the first match wins. Input that matches no
/// form is `Query::Unrecognized`, not an error; errors are reserved for a
/// recognised command with a bad or missing argument.
pub fn parse_query(line: &str) -> Result<Query, ParseError> {
    let line = Line::new(line);

    if let Some(rest) = line.after_keyword("badge") {
        return parse_number(rest.text, "badge", "badge count").map(Query::SetBadges);
    }

    if let Some(rest) = line.after_keyword("level cap") {
        return parse_number(rest.text, "level cap", "level").map(Query::SetLevelCap);
    }

    if let Some((prefix, rest)) = line.split_keyword("moveset for") {
        // A known category, or one stray word in its place; a longer lead-in
        // is not this form at all
        let category = match MoveCategory::parse(prefix) {
            Some(category) => Some(category),
            None if !prefix.is_empty() && !prefix.contains(' ') => {
                return Err(ParseError::UnknownCategory(prefix.to_string()));
            }
            None => None,
        };
        if let Some(category) = category {
            let species = required(rest.text, "category moveset", "pokemon name")?;
            return Ok(Query::CategoryMoveset { category, species });
        }
    }

    if let Some(rest) = line.after_keyword("moveset for") {
        let species = required(rest.text, "moveset", "pokemon name")?;
        return Ok(Query::Moveset { species });
    }

    if let Some(rest) = line.after_keyword("counterteam for") {
        let (trainer, monotype) = match rest.split_once("using only monotype") {
            Some((trainer, monotype)) => {
                let monotype = required(monotype, "counterteam", "monotype")?;
                (trainer, Some(monotype))
            }
            None => (rest.text, None),
        };
        let trainer = required(trainer, "counterteam", "trainer name")?;
        return Ok(Query::CounterTeam { trainer, monotype });
    }

    if let Some(rest) = line.after_keyword("team for") {
        let trainer = required(rest.text, "team", "trainer name")?;
        return Ok(Query::Team { trainer });
    }

    Ok(Query::Unrecognized(line.text))
}

fn parse_number(
    text: &str,
    command: &'static str,
    argument: &'static str,
) -> Result<i32, ParseError> {
    // Only the first token counts: "badge 4 please" sets 4
    let token = text.split(' ').next().unwrap_or_default();
    if token.is_empty() {
        return Err(ParseError::MissingArgument { command, argument });
    }
    token.parse::<i32>().map_err(|_| ParseError::InvalidNumber {
        command,
        value: token.to_string(),
    })
}

fn required(
    text: &str,
    command: &'static str,
    argument: &'static str,
) -> Result<String, ParseError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ParseError::MissingArgument { command, argument });
    }
    Ok(text.to_string())
}

/// Input with whitespace collapsed, plus an ASCII-lowercased twin.
///
/// ASCII lowercasing keeps byte offsets stable, so a match found in `lower`
/// can be sliced out of `text` with its original case.
struct Line {
    text: String,
    lower: String,
}

/// A tail of a [`Line`] in both casings
struct Rest<'a> {
    text: &'a str,
    lower: &'a str,
}

impl Line {
    fn new(raw: &str) -> Self {
        let text = raw.split_whitespace().collect::<Vec<_>>().join(" ");
        let lower = text.to_ascii_lowercase();
        Self { text, lower }
    }

    fn rest_from(&self, offset: usize) -> Rest<'_> {
        Rest {
            text: self.text[offset..].trim_start(),
            lower: self.lower[offset..].trim_start(),
        }
    }

    /// Remainder after a leading keyword that ends on a word boundary
    fn after_keyword(&self, keyword: &str) -> Option<Rest<'_>> {
        let tail = self.lower.strip_prefix(keyword)?;
        if !tail.is_empty() && !tail.starts_with(' ') {
            return None;
        }
        Some(self.rest_from(keyword.len()))
    }

    /// Split around the first whole-word occurrence of `keyword`
    fn split_keyword(&self, keyword: &str) -> Option<(&str, Rest<'_>)> {
        let (start, end) = find_word(&self.lower, keyword)?;
        Some((self.text[..start].trim_end(), self.rest_from(end)))
    }
}

impl<'a> Rest<'a> {
    /// Case-insensitive split on a whole-word separator
    fn split_once(&self, separator: &str) -> Option<(&'a str, &'a str)> {
        let (start, end) = find_word(self.lower, separator)?;
        Some((&self.text[..start], &self.text[end..]))
    }
}

/// Byte range of the first occurrence of `word` bounded by spaces or the ends
fn find_word(haystack: &str, word: &str) -> Option<(usize, usize)> {
    let bytes = haystack.as_bytes();
    let mut from = 0;
    while let Some(found) = haystack[from..].find(word) {
        let start = from + found;
        let end = start + word.len();
        let starts_word = start == 0 || bytes[start - 1] == b' ';
        let ends_word = end == bytes.len() || bytes[end] == b' ';
        if starts_word && ends_word {
            return Some((start, end));
        }
        from = end;
    }
    None
}
