//! Command-line flags

use std::path::PathBuf;

use clap::Parser;

const EXAMPLES: &str = "\
Examples:
  pkengine
  pkengine moveset for Garchomp
  pkengine --json counterteam for Roxanne using only monotype Water
  PKENGINE_BADGES=4 PKENGINE_LEVEL_CAP=30 pkengine tmhm moveset for Gible";

/// Ask ruleset questions about a Pokémon playthrough
#[derive(Debug, Clone, Default, PartialEq, Eq, Parser)]
#[command(name = "pkengine", version, after_help = EXAMPLES)]
pub struct Options {
    /// Print responses as pretty JSON
    #[arg(long)]
    pub json: bool,

    /// Directory holding the reference data files [env: PKENGINE_DATA_DIR]
    #[arg(long, value_name = "PATH")]
    pub data_dir: Option<PathBuf>,

    /// A single query to answer; without one, start the interactive prompt
    #[arg(trailing_var_arg = true, value_name = "QUERY")]
    pub query: Vec<String>,
}

impl Options {
    pub fn query_line(&self) -> Option<String> {
        if self.query.is_empty() {
            None
        } else {
            Some(self.query.join(" "))
        }
    }
}
