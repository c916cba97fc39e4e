//! `pkengine` - ask ruleset questions about a Pokémon playthrough
//!
//! With no query words it starts an interactive prompt. Otherwise the words
//! form a single query, which is answered before exiting:
//!
//! ```text
//! pkengine moveset for Garchomp
//! PKENGINE_BADGES=4 pkengine --json counterteam for Roxanne
//! ```
//!
//! Exit codes for one-shot queries: 0 answered, 1 unknown name, 2 usage error.

mod args;
mod config;
mod logging;
mod render;
mod repl;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use pkengine_dex::{Dex, TypeChart};
use pkengine_engine::{Engine, Query, UNRECOGNIZED, parse_query};

use args::Options;
use config::Config;

fn main() -> Result<ExitCode> {
    logging::init();

    // Usage errors exit with 2, --help and --version with 0
    let options = Options::parse();

    let mut config = Config::from_env();
    if let Some(dir) = options.data_dir.clone() {
        config.data_dir = dir;
    }

    let dex = Dex::load(&config.data_dir)
        .with_context(|| format!("Failed to load data from {}", config.data_dir.display()))?;
    let mut engine =
        Engine::new(dex, TypeChart::new(config.chart)).with_progression(config.progression);

    match options.query_line() {
        Some(line) => run_once(&mut engine, &line, options.json),
        None => {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .context("Failed to start runtime")?;
            runtime.block_on(repl::run(&mut engine, options.json))?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn run_once(engine: &mut Engine, line: &str, json: bool) -> Result<ExitCode> {
    let query = match parse_query(line) {
        Ok(Query::Unrecognized(_)) => {
            eprintln!("{}", UNRECOGNIZED);
            return Ok(ExitCode::from(2));
        }
        Ok(query) => query,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("usage: {}", e.usage());
            return Ok(ExitCode::from(2));
        }
    };

    match engine.execute(query) {
        Ok(response) => {
            println!("{}", render::render(&response, json)?);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            Ok(ExitCode::from(1))
        }
    }
}
