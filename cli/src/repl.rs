//! Interactive prompt

use std::io::{self, Write};

use anyhow::{Context, Result};
use pkengine_engine::Engine;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::render::render;

pub const PROMPT: &str = "PK-Engine> ";

/// What one line of input produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Output(String),
    Error(String),
    Empty,
    Quit,
}

pub fn print_banner() {
    println!("Welcome to the PK-Engine CLI");
    println!("Type queries like:");
    println!("   badge 4");
    println!("   level cap 50");
    println!("   moveset for Garchomp");
    println!("   tmhm moveset for Garchomp");
    println!("   counterteam for Roxanne using only monotype Water");
    println!("   team for Roxanne");
    println!("Type help to see this again, exit or quit to leave.");
    println!();
}

/// Run one line against the engine
pub fn respond(engine: &mut Engine, line: &str, json: bool) -> Reply {
    let line = line.trim();
    match line {
        "" => Reply::Empty,
        "exit" | "quit" => Reply::Quit,
        "help" => {
            print_banner();
            Reply::Empty
        }
        _ => match engine.handle(line) {
            Ok(response) => match render(&response, json) {
                Ok(text) => Reply::Output(text),
                Err(e) => Reply::Error(format!("{:#}", e)),
            },
            Err(e) => Reply::Error(e.to_string()),
        },
    }
}

/// Read queries from stdin until exit, end of input or Ctrl-C
pub async fn run(engine: &mut Engine, json: bool) -> Result<()> {
    print_banner();

    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();

    loop {
        print!("{}", PROMPT);
        io::stdout().flush()?;

        let line = tokio::select! {
            line = lines.next_line() => line.context("Failed to read from stdin")?,
            _ = tokio::signal::ctrl_c() => {
                println!();
                None
            }
        };

        // End of input
        let Some(line) = line else {
            break;
        };

        match respond(engine, &line, json) {
            Reply::Output(text) => println!("{}", text),
            Reply::Error(message) => eprintln!("Error: {}", message),
            Reply::Empty => {}
            Reply::Quit => break,
        }
    }

    println!("Goodbye!");
    Ok(())
}
