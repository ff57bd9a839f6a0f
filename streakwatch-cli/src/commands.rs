//! CLI commands
//!
//! `analyze` scores a fixed sequence, `session` drives one engine from
//! line-oriented input, `catalog` lists the patterns.

use std::io::{BufRead, Write};

use clap::Subcommand;
use streakwatch::Engine;
use tracing::{info, warn};

use crate::render::{self, Renderer};

/// Streakwatch CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Analyze a sequence of outcomes (e.g. "HHDA" or "home,draw,away")
    Analyze {
        /// Outcomes, oldest first
        sequence: String,
    },

    /// Read outcomes and commands from stdin, one per line
    Session,

    /// List the pattern catalog
    Catalog,
}

/// Help text for session mode.
const SESSION_HELP: &str = "\
commands:
  <outcome>   record home/draw/away (h/d/a); several per line allowed
  show        print the full snapshot
  patterns    print pattern results
  freq        print outcome frequencies
  suggest     print the suggestion
  clear       forget the history
  help        print this help
  quit        exit
";

/// Run a one-shot analysis of `sequence` and return the rendered snapshot.
pub fn analyze(engine: &mut Engine, sequence: &str, renderer: &Renderer) -> anyhow::Result<String> {
    let added = engine.append_sequence(sequence)?;
    info!(added, "Sequence recorded");
    renderer.snapshot(&engine.snapshot())
}

/// Drive `engine` from line-oriented `input`, writing results to `output`.
///
/// Invalid outcome tokens are reported and skipped; the session continues.
pub fn run_session<R: BufRead, W: Write>(
    engine: &mut Engine,
    renderer: &Renderer,
    input: R,
    mut output: W,
) -> anyhow::Result<()> {
    for line in input.lines() {
        let line = line?;
        let command = line.trim();
        if command.is_empty() {
            continue;
        }

        let rendered = match command.to_ascii_lowercase().as_str() {
            "quit" | "exit" => break,
            "help" => SESSION_HELP.to_string(),
            "show" => renderer.snapshot(&engine.snapshot())?,
            "patterns" => renderer.patterns(&engine.query_patterns())?,
            "freq" => renderer.frequencies(&engine.query_frequencies())?,
            "suggest" => renderer.suggestion(&engine.query_suggestion())?,
            "clear" => {
                engine.clear();
                "history cleared\n".to_string()
            }
            _ => match engine.append_sequence(command) {
                Ok(_) => renderer.suggestion(&engine.query_suggestion())?,
                Err(e) => {
                    warn!(input = command, "Rejected session input");
                    format!("error: {}\n", e)
                }
            },
        };

        output.write_all(rendered.as_bytes())?;
        output.flush()?;
    }
    Ok(())
}

/// Catalog listing.
pub fn catalog() -> String {
    render::catalog()
}
