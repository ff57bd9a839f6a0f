//! streakwatch: console driver for the pattern engine
//!
//! Feeds outcomes into a single engine and prints patterns, frequencies and
//! the suggestion. Results go to stdout, logs to stderr.

mod commands;
mod render;
mod settings;

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use streakwatch::{Engine, OutputFormat};
use tracing::debug;

use commands::Commands;
use render::Renderer;
use settings::Overrides;

#[derive(Parser)]
#[command(name = "streakwatch")]
#[command(about = "Pattern detection and next-outcome suggestion for Home/Draw/Away rounds")]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "streakwatch.yaml", env = "STREAKWATCH_CONFIG")]
    config: PathBuf,

    /// Seed for the tie-break random source
    #[arg(long, env = "STREAKWATCH_SEED")]
    seed: Option<u64>,

    /// Table identifier (overrides config file)
    #[arg(long)]
    table_id: Option<String>,

    /// Output format (overrides config file)
    #[arg(short, long, value_enum)]
    format: Option<Format>,

    /// Log level (overrides config file)
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Text => OutputFormat::Text,
            Format::Json => OutputFormat::Json,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = settings::load(
        &cli.config,
        Overrides {
            seed: cli.seed,
            table_id: cli.table_id,
            format: cli.format.map(OutputFormat::from),
            log_level: cli.log_level,
        },
    )?;

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(format!("streakwatch={}", config.general.log_level).parse()?),
        )
        .init();

    debug!(config = ?config, "Configuration loaded");

    let renderer = Renderer {
        format: config.display.format,
        show_frequencies: config.display.show_frequencies,
    };
    let mut engine = Engine::with_config(config.engine);

    match cli.command {
        Commands::Analyze { sequence } => {
            print!("{}", commands::analyze(&mut engine, &sequence, &renderer)?);
        }
        Commands::Session => {
            let stdin = std::io::stdin();
            commands::run_session(&mut engine, &renderer, stdin.lock(), std::io::stdout())?;
        }
        Commands::Catalog => {
            print!("{}", commands::catalog());
        }
    }

    Ok(())
}
