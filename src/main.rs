//! Swipedeck command-line tool.
//!
//! Commands:
//! - replay: Run a recorded input trace through the engine and print frames
//! - defaults: Print the default configuration as TOML

#![allow(clippy::multiple_crate_versions)]

use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use swipedeck::observability::init_tracing;
use swipedeck::replay::{replay, Trace};
use swipedeck::{Config, SwipeDeckError};

/// Swipedeck - gesture-driven card navigation engine
#[derive(Parser)]
#[command(name = "swipedeck")]
#[command(version)]
#[command(about = "Replay gesture traces against the card navigation engine", long_about = None)]
struct Cli {
    /// Config file (TOML). Defaults to the XDG config location if present.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a JSON trace and print one JSON line per frame
    Replay {
        /// Trace file path
        trace: PathBuf,

        /// Deck size when the trace carries no cards
        #[arg(long, default_value = "10")]
        items: usize,
    },

    /// Print the default configuration as TOML
    Defaults,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "command failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), SwipeDeckError> {
    let config = load_config(cli.config.as_deref())?;
    init_tracing(&config);

    match cli.command {
        Commands::Replay { trace, items } => cmd_replay(&trace, &config, items),
        Commands::Defaults => {
            let rendered = toml::to_string_pretty(&Config::default())
                .map_err(|e| SwipeDeckError::Config(format!("cannot render defaults: {e}")))?;
            print!("{rendered}");
            Ok(())
        }
    }
}

fn load_config(explicit: Option<&Path>) -> Result<Config, SwipeDeckError> {
    if let Some(path) = explicit {
        return Config::from_file(path);
    }
    let fallback = swipedeck::infrastructure::default_config_path();
    if fallback.is_file() {
        return Config::from_file(fallback);
    }
    Ok(Config::default())
}

fn cmd_replay(trace_path: &Path, config: &Config, items: usize) -> Result<(), SwipeDeckError> {
    let trace = Trace::from_file(trace_path)?;
    let frames = replay(&trace, config, items)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for frame in &frames {
        writeln!(out, "{}", serde_json::to_string(frame)?)?;
    }
    out.flush()?;
    Ok(())
}
