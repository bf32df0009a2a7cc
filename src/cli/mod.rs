//! Command-line interface for gladius-guardian
//!
//! Resolves the guardian configuration and prints it, so operators can check
//! what the supervisor will run with.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{debug, warn};

use gladius_guardian::config::{self, ProcessEnv};
use gladius_guardian::logging;
use gladius_guardian::utils::paths::{BaseDir, GladiusBase};

mod get;
mod show;
mod utils;

/// Resolve gladius-guardian runtime configuration
#[derive(Parser)]
#[command(name = "gladius-guardian")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Directory containing gladius-guardian.{json,toml,yaml,yml} (defaults to the Gladius base)
    #[arg(short, long, global = true, value_name = "DIR")]
    config_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the resolved settings as JSON
    Show(show::ShowArgs),

    /// Print a single resolved value
    Get(get::GetArgs),
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // Warnings raised while resolving are emitted at the default level; the
    // configured LogLevel applies from then on.
    let log_handle = logging::init();

    let config_dir = cli.config_dir.unwrap_or_else(default_config_dir);
    let store = config::initialize(&config_dir);
    if let Some(handle) = &log_handle {
        handle.set_level(store.log_level())?;
    }
    debug!("Resolved configuration from {}", config_dir.display());

    match cli.command {
        Some(Commands::Show(args)) => show::run(&store, args),
        Some(Commands::Get(args)) => get::run(&store, args),
        None => show::run(&store, show::ShowArgs::default()),
    }
}

fn default_config_dir() -> PathBuf {
    match GladiusBase.gladius_base(&ProcessEnv) {
        Ok(base) => base,
        Err(err) => {
            warn!(err = %err, "Couldn't get Gladius base, searching the current directory");
            PathBuf::from(".")
        }
    }
}
