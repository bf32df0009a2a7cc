//! gladius-guardian: resolve runtime configuration for the Gladius guardian
//!
//! Loads `gladius-guardian.{json,toml,yaml,yml}`, applies `GUARDIAN_*`
//! environment overrides and built-in defaults, and prints the result.

use anyhow::Result;

mod cli;

fn main() -> Result<()> {
    cli::run()
}
