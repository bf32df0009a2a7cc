//! Show command implementation

use anyhow::Result;
use clap::Args;

use super::utils::print_json;
use gladius_guardian::config::{ConfigStore, GuardianSettings};

#[derive(Args, Default)]
pub struct ShowArgs {
    /// Print every known key instead of the supervisor settings
    #[arg(long)]
    pub all: bool,
}

pub fn run(store: &ConfigStore, args: ShowArgs) -> Result<()> {
    if let Some(path) = store.config_file() {
        tracing::info!("Using config file {}", path.display());
    }

    if args.all {
        print_json(&store.all_settings())
    } else {
        print_json(&GuardianSettings::from_store(store))
    }
}
