//! Get command implementation

use anyhow::Result;
use clap::Args;

use super::utils::print_json;
use gladius_guardian::config::{env_key_for, ConfigStore, ConfigValue};

#[derive(Args)]
pub struct GetArgs {
    /// Dotted configuration key, e.g. Ports.Guardian (case-insensitive)
    #[arg(value_name = "KEY")]
    pub key: String,
}

pub fn run(store: &ConfigStore, args: GetArgs) -> Result<()> {
    let Some((value, source)) = store.resolve(&args.key) else {
        anyhow::bail!(
            "Key not set: {} (set it in the config file or via {})",
            args.key,
            env_key_for(&args.key)
        );
    };
    tracing::debug!("{} resolved from {:?}", args.key, source);

    match value {
        ConfigValue::String(s) => {
            println!("{}", s);
            Ok(())
        }
        other => print_json(&other),
    }
}
