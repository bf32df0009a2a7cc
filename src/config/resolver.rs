//! Guardian configuration initialization

use super::defaults::{register_guardian_defaults, LOG_LEVEL};
use super::env::{EnvSource, ProcessEnv};
use super::level::LogLevel;
use super::loader::load_config_file;
use super::store::ConfigStore;
use crate::utils::paths::{BaseDir, GladiusBase};
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

/// Builds a [`ConfigStore`] from the config file, the environment and the
/// built-in defaults.
pub struct ConfigResolver {
    env: Arc<dyn EnvSource>,
    base: Box<dyn BaseDir>,
}

impl ConfigResolver {
    pub fn new() -> Self {
        Self { env: Arc::new(ProcessEnv), base: Box::new(GladiusBase) }
    }

    /// Read overrides (and the base directory lookup) from `env` instead of
    /// the process environment.
    pub fn env(mut self, env: Arc<dyn EnvSource>) -> Self {
        self.env = env;
        self
    }

    pub fn base_dir(mut self, base: impl BaseDir + 'static) -> Self {
        self.base = Box::new(base);
        self
    }

    /// Resolve the guardian configuration for `config_dir`.
    ///
    /// Never fails: a missing or broken config file and an unresolvable base
    /// directory are logged as warnings and the defaults take over.
    pub fn initialize(&self, config_dir: &Path) -> ConfigStore {
        let mut store = ConfigStore::with_env(Arc::clone(&self.env));

        match load_config_file(config_dir) {
            Ok((path, values)) => {
                info!("Loaded config from {}", path.display());
                store.set_file_values(path, values);
            }
            Err(err) => warn!("error reading config file: {}, using defaults", err),
        }

        let base = match self.base.gladius_base(self.env.as_ref()) {
            Ok(path) => path.to_string_lossy().into_owned(),
            Err(err) => {
                warn!(err = %err, "Couldn't get Gladius base");
                String::new()
            }
        };
        register_guardian_defaults(&mut store, &base);

        store.set_log_level(LogLevel::from_setting(&store.get_string(LOG_LEVEL)));
        store
    }
}

impl Default for ConfigResolver {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolve configuration for `config_dir` against the process environment.
pub fn initialize(config_dir: &Path) -> ConfigStore {
    ConfigResolver::new().initialize(config_dir)
}
