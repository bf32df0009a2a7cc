//! Environment-variable binding
//!
//! Every configuration key maps onto exactly one variable name:
//! `GUARDIAN_` + the key uppercased with `.` replaced by `_`.

use std::collections::HashMap;

/// Prefix shared by every guardian environment override.
pub const ENV_PREFIX: &str = "GUARDIAN";

/// Source of environment variables.
///
/// The store consults its source on every read, so overrides apply to any key,
/// including ones that were never registered as defaults.
pub trait EnvSource: Send + Sync {
    fn var(&self, name: &str) -> Option<String>;
}

/// The real process environment.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

/// Environment variable name bound to a configuration key.
///
/// ```
/// use gladius_guardian::config::env_key_for;
/// assert_eq!(env_key_for("Ports.Guardian"), "GUARDIAN_PORTS_GUARDIAN");
/// ```
pub fn env_key_for(key: &str) -> String {
    format!("{}_{}", ENV_PREFIX, key.to_uppercase().replace('.', "_"))
}

/// Look up the override for `key`. Empty values count as unset.
pub(crate) fn lookup(env: &dyn EnvSource, key: &str) -> Option<String> {
    env.var(&env_key_for(key)).filter(|v| !v.is_empty())
}
