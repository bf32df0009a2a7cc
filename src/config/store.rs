//! Layered configuration store
//!
//! Values come from three layers, resolved per key in a fixed order:
//!
//! | Rank | Layer       | Source                                        |
//! |------|-------------|-----------------------------------------------|
//! | 1    | environment | `GUARDIAN_<KEY>` read at lookup time          |
//! | 2    | file        | `gladius-guardian.{json,toml,yaml,yml}`       |
//! | 3    | default     | [`ConfigStore::register_default`]             |
//!
//! Keys are case-insensitive. An empty environment variable counts as unset.

use super::env::{self, EnvSource, ProcessEnv};
use super::level::LogLevel;
use super::loader::FileValues;
use super::value::ConfigValue;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Which layer supplied a resolved value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Environment,
    File,
    Default,
}

/// Resolved guardian configuration.
///
/// Built once by [`ConfigResolver`](super::ConfigResolver) and then shared
/// read-only, typically behind an `Arc`.
pub struct ConfigStore {
    env: Arc<dyn EnvSource>,
    file: FileValues,
    file_path: Option<PathBuf>,
    defaults: BTreeMap<String, ConfigValue>,
    log_level: LogLevel,
}

impl ConfigStore {
    /// Empty store bound to the process environment.
    pub fn new() -> Self {
        Self::with_env(Arc::new(ProcessEnv))
    }

    pub fn with_env(env: Arc<dyn EnvSource>) -> Self {
        Self {
            env,
            file: FileValues::new(),
            file_path: None,
            defaults: BTreeMap::new(),
            log_level: LogLevel::default(),
        }
    }

    pub(crate) fn set_file_values(&mut self, path: PathBuf, values: FileValues) {
        self.file_path = Some(path);
        self.file = values;
    }

    pub(crate) fn set_log_level(&mut self, level: LogLevel) {
        self.log_level = level;
    }

    /// Register a lowest-precedence default and hand back the key.
    ///
    /// Registering the same key again replaces the earlier default; it never
    /// touches a value supplied by the file or the environment.
    pub fn register_default<'k>(&mut self, key: &'k str, value: impl Into<ConfigValue>) -> &'k str {
        self.defaults.insert(normalize_key(key), value.into());
        key
    }

    /// Resolve `key` and report which layer won.
    pub fn resolve(&self, key: &str) -> Option<(ConfigValue, Source)> {
        let key = normalize_key(key);
        if let Some(raw) = env::lookup(self.env.as_ref(), &key) {
            return Some((ConfigValue::String(raw), Source::Environment));
        }
        if let Some(value) = self.file.get(&key) {
            return Some((value.clone(), Source::File));
        }
        self.defaults.get(&key).map(|value| (value.clone(), Source::Default))
    }

    pub fn get(&self, key: &str) -> Option<ConfigValue> {
        self.resolve(key).map(|(value, _)| value)
    }

    /// True when any layer supplies `key`.
    pub fn is_set(&self, key: &str) -> bool {
        self.resolve(key).is_some()
    }

    /// String value, or `""` when unset or not representable as a string.
    pub fn get_string(&self, key: &str) -> String {
        self.get(key).and_then(|v| v.as_string()).unwrap_or_default()
    }

    /// Integer value, or `0` when unset or not numeric.
    pub fn get_int(&self, key: &str) -> i64 {
        self.get(key).and_then(|v| v.as_int()).unwrap_or_default()
    }

    /// Boolean value, or `false` when unset or unparsable.
    pub fn get_bool(&self, key: &str) -> bool {
        self.get(key).and_then(|v| v.as_bool()).unwrap_or_default()
    }

    /// String sequence, or empty when unset.
    pub fn get_string_slice(&self, key: &str) -> Vec<String> {
        self.get(key).map(|v| v.as_string_slice()).unwrap_or_default()
    }

    /// Every key known from the file or the defaults, lowercased and sorted.
    ///
    /// Environment-only keys cannot be enumerated since binding is by name.
    pub fn keys(&self) -> Vec<String> {
        let keys: BTreeSet<&String> = self.file.keys().chain(self.defaults.keys()).collect();
        keys.into_iter().cloned().collect()
    }

    /// Resolved value of every key in [`ConfigStore::keys`].
    pub fn all_settings(&self) -> BTreeMap<String, ConfigValue> {
        self.keys().into_iter().filter_map(|key| self.get(&key).map(|v| (key, v))).collect()
    }

    /// Logging level derived from `LogLevel` when the store was initialized.
    pub fn log_level(&self) -> LogLevel {
        self.log_level
    }

    /// Path of the config file that was loaded, if any.
    pub fn config_file(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ConfigStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigStore")
            .field("file_path", &self.file_path)
            .field("file", &self.file)
            .field("defaults", &self.defaults)
            .field("log_level", &self.log_level)
            .finish_non_exhaustive()
    }
}

fn normalize_key(key: &str) -> String {
    key.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn store_with_env(vars: &[(&str, &str)]) -> ConfigStore {
        let env: HashMap<String, String> =
            vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        ConfigStore::with_env(Arc::new(env))
    }

    #[test]
    fn register_default_returns_key_unchanged() {
        let mut store = store_with_env(&[]);
        assert_eq!(store.register_default("Ports.Guardian", 7791), "Ports.Guardian");
        assert_eq!(store.get_int("ports.guardian"), 7791);
    }

    #[test]
    fn re_registering_default_keeps_latest() {
        let mut store = store_with_env(&[]);
        store.register_default("X", "first");
        store.register_default("x", "second");
        assert_eq!(store.get_string("X"), "second");
        assert_eq!(store.keys(), vec!["x"]);
    }

    #[test]
    fn file_beats_default() {
        let mut store = store_with_env(&[]);
        let mut file = FileValues::new();
        file.insert("ports.edged".to_string(), ConfigValue::Integer(8000));
        store.set_file_values(PathBuf::from("gladius-guardian.toml"), file);
        store.register_default("Ports.EdgeD", 7946);

        assert_eq!(store.resolve("Ports.EdgeD"), Some((ConfigValue::Integer(8000), Source::File)));
    }

    #[test]
    fn environment_beats_file_and_default() {
        let mut store = store_with_env(&[("GUARDIAN_PORTS_EDGED", "9001")]);
        let mut file = FileValues::new();
        file.insert("ports.edged".to_string(), ConfigValue::Integer(8000));
        store.set_file_values(PathBuf::from("gladius-guardian.toml"), file);
        store.register_default("Ports.EdgeD", 7946);

        let (value, source) = store.resolve("PORTS.EDGED").expect("resolved");
        assert_eq!(source, Source::Environment);
        assert_eq!(value.as_int(), Some(9001));
        assert_eq!(store.get_int("Ports.EdgeD"), 9001);
    }

    #[test]
    fn empty_environment_value_falls_through() {
        let mut store = store_with_env(&[("GUARDIAN_MAXLOGLINES", "")]);
        store.register_default("MaxLogLines", 1000);
        assert_eq!(store.get_int("MaxLogLines"), 1000);
    }

    #[test]
    fn environment_binds_unregistered_keys() {
        let store = store_with_env(&[("GUARDIAN_SOME_NEW_KEY", "hello")]);
        assert!(store.is_set("Some.New.Key"));
        assert_eq!(store.get_string("some.new.key"), "hello");
        assert!(store.keys().is_empty());
    }

    #[test]
    fn missing_keys_read_as_zero_values() {
        let store = store_with_env(&[]);
        assert!(!store.is_set("Nope"));
        assert_eq!(store.get_string("Nope"), "");
        assert_eq!(store.get_int("Nope"), 0);
        assert!(!store.get_bool("Nope"));
        assert!(store.get_string_slice("Nope").is_empty());
    }

    #[test]
    fn all_settings_reflects_resolution() {
        let mut store = store_with_env(&[("GUARDIAN_MAXLOGLINES", "20")]);
        store.register_default("MaxLogLines", 1000);
        store.register_default("NetworkdExecutable", "gladius-networkd");

        let all = store.all_settings();
        assert_eq!(all.get("maxloglines"), Some(&ConfigValue::from("20")));
        assert_eq!(all.get("networkdexecutable"), Some(&ConfigValue::from("gladius-networkd")));
    }
}
