//! Guardian configuration resolution
//!
//! Merges an optional `gladius-guardian` config file, `GUARDIAN_*` environment
//! overrides and built-in defaults, with precedence Env > File > Defaults.

pub mod defaults;
pub mod env;
pub mod error;
pub mod level;
pub mod loader;
pub mod resolver;
pub mod settings;
pub mod store;
pub mod value;

pub use env::{env_key_for, EnvSource, ProcessEnv, ENV_PREFIX};
pub use error::{BasePathError, ConfigFileError};
pub use level::LogLevel;
pub use resolver::{initialize, ConfigResolver};
pub use settings::{GuardianSettings, Ports};
pub use store::{ConfigStore, Source};
pub use value::ConfigValue;
