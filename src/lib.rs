//! Runtime configuration for the Gladius guardian process supervisor.
//!
//! ```no_run
//! use std::path::Path;
//!
//! let store = gladius_guardian::config::initialize(Path::new("/etc/gladius"));
//! let port = store.get_int("Ports.Guardian");
//! # let _ = port;
//! ```

pub mod config;
pub mod logging;
pub mod utils;
