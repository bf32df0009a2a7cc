//! Recoverable configuration errors
//!
//! Neither kind aborts initialization: the resolver logs them and falls back.

use std::path::PathBuf;
use thiserror::Error;

/// The optional config file could not be used.
#[derive(Debug, Error)]
pub enum ConfigFileError {
    #[error("Config File \"{name}\" Not Found in \"{}\"", .dir.display())]
    NotFound { name: String, dir: PathBuf },

    #[error("failed reading {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid {format} in {}: {message}", .path.display())]
    Parse { path: PathBuf, format: &'static str, message: String },

    #[error("top level of {} must be a table, found {found}", .path.display())]
    NotATable { path: PathBuf, found: &'static str },
}

/// The Gladius base directory could not be determined.
#[derive(Debug, Error)]
pub enum BasePathError {
    #[error("{var} is not set, can't find gladius base directory")]
    MissingVar { var: &'static str },

    #[error(
        "unknown operating system, can't find gladius base directory. \
         Set the GLADIUSBASE environment variable to add it manually"
    )]
    UnsupportedPlatform,

    #[error("{0}")]
    Other(String),
}
