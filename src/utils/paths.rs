//! Gladius base directory lookup

use crate::config::{BasePathError, EnvSource};
use std::path::PathBuf;

/// Variable that pins the base directory explicitly.
pub const GLADIUS_BASE_VAR: &str = "GLADIUSBASE";

/// Resolves the installation base directory shared with child services.
pub trait BaseDir {
    fn gladius_base(&self, env: &dyn EnvSource) -> Result<PathBuf, BasePathError>;
}

/// Standard lookup: `GLADIUSBASE` if set, else a per-user platform default.
#[derive(Debug, Default, Clone, Copy)]
pub struct GladiusBase;

impl BaseDir for GladiusBase {
    fn gladius_base(&self, env: &dyn EnvSource) -> Result<PathBuf, BasePathError> {
        if let Some(base) = non_empty(env, GLADIUS_BASE_VAR) {
            return Ok(PathBuf::from(base));
        }
        platform_default(env)
    }
}

impl<F> BaseDir for F
where
    F: Fn() -> Result<PathBuf, BasePathError>,
{
    fn gladius_base(&self, _env: &dyn EnvSource) -> Result<PathBuf, BasePathError> {
        self()
    }
}

#[cfg(target_os = "windows")]
fn platform_default(env: &dyn EnvSource) -> Result<PathBuf, BasePathError> {
    let drive = non_empty(env, "HOMEDRIVE").ok_or(BasePathError::MissingVar { var: "HOMEDRIVE" })?;
    let home = non_empty(env, "HOMEPATH").ok_or(BasePathError::MissingVar { var: "HOMEPATH" })?;
    Ok(PathBuf::from(format!("{drive}{home}")).join(".gladius"))
}

#[cfg(any(target_os = "linux", target_os = "macos"))]
fn platform_default(env: &dyn EnvSource) -> Result<PathBuf, BasePathError> {
    let home = non_empty(env, "HOME").ok_or(BasePathError::MissingVar { var: "HOME" })?;
    Ok(PathBuf::from(home).join(".config").join("gladius"))
}

#[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
fn platform_default(_env: &dyn EnvSource) -> Result<PathBuf, BasePathError> {
    Err(BasePathError::UnsupportedPlatform)
}

fn non_empty(env: &dyn EnvSource, name: &str) -> Option<String> {
    env.var(name).filter(|v| !v.is_empty())
}
