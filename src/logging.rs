//! Process-wide tracing setup with a runtime-adjustable level

use crate::config::LogLevel;
use anyhow::Result;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{fmt, prelude::*, reload, Registry};

/// Handle for changing the active level after the subscriber is installed.
#[derive(Clone)]
pub struct LogHandle {
    inner: reload::Handle<LevelFilter, Registry>,
}

impl LogHandle {
    pub fn set_level(&self, level: LogLevel) -> Result<()> {
        self.inner.modify(|filter| *filter = LevelFilter::from(level))?;
        Ok(())
    }

    pub fn current_level(&self) -> Option<LevelFilter> {
        self.inner.clone_current()
    }
}

/// Install the global subscriber at `Info` so configuration warnings are
/// visible before `LogLevel` is known.
///
/// Returns `None` when a subscriber was already installed.
pub fn init() -> Option<LogHandle> {
    let (filter, handle) = reload::Layer::new(LevelFilter::from(LogLevel::default()));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .ok()
        .map(|()| LogHandle { inner: handle })
}
