//! Log verbosity selected by the `LogLevel` key

use serde::Serialize;
use std::fmt;
use tracing::level_filters::LevelFilter;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warning,
    Error,
}

impl LogLevel {
    /// Map a configured value onto a level. Matching is exact; anything
    /// unrecognized, including an empty string, selects `Info`.
    pub fn from_setting(value: &str) -> Self {
        match value {
            "debug" => LogLevel::Debug,
            "warning" => LogLevel::Warning,
            "info" => LogLevel::Info,
            "error" => LogLevel::Error,
            _ => LogLevel::Info,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warning => "warning",
            LogLevel::Error => "error",
        }
    }
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Warning => LevelFilter::WARN,
            LogLevel::Error => LevelFilter::ERROR,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognized_settings_map_to_levels() {
        assert_eq!(LogLevel::from_setting("debug"), LogLevel::Debug);
        assert_eq!(LogLevel::from_setting("warning"), LogLevel::Warning);
        assert_eq!(LogLevel::from_setting("info"), LogLevel::Info);
        assert_eq!(LogLevel::from_setting("error"), LogLevel::Error);
    }

    #[test]
    fn unrecognized_settings_fall_back_to_info() {
        assert_eq!(LogLevel::from_setting(""), LogLevel::Info);
        assert_eq!(LogLevel::from_setting("warn"), LogLevel::Info);
        assert_eq!(LogLevel::from_setting("DEBUG"), LogLevel::Info);
    }

    #[test]
    fn levels_convert_to_filters() {
        assert_eq!(LevelFilter::from(LogLevel::Warning), LevelFilter::WARN);
        assert_eq!(LevelFilter::from(LogLevel::Debug), LevelFilter::DEBUG);
    }
}
