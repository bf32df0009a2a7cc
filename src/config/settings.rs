//! Typed view of the keys the supervisor consumes

use super::defaults::{
    CONTROLD_EXECUTABLE, DEFAULT_ENVIRONMENT, MAX_LOG_LINES, NETWORKD_EXECUTABLE, PORTS_EDGED,
    PORTS_GUARDIAN, PORTS_NETWORK_GATEWAY,
};
use super::level::LogLevel;
use super::store::ConfigStore;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Ports {
    pub guardian: i64,
    #[serde(rename = "EdgeD")]
    pub edged: i64,
    pub network_gateway: i64,
}

/// Snapshot of the resolved guardian settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct GuardianSettings {
    pub networkd_executable: String,
    pub controld_executable: String,
    pub ports: Ports,
    pub default_environment: Vec<String>,
    pub max_log_lines: i64,
    pub log_level: LogLevel,
}

impl GuardianSettings {
    pub fn from_store(store: &ConfigStore) -> Self {
        Self {
            networkd_executable: store.get_string(NETWORKD_EXECUTABLE),
            controld_executable: store.get_string(CONTROLD_EXECUTABLE),
            ports: Ports {
                guardian: store.get_int(PORTS_GUARDIAN),
                edged: store.get_int(PORTS_EDGED),
                network_gateway: store.get_int(PORTS_NETWORK_GATEWAY),
            },
            default_environment: store.get_string_slice(DEFAULT_ENVIRONMENT),
            max_log_lines: store.get_int(MAX_LOG_LINES),
            log_level: store.log_level(),
        }
    }
}
