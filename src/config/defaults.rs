//! Built-in guardian defaults

use super::store::ConfigStore;

pub const NETWORKD_EXECUTABLE: &str = "NetworkdExecutable";
pub const CONTROLD_EXECUTABLE: &str = "ControldExecutable";
pub const PORTS_GUARDIAN: &str = "Ports.Guardian";
pub const PORTS_EDGED: &str = "Ports.EdgeD";
pub const PORTS_NETWORK_GATEWAY: &str = "Ports.NetworkGateway";
pub const DEFAULT_ENVIRONMENT: &str = "DefaultEnvironment";
/// Log lines kept in memory per supervised service.
pub const MAX_LOG_LINES: &str = "MaxLogLines";
pub const LOG_LEVEL: &str = "LogLevel";

pub const DEFAULT_NETWORKD_EXECUTABLE: &str = "gladius-networkd";
pub const DEFAULT_CONTROLD_EXECUTABLE: &str = "gladius-controld";
pub const DEFAULT_GUARDIAN_PORT: i64 = 7791;
pub const DEFAULT_EDGED_PORT: i64 = 7946;
pub const DEFAULT_NETWORK_GATEWAY_PORT: i64 = 3001;
pub const DEFAULT_MAX_LOG_LINES: i64 = 1000;

/// Environment entry handed to child services so they share our base path.
pub fn base_environment_entry(base: &str) -> String {
    format!("GLADIUSBASE={base}")
}

/// Register every built-in default. `base` may be empty.
pub fn register_guardian_defaults(store: &mut ConfigStore, base: &str) {
    store.register_default(NETWORKD_EXECUTABLE, DEFAULT_NETWORKD_EXECUTABLE);
    store.register_default(CONTROLD_EXECUTABLE, DEFAULT_CONTROLD_EXECUTABLE);
    store.register_default(PORTS_GUARDIAN, DEFAULT_GUARDIAN_PORT);
    store.register_default(PORTS_EDGED, DEFAULT_EDGED_PORT);
    store.register_default(PORTS_NETWORK_GATEWAY, DEFAULT_NETWORK_GATEWAY_PORT);
    store.register_default(DEFAULT_ENVIRONMENT, vec![base_environment_entry(base)]);
    store.register_default(MAX_LOG_LINES, DEFAULT_MAX_LOG_LINES);
}
