//! Config file discovery and parsing

use super::error::ConfigFileError;
use super::value::{toml_datetime, ConfigValue};
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Base name of the guardian config file, without extension.
pub const CONFIG_NAME: &str = "gladius-guardian";

/// Extensions probed in order; the first existing file wins.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["json", "toml", "yaml", "yml"];

/// Flattened file contents: lowercase dotted key -> value.
pub type FileValues = BTreeMap<String, ConfigValue>;

/// Find and parse `<dir>/gladius-guardian.<ext>`.
pub fn load_config_file(dir: &Path) -> Result<(PathBuf, FileValues), ConfigFileError> {
    let Some(path) = discover_config(dir) else {
        return Err(ConfigFileError::NotFound { name: CONFIG_NAME.to_string(), dir: dir.to_path_buf() });
    };
    tracing::debug!("Found config file {}", path.display());

    let values = parse_config_file(&path)?;
    Ok((path, values))
}

pub fn discover_config(dir: &Path) -> Option<PathBuf> {
    SUPPORTED_EXTENSIONS
        .iter()
        .map(|ext| dir.join(format!("{CONFIG_NAME}.{ext}")))
        .find(|path| path.is_file())
}

/// Parse a config file, picking the format from its extension.
pub fn parse_config_file(path: &Path) -> Result<FileValues, ConfigFileError> {
    let content = fs::read_to_string(path)
        .map_err(|source| ConfigFileError::Read { path: path.to_path_buf(), source })?;

    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("").to_ascii_lowercase();
    let document = match ext.as_str() {
        "json" => serde_json::from_str::<JsonValue>(&content)
            .map_err(|e| parse_error(path, "JSON", e))?,
        "toml" => toml::from_str::<JsonValue>(&content).map_err(|e| parse_error(path, "TOML", e))?,
        "yaml" | "yml" => {
            // Empty, comment-only and bare `---` documents are valid, empty configs.
            match serde_yaml::from_str::<JsonValue>(&content)
                .map_err(|e| parse_error(path, "YAML", e))?
            {
                JsonValue::Null => JsonValue::Object(Default::default()),
                other => other,
            }
        }
        other => {
            return Err(ConfigFileError::Parse {
                path: path.to_path_buf(),
                format: "config",
                message: format!("unsupported extension '.{other}'"),
            })
        }
    };

    let JsonValue::Object(table) = document else {
        return Err(ConfigFileError::NotATable {
            path: path.to_path_buf(),
            found: json_kind(&document),
        });
    };

    let mut values = FileValues::new();
    flatten_into(&mut values, None, &table);
    Ok(values)
}

/// Flatten nested tables into lowercase dotted keys.
fn flatten_into(
    out: &mut FileValues,
    prefix: Option<&str>,
    table: &serde_json::Map<String, JsonValue>,
) {
    for (key, value) in table {
        let key = key.to_lowercase();
        let full = match prefix {
            Some(p) => format!("{p}.{key}"),
            None => key,
        };
        match value {
            JsonValue::Object(nested) if toml_datetime(nested).is_none() => {
                flatten_into(out, Some(&full), nested)
            }
            other => {
                if let Some(v) = ConfigValue::from_json(other) {
                    out.insert(full, v);
                }
            }
        }
    }
}

fn parse_error(path: &Path, format: &'static str, err: impl std::fmt::Display) -> ConfigFileError {
    ConfigFileError::Parse { path: path.to_path_buf(), format, message: err.to_string() }
}

fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "an array",
        JsonValue::Object(_) => "a table",
    }
}
