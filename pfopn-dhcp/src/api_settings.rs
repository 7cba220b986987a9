use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Connection values written at the top of the generated API script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiSettings {
    pub host: String,
    pub api_key: String,
    pub api_secret: String,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            host: "https://your-opnsense-ip".to_string(),
            api_key: "your-api-key".to_string(),
            api_secret: "your-api-secret".to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct SettingsFile {
    #[serde(default)]
    api: PartialSettings,
}

#[derive(Debug, Default, Deserialize)]
struct PartialSettings {
    host: Option<String>,
    api_key: Option<String>,
    api_secret: Option<String>,
}

/// Errors returned when loading a settings file.
#[derive(Debug, Error)]
pub enum SettingsLoadError {
    #[error("failed to read settings file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse settings file {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
}

/// Load API settings from a TOML file. Keys left out keep their default.
pub fn load_api_settings(path: &Path) -> Result<ApiSettings, SettingsLoadError> {
    let raw = fs::read_to_string(path).map_err(|source| SettingsLoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_settings(&raw, path.display().to_string())
}

/// Settings embedded in the binary.
pub fn default_api_settings() -> ApiSettings {
    let embedded = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/settings/api.toml"));
    parse_settings(embedded, "embedded settings".to_string()).unwrap_or_default()
}

fn parse_settings(raw: &str, path: String) -> Result<ApiSettings, SettingsLoadError> {
    let parsed: SettingsFile =
        toml::from_str(raw).map_err(|source| SettingsLoadError::Parse { path, source })?;
    let defaults = ApiSettings::default();
    let api = parsed.api;
    Ok(ApiSettings {
        host: api.host.unwrap_or(defaults.host),
        api_key: api.api_key.unwrap_or(defaults.api_key),
        api_secret: api.api_secret.unwrap_or(defaults.api_secret),
    })
}
