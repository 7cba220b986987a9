//! Output writers for extracted reservations.
//!
//! Every format has a pure `render_*` function returning the file body and a
//! `write_*` function that renders and writes it to disk.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

pub mod api_script;
pub mod csv;
pub mod json;

pub use api_script::{render_api_script, write_api_script, LEASE_ENDPOINT, LEASE_INTERFACE};
pub use csv::{render_csv, write_csv};
pub use json::{render_json, write_json};

/// What a writer did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmitOutcome {
    Written { path: PathBuf, count: usize },
    Skipped { reason: String },
}

/// Errors raised while producing an output artifact.
#[derive(Debug, Error)]
pub enum EmitError {
    #[error("failed to write {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to serialize reservations for {path}: {source}")]
    Json {
        path: String,
        source: serde_json::Error,
    },
}

/// Output file locations derived from the `--output` prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    pub csv: PathBuf,
    pub json: PathBuf,
    pub api_script: PathBuf,
}

impl ArtifactPaths {
    pub fn from_prefix(prefix: &str) -> Self {
        Self {
            csv: PathBuf::from(format!("{prefix}.csv")),
            json: PathBuf::from(format!("{prefix}.json")),
            api_script: PathBuf::from(format!("{prefix}_api.sh")),
        }
    }
}

fn write_artifact(path: &Path, body: &str) -> Result<(), EmitError> {
    fs::write(path, body).map_err(|source| EmitError::Io {
        path: path.display().to_string(),
        source,
    })
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::reservation::Reservation;

    pub fn printer() -> Reservation {
        Reservation {
            mac: "00:11:22:33:44:55".to_string(),
            ip: "192.168.1.10".to_string(),
            hostname: Some("printer".to_string()),
            description: None,
            cid: None,
            interface: "lan".to_string(),
        }
    }

    pub fn thermostat() -> Reservation {
        Reservation {
            mac: "aa:bb:cc:dd:ee:01".to_string(),
            ip: "10.0.20.50".to_string(),
            hostname: None,
            description: Some("Thermostat \"hallway\", it's new".to_string()),
            cid: Some("01:aa:bb:cc:dd:ee:01".to_string()),
            interface: "opt1".to_string(),
        }
    }
}
