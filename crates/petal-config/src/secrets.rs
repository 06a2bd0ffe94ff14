//! API credential resolution.
//!
//! The key is looked up, first hit wins, in the `GEMINI_API_KEY`
//! environment variable, then in `secrets.toml` next to the config file,
//! then in `.streamlit/secrets.toml` under the working directory.
//! Blank values count as missing.

use std::fmt;
use std::path::{Path, PathBuf};

use petal_common::ConfigError;
use serde::Deserialize;
use tracing::{debug, warn};

/// Name of the credential, both as env var and as secrets file key.
pub const API_KEY_VAR: &str = "GEMINI_API_KEY";

const SECRETS_FILE: &str = "secrets.toml";

/// A resolved API key. `Debug` never prints the value.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey([REDACTED])")
    }
}

#[derive(Deserialize)]
struct SecretsFile {
    #[serde(rename = "GEMINI_API_KEY")]
    gemini_api_key: Option<String>,
}

/// Secrets files consulted after the environment, in order.
pub fn secrets_candidates(config_path: &Path) -> Vec<PathBuf> {
    let mut candidates = Vec::new();
    if let Some(dir) = config_path.parent() {
        candidates.push(dir.join(SECRETS_FILE));
    }
    candidates.push(PathBuf::from(".streamlit").join(SECRETS_FILE));
    candidates
}

/// Resolve the key from the process environment and the default secrets files.
pub fn resolve_api_key(config_path: &Path) -> Result<ApiKey, ConfigError> {
    resolve_api_key_from(
        std::env::var(API_KEY_VAR).ok(),
        &secrets_candidates(config_path),
    )
}

/// Resolve the key from an explicit env value and list of secrets files.
pub fn resolve_api_key_from(
    env_value: Option<String>,
    candidates: &[PathBuf],
) -> Result<ApiKey, ConfigError> {
    if let Some(key) = non_blank(env_value) {
        debug!("using {API_KEY_VAR} from environment");
        return Ok(ApiKey(key));
    }

    for path in candidates {
        if let Some(key) = read_secrets_file(path) {
            debug!("using {API_KEY_VAR} from {}", path.display());
            return Ok(ApiKey(key));
        }
    }

    let hint = candidates
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(" or ");
    Err(ConfigError::MissingCredential {
        name: API_KEY_VAR.into(),
        hint,
    })
}

fn read_secrets_file(path: &Path) -> Option<String> {
    let content = std::fs::read_to_string(path).ok()?;
    match toml::from_str::<SecretsFile>(&content) {
        Ok(file) => non_blank(file.gemini_api_key),
        Err(e) => {
            warn!("ignoring unreadable secrets file {}: {e}", path.display());
            None
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
