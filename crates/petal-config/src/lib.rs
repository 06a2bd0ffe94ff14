//! Petal configuration system.
//!
//! Provides TOML-based configuration with validation and API credential
//! resolution. All config sections use sensible defaults so partial
//! configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use petal_config::{effective_model, load_config};
//!
//! let config = load_config(None).expect("failed to load config");
//! println!("{}", effective_model(None, None, &config));
//! ```

pub mod colors;
pub mod schema;
pub mod secrets;
pub mod toml_loader;
pub mod validation;

pub use schema::{PetalConfig, DEFAULT_MODEL};
pub use secrets::{resolve_api_key, ApiKey, API_KEY_VAR};

use petal_common::ConfigError;
use std::path::{Path, PathBuf};

/// Environment variable that overrides `[model] name`.
pub const MODEL_VAR: &str = "PETAL_MODEL";

/// Resolve the config file path: an explicit override, or the platform default.
pub fn config_path(override_path: Option<&Path>) -> Result<PathBuf, ConfigError> {
    match override_path {
        Some(path) => Ok(path.to_path_buf()),
        None => toml_loader::default_config_path(),
    }
}

/// Load config from `override_path` or the platform default path.
///
/// An explicit path must exist. The default path is created from the
/// commented template on first run.
pub fn load_config(override_path: Option<&Path>) -> Result<PetalConfig, ConfigError> {
    match override_path {
        Some(path) => toml_loader::load_from_path(path),
        None => toml_loader::load_default(),
    }
}

/// Pick the model id: CLI flag, then `PETAL_MODEL`, then the config file,
/// then [`DEFAULT_MODEL`]. Blank values at any level are skipped.
pub fn effective_model(
    cli_override: Option<&str>,
    env_override: Option<String>,
    config: &PetalConfig,
) -> String {
    let non_blank = |m: &str| Some(m.trim()).filter(|m| !m.is_empty()).map(str::to_string);
    cli_override
        .and_then(non_blank)
        .or_else(|| env_override.as_deref().and_then(non_blank))
        .or_else(|| non_blank(&config.model.name))
        .unwrap_or_else(|| DEFAULT_MODEL.to_string())
}
