//! Startup plumbing: `.env` loading, logging, and client construction.

use std::path::Path;

use petal_ai::{GeminiClient, GeminiConfig};
use petal_common::{ConfigError, PetalError};
use petal_config::{ApiKey, PetalConfig};
use tracing_subscriber::filter::Directive;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, reload, EnvFilter, Registry};

/// Filter used when a directive does not parse.
const FALLBACK_DIRECTIVE: &str = "petal=warn";

/// Swaps the active log filter once the config is known.
pub type LogHandle = reload::Handle<EnvFilter, Registry>;

/// Parse `KEY=VALUE` lines, skipping blanks and `#` comments.
pub fn parse_dotenv(contents: &str) -> Vec<(String, String)> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| {
            let line = line.strip_prefix("export ").unwrap_or(line);
            let (key, value) = line.split_once('=')?;
            let value = value.trim().trim_matches('"').trim_matches('\'');
            Some((key.trim().to_string(), value.to_string()))
        })
        .collect()
}

/// Load environment variables from `path` without overriding ones
/// already set in the real environment.
pub fn load_dotenv(path: &Path) {
    let Ok(contents) = std::fs::read_to_string(path) else {
        return;
    };
    for (key, value) in parse_dotenv(&contents) {
        if std::env::var_os(&key).is_none() {
            std::env::set_var(key, value);
        }
    }
}

/// The log filter directive: CLI override, else the config level for
/// Petal's own crates.
pub fn log_directive(cli: Option<&str>, config: &PetalConfig) -> String {
    match cli {
        Some(directive) => directive.to_string(),
        None => format!("petal={}", config.logging.level.as_filter()),
    }
}

/// `RUST_LOG` plus `directive`, or the fallback filter if `directive`
/// does not parse.
fn env_filter(directive: &str) -> EnvFilter {
    match directive.parse::<Directive>() {
        Ok(directive) => EnvFilter::from_default_env().add_directive(directive),
        Err(_) => EnvFilter::new(FALLBACK_DIRECTIVE),
    }
}

/// Send logs to stderr so they never mix into the transcript on stdout.
///
/// Installed before the config is read so loader messages are kept;
/// call [`refilter`] once the configured level is known.
pub fn init_logging(directive: &str) -> LogHandle {
    let (filter, handle) = reload::Layer::new(env_filter(directive));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
    handle
}

/// Replace the active filter with one built from `directive`.
pub fn refilter(handle: &LogHandle, directive: &str) {
    if let Err(e) = handle.reload(env_filter(directive)) {
        tracing::warn!("failed to apply log level {directive}: {e}");
    }
}

/// Build the Gemini client, refusing to do so without a credential.
pub fn connect(
    config: &PetalConfig,
    api_key: Result<ApiKey, ConfigError>,
) -> Result<GeminiClient, PetalError> {
    let api_key = api_key?;
    let gemini = GeminiConfig::new(api_key.expose())
        .with_temperature(config.model.temperature)
        .with_max_output_tokens(config.model.max_output_tokens)
        .with_system_instruction(config.model.system_instruction.clone());
    Ok(GeminiClient::new(gemini)?)
}
