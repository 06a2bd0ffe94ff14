//! Model selection and generation parameters.

use serde::{Deserialize, Serialize};

/// Model used when neither the config file nor the environment names one.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash-lite";

/// Which hosted model to call and how.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Hosted model identifier, e.g. `gemini-2.5-flash-lite`.
    pub name: String,
    /// Sampling temperature (valid range: 0.0-2.0). Unset uses the API default.
    pub temperature: Option<f64>,
    /// Output token cap (valid range: 1-65536). Unset uses the API default.
    pub max_output_tokens: Option<u32>,
    /// Optional system instruction sent with every request.
    pub system_instruction: Option<String>,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_MODEL.into(),
            temperature: None,
            max_output_tokens: None,
            system_instruction: None,
        }
    }
}
