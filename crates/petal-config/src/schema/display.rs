//! Terminal presentation settings.

use serde::{Deserialize, Serialize};

/// Title, prompt text and bubble colors for the chat transcript.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub title: String,
    /// Shown at the input prompt.
    pub placeholder: String,
    pub user_color: String,
    pub assistant_color: String,
    pub title_color: String,
    pub error_color: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            title: "Chatbot".into(),
            placeholder: "Wassup?".into(),
            user_color: "#FFA2B9".into(),
            assistant_color: "#FDD5DF".into(),
            title_color: "#561530".into(),
            error_color: "#ff4444".into(),
        }
    }
}
