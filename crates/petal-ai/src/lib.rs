//! Chat engine for Petal.
//!
//! Provides:
//! - the conversation log (`SessionStore`) and its `Turn`s
//! - the history adapter that turns the log into a Gemini request payload
//! - a `ChatModel` trait producing a lazy stream of text chunks
//! - a Gemini implementation over server-sent events

pub mod adapter;
pub mod gemini;
pub mod responder;
pub mod session;
pub mod streaming;

use std::pin::Pin;

use async_trait::async_trait;
use futures_util::Stream;

pub use adapter::{to_request_payload, Part, RoleContent};
pub use gemini::{GeminiClient, GeminiConfig};
pub use responder::{collect_stream, respond};
pub use session::{SessionStore, TurnPhase};

/// A finite, non-restartable sequence of generated text chunks.
///
/// Exhaustion means the model finished normally; an `Err` item means the
/// stream broke and no further items follow.
pub type ChatStream = Pin<Box<dyn Stream<Item = Result<String, AiError>> + Send>>;

/// A hosted text-generation backend.
#[async_trait]
pub trait ChatModel: Send + Sync {
    /// Start a streamed generation for `payload` against model `model_id`.
    async fn stream_generate(
        &self,
        model_id: &str,
        payload: &[RoleContent],
    ) -> Result<ChatStream, AiError>;
}

/// Who produced a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

/// One message in the conversation log. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Turn {
    role: Role,
    content: String,
}

impl Turn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AiError {
    #[error("API error: {0}")]
    ApiError(String),
    #[error("Rate limited")]
    RateLimited,
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Timeout")]
    Timeout,
    #[error("nothing to send: conversation is empty")]
    EmptyPayload,
}

impl From<AiError> for petal_common::PetalError {
    fn from(e: AiError) -> Self {
        petal_common::PetalError::Ai(e.to_string())
    }
}
