//! ChatModel trait implementation for GeminiClient.

use async_trait::async_trait;
use tracing::debug;

use crate::streaming::response_events;
use crate::{AiError, ChatModel, ChatStream, RoleContent};

use super::client::GeminiClient;
use super::events::text_chunks;

fn map_send_error(e: reqwest::Error) -> AiError {
    if e.is_timeout() {
        AiError::Timeout
    } else {
        AiError::NetworkError(e.to_string())
    }
}

#[async_trait]
impl ChatModel for GeminiClient {
    async fn stream_generate(
        &self,
        model_id: &str,
        payload: &[RoleContent],
    ) -> Result<ChatStream, AiError> {
        let body = self.build_request_body(payload);
        let url = self.stream_url(model_id);

        debug!(model = %model_id, turns = payload.len(), "Gemini API streaming request");

        let response = self
            .http
            .post(&url)
            .header("content-type", "application/json")
            .header("x-goog-api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(map_send_error)?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(AiError::RateLimited);
        }
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(AiError::ApiError(format!("HTTP {status}: {text}")));
        }

        Ok(Box::pin(text_chunks(response_events(response))))
    }
}
