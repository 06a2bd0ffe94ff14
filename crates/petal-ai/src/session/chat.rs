//! Streamed turn handling for SessionStore.

use tracing::{debug, warn};

use crate::adapter::to_request_payload;
use crate::responder::{collect_stream, respond};
use crate::{AiError, ChatModel, Turn};

use super::phase::TurnPhase;
use super::store::SessionStore;

impl SessionStore {
    /// Run one turn: record the user's text, stream the reply through
    /// `on_chunk`, and record the reply once the stream ends normally.
    ///
    /// On failure the user turn stays in the log and nothing else is
    /// added, whatever was already passed to `on_chunk`. A reply with no
    /// text is a failure too: the log never holds an empty model turn.
    pub async fn chat_streaming<F>(
        &mut self,
        model: &dyn ChatModel,
        user_text: impl Into<String>,
        on_chunk: F,
    ) -> Result<String, AiError>
    where
        F: FnMut(&str),
    {
        self.append(Turn::user(user_text));

        let payload = to_request_payload(self.all());
        self.set_phase(TurnPhase::PayloadBuilt);

        let opened = respond(model, &payload, self.model()).await;
        let stream = match opened {
            Ok(stream) => stream,
            Err(e) => return Err(self.fail(e)),
        };
        self.set_phase(TurnPhase::Streaming);

        match collect_stream(stream, on_chunk).await {
            Ok(full) if full.is_empty() => Err(self.fail(AiError::ApiError(
                "response finished with no text".into(),
            ))),
            Ok(full) => {
                self.append(Turn::assistant(full.clone()));
                self.set_phase(TurnPhase::Committed);
                debug!(session = %self.id().short(), turns = self.len(), "assistant turn committed");
                Ok(full)
            }
            Err(e) => Err(self.fail(e)),
        }
    }

    fn fail(&mut self, e: AiError) -> AiError {
        warn!(session = %self.id().short(), error = %e, "turn failed");
        self.set_phase(TurnPhase::Failed);
        e
    }
}
