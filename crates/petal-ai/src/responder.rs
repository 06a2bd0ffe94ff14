//! Streaming responder: open a generation stream and drain it.

use futures_util::StreamExt;
use tracing::debug;

use crate::{AiError, ChatModel, ChatStream, RoleContent};

/// Start a streamed generation for `payload`.
///
/// An empty payload is refused without calling the model.
pub async fn respond(
    model: &dyn ChatModel,
    payload: &[RoleContent],
    model_id: &str,
) -> Result<ChatStream, AiError> {
    if payload.is_empty() {
        return Err(AiError::EmptyPayload);
    }
    model.stream_generate(model_id, payload).await
}

/// Pull every chunk in arrival order, handing each to `on_chunk`, and
/// return their concatenation.
///
/// Stops at the first error. Chunks already handed out stay handed out,
/// but the partial text is dropped with the error.
pub async fn collect_stream<F>(mut stream: ChatStream, mut on_chunk: F) -> Result<String, AiError>
where
    F: FnMut(&str),
{
    let mut full = String::new();
    let mut count = 0usize;
    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        if chunk.is_empty() {
            continue;
        }
        count += 1;
        on_chunk(&chunk);
        full.push_str(&chunk);
    }
    debug!(chunks = count, chars = full.len(), "stream exhausted");
    Ok(full)
}
