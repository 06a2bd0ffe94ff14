//! Decoding of streamed `GenerateContentResponse` events into text chunks.

use futures_util::stream::{self, Stream};
use futures_util::StreamExt;

use crate::streaming::SseEvent;
use crate::AiError;

/// What one streamed response event contributes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StreamPiece {
    /// Text from every candidate part, concatenated.
    pub text: String,
    /// The `finishReason` a candidate reported, if any.
    pub finish_reason: Option<String>,
}

/// Decode the JSON `data` of one SSE event.
pub fn parse_stream_event(data: &str) -> Result<StreamPiece, AiError> {
    let json: serde_json::Value =
        serde_json::from_str(data).map_err(|e| AiError::ParseError(e.to_string()))?;

    if let Some(err) = json.get("error") {
        let message = err["message"]
            .as_str()
            .map(str::to_string)
            .unwrap_or_else(|| err.to_string());
        return Err(AiError::ApiError(message));
    }

    if let Some(reason) = json["promptFeedback"]["blockReason"].as_str() {
        return Err(AiError::ApiError(format!("prompt blocked: {reason}")));
    }

    let mut piece = StreamPiece::default();
    if let Some(candidates) = json["candidates"].as_array() {
        for candidate in candidates {
            if let Some(parts) = candidate["content"]["parts"].as_array() {
                for part in parts {
                    if let Some(t) = part["text"].as_str() {
                        piece.text.push_str(t);
                    }
                }
            }
            if let Some(reason) = candidate["finishReason"].as_str() {
                piece.finish_reason = Some(reason.to_string());
            }
        }
    }
    Ok(piece)
}

struct ChunkState {
    events: std::pin::Pin<Box<dyn Stream<Item = Result<SseEvent, AiError>> + Send>>,
    finish_reason: Option<String>,
    saw_text: bool,
    done: bool,
}

/// Turn a stream of SSE events into a stream of non-empty text chunks.
///
/// If the events run out before any candidate reported a finish reason,
/// the response was cut off and a final `NetworkError` is yielded. A
/// response that finishes without any text (a `SAFETY` stop, say) ends
/// with an `ApiError` naming the reason.
pub fn text_chunks<S>(events: S) -> impl Stream<Item = Result<String, AiError>> + Send
where
    S: Stream<Item = Result<SseEvent, AiError>> + Send + 'static,
{
    let state = ChunkState {
        events: Box::pin(events),
        finish_reason: None,
        saw_text: false,
        done: false,
    };

    stream::unfold(state, |mut st| async move {
        if st.done {
            return None;
        }
        loop {
            let item = match st.events.next().await {
                Some(Ok(event)) => parse_stream_event(&event.data),
                Some(Err(e)) => Err(e),
                None => {
                    st.done = true;
                    let err = match (&st.finish_reason, st.saw_text) {
                        (Some(_), true) => return None,
                        (Some(reason), false) => AiError::ApiError(format!(
                            "response finished with {reason} and no text"
                        )),
                        (None, _) => {
                            AiError::NetworkError("stream ended before the model finished".into())
                        }
                    };
                    return Some((Err(err), st));
                }
            };
            match item {
                Ok(piece) => {
                    if piece.finish_reason.is_some() {
                        st.finish_reason = piece.finish_reason;
                    }
                    if !piece.text.is_empty() {
                        st.saw_text = true;
                        return Some((Ok(piece.text), st));
                    }
                }
                Err(e) => {
                    st.done = true;
                    return Some((Err(e), st));
                }
            }
        }
    })
}
