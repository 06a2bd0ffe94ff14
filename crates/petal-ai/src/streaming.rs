//! Server-Sent Events (SSE) streaming parser.
//!
//! Gemini's `streamGenerateContent?alt=sse` endpoint frames each partial
//! response as an SSE event. This module turns any buffered async reader
//! (normally a reqwest body) into a lazy stream of those events.

use futures_util::stream::{self, Stream};
use futures_util::StreamExt;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};
use tokio_util::io::StreamReader;

use crate::AiError;

/// A single SSE event parsed from the stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SseEvent {
    /// The `event:` field, if present.
    pub event: Option<String>,
    /// The event data, multiple `data:` lines joined with `\n`.
    pub data: String,
}

struct ParserState<R> {
    lines: Lines<R>,
    event: Option<String>,
    data: String,
    done: bool,
}

impl<R> ParserState<R> {
    fn push_line(&mut self, line: &str) {
        if let Some(event_type) = field_value(line, "event") {
            self.event = Some(event_type.to_string());
        } else if let Some(data) = field_value(line, "data") {
            if !self.data.is_empty() {
                self.data.push('\n');
            }
            self.data.push_str(data);
        }
        // Ignore other fields (id:, retry:, comments)
    }

    fn take_event(&mut self) -> Option<SseEvent> {
        let event = self.event.take();
        if self.data.is_empty() {
            return None;
        }
        Some(SseEvent {
            event,
            data: std::mem::take(&mut self.data),
        })
    }
}

fn field_value<'a>(line: &'a str, name: &str) -> Option<&'a str> {
    let rest = line.strip_prefix(name)?.strip_prefix(':')?;
    Some(rest.strip_prefix(' ').unwrap_or(rest))
}

/// Parse SSE events from a buffered reader.
///
/// The stream ends when the reader is exhausted; a read failure is
/// yielded once as `AiError::NetworkError` and ends the stream.
pub fn sse_events<R>(reader: R) -> impl Stream<Item = Result<SseEvent, AiError>> + Send
where
    R: AsyncBufRead + Unpin + Send,
{
    let state = ParserState {
        lines: reader.lines(),
        event: None,
        data: String::new(),
        done: false,
    };

    stream::unfold(state, |mut st| async move {
        if st.done {
            return None;
        }
        loop {
            match st.lines.next_line().await {
                Ok(Some(line)) => {
                    let line = line.trim_end_matches('\r');
                    if line.is_empty() {
                        // Empty line = end of event
                        if let Some(event) = st.take_event() {
                            return Some((Ok(event), st));
                        }
                        continue;
                    }
                    st.push_line(line);
                }
                Ok(None) => {
                    st.done = true;
                    // Flush an event the server did not terminate
                    return st.take_event().map(|event| (Ok(event), st));
                }
                Err(e) => {
                    st.done = true;
                    return Some((Err(AiError::NetworkError(e.to_string())), st));
                }
            }
        }
    })
}

/// Parse SSE events straight from a reqwest response body.
pub fn response_events(
    response: reqwest::Response,
) -> impl Stream<Item = Result<SseEvent, AiError>> + Send {
    let byte_stream = response
        .bytes_stream()
        .map(|result| result.map_err(std::io::Error::other));
    sse_events(tokio::io::BufReader::new(StreamReader::new(byte_stream)))
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn collect(input: &'static [u8]) -> Vec<Result<SseEvent, AiError>> {
        sse_events(input).collect().await
    }

    #[tokio::test]
    async fn parses_data_events() {
        let events = collect(b"data: {\"a\":1}\n\ndata: {\"a\":2}\n\n").await;
        let data: Vec<String> = events.into_iter().map(|e| e.unwrap().data).collect();
        assert_eq!(data, vec![r#"{"a":1}"#, r#"{"a":2}"#]);
    }

    #[tokio::test]
    async fn keeps_event_type_and_joins_multiline_data() {
        let events = collect(b"event: delta\ndata: one\ndata: two\n\n").await;
        assert_eq!(events.len(), 1);
        let event = events.into_iter().next().unwrap().unwrap();
        assert_eq!(event.event.as_deref(), Some("delta"));
        assert_eq!(event.data, "one\ntwo");
    }

    #[tokio::test]
    async fn handles_crlf_and_missing_space() {
        let events = collect(b"data:x\r\n\r\ndata: y\r\n\r\n").await;
        let data: Vec<String> = events.into_iter().map(|e| e.unwrap().data).collect();
        assert_eq!(data, vec!["x", "y"]);
    }

    #[tokio::test]
    async fn ignores_comments_and_unknown_fields() {
        let events = collect(b": keep-alive\nid: 7\nretry: 10\n\ndata: z\n\n").await;
        let data: Vec<String> = events.into_iter().map(|e| e.unwrap().data).collect();
        assert_eq!(data, vec!["z"]);
    }

    #[tokio::test]
    async fn flushes_unterminated_final_event() {
        let events = collect(b"data: first\n\ndata: last").await;
        let data: Vec<String> = events.into_iter().map(|e| e.unwrap().data).collect();
        assert_eq!(data, vec!["first", "last"]);
    }

    #[tokio::test]
    async fn empty_body_yields_nothing() {
        assert!(collect(b"").await.is_empty());
    }
}
