//! Turn-level tests against a scripted model.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use futures_util::stream;

use super::*;
use crate::{AiError, ChatModel, ChatStream, Role, RoleContent, Turn};

enum Reply {
    Chunks(Vec<&'static str>),
    BreakAfter(Vec<&'static str>),
    Refuse,
}

/// Replays canned replies in order and records what it was sent.
struct ScriptedModel {
    replies: Mutex<VecDeque<Reply>>,
    requests: Mutex<Vec<(String, Vec<RoleContent>)>>,
}

impl ScriptedModel {
    fn new(replies: Vec<Reply>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    fn requests(&self) -> Vec<(String, Vec<RoleContent>)> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatModel for ScriptedModel {
    async fn stream_generate(
        &self,
        model_id: &str,
        payload: &[RoleContent],
    ) -> Result<ChatStream, AiError> {
        self.requests
            .lock()
            .unwrap()
            .push((model_id.to_string(), payload.to_vec()));

        let reply = self
            .replies
            .lock()
            .unwrap()
            .pop_front()
            .expect("no scripted reply left");

        let items: Vec<Result<String, AiError>> = match reply {
            Reply::Chunks(chunks) => chunks.into_iter().map(|c| Ok(c.to_string())).collect(),
            Reply::BreakAfter(chunks) => chunks
                .into_iter()
                .map(|c| Ok(c.to_string()))
                .chain(std::iter::once(Err(AiError::NetworkError(
                    "connection reset".into(),
                ))))
                .collect(),
            Reply::Refuse => return Err(AiError::ApiError("HTTP 403 Forbidden: bad key".into())),
        };
        Ok(Box::pin(stream::iter(items)))
    }
}

#[tokio::test]
async fn hello_scenario_renders_incrementally_and_commits() {
    let model = ScriptedModel::new(vec![Reply::Chunks(vec!["Hi", " there", "!"])]);
    let mut session = SessionStore::new("gemini-2.5-flash-lite");

    let mut display = String::new();
    let mut frames = Vec::new();
    let full = session
        .chat_streaming(&model, "Hello", |chunk| {
            display.push_str(chunk);
            frames.push(display.clone());
        })
        .await
        .unwrap();

    assert_eq!(frames, vec!["Hi", "Hi there", "Hi there!"]);
    assert_eq!(full, "Hi there!");
    assert_eq!(
        session.all(),
        &[Turn::user("Hello"), Turn::assistant("Hi there!")]
    );
    assert_eq!(session.phase(), TurnPhase::Committed);
}

#[tokio::test]
async fn n_turns_give_2n_alternating_entries() {
    let model = ScriptedModel::new(vec![
        Reply::Chunks(vec!["one"]),
        Reply::Chunks(vec!["t", "wo"]),
        Reply::Chunks(vec!["three"]),
    ]);
    let mut session = SessionStore::new("m");

    for (i, text) in ["a", "b", "c"].iter().enumerate() {
        session.await_input();
        session.chat_streaming(&model, *text, |_| {}).await.unwrap();
        assert_eq!(session.len(), 2 * (i + 1));
    }

    for (i, turn) in session.all().iter().enumerate() {
        let expected = if i % 2 == 0 { Role::User } else { Role::Assistant };
        assert_eq!(turn.role(), expected);
    }
    assert_eq!(session.last().unwrap().content(), "three");
}

#[tokio::test]
async fn every_call_resends_full_history() {
    let model = ScriptedModel::new(vec![Reply::Chunks(vec!["b"]), Reply::Chunks(vec!["d"])]);
    let mut session = SessionStore::new("gemini-x");

    session.chat_streaming(&model, "a", |_| {}).await.unwrap();
    session.chat_streaming(&model, "c", |_| {}).await.unwrap();

    let requests = model.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].0, "gemini-x");
    assert_eq!(requests[0].1.len(), 1);

    let second: Vec<(&str, String)> = requests[1]
        .1
        .iter()
        .map(|rc| (rc.role, rc.text()))
        .collect();
    assert_eq!(
        second,
        vec![
            ("user", "a".to_string()),
            ("model", "b".to_string()),
            ("user", "c".to_string()),
        ]
    );
}

#[tokio::test]
async fn mid_stream_failure_keeps_only_user_turn() {
    let model = ScriptedModel::new(vec![
        Reply::Chunks(vec!["ok"]),
        Reply::BreakAfter(vec!["par", "tial"]),
    ]);
    let mut session = SessionStore::new("m");
    session.chat_streaming(&model, "first", |_| {}).await.unwrap();
    let before = session.len();

    let mut shown = String::new();
    let result = session
        .chat_streaming(&model, "second", |c| shown.push_str(c))
        .await;

    assert!(matches!(result, Err(AiError::NetworkError(_))));
    assert_eq!(shown, "partial");
    assert_eq!(session.len(), before + 1);
    assert_eq!(session.last(), Some(&Turn::user("second")));
    assert_eq!(session.phase(), TurnPhase::Failed);
}

#[tokio::test]
async fn failure_before_any_chunk_keeps_only_user_turn() {
    let model = ScriptedModel::new(vec![Reply::BreakAfter(vec![])]);
    let mut session = SessionStore::new("m");

    let result = session.chat_streaming(&model, "hi", |_| {}).await;
    assert!(result.is_err());
    assert_eq!(session.all(), &[Turn::user("hi")]);
}

#[tokio::test]
async fn refused_call_fails_the_turn_and_session_stays_usable() {
    let model = ScriptedModel::new(vec![Reply::Refuse, Reply::Chunks(vec!["back"])]);
    let mut session = SessionStore::new("m");

    let err = session.chat_streaming(&model, "one", |_| {}).await.unwrap_err();
    assert!(matches!(err, AiError::ApiError(_)));
    assert_eq!(session.phase(), TurnPhase::Failed);

    session.await_input();
    assert_eq!(session.phase(), TurnPhase::AwaitingInput);
    let reply = session.chat_streaming(&model, "two", |_| {}).await.unwrap();
    assert_eq!(reply, "back");
    assert_eq!(
        session.all(),
        &[Turn::user("one"), Turn::user("two"), Turn::assistant("back")]
    );
}

#[tokio::test]
async fn textless_reply_is_not_committed_and_next_turn_works() {
    let model = ScriptedModel::new(vec![Reply::Chunks(vec![]), Reply::Chunks(vec!["ok"])]);
    let mut session = SessionStore::new("m");

    let err = session.chat_streaming(&model, "hi", |_| {}).await.unwrap_err();
    assert!(matches!(err, AiError::ApiError(_)));
    assert_eq!(session.all(), &[Turn::user("hi")]);
    assert_eq!(session.phase(), TurnPhase::Failed);

    session.await_input();
    assert_eq!(session.chat_streaming(&model, "again", |_| {}).await.unwrap(), "ok");

    let requests = model.requests();
    assert!(requests[1].1.iter().all(|rc| !rc.text().is_empty()));
    assert!(requests[1].1.iter().all(|rc| rc.role == "user"));
}

#[test]
fn new_session_is_empty_and_idle() {
    let session = SessionStore::new("gemini-2.5-flash-lite");
    assert!(session.is_empty());
    assert_eq!(session.model(), "gemini-2.5-flash-lite");
    assert_eq!(session.phase(), TurnPhase::Idle);
    assert!(session.last().is_none());
}

#[test]
fn append_keeps_insertion_order() {
    let mut session = SessionStore::new("m");
    session.append(Turn::user("1"));
    session.append(Turn::assistant("2"));
    session.append(Turn::user("3"));
    let contents: Vec<&str> = session.all().iter().map(Turn::content).collect();
    assert_eq!(contents, vec!["1", "2", "3"]);
}

#[test]
fn phase_display_names() {
    assert_eq!(TurnPhase::AwaitingInput.to_string(), "awaiting-input");
    assert_eq!(TurnPhase::Streaming.to_string(), "streaming");
    assert!(!TurnPhase::Streaming.is_settled());
    assert!(TurnPhase::Failed.is_settled());
}
