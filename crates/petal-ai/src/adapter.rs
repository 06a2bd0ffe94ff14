//! History adapter: conversation log to Gemini `contents`.
//!
//! Every call resends the whole log. The API is stateless, so this is
//! what gives the model its conversational context.

use serde::Serialize;

use crate::{Role, Turn};

/// A single text part of a request message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Part {
    pub text: String,
}

/// One entry of the request `contents` array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoleContent {
    /// `"user"` or `"model"`.
    pub role: &'static str,
    pub parts: Vec<Part>,
}

impl RoleContent {
    /// Concatenated text of all parts.
    pub fn text(&self) -> String {
        self.parts.iter().map(|p| p.text.as_str()).collect()
    }
}

fn wire_role(role: Role) -> &'static str {
    match role {
        Role::User => "user",
        Role::Assistant => "model",
    }
}

/// Map each turn, in order, to one wire entry with a single text part.
pub fn to_request_payload(log: &[Turn]) -> Vec<RoleContent> {
    log.iter()
        .map(|turn| RoleContent {
            role: wire_role(turn.role()),
            parts: vec![Part {
                text: turn.content().to_string(),
            }],
        })
        .collect()
}
