//! Conversation session management.
//!
//! A `SessionStore` holds the conversation log and the selected model id
//! for one interactive session, and runs each streamed turn against a
//! `ChatModel`.

mod chat;
mod phase;
mod store;

#[cfg(test)]
mod tests;

pub use phase::TurnPhase;
pub use store::SessionStore;
