//! Google Gemini API client.
//!
//! Implements `ChatModel` for Gemini models via the Generative Language
//! API's streaming endpoint.

mod api;
mod client;
mod config;
mod events;

pub use client::GeminiClient;
pub use config::{GeminiConfig, GEMINI_API_BASE};
pub use events::{parse_stream_event, text_chunks, StreamPiece};
