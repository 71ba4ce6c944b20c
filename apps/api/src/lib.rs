//! AI code generator back-end: relays prompts to a chat-completion API and
//! falls back to canned templates when the API is unavailable.

pub mod client;
pub mod config;
pub mod errors;
pub mod generation;
pub mod llm_client;
pub mod models;
pub mod routes;
pub mod state;
