// Code generation: language catalogue, template fallback, relay to the
// completion API, and the HTTP handler that ties them together.

pub mod handlers;
pub mod language;
pub mod relay;
pub mod templates;
