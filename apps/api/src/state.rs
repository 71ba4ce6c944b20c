use crate::config::Config;
use crate::generation::relay::Relay;

/// Shared application state injected into all route handlers via Axum extractors.
/// Built once at start-up and never mutated.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub relay: Relay,
}
