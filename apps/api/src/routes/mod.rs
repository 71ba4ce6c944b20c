pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::services::{ServeDir, ServeFile};
use tracing::info;

use crate::errors::AppError;
use crate::generation::handlers;
use crate::state::AppState;

/// JSON bodies up to 10 MiB.
const BODY_LIMIT_BYTES: usize = 10 * 1024 * 1024;

async fn api_not_found() -> AppError {
    AppError::NotFound
}

pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/health", get(health::health_handler))
        .route("/generate-code", post(handlers::handle_generate_code))
        .fallback(api_not_found);

    let router = Router::new()
        .nest("/api", api)
        .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES));

    // Production: every non-API path falls through to the client bundle,
    // with index.html for client-side routes.
    let router = if state.config.production {
        let static_dir = &state.config.static_dir;
        info!("Serving client bundle from {}", static_dir.display());
        let index = ServeFile::new(static_dir.join("index.html"));
        router.fallback_service(ServeDir::new(static_dir).fallback(index))
    } else {
        router
    };

    router.with_state(state)
}
