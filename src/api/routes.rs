use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use super::handlers;
use crate::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    let upload_limit = state.config.max_upload_size as usize;

    Router::new()
        // Catalog pages
        .route("/", get(handlers::public_index))
        .route("/admin", get(handlers::admin_index))
        // Admin actions (password-gated per action, not per page)
        .route(
            "/upload",
            post(handlers::upload_book).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route("/delete/:id", post(handlers::delete_book))
        // Stored file content
        .route("/uploads/:filename", get(handlers::serve_upload))
        // Internal
        .route("/_internal/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
