use axum::extract::State;
use axum::response::Html;
use std::sync::Arc;

use crate::api::response::ApiError;
use crate::api::views;
use crate::AppState;

/// Public catalog listing.
/// Route: GET /
pub async fn public_index(State(state): State<Arc<AppState>>) -> Result<Html<String>, ApiError> {
    let books = state.catalog.load().await?;
    Ok(Html(views::render_index(&books)))
}

/// Admin catalog listing with upload and delete controls.
/// Route: GET /admin
pub async fn admin_index(State(state): State<Arc<AppState>>) -> Result<Html<String>, ApiError> {
    let books = state.catalog.load().await?;
    Ok(Html(views::render_admin(&books)))
}
