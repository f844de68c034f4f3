mod books;
mod pages;
mod uploads;

use axum::Json;
use serde::Serialize;

pub use books::{delete_book, upload_book};
pub use pages::{admin_index, public_index};
pub use uploads::serve_upload;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
