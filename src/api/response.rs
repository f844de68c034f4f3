use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::catalog::CatalogError;
use crate::file_store::FileStoreError;

/// A request-level failure, surfaced as an HTTP status with a plain-text
/// body. Covers the whole error taxonomy of the service.
#[derive(Debug)]
pub enum ApiError {
    /// Password mismatch on an admin action (403).
    Unauthorized(String),
    /// Missing or invalid request input (400).
    InvalidInput(String),
    /// Unknown record id or stored filename (404).
    NotFound(String),
    /// Catalog or filesystem failure (500).
    Storage(String),
}

impl From<CatalogError> for ApiError {
    fn from(e: CatalogError) -> Self {
        ApiError::Storage(format!("Catalog failure: {e}"))
    }
}

impl From<FileStoreError> for ApiError {
    fn from(e: FileStoreError) -> Self {
        match e {
            // An invalid storage name can only come from the request path,
            // so it reads as an unknown file rather than a server fault.
            FileStoreError::NotFound(_) | FileStoreError::InvalidName(_) => {
                ApiError::NotFound("File not found".to_string())
            }
            FileStoreError::Io(e) => ApiError::Storage(format!("File store failure: {e}")),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Unauthorized(msg) => (StatusCode::FORBIDDEN, msg).into_response(),
            ApiError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg).into_response(),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg).into_response(),
            ApiError::Storage(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg).into_response(),
        }
    }
}
