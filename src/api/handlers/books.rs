use axum::extract::{Multipart, Path, State};
use axum::response::Redirect;
use axum::Form;
use bytes::Bytes;
use chrono::Utc;
use serde::Deserialize;
use std::sync::Arc;

use crate::api::response::ApiError;
use crate::catalog::models::Book;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct DeleteBookRequest {
    #[serde(default)]
    pub password: String,
}

/// Handle a book upload.
/// Route: POST /upload (multipart: title, password, bookFile)
///
/// All fields are buffered before anything is validated, and validation
/// short-circuits before any file or catalog mutation.
pub async fn upload_book(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Redirect, ApiError> {
    let mut title: Option<String> = None;
    let mut password: Option<String> = None;
    let mut file_data: Option<Bytes> = None;
    let mut file_name: Option<String> = None;
    let mut file_content_type: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::InvalidInput(format!("Invalid multipart data: {e}")))?
    {
        let field_name = field.name().unwrap_or("").to_string();

        match field_name.as_str() {
            "bookFile" => {
                file_name = field.file_name().map(|s| s.to_string());
                file_content_type = field.content_type().map(|s| s.to_string());

                let data = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::InvalidInput(format!("Failed to read file: {e}")))?;
                file_data = Some(data);
            }
            "title" => {
                title = Some(
                    field
                        .text()
                        .await
                        .map_err(|e| ApiError::InvalidInput(format!("Invalid title: {e}")))?,
                );
            }
            "password" => {
                password = Some(
                    field
                        .text()
                        .await
                        .map_err(|e| ApiError::InvalidInput(format!("Invalid password: {e}")))?,
                );
            }
            _ => {
                // Ignore unknown fields
            }
        }
    }

    if password.as_deref() != Some(state.config.admin_password.as_str()) {
        return Err(ApiError::Unauthorized("Invalid admin password.".to_string()));
    }

    // Declared content type only; the payload is not sniffed.
    let (data, original_name) = match (file_data, file_name) {
        (Some(data), Some(name)) if file_content_type.as_deref() == Some("application/pdf") => {
            (data, name)
        }
        _ => {
            return Err(ApiError::InvalidInput(
                "No file uploaded or invalid file type.".to_string(),
            ))
        }
    };

    let filename = state.files.store(&original_name, data).await?;

    let book = Book {
        id: Utc::now().timestamp_millis().to_string(),
        title: match title {
            Some(t) if !t.is_empty() => t,
            _ => original_name,
        },
        filename,
    };

    tracing::debug!(id = %book.id, filename = %book.filename, "Appending book record");

    // If this fails the stored file is orphaned. Accepted: the catalog
    // never references bytes that were not written, and nothing reconciles
    // leftovers.
    state.catalog.append(book).await?;

    Ok(Redirect::to("/"))
}

/// Delete a book and its stored file.
/// Route: POST /delete/:id (urlencoded: password)
pub async fn delete_book(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Form(form): Form<DeleteBookRequest>,
) -> Result<Redirect, ApiError> {
    if form.password != state.config.admin_password {
        return Err(ApiError::Unauthorized("Invalid admin password.".to_string()));
    }

    let removed = state
        .catalog
        .remove(&id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Book not found".to_string()))?;

    // Catalog record first, physical file second: a crash in between
    // leaves an orphaned file, never a dangling catalog reference. A
    // missing file is already a silent no-op in the store.
    if let Err(e) = state.files.delete(&removed.filename).await {
        tracing::warn!(filename = %removed.filename, error = %e, "Failed to delete stored file");
    }

    Ok(Redirect::to("/admin"))
}
