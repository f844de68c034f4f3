use serde::{Deserialize, Serialize};

/// A catalog entry linking a display title to a stored file.
///
/// Serialized verbatim into the catalog document, so the field names are
/// part of the on-disk format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    /// Unix timestamp in milliseconds at upload time, in string form.
    /// Treated as unique even though collisions are theoretically possible.
    pub id: String,
    /// Display title; defaults to the original filename at upload.
    pub title: String,
    /// Storage name of the file in the upload directory, distinct from the
    /// original uploaded filename.
    pub filename: String,
}
