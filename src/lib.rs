//! bookshelf - a minimal self-hosted PDF library
//!
//! An administrator uploads PDF documents with a title; they are listed on
//! a public page and can be deleted, all gated by a single shared password.
//! Persistence is a flat JSON catalog document plus a directory of stored
//! files — there is deliberately no session system, no locking, and no
//! background reconciliation of orphaned files.

pub mod api;
pub mod catalog;
pub mod config;
pub mod file_store;

use std::sync::Arc;

use catalog::CatalogStore;
use config::Config;
use file_store::FileStore;

/// Shared application state
pub struct AppState {
    pub config: Config,
    pub catalog: Arc<dyn CatalogStore>,
    pub files: Arc<dyn FileStore>,
}
