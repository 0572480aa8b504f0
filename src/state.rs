//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::MappingService;
use crate::infrastructure::persistence::SqliteUrlStore;

/// State cloned into every request.
///
/// Holds the mapping service behind an `Arc`; the store inside it wraps a
/// connection pool, so concurrent requests never serialize on a single handle.
#[derive(Clone)]
pub struct AppState {
    pub mapping_service: Arc<MappingService<SqliteUrlStore>>,
}

impl AppState {
    pub fn new(mapping_service: Arc<MappingService<SqliteUrlStore>>) -> Self {
        Self { mapping_service }
    }
}
