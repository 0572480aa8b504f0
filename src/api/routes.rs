//! Mapping management routes.

use crate::api::handlers::{delete_handler, save_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, post},
};

/// Routes for creating and deleting mappings.
///
/// # Endpoints
///
/// - `POST   /url`           - Create a mapping
/// - `DELETE /url/{alias}`   - Delete a mapping
pub fn url_routes() -> Router<AppState> {
    Router::new()
        .route("/url", post(save_handler))
        .route("/url/{alias}", delete(delete_handler))
}
