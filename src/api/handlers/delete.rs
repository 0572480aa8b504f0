//! Handler for mapping deletion.

use axum::{
    Json,
    extract::{Path, State},
};
use tracing::{error, info};

use crate::api::dto::response::ResponseEnvelope;
use crate::error::{AliasError, AppError};
use crate::state::AppState;

/// Deletes the mapping stored under an alias.
///
/// # Endpoint
///
/// `DELETE /url/{alias}`
///
/// # Response
///
/// ```json
/// { "status": "OK" }
/// ```
///
/// # Errors
///
/// Returns 404 Not Found if nothing was stored under the alias.
/// Returns 500 Internal Server Error if the store is unavailable.
pub async fn delete_handler(
    Path(alias): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ResponseEnvelope>, AppError> {
    state
        .mapping_service
        .delete_mapping(&alias)
        .await
        .inspect_err(|e| match e {
            AliasError::StoreUnavailable(source) => {
                error!(error = %source, alias = %alias, "Failed to delete URL");
            }
            other => info!(error = %other, alias = %alias, "Alias not deleted"),
        })?;

    info!(alias = %alias, "Alias deleted");

    Ok(Json(ResponseEnvelope::ok()))
}
