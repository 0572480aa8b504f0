//! Handler for alias redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use tracing::{error, info};

use crate::error::{AliasError, AppError};
use crate::state::AppState;

/// Redirects an alias to its stored URL.
///
/// # Endpoint
///
/// `GET /{alias}`
///
/// # Response
///
/// `302 Found` with the destination in the `Location` header.
///
/// # Errors
///
/// Returns 404 Not Found if the alias doesn't exist.
/// Returns 500 Internal Server Error if the store is unavailable.
pub async fn redirect_handler(
    Path(alias): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let url = state
        .mapping_service
        .resolve_alias(&alias)
        .await
        .inspect_err(|e| match e {
            AliasError::StoreUnavailable(source) => {
                error!(error = %source, alias = %alias, "Failed to get URL");
            }
            other => info!(error = %other, alias = %alias, "Alias not resolved"),
        })?;

    info!(alias = %alias, url = %url, "Redirecting");

    Ok((StatusCode::FOUND, [(header::LOCATION, url)]))
}
