//! Handler for the create-mapping endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use tracing::{error, info};
use validator::Validate;

use crate::api::dto::save::{SaveRequest, SaveResponse};
use crate::error::{AppError, CreateMappingError};
use crate::state::AppState;

/// Stores a URL under a caller-supplied or generated alias.
///
/// # Endpoint
///
/// `POST /url`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://example.com",
///   "alias": "ex1"   // optional, generated when missing or empty
/// }
/// ```
///
/// # Response
///
/// ```json
/// { "status": "OK", "alias": "ex1" }
/// ```
///
/// # Errors
///
/// - 400 if the body cannot be decoded or fails validation
/// - 409 `not unique alias` if a generated alias collided on the pre-check
/// - 409 `alias already exists` if the alias is taken
/// - 500 if the store is unavailable
pub async fn save_handler(
    State(state): State<AppState>,
    payload: Result<Json<SaveRequest>, JsonRejection>,
) -> Result<Json<SaveResponse>, AppError> {
    let Json(payload) = payload.map_err(|e| {
        info!(error = %e, "Failed to decode request body");
        AppError::bad_request("failed to decode request")
    })?;

    if let Err(e) = payload.validate() {
        info!(error = %e, "Invalid request");
        return Err(e.into());
    }

    let url = payload.url.unwrap_or_default();

    let mapping = state
        .mapping_service
        .create_mapping(url.clone(), payload.alias)
        .await
        .inspect_err(|e| match e {
            CreateMappingError::StoreUnavailable(source) => {
                error!(error = %source, url = %url, "Failed to add URL");
            }
            other => info!(error = %other, url = %url, "Mapping rejected"),
        })?;

    info!(id = mapping.id, alias = %mapping.alias, "URL added");

    Ok(Json(SaveResponse::ok(mapping.alias)))
}
