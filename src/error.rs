//! Error types shared across layers.
//!
//! Every fallible operation returns a closed enum so callers can match
//! exhaustively on the outcome:
//!
//! - store level: [`StoreUnavailable`], [`InsertError`], [`LookupError`]
//! - allocation: [`AllocateError`]
//! - service level: [`CreateMappingError`], [`AliasError`]
//!
//! [`AppError`] is the HTTP-facing form. It renders the
//! `{"status": "ERROR", "error": "..."}` envelope with a matching status code.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use validator::ValidationErrors;

use crate::api::dto::response::ResponseEnvelope;

/// Any persistence fault: connection, I/O, pool timeout, schema or decode error.
#[derive(Debug, thiserror::Error)]
#[error("storage unavailable: {0}")]
pub struct StoreUnavailable(#[from] pub sqlx::Error);

/// Failure of [`crate::domain::repositories::UrlStore::insert`].
#[derive(Debug, thiserror::Error)]
pub enum InsertError {
    /// The unique constraint on `alias` rejected the row.
    #[error("alias already exists: {0}")]
    DuplicateAlias(String),

    #[error(transparent)]
    Unavailable(#[from] StoreUnavailable),
}

/// Failure of an alias lookup or delete at the store level.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    /// No row matched the alias.
    #[error("alias not found")]
    NotFound,

    #[error(transparent)]
    Unavailable(#[from] StoreUnavailable),
}

/// Failure of [`crate::application::services::AliasAllocator::allocate`].
#[derive(Debug, thiserror::Error)]
pub enum AllocateError {
    /// Every generated candidate was already taken.
    #[error("not unique alias: {0}")]
    NotUnique(String),

    /// The existence probe itself failed.
    #[error(transparent)]
    Unavailable(#[from] StoreUnavailable),
}

/// Failure of [`crate::application::services::MappingService::create_mapping`].
#[derive(Debug, thiserror::Error)]
pub enum CreateMappingError {
    #[error("invalid request: {0}")]
    Validation(String),

    /// An auto-generated alias collided on the pre-check.
    #[error("not unique alias: {0}")]
    NotUnique(String),

    /// The store rejected the alias as a duplicate at insert time.
    #[error("alias already exists: {0}")]
    AliasExists(String),

    #[error(transparent)]
    StoreUnavailable(StoreUnavailable),
}

impl From<AllocateError> for CreateMappingError {
    fn from(e: AllocateError) -> Self {
        match e {
            AllocateError::NotUnique(alias) => Self::NotUnique(alias),
            AllocateError::Unavailable(e) => Self::StoreUnavailable(e),
        }
    }
}

impl From<InsertError> for CreateMappingError {
    fn from(e: InsertError) -> Self {
        match e {
            InsertError::DuplicateAlias(alias) => Self::AliasExists(alias),
            InsertError::Unavailable(e) => Self::StoreUnavailable(e),
        }
    }
}

/// Failure of resolving or deleting a mapping by alias.
#[derive(Debug, thiserror::Error)]
pub enum AliasError {
    #[error("invalid request: {0}")]
    Validation(String),

    #[error("alias not found")]
    NotFound,

    #[error(transparent)]
    StoreUnavailable(StoreUnavailable),
}

impl From<LookupError> for AliasError {
    fn from(e: LookupError) -> Self {
        match e {
            LookupError::NotFound => Self::NotFound,
            LookupError::Unavailable(e) => Self::StoreUnavailable(e),
        }
    }
}

/// HTTP-facing error rendered as the JSON error envelope.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message placed in the `error` field of the envelope.
    pub fn message(&self) -> &str {
        match self {
            AppError::Validation(message)
            | AppError::NotFound(message)
            | AppError::Conflict(message)
            | AppError::Internal(message) => message,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ResponseEnvelope::error(self.message());

        (status, Json(body)).into_response()
    }
}

impl From<CreateMappingError> for AppError {
    fn from(e: CreateMappingError) -> Self {
        match e {
            CreateMappingError::Validation(message) => AppError::bad_request(message),
            CreateMappingError::NotUnique(_) => AppError::conflict("not unique alias"),
            CreateMappingError::AliasExists(_) => AppError::conflict("alias already exists"),
            CreateMappingError::StoreUnavailable(_) => AppError::internal("failed to add URL"),
        }
    }
}

impl From<AliasError> for AppError {
    fn from(e: AliasError) -> Self {
        match e {
            AliasError::Validation(_) => AppError::bad_request("invalid request"),
            AliasError::NotFound => AppError::not_found("not found"),
            AliasError::StoreUnavailable(_) => AppError::internal("internal error"),
        }
    }
}

/// Formats validator failures as `field <name> is ...` messages joined by `, `.
///
/// Only the first failed rule of each field is reported, in alphabetical field order.
impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
        fields.sort_by(|(a, _), (b, _)| a.cmp(b));

        let messages: Vec<String> = fields
            .into_iter()
            .filter_map(|(field, errs)| {
                errs.first().map(|err| match &err.message {
                    Some(message) => message.to_string(),
                    None => format!("field {} is not valid", field),
                })
            })
            .collect();

        AppError::bad_request(messages.join(", "))
    }
}
