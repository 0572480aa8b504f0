//! Repository trait for alias -> URL persistence.

use crate::error::{InsertError, LookupError, StoreUnavailable};
use async_trait::async_trait;

/// Durable mapping from alias (unique key) to destination URL.
///
/// The implementation owns the uniqueness constraint on `alias`; callers must
/// never treat [`UrlStore::exists`] as authoritative.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteUrlStore`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlStore: Send + Sync {
    /// Inserts a new mapping and returns its store-assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`InsertError::DuplicateAlias`] when the unique constraint on
    /// `alias` rejects the row. This is detected from the constraint violation
    /// itself, not from a prior existence check.
    ///
    /// Returns [`InsertError::Unavailable`] on any other database error.
    async fn insert(&self, alias: &str, url: &str) -> Result<i64, InsertError>;

    /// Returns the destination URL stored under `alias`.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::NotFound`] if no row matches.
    /// Returns [`LookupError::Unavailable`] on database errors.
    async fn get(&self, alias: &str) -> Result<String, LookupError>;

    /// Removes the mapping stored under `alias`.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::NotFound`] if no row was affected.
    /// Returns [`LookupError::Unavailable`] on database errors.
    async fn delete(&self, alias: &str) -> Result<(), LookupError>;

    /// Reports whether a mapping exists under `alias`.
    ///
    /// Best-effort: the answer may be stale by the time the caller acts on it.
    async fn exists(&self, alias: &str) -> Result<bool, StoreUnavailable>;

    /// Checks that the store can serve queries.
    async fn ping(&self) -> Result<(), StoreUnavailable>;
}
