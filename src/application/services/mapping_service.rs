//! Mapping creation, resolution and deletion.

use std::sync::Arc;

use crate::application::services::AliasAllocator;
use crate::domain::entities::Mapping;
use crate::domain::repositories::UrlStore;
use crate::error::{AliasError, CreateMappingError};

/// Facade used by the HTTP handlers and the admin CLI.
///
/// Every call is independent. The only shared state is the store handle,
/// which arbitrates alias uniqueness on its own.
pub struct MappingService<S: UrlStore> {
    store: Arc<S>,
    allocator: AliasAllocator<S>,
}

impl<S: UrlStore> MappingService<S> {
    /// Creates a new mapping service.
    pub fn new(store: Arc<S>, allocator: AliasAllocator<S>) -> Self {
        Self { store, allocator }
    }

    /// Stores `url` under `alias`, or under a freshly allocated alias when
    /// `alias` is `None` or empty.
    ///
    /// The URL is expected to be validated by the caller; only emptiness is
    /// checked here.
    ///
    /// # Errors
    ///
    /// - [`CreateMappingError::Validation`] if `url` is blank
    /// - [`CreateMappingError::NotUnique`] if the generated alias collided on the pre-check
    /// - [`CreateMappingError::AliasExists`] if the store rejected the alias as a duplicate
    /// - [`CreateMappingError::StoreUnavailable`] on database errors
    pub async fn create_mapping(
        &self,
        url: String,
        alias: Option<String>,
    ) -> Result<Mapping, CreateMappingError> {
        if url.trim().is_empty() {
            return Err(CreateMappingError::Validation(
                "field url is required to fill".to_string(),
            ));
        }

        let alias = match alias.filter(|a| !a.is_empty()) {
            Some(alias) => alias,
            None => self.allocator.allocate().await?,
        };

        let id = self.store.insert(&alias, &url).await?;

        Ok(Mapping::new(id, alias, url))
    }

    /// Returns the destination URL for `alias`.
    ///
    /// # Errors
    ///
    /// - [`AliasError::Validation`] if `alias` is empty (storage is not touched)
    /// - [`AliasError::NotFound`] if no mapping exists
    /// - [`AliasError::StoreUnavailable`] on database errors
    pub async fn resolve_alias(&self, alias: &str) -> Result<String, AliasError> {
        ensure_alias(alias)?;
        Ok(self.store.get(alias).await?)
    }

    /// Deletes the mapping stored under `alias`.
    ///
    /// # Errors
    ///
    /// - [`AliasError::Validation`] if `alias` is empty (storage is not touched)
    /// - [`AliasError::NotFound`] if nothing was deleted
    /// - [`AliasError::StoreUnavailable`] on database errors
    pub async fn delete_mapping(&self, alias: &str) -> Result<(), AliasError> {
        ensure_alias(alias)?;
        Ok(self.store.delete(alias).await?)
    }

    /// Returns the underlying store.
    pub fn store(&self) -> &Arc<S> {
        &self.store
    }
}

fn ensure_alias(alias: &str) -> Result<(), AliasError> {
    if alias.is_empty() {
        return Err(AliasError::Validation("field alias is empty".to_string()));
    }
    Ok(())
}
