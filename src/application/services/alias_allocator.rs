//! Fresh alias allocation.

use std::sync::Arc;
use tracing::debug;

use crate::domain::alias_generator::AliasGenerator;
use crate::domain::repositories::UrlStore;
use crate::error::AllocateError;

/// Length of auto-generated aliases.
pub const DEFAULT_ALIAS_LENGTH: usize = 6;

/// Number of candidates tried before giving up. One means a single
/// generate-and-check pass.
pub const DEFAULT_MAX_ATTEMPTS: usize = 1;

/// Produces aliases that were free in the store when probed.
///
/// The existence probe and the later insert are not transactional, so a
/// concurrent writer can still take the alias in between. The store's unique
/// constraint catches that case at insert time.
pub struct AliasAllocator<S: UrlStore> {
    store: Arc<S>,
    generator: Arc<dyn AliasGenerator>,
    alias_length: usize,
    max_attempts: usize,
}

impl<S: UrlStore> AliasAllocator<S> {
    /// Creates an allocator with the default length and a single attempt.
    pub fn new(store: Arc<S>, generator: Arc<dyn AliasGenerator>) -> Self {
        Self {
            store,
            generator,
            alias_length: DEFAULT_ALIAS_LENGTH,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Sets the length of generated aliases.
    pub fn with_alias_length(mut self, alias_length: usize) -> Self {
        self.alias_length = alias_length;
        self
    }

    /// Sets how many candidates are probed before reporting a collision.
    ///
    /// Values below one are treated as one.
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    pub fn alias_length(&self) -> usize {
        self.alias_length
    }

    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Returns a candidate alias the store reported as unused.
    ///
    /// # Errors
    ///
    /// Returns [`AllocateError::NotUnique`] with the last candidate when every
    /// attempt collided.
    /// Returns [`AllocateError::Unavailable`] as soon as a probe fails.
    pub async fn allocate(&self) -> Result<String, AllocateError> {
        let mut candidate = String::new();

        for attempt in 1..=self.max_attempts {
            candidate = self.generator.generate(self.alias_length);

            if !self.store.exists(&candidate).await? {
                return Ok(candidate);
            }

            debug!(alias = %candidate, attempt, "Generated alias already taken");
        }

        Err(AllocateError::NotUnique(candidate))
    }
}
