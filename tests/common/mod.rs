#![allow(dead_code)]

use alias_shortener::application::services::{AliasAllocator, MappingService};
use alias_shortener::domain::alias_generator::{AliasGenerator, RandomAliasGenerator};
use alias_shortener::infrastructure::persistence::SqliteUrlStore;
use alias_shortener::state::AppState;
use sqlx::sqlite::SqlitePoolOptions;
use std::sync::Arc;

/// Opens a migrated in-memory store.
///
/// A single connection that never expires keeps the in-memory database alive
/// for the whole test.
pub async fn memory_store() -> Arc<SqliteUrlStore> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .unwrap();

    let store = SqliteUrlStore::new(Arc::new(pool));
    store.migrate().await.unwrap();
    Arc::new(store)
}

/// Generator that always returns the same candidate.
pub struct FixedAliasGenerator(pub &'static str);

impl AliasGenerator for FixedAliasGenerator {
    fn generate(&self, _length: usize) -> String {
        self.0.to_string()
    }
}

pub fn mapping_service(
    store: Arc<SqliteUrlStore>,
    generator: Arc<dyn AliasGenerator>,
) -> MappingService<SqliteUrlStore> {
    let allocator = AliasAllocator::new(store.clone(), generator);
    MappingService::new(store, allocator)
}

pub async fn create_test_mapping(store: &SqliteUrlStore, alias: &str, url: &str) {
    sqlx::query("INSERT INTO url (alias, url) VALUES (?, ?)")
        .bind(alias)
        .bind(url)
        .execute(store.pool())
        .await
        .unwrap();
}

pub async fn create_test_state() -> (AppState, Arc<SqliteUrlStore>) {
    let store = memory_store().await;
    let service = mapping_service(store.clone(), Arc::new(RandomAliasGenerator::new()));
    (AppState::new(Arc::new(service)), store)
}

pub async fn create_test_state_with_generator(
    generator: Arc<dyn AliasGenerator>,
) -> (AppState, Arc<SqliteUrlStore>) {
    let store = memory_store().await;
    let service = mapping_service(store.clone(), generator);
    (AppState::new(Arc::new(service)), store)
}
