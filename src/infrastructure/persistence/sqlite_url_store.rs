//! SQLite implementation of the URL store.

use async_trait::async_trait;
use sqlx::SqlitePool;
use sqlx::migrate::MigrateError;
use std::sync::Arc;

use crate::domain::repositories::UrlStore;
use crate::error::{InsertError, LookupError, StoreUnavailable};

/// SQLite-backed URL store.
///
/// Shares a connection pool across all callers. Alias uniqueness is enforced
/// by the `UNIQUE` constraint on `url.alias`; duplicate inserts are recognised
/// from the constraint violation reported by the database.
#[derive(Debug, Clone)]
pub struct SqliteUrlStore {
    pool: Arc<SqlitePool>,
}

impl SqliteUrlStore {
    /// Creates a new store with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }

    /// Applies pending schema migrations from `./migrations`.
    pub async fn migrate(&self) -> Result<(), MigrateError> {
        sqlx::migrate!("./migrations").run(self.pool.as_ref()).await
    }

    /// Returns the number of stored mappings.
    pub async fn count(&self) -> Result<i64, StoreUnavailable> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM url")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    /// Returns a reference to the underlying pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .is_some_and(sqlx::error::DatabaseError::is_unique_violation)
}

#[async_trait]
impl UrlStore for SqliteUrlStore {
    async fn insert(&self, alias: &str, url: &str) -> Result<i64, InsertError> {
        let result = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO url (alias, url)
            VALUES (?, ?)
            RETURNING id
            "#,
        )
        .bind(alias)
        .bind(url)
        .fetch_one(self.pool.as_ref())
        .await;

        match result {
            Ok(id) => Ok(id),
            Err(err) if is_unique_violation(&err) => {
                Err(InsertError::DuplicateAlias(alias.to_string()))
            }
            Err(err) => Err(StoreUnavailable(err).into()),
        }
    }

    async fn get(&self, alias: &str) -> Result<String, LookupError> {
        sqlx::query_scalar::<_, String>("SELECT url FROM url WHERE alias = ?")
            .bind(alias)
            .fetch_optional(self.pool.as_ref())
            .await
            .map_err(StoreUnavailable)?
            .ok_or(LookupError::NotFound)
    }

    async fn delete(&self, alias: &str) -> Result<(), LookupError> {
        let result = sqlx::query("DELETE FROM url WHERE alias = ?")
            .bind(alias)
            .execute(self.pool.as_ref())
            .await
            .map_err(StoreUnavailable)?;

        if result.rows_affected() == 0 {
            return Err(LookupError::NotFound);
        }

        Ok(())
    }

    async fn exists(&self, alias: &str) -> Result<bool, StoreUnavailable> {
        let exists = sqlx::query("SELECT 1 FROM url WHERE alias = ? LIMIT 1")
            .bind(alias)
            .fetch_optional(self.pool.as_ref())
            .await?
            .is_some();

        Ok(exists)
    }

    async fn ping(&self) -> Result<(), StoreUnavailable> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;
        Ok(())
    }
}
