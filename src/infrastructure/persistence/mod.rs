//! SQLite persistence.
//!
//! Concrete implementation of the domain store trait using SQLx, plus the
//! connection pool factory shared by the server and the admin CLI.
//!
//! # Stores
//!
//! - [`SqliteUrlStore`] - Alias mapping storage and retrieval

pub mod sqlite_url_store;

pub use sqlite_url_store::SqliteUrlStore;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;

use crate::config::Config;

/// Opens a connection pool for the configured database.
///
/// The database file is created if missing. WAL journaling lets readers
/// proceed while a writer holds the lock; writers wait up to the busy timeout.
///
/// # Errors
///
/// Returns an error if the URL cannot be parsed or the first connection fails.
pub async fn connect_pool(config: &Config) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(&config.database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(config.db_busy_timeout));

    SqlitePoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect_with(options)
        .await
}
