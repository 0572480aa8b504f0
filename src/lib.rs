//! # Alias Shortener
//!
//! A small URL shortening service built with Axum and SQLite. It maps long URLs
//! to short unique aliases, persists the mapping, and serves create, redirect
//! and delete operations.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Mapping entity, store trait, alias generator
//! - **Application Layer** ([`application`]) - Alias allocation and the mapping service
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite store
//! - **API Layer** ([`api`]) - HTTP handlers, DTOs, and middleware
//!
//! ## Alias uniqueness
//!
//! The `UNIQUE` constraint on `url.alias` is the only authority. Generated
//! aliases are probed before insert to avoid needless failures, but a
//! duplicate is always recognised from the constraint violation at insert time.
//!
//! ## Quick Start
//!
//! ```bash
//! export DATABASE_URL="sqlite://storage.db"
//!
//! # Migrations are applied on startup
//! cargo run
//!
//! curl -X POST localhost:3000/url -d '{"url":"https://example.com","alias":"ex1"}' \
//!      -H 'content-type: application/json'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{AliasAllocator, MappingService};
    pub use crate::domain::alias_generator::{AliasGenerator, RandomAliasGenerator};
    pub use crate::domain::entities::Mapping;
    pub use crate::domain::repositories::UrlStore;
    pub use crate::error::{AliasError, AppError, CreateMappingError};
    pub use crate::infrastructure::persistence::SqliteUrlStore;
    pub use crate::state::AppState;
}
