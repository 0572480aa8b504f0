//! Repository trait definitions for the domain layer.
//!
//! The store abstraction lives here; implementations live in
//! `crate::infrastructure::persistence`. A mock implementation is generated via
//! `mockall` for unit tests.
//!
//! # Testing
//!
//! See integration tests in `tests/repository_url.rs` for usage examples.

pub mod url_store;

pub use url_store::UrlStore;

#[cfg(test)]
pub use url_store::MockUrlStore;
