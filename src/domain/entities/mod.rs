//! Core domain entities.
//!
//! The service persists a single entity, [`Mapping`], pairing a unique alias
//! with its destination URL. Entities are plain data structures without
//! business logic.

pub mod mapping;

pub use mapping::Mapping;
