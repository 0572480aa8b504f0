//! Application layer services implementing business logic.
//!
//! Services consume the domain store and generator traits and provide a small
//! API for the HTTP handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::mapping_service::MappingService`] - Create, resolve and delete mappings
//! - [`services::alias_allocator::AliasAllocator`] - Fresh alias allocation for auto-generated aliases

pub mod services;
