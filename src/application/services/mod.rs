//! Business logic services for the application layer.

pub mod alias_allocator;
pub mod mapping_service;

pub use alias_allocator::AliasAllocator;
pub use mapping_service::MappingService;
