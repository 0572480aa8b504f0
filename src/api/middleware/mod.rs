//! HTTP middleware for request processing.
//!
//! Provides request-ID propagation and observability middleware.

pub mod request_id;
pub mod tracing;
