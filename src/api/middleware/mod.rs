//! HTTP middleware and request extractors.
//!
//! Provides bearer authentication and request tracing.

pub mod auth;
pub mod tracing;

pub use auth::BearerToken;
