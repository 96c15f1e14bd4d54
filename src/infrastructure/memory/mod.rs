//! In-memory repository implementations.
//!
//! Used by the `memory` storage backend and by the integration tests. Every
//! trait method runs inside one critical section of a `tokio::sync::RwLock`,
//! which gives the same per-operation atomicity the PostgreSQL repositories
//! get from their constraints: a slug check and its insert cannot interleave
//! with another insert, and a visit increment cannot be lost.

pub mod link_repository;
pub mod user_repository;

pub use link_repository::MemoryLinkRepository;
pub use user_repository::MemoryUserRepository;
