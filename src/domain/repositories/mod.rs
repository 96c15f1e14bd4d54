//! Repository trait definitions for the domain layer.
//!
//! These traits are the persistence interface of the service. Each method is
//! a single atomic store operation; services never compose a read and a
//! write into one logical step where the store can do it alone.
//!
//! # Implementations
//!
//! - PostgreSQL: `crate::infrastructure::persistence`
//! - In-memory: `crate::infrastructure::memory`
//! - Mocks are generated via `mockall` for unit tests
//!
//! # Available Repositories
//!
//! - [`UserRepository`] - Account storage
//! - [`LinkRepository`] - Short link storage, counting and owner-scoped queries

pub mod link_repository;
pub mod user_repository;

pub use link_repository::LinkRepository;
pub use user_repository::UserRepository;

#[cfg(test)]
pub use link_repository::MockLinkRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
