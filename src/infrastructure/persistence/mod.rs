//! PostgreSQL repository implementations.
//!
//! Concrete implementations of the domain repository traits using SQLx.
//! Uniqueness and counting are left to the database: inserts rely on the
//! `UNIQUE` constraints and visits are bumped with a single `UPDATE`.
//!
//! # Repositories
//!
//! - [`PgUserRepository`] - Account storage
//! - [`PgLinkRepository`] - Short link storage and counting

pub mod pg_link_repository;
pub mod pg_user_repository;

pub use pg_link_repository::PgLinkRepository;
pub use pg_user_repository::PgUserRepository;
