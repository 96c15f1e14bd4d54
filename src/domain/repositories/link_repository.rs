//! Repository trait for short link data access.

use crate::domain::entities::{NewShortLink, ShortLink};
use crate::error::AppError;
use async_trait::async_trait;
use uuid::Uuid;

/// Repository interface for managing short links.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::memory::MemoryLinkRepository`] - In-memory implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_link.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Inserts a new short link keyed by its slug.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] (`slug_taken`) if the slug already exists.
    /// Two concurrent inserts of the same slug yield exactly one success.
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn insert(&self, new_link: NewShortLink) -> Result<ShortLink, AppError>;

    /// Finds a link by slug without touching its counter.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_slug(&self, slug: &str) -> Result<Option<ShortLink>, AppError>;

    /// Atomically increments the visit counter of `slug` and returns the
    /// updated record, or `None` if the slug does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn increment_visits(&self, slug: &str) -> Result<Option<ShortLink>, AppError>;

    /// Lists every link owned by `owner_id`, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn list_by_owner(&self, owner_id: Uuid) -> Result<Vec<ShortLink>, AppError>;

    /// Deletes the link `id` only if it is owned by `owner_id`.
    ///
    /// Returns `Ok(true)` if a row was removed, `Ok(false)` if the link does
    /// not exist or belongs to someone else.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn delete_owned(&self, id: Uuid, owner_id: Uuid) -> Result<bool, AppError>;

    /// Deletes a link by slug regardless of owner. Used by operator tooling.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn delete_by_slug(&self, slug: &str) -> Result<bool, AppError>;

    /// Counts all links.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn count(&self) -> Result<i64, AppError>;

    /// Sums the visit counters of all links.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn total_visits(&self) -> Result<i64, AppError>;
}
