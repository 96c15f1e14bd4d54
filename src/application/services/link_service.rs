//! Link registry: slug allocation, redirect resolution and owned-link management.

use std::sync::Arc;

use crate::domain::entities::{Identity, NewShortLink, ShortLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::slug::{generate_slug, validate_custom_slug};
use crate::utils::url_validator::validate_target_url;
use serde_json::json;
use uuid::Uuid;

/// Attempts at a fresh random slug before giving up.
const MAX_GENERATION_ATTEMPTS: usize = 10;

/// Service for creating, resolving, listing and deleting short links.
///
/// Slug uniqueness and visit counting are delegated to the repository: the
/// service never checks for a slug before inserting it and never writes back
/// a counter it has read.
pub struct LinkService {
    links: Arc<dyn LinkRepository>,
    base_url: String,
}

impl LinkService {
    /// Creates a new link service.
    ///
    /// `base_url` is the public origin used to build display short URLs.
    pub fn new(links: Arc<dyn LinkRepository>, base_url: impl Into<String>) -> Self {
        Self {
            links,
            base_url: base_url.into(),
        }
    }

    /// Creates a short link for `target_url`.
    ///
    /// # Code Allocation
    ///
    /// - With `desired_slug`, validates it and inserts it once; a collision is
    ///   reported as `slug_taken`
    /// - Otherwise generates a random 8-character slug, retrying on collision;
    ///   an empty `desired_slug` counts as absent
    ///
    /// The link is owned by `caller` when present and anonymous otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL (`invalid_url`) or the
    /// desired slug (`invalid_slug`) is rejected.
    ///
    /// Returns [`AppError::Conflict`] (`slug_taken`) if the desired slug exists.
    pub async fn shorten(
        &self,
        target_url: &str,
        desired_slug: Option<&str>,
        caller: Option<&Identity>,
    ) -> Result<ShortLink, AppError> {
        validate_target_url(target_url).map_err(|e| AppError::invalid_url(e.to_string()))?;

        let owner_id = caller.map(|identity| identity.user_id);

        let link = match desired_slug.filter(|slug| !slug.is_empty()) {
            Some(slug) => {
                validate_custom_slug(slug)?;
                self.links
                    .insert(NewShortLink {
                        slug: slug.to_string(),
                        original: target_url.to_string(),
                        owner_id,
                    })
                    .await?
            }
            None => self.insert_generated(target_url, owner_id).await?,
        };

        tracing::info!(
            slug = %link.slug,
            owner = ?link.owner_id,
            "Short link created"
        );

        Ok(link)
    }

    /// Resolves `slug` for a redirect and counts the visit.
    ///
    /// The increment happens in the same store operation as the lookup, so
    /// concurrent resolutions each add exactly one visit.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the slug does not exist.
    pub async fn resolve(&self, slug: &str) -> Result<ShortLink, AppError> {
        self.links
            .increment_visits(slug)
            .await?
            .ok_or_else(|| AppError::not_found("Short link not found", json!({ "slug": slug })))
    }

    /// Lists the caller's links, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn list_owned(&self, caller: &Identity) -> Result<Vec<ShortLink>, AppError> {
        self.links.list_by_owner(caller.user_id).await
    }

    /// Permanently deletes link `id` if `caller` owns it.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the link does not exist or belongs to
    /// someone else; the two cases are indistinguishable.
    pub async fn delete_owned(&self, id: Uuid, caller: &Identity) -> Result<(), AppError> {
        if !self.links.delete_owned(id, caller.user_id).await? {
            return Err(AppError::not_found(
                "URL not found or unauthorized",
                json!({ "id": id }),
            ));
        }

        tracing::info!(link_id = %id, user_id = %caller.user_id, "Short link deleted");
        Ok(())
    }

    /// Constructs the public short URL for `slug`.
    pub fn short_url(&self, slug: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), slug)
    }

    async fn insert_generated(
        &self,
        target_url: &str,
        owner_id: Option<Uuid>,
    ) -> Result<ShortLink, AppError> {
        for attempt in 1..=MAX_GENERATION_ATTEMPTS {
            let new_link = NewShortLink {
                slug: generate_slug()?,
                original: target_url.to_string(),
                owner_id,
            };

            match self.links.insert(new_link).await {
                Err(AppError::Conflict { code: "slug_taken", .. }) => {
                    tracing::warn!(attempt, "Generated slug collided, retrying");
                }
                result => return result,
            }
        }

        Err(AppError::internal(
            "Failed to generate unique slug",
            json!({ "reason": "Too many collisions" }),
        ))
    }
}
