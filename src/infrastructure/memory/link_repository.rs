//! In-memory short link repository.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::{NewShortLink, ShortLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

#[derive(Default)]
struct Links {
    by_id: HashMap<Uuid, ShortLink>,
    id_by_slug: HashMap<String, Uuid>,
}

impl Links {
    fn remove(&mut self, id: Uuid) -> bool {
        match self.by_id.remove(&id) {
            Some(link) => {
                self.id_by_slug.remove(&link.slug);
                true
            }
            None => false,
        }
    }
}

/// Short links kept in process memory, indexed by id and by slug.
#[derive(Default)]
pub struct MemoryLinkRepository {
    inner: RwLock<Links>,
}

impl MemoryLinkRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LinkRepository for MemoryLinkRepository {
    async fn insert(&self, new_link: NewShortLink) -> Result<ShortLink, AppError> {
        let mut links = self.inner.write().await;

        if links.id_by_slug.contains_key(&new_link.slug) {
            return Err(AppError::slug_taken(&new_link.slug));
        }

        let link = ShortLink {
            id: Uuid::new_v4(),
            slug: new_link.slug,
            original: new_link.original,
            owner_id: new_link.owner_id,
            visits: 0,
            created_at: Utc::now(),
        };

        links.id_by_slug.insert(link.slug.clone(), link.id);
        links.by_id.insert(link.id, link.clone());

        Ok(link)
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<ShortLink>, AppError> {
        let links = self.inner.read().await;

        Ok(links
            .id_by_slug
            .get(slug)
            .and_then(|id| links.by_id.get(id))
            .cloned())
    }

    async fn increment_visits(&self, slug: &str) -> Result<Option<ShortLink>, AppError> {
        let mut links = self.inner.write().await;

        let Some(id) = links.id_by_slug.get(slug).copied() else {
            return Ok(None);
        };

        Ok(links.by_id.get_mut(&id).map(|link| {
            link.visits += 1;
            link.clone()
        }))
    }

    async fn list_by_owner(&self, owner_id: Uuid) -> Result<Vec<ShortLink>, AppError> {
        let links = self.inner.read().await;

        let mut owned: Vec<ShortLink> = links
            .by_id
            .values()
            .filter(|link| link.is_owned_by(owner_id))
            .cloned()
            .collect();
        owned.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));

        Ok(owned)
    }

    async fn delete_owned(&self, id: Uuid, owner_id: Uuid) -> Result<bool, AppError> {
        let mut links = self.inner.write().await;

        let owned = links
            .by_id
            .get(&id)
            .is_some_and(|link| link.is_owned_by(owner_id));

        Ok(owned && links.remove(id))
    }

    async fn delete_by_slug(&self, slug: &str) -> Result<bool, AppError> {
        let mut links = self.inner.write().await;

        match links.id_by_slug.get(slug).copied() {
            Some(id) => Ok(links.remove(id)),
            None => Ok(false),
        }
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.inner.read().await.by_id.len() as i64)
    }

    async fn total_visits(&self) -> Result<i64, AppError> {
        Ok(self.inner.read().await.by_id.values().map(|l| l.visits).sum())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_link(slug: &str, owner_id: Option<Uuid>) -> NewShortLink {
        NewShortLink {
            slug: slug.to_string(),
            original: "https://example.com".to_string(),
            owner_id,
        }
    }

    #[tokio::test]
    async fn test_insert_rejects_duplicate_slug() {
        let repo = MemoryLinkRepository::new();
        repo.insert(new_link("abc", None)).await.unwrap();

        let err = repo.insert(new_link("abc", None)).await.unwrap_err();

        assert_eq!(err.code(), "slug_taken");
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_increment_visits() {
        let repo = MemoryLinkRepository::new();
        repo.insert(new_link("abc", None)).await.unwrap();

        assert_eq!(repo.increment_visits("abc").await.unwrap().unwrap().visits, 1);
        assert_eq!(repo.increment_visits("abc").await.unwrap().unwrap().visits, 2);
        assert!(repo.increment_visits("missing").await.unwrap().is_none());
        assert_eq!(repo.total_visits().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_delete_owned_checks_owner() {
        let repo = MemoryLinkRepository::new();
        let owner = Uuid::new_v4();
        let link = repo.insert(new_link("mine", Some(owner))).await.unwrap();

        assert!(!repo.delete_owned(link.id, Uuid::new_v4()).await.unwrap());
        assert!(repo.find_by_slug("mine").await.unwrap().is_some());

        assert!(repo.delete_owned(link.id, owner).await.unwrap());
        assert!(repo.find_by_slug("mine").await.unwrap().is_none());
        assert!(!repo.delete_owned(link.id, owner).await.unwrap());
    }

    #[tokio::test]
    async fn test_slug_is_reusable_after_delete() {
        let repo = MemoryLinkRepository::new();
        repo.insert(new_link("again", None)).await.unwrap();

        assert!(repo.delete_by_slug("again").await.unwrap());
        assert!(repo.insert(new_link("again", None)).await.is_ok());
    }

    #[tokio::test]
    async fn test_list_by_owner_excludes_others() {
        let repo = MemoryLinkRepository::new();
        let owner = Uuid::new_v4();
        repo.insert(new_link("one", Some(owner))).await.unwrap();
        repo.insert(new_link("two", Some(owner))).await.unwrap();
        repo.insert(new_link("anon", None)).await.unwrap();
        repo.insert(new_link("other", Some(Uuid::new_v4())))
            .await
            .unwrap();

        let owned = repo.list_by_owner(owner).await.unwrap();

        assert_eq!(owned.len(), 2);
        assert!(owned.iter().all(|l| l.owner_id == Some(owner)));
        assert!(owned[0].created_at >= owned[1].created_at);
    }
}
