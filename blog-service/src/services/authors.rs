//! Author directory - cached lookups over the persisted persona set plus
//! the write paths that create personas.
//!
//! `list` reads through a process-wide TTL cache; a persona created by
//! another process stays invisible to cached readers until expiry, which
//! callers must tolerate. Selection paths that need fresh data
//! (`random_ai_author`, the synthesizer's exclusion set) bypass the cache
//! and hit the store directly. Local writes invalidate the cache.

use std::sync::Arc;
use std::time::Duration;

use rand::Rng;
use tracing::info;
use uuid::Uuid;

use crate::cache::AuthorCache;
use crate::db::AuthorStore;
use crate::error::{AppError, Result};
use crate::models::{Author, NewAuthor};

pub struct AuthorDirectory {
    store: Arc<dyn AuthorStore>,
    cache: AuthorCache,
}

impl AuthorDirectory {
    pub fn new(store: Arc<dyn AuthorStore>, cache_ttl: Duration) -> Self {
        Self {
            store,
            cache: AuthorCache::new(cache_ttl),
        }
    }

    /// All authors, served from the cache when the snapshot is younger than
    /// the TTL. Results may be up to TTL-old.
    pub async fn list(&self) -> Result<Vec<Author>> {
        if let Some(cached) = self.cache.get().await {
            return Ok(cached);
        }

        let authors = self.store.list().await?;
        self.cache.put(authors.clone()).await;
        Ok(authors)
    }

    /// All authors straight from the store, bypassing the cache.
    pub async fn list_fresh(&self) -> Result<Vec<Author>> {
        self.store.list().await
    }

    /// Uniformly pick one AI persona from a fresh store read. Selection
    /// quality matters more than cache savings here.
    pub async fn random_ai_author<R: Rng + Send>(&self, rng: &mut R) -> Result<Author> {
        let mut pool = self.store.list_ai().await?;
        if pool.is_empty() {
            return Err(AppError::EmptyPool("no AI authors available"));
        }

        let index = rng.gen_range(0..pool.len());
        Ok(pool.swap_remove(index))
    }

    /// Number of AI personas currently persisted.
    pub async fn ai_pool_size(&self) -> Result<usize> {
        Ok(self.store.list_ai().await?.len())
    }

    pub async fn by_id(&self, id: Uuid) -> Result<Author> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("author {id}")))
    }

    /// Author by slug; absence is an expected outcome, not an error.
    pub async fn by_slug(&self, slug: &str) -> Result<Option<Author>> {
        self.store.find_by_slug(slug).await
    }

    pub async fn by_email(&self, email: &str) -> Result<Option<Author>> {
        self.store.find_by_email(email).await
    }

    /// Persist a generated persona and invalidate the cached snapshot.
    pub async fn create_generated(&self, new: NewAuthor) -> Result<Author> {
        let author = self.store.insert(&new).await?;
        self.cache.invalidate().await;
        info!(name = %author.name, slug = %author.slug, "generated author created");
        Ok(author)
    }

    /// Persist a human author from the registration flow. Human authors use
    /// their email as slug and carry no generated voice fields.
    pub async fn create_human(
        &self,
        name: &str,
        email: &str,
        picture_url: &str,
    ) -> Result<Author> {
        let new = NewAuthor {
            name: name.to_string(),
            slug: email.to_lowercase(),
            email: Some(email.to_lowercase()),
            writing_style: String::new(),
            personality_traits: Vec::new(),
            areas_of_expertise: Vec::new(),
            bio: String::new(),
            profile_picture_url: picture_url.to_string(),
            creativity_level: 0.0,
            is_human: true,
        };

        let author = self.store.insert(&new).await?;
        self.cache.invalidate().await;
        info!(name = %author.name, "human author registered");
        Ok(author)
    }
}
