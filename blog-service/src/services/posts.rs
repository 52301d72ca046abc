//! Post service - the read surface used by the page-rendering layer.

use std::sync::Arc;

use tracing::debug;
use uuid::Uuid;

use crate::db::PostStore;
use crate::error::{AppError, Result};
use crate::models::Post;

pub struct PostService {
    store: Arc<dyn PostStore>,
}

impl PostService {
    pub fn new(store: Arc<dyn PostStore>) -> Self {
        Self { store }
    }

    /// Fetch one post for display and bump its view counter. The increment
    /// is best-effort telemetry: a failure is logged and never fails the
    /// read.
    pub async fn read_by_slug(&self, slug: &str) -> Result<Post> {
        let post = self
            .store
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("post '{slug}'")))?;

        if let Err(err) = self.store.increment_views(slug).await {
            debug!(%slug, "view count update failed: {err}");
        }

        Ok(post)
    }

    /// All posts, newest first.
    pub async fn list_all(&self) -> Result<Vec<Post>> {
        self.store.list_all().await
    }

    /// Posts in a category (case-insensitive exact label match), newest
    /// first. An empty result is a not-found outcome for the caller's 404
    /// page.
    pub async fn list_by_category(&self, category: &str) -> Result<Vec<Post>> {
        let posts = self.store.list_by_category(category).await?;
        if posts.is_empty() {
            return Err(AppError::NotFound(format!("category '{category}'")));
        }
        Ok(posts)
    }

    /// Posts owned by an author, newest first; empty means not found.
    pub async fn list_by_author(&self, author_id: Uuid) -> Result<Vec<Post>> {
        let posts = self.store.list_by_author(author_id).await?;
        if posts.is_empty() {
            return Err(AppError::NotFound(format!("posts by author {author_id}")));
        }
        Ok(posts)
    }

    /// Distinct category labels across all posts, sorted.
    pub async fn categories(&self) -> Result<Vec<String>> {
        self.store.list_categories().await
    }
}
