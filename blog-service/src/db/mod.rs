//! Database access layer.
//!
//! The `AuthorStore` and `PostStore` traits are the persistence seams; the
//! `Pg*` repositories implement them over sqlx. Integration tests run the
//! same services against in-memory implementations.

mod author_repo;
mod post_repo;

pub use author_repo::PgAuthorStore;
pub use post_repo::PgPostStore;

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::Result;
use crate::models::{Author, NewAuthor, NewPost, Post};

/// Persisted set of author personas.
#[async_trait]
pub trait AuthorStore: Send + Sync {
    /// Persist a new author. Fails with `Conflict` when the slug is taken.
    async fn insert(&self, new: &NewAuthor) -> Result<Author>;

    /// All authors, human and generated.
    async fn list(&self) -> Result<Vec<Author>>;

    /// Authors with `is_human = false`.
    async fn list_ai(&self) -> Result<Vec<Author>>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Author>>;

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Author>>;

    async fn find_by_email(&self, email: &str) -> Result<Option<Author>>;
}

/// Persisted set of published posts.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Persist a new post and return it with store-assigned fields. Fails
    /// with `Conflict` when the slug is taken.
    async fn insert(&self, new: &NewPost) -> Result<Post>;

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Post>>;

    /// Fast-path availability probe used by slug allocation.
    async fn slug_exists(&self, slug: &str) -> Result<bool>;

    /// All posts, newest first.
    async fn list_all(&self) -> Result<Vec<Post>>;

    /// Posts carrying the label (case-insensitive exact match), newest
    /// first. An empty result is not a store error.
    async fn list_by_category(&self, category: &str) -> Result<Vec<Post>>;

    /// Posts owned by the author, newest first.
    async fn list_by_author(&self, author_id: Uuid) -> Result<Vec<Post>>;

    /// Distinct category labels across all posts, sorted.
    async fn list_categories(&self) -> Result<Vec<String>>;

    /// Atomically bump the view counter by one.
    async fn increment_views(&self, slug: &str) -> Result<()>;
}
