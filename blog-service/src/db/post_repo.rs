//! Post repository backed by PostgreSQL.
//!
//! Slug uniqueness is enforced by the `posts_slug_key` index; an insert that
//! loses a slug race surfaces as `AppError::Conflict` and the caller retries
//! with the next suffix. View counts are bumped with a single atomic UPDATE,
//! never read-modify-write.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::db::PostStore;
use crate::error::Result;
use crate::models::{NewPost, Post};

pub struct PgPostStore {
    pool: PgPool,
}

impl PgPostStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostStore for PgPostStore {
    async fn insert(&self, new: &NewPost) -> Result<Post> {
        let post = sqlx::query_as::<_, Post>(
            r#"
            INSERT INTO posts (id, title, content, summary, slug, categories, author_id,
                               views, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, 0, $8)
            RETURNING id, title, content, summary, slug, categories, author_id, views, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&new.title)
        .bind(&new.content)
        .bind(&new.summary)
        .bind(&new.slug)
        .bind(&new.categories)
        .bind(new.author_id)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(post)
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Post>> {
        let post = sqlx::query_as::<_, Post>(
            r#"
            SELECT id, title, content, summary, slug, categories, author_id, views, created_at
            FROM posts
            WHERE slug = $1
            "#,
        )
        .bind(slug)
        .fetch_optional(&self.pool)
        .await?;

        Ok(post)
    }

    async fn slug_exists(&self, slug: &str) -> Result<bool> {
        let row = sqlx::query("SELECT EXISTS(SELECT 1 FROM posts WHERE slug = $1) AS taken")
            .bind(slug)
            .fetch_one(&self.pool)
            .await?;

        Ok(row.get::<bool, _>("taken"))
    }

    async fn list_all(&self) -> Result<Vec<Post>> {
        let posts = sqlx::query_as::<_, Post>(
            r#"
            SELECT id, title, content, summary, slug, categories, author_id, views, created_at
            FROM posts
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(posts)
    }

    async fn list_by_category(&self, category: &str) -> Result<Vec<Post>> {
        let posts = sqlx::query_as::<_, Post>(
            r#"
            SELECT id, title, content, summary, slug, categories, author_id, views, created_at
            FROM posts
            WHERE EXISTS (
                SELECT 1 FROM unnest(categories) AS label
                WHERE lower(label) = lower($1)
            )
            ORDER BY created_at DESC
            "#,
        )
        .bind(category)
        .fetch_all(&self.pool)
        .await?;

        Ok(posts)
    }

    async fn list_by_author(&self, author_id: Uuid) -> Result<Vec<Post>> {
        let posts = sqlx::query_as::<_, Post>(
            r#"
            SELECT id, title, content, summary, slug, categories, author_id, views, created_at
            FROM posts
            WHERE author_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(author_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(posts)
    }

    async fn list_categories(&self) -> Result<Vec<String>> {
        let rows = sqlx::query(
            "SELECT DISTINCT unnest(categories) AS category FROM posts ORDER BY category",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .iter()
            .map(|row| row.get::<String, _>("category"))
            .collect())
    }

    async fn increment_views(&self, slug: &str) -> Result<()> {
        sqlx::query("UPDATE posts SET views = views + 1 WHERE slug = $1")
            .bind(slug)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
