//! Author repository backed by PostgreSQL.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::AuthorStore;
use crate::error::Result;
use crate::models::{Author, NewAuthor};

pub struct PgAuthorStore {
    pool: PgPool,
}

impl PgAuthorStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AuthorStore for PgAuthorStore {
    async fn insert(&self, new: &NewAuthor) -> Result<Author> {
        let author = sqlx::query_as::<_, Author>(
            r#"
            INSERT INTO authors (id, name, slug, email, writing_style, personality_traits,
                                 areas_of_expertise, bio, profile_picture_url, creativity_level,
                                 is_human, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING id, name, slug, email, writing_style, personality_traits,
                      areas_of_expertise, bio, profile_picture_url, creativity_level,
                      is_human, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&new.name)
        .bind(&new.slug)
        .bind(&new.email)
        .bind(&new.writing_style)
        .bind(&new.personality_traits)
        .bind(&new.areas_of_expertise)
        .bind(&new.bio)
        .bind(&new.profile_picture_url)
        .bind(new.creativity_level)
        .bind(new.is_human)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(author)
    }

    async fn list(&self) -> Result<Vec<Author>> {
        let authors = sqlx::query_as::<_, Author>(
            r#"
            SELECT id, name, slug, email, writing_style, personality_traits,
                   areas_of_expertise, bio, profile_picture_url, creativity_level,
                   is_human, created_at
            FROM authors
            ORDER BY created_at
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(authors)
    }

    async fn list_ai(&self) -> Result<Vec<Author>> {
        let authors = sqlx::query_as::<_, Author>(
            r#"
            SELECT id, name, slug, email, writing_style, personality_traits,
                   areas_of_expertise, bio, profile_picture_url, creativity_level,
                   is_human, created_at
            FROM authors
            WHERE is_human = FALSE
            ORDER BY created_at
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(authors)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Author>> {
        let author = sqlx::query_as::<_, Author>(
            r#"
            SELECT id, name, slug, email, writing_style, personality_traits,
                   areas_of_expertise, bio, profile_picture_url, creativity_level,
                   is_human, created_at
            FROM authors
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(author)
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Author>> {
        let author = sqlx::query_as::<_, Author>(
            r#"
            SELECT id, name, slug, email, writing_style, personality_traits,
                   areas_of_expertise, bio, profile_picture_url, creativity_level,
                   is_human, created_at
            FROM authors
            WHERE slug = $1
            "#,
        )
        .bind(slug)
        .fetch_optional(&self.pool)
        .await?;

        Ok(author)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Author>> {
        let author = sqlx::query_as::<_, Author>(
            r#"
            SELECT id, name, slug, email, writing_style, personality_traits,
                   areas_of_expertise, bio, profile_picture_url, creativity_level,
                   is_human, created_at
            FROM authors
            WHERE email = $1
            "#,
        )
        .bind(email.to_lowercase())
        .fetch_optional(&self.pool)
        .await?;

        Ok(author)
    }
}
