//! Data models for the blog service.
//!
//! `Author` and `Post` are the persisted entities. `NewAuthor`/`NewPost`
//! carry caller-supplied fields into the stores, which assign ids and
//! timestamps. `PersonaDraft`/`PostDraft` are the structured-output shapes
//! the LLM must produce; parsing into them is the schema check that turns a
//! wrong-shaped response into a `MalformedGeneration` error instead of
//! persisting half-empty documents.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An author persona. AI personas are invented by the persona synthesizer;
/// human authors arrive through the external registration flow. Never
/// mutated or deleted once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Author {
    pub id: Uuid,
    pub name: String,
    /// URL-safe identifier, unique across authors (database constraint).
    /// Human authors use their email address here.
    pub slug: String,
    pub email: Option<String>,
    pub writing_style: String,
    pub personality_traits: Vec<String>,
    pub areas_of_expertise: Vec<String>,
    pub bio: String,
    pub profile_picture_url: String,
    /// Sampling temperature for content written in this voice. Generated
    /// personas fall in [0.1, 0.8]; human authors carry 0.
    pub creativity_level: f64,
    pub is_human: bool,
    pub created_at: DateTime<Utc>,
}

/// Fields for creating an author; the store assigns id and created_at.
#[derive(Debug, Clone)]
pub struct NewAuthor {
    pub name: String,
    pub slug: String,
    pub email: Option<String>,
    pub writing_style: String,
    pub personality_traits: Vec<String>,
    pub areas_of_expertise: Vec<String>,
    pub bio: String,
    pub profile_picture_url: String,
    pub creativity_level: f64,
    pub is_human: bool,
}

/// A published post. Immutable after creation except for the view counter,
/// which only the read path increments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    /// Markdown body; rendering is the page layer's concern.
    pub content: String,
    pub summary: String,
    /// URL-safe identifier, globally unique (database constraint).
    pub slug: String,
    pub categories: Vec<String>,
    pub author_id: Uuid,
    pub views: i64,
    pub created_at: DateTime<Utc>,
}

/// Fields for creating a post; the store assigns id, created_at and the
/// zeroed view counter.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub summary: String,
    pub slug: String,
    pub categories: Vec<String>,
    pub author_id: Uuid,
}

/// Subject matter for one generation run, supplied by an external source.
#[derive(Debug, Clone, PartialEq)]
pub struct Topic {
    pub title: String,
}

/// Structured output required from the persona-generation call.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonaDraft {
    pub name: String,
    pub writing_style: String,
    pub personality_traits: Vec<String>,
    pub areas_of_expertise: Vec<String>,
    pub author_bio: String,
    pub gender: String,
}

/// Structured output required from the post-generation call.
#[derive(Debug, Clone, Deserialize)]
pub struct PostDraft {
    pub title: String,
    pub content: String,
    pub categories: Vec<String>,
    pub summary: String,
}
