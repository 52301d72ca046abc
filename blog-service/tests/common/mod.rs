//! Shared fixtures: in-memory stores, a scripted chat model, and a
//! recording syndicator. The services under test run against these the same
//! way they run against PostgreSQL and the real API in production.
#![allow(dead_code)]

use std::collections::VecDeque;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;
use uuid::Uuid;

use blog_service::db::{AuthorStore, PostStore};
use blog_service::error::{AppError, Result};
use blog_service::llm::{ChatModel, ChatRequest};
use blog_service::models::{Author, NewAuthor, NewPost, Post, Topic};
use blog_service::services::{Syndicator, TopicSource};

// ============================================
// In-memory stores
// ============================================

#[derive(Default)]
pub struct MemoryAuthorStore {
    authors: Mutex<Vec<Author>>,
}

impl MemoryAuthorStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AuthorStore for MemoryAuthorStore {
    async fn insert(&self, new: &NewAuthor) -> Result<Author> {
        let mut authors = self.authors.lock().await;
        if authors.iter().any(|a| a.slug == new.slug) {
            return Err(AppError::Conflict(format!(
                "duplicate key value violates unique constraint: authors.slug = {}",
                new.slug
            )));
        }

        let author = Author {
            id: Uuid::new_v4(),
            name: new.name.clone(),
            slug: new.slug.clone(),
            email: new.email.clone(),
            writing_style: new.writing_style.clone(),
            personality_traits: new.personality_traits.clone(),
            areas_of_expertise: new.areas_of_expertise.clone(),
            bio: new.bio.clone(),
            profile_picture_url: new.profile_picture_url.clone(),
            creativity_level: new.creativity_level,
            is_human: new.is_human,
            created_at: Utc::now(),
        };
        authors.push(author.clone());
        Ok(author)
    }

    async fn list(&self) -> Result<Vec<Author>> {
        Ok(self.authors.lock().await.clone())
    }

    async fn list_ai(&self) -> Result<Vec<Author>> {
        Ok(self
            .authors
            .lock()
            .await
            .iter()
            .filter(|a| !a.is_human)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Author>> {
        Ok(self
            .authors
            .lock()
            .await
            .iter()
            .find(|a| a.id == id)
            .cloned())
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Author>> {
        Ok(self
            .authors
            .lock()
            .await
            .iter()
            .find(|a| a.slug == slug)
            .cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Author>> {
        let email = email.to_lowercase();
        Ok(self
            .authors
            .lock()
            .await
            .iter()
            .find(|a| a.email.as_deref() == Some(email.as_str()))
            .cloned())
    }
}

#[derive(Default)]
pub struct MemoryPostStore {
    posts: Mutex<Vec<Post>>,
}

impl MemoryPostStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PostStore for MemoryPostStore {
    async fn insert(&self, new: &NewPost) -> Result<Post> {
        let mut posts = self.posts.lock().await;
        if posts.iter().any(|p| p.slug == new.slug) {
            return Err(AppError::Conflict(format!(
                "duplicate key value violates unique constraint: posts.slug = {}",
                new.slug
            )));
        }

        let post = Post {
            id: Uuid::new_v4(),
            title: new.title.clone(),
            content: new.content.clone(),
            summary: new.summary.clone(),
            slug: new.slug.clone(),
            categories: new.categories.clone(),
            author_id: new.author_id,
            views: 0,
            created_at: Utc::now(),
        };
        posts.push(post.clone());
        Ok(post)
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Post>> {
        Ok(self
            .posts
            .lock()
            .await
            .iter()
            .find(|p| p.slug == slug)
            .cloned())
    }

    async fn slug_exists(&self, slug: &str) -> Result<bool> {
        Ok(self.posts.lock().await.iter().any(|p| p.slug == slug))
    }

    async fn list_all(&self) -> Result<Vec<Post>> {
        Ok(self.posts.lock().await.iter().rev().cloned().collect())
    }

    async fn list_by_category(&self, category: &str) -> Result<Vec<Post>> {
        Ok(self
            .posts
            .lock()
            .await
            .iter()
            .rev()
            .filter(|p| {
                p.categories
                    .iter()
                    .any(|label| label.eq_ignore_ascii_case(category))
            })
            .cloned()
            .collect())
    }

    async fn list_by_author(&self, author_id: Uuid) -> Result<Vec<Post>> {
        Ok(self
            .posts
            .lock()
            .await
            .iter()
            .rev()
            .filter(|p| p.author_id == author_id)
            .cloned()
            .collect())
    }

    async fn list_categories(&self) -> Result<Vec<String>> {
        let mut categories: Vec<String> = self
            .posts
            .lock()
            .await
            .iter()
            .flat_map(|p| p.categories.clone())
            .collect();
        categories.sort();
        categories.dedup();
        Ok(categories)
    }

    async fn increment_views(&self, slug: &str) -> Result<()> {
        let mut posts = self.posts.lock().await;
        if let Some(post) = posts.iter_mut().find(|p| p.slug == slug) {
            post.views += 1;
        }
        Ok(())
    }
}

// ============================================
// Scripted chat model
// ============================================

/// Returns canned completions in order and records every request it saw.
pub struct ScriptedChat {
    responses: Mutex<VecDeque<String>>,
    pub requests: Mutex<Vec<ChatRequest>>,
}

impl ScriptedChat {
    pub fn new(responses: Vec<&str>) -> Self {
        Self {
            responses: Mutex::new(responses.into_iter().map(String::from).collect()),
            requests: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl ChatModel for ScriptedChat {
    async fn chat(&self, request: ChatRequest) -> Result<String> {
        self.requests.lock().await.push(request);
        self.responses
            .lock()
            .await
            .pop_front()
            .ok_or_else(|| AppError::Generation("scripted responses exhausted".to_string()))
    }
}

// ============================================
// Syndication and topics
// ============================================

#[derive(Default)]
pub struct RecordingSyndicator {
    pub announced: Mutex<Vec<Post>>,
}

impl RecordingSyndicator {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Syndicator for RecordingSyndicator {
    async fn announce(&self, post: &Post) {
        self.announced.lock().await.push(post.clone());
    }
}

/// Stands in for a notifier whose outbound call keeps failing: the failure
/// is swallowed inside `announce`, so from the pipeline's side the call
/// simply has no observable effect.
pub struct FailingSyndicator;

#[async_trait]
impl Syndicator for FailingSyndicator {
    async fn announce(&self, _post: &Post) {}
}

pub struct StaticTopics {
    title: String,
}

impl StaticTopics {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
        }
    }
}

#[async_trait]
impl TopicSource for StaticTopics {
    async fn random_topic(&self) -> Result<Topic> {
        Ok(Topic {
            title: self.title.clone(),
        })
    }
}

// ============================================
// Builders
// ============================================

pub fn ai_author(name: &str, style: &str) -> NewAuthor {
    NewAuthor {
        name: name.to_string(),
        slug: name.to_lowercase().replace(' ', "-"),
        email: None,
        writing_style: style.to_string(),
        personality_traits: vec!["curious".to_string(), "precise".to_string()],
        areas_of_expertise: vec!["technology".to_string(), "science".to_string()],
        bio: format!("{name} writes about technology."),
        profile_picture_url: "https://randomuser.me/api/portraits/women/7.jpg".to_string(),
        creativity_level: 0.4,
        is_human: false,
    }
}

pub fn human_author(name: &str, email: &str) -> NewAuthor {
    NewAuthor {
        name: name.to_string(),
        slug: email.to_string(),
        email: Some(email.to_string()),
        writing_style: String::new(),
        personality_traits: Vec::new(),
        areas_of_expertise: Vec::new(),
        bio: String::new(),
        profile_picture_url: String::new(),
        creativity_level: 0.0,
        is_human: true,
    }
}

pub fn sample_post(slug: &str, categories: &[&str], author_id: Uuid) -> NewPost {
    NewPost {
        title: slug.replace('-', " "),
        content: "# Heading\n\nBody.".to_string(),
        summary: "A short summary.".to_string(),
        slug: slug.to_string(),
        categories: categories.iter().map(|c| c.to_string()).collect(),
        author_id,
    }
}
