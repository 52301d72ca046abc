//! Generation pipeline - the end-to-end "generate and publish one post"
//! operation.
//!
//! Ordering matters: nothing is persisted until the draft is complete, and
//! syndication happens only after the post exists. Any failure before
//! persistence aborts the run with no partial post; the scheduling job
//! catches and logs whatever this returns, so a failed run never takes the
//! host process down.

use std::sync::Arc;

use rand::Rng;
use tracing::{info, warn};
use uuid::Uuid;

use crate::db::PostStore;
use crate::error::{AppError, Result};
use crate::models::{NewPost, Post, PostDraft};
use crate::services::authors::AuthorDirectory;
use crate::services::slug::SlugAllocator;
use crate::services::syndication::Syndicator;
use crate::services::topics::TopicSource;
use crate::services::writer::ContentSynthesizer;

pub struct GenerationPipeline {
    topics: Arc<dyn TopicSource>,
    directory: Arc<AuthorDirectory>,
    writer: ContentSynthesizer,
    allocator: SlugAllocator,
    store: Arc<dyn PostStore>,
    syndicator: Arc<dyn Syndicator>,
    publish_max_retries: u32,
}

impl GenerationPipeline {
    pub fn new(
        topics: Arc<dyn TopicSource>,
        directory: Arc<AuthorDirectory>,
        writer: ContentSynthesizer,
        allocator: SlugAllocator,
        store: Arc<dyn PostStore>,
        syndicator: Arc<dyn Syndicator>,
        publish_max_retries: u32,
    ) -> Self {
        Self {
            topics,
            directory,
            writer,
            allocator,
            store,
            syndicator,
            publish_max_retries,
        }
    }

    /// Run one generation: topic, author, draft, unique slug, persist,
    /// announce.
    pub async fn run_once<R: Rng + Send>(&self, rng: &mut R) -> Result<Post> {
        let topic = self.topics.random_topic().await?;
        let author = self.directory.random_ai_author(rng).await?;
        info!(topic = %topic.title, author = %author.name, "generating post");

        let draft = self.writer.write(&topic, &author).await?;
        let post = self.publish(draft, author.id).await?;
        info!(slug = %post.slug, "post published");

        self.syndicator.announce(&post).await;

        Ok(post)
    }

    /// Persist the draft under a unique slug. The allocator's scan is the
    /// fast path; when a concurrent run wins the same slug between scan and
    /// insert, the UNIQUE constraint rejects the write and we re-allocate.
    async fn publish(&self, draft: PostDraft, author_id: Uuid) -> Result<Post> {
        let mut conflicts: u32 = 0;

        loop {
            let slug = self.allocator.allocate(&draft.title).await?;
            let new = NewPost {
                title: draft.title.clone(),
                content: draft.content.clone(),
                summary: draft.summary.clone(),
                slug,
                categories: draft.categories.clone(),
                author_id,
            };

            match self.store.insert(&new).await {
                Ok(post) => return Ok(post),
                Err(AppError::Conflict(reason)) if conflicts < self.publish_max_retries => {
                    conflicts += 1;
                    warn!(conflicts, "slug conflict on insert, reallocating: {reason}");
                }
                Err(err) => return Err(err),
            }
        }
    }
}
