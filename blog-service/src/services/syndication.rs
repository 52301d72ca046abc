//! Syndication notifier - announces published posts to an external
//! automation endpoint.
//!
//! Strictly fire-and-forget: the announcement happens after persistence,
//! failures are logged and swallowed, and nothing is retried. The endpoint's
//! replay behavior is unknown, so there is deliberately no at-least-once
//! upgrade here.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::SyndicationConfig;
use crate::error::{AppError, Result};
use crate::models::Post;

#[async_trait]
pub trait Syndicator: Send + Sync {
    /// Announce a freshly persisted post. Must never fail the caller.
    async fn announce(&self, post: &Post);
}

#[derive(Debug, Serialize)]
struct Announcement<'a> {
    title: &'a str,
    categories: &'a [String],
    summary: &'a str,
    slug: &'a str,
}

pub struct WebhookNotifier {
    client: Client,
    webhook_url: Option<String>,
}

impl WebhookNotifier {
    pub fn new(config: &SyndicationConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            webhook_url: config.webhook_url.clone(),
        })
    }

    async fn send(&self, url: &str, post: &Post) -> Result<()> {
        let announcement = Announcement {
            title: &post.title,
            categories: &post.categories,
            summary: &post.summary,
            slug: &post.slug,
        };

        let response = self
            .client
            .post(url)
            .json(&announcement)
            .send()
            .await
            .map_err(|e| AppError::Syndication(format!("request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Syndication(format!(
                "endpoint returned {status}"
            )));
        }

        Ok(())
    }
}

#[async_trait]
impl Syndicator for WebhookNotifier {
    async fn announce(&self, post: &Post) {
        let Some(url) = self.webhook_url.as_deref() else {
            debug!(slug = %post.slug, "syndication disabled, skipping announcement");
            return;
        };

        match self.send(url, post).await {
            Ok(()) => debug!(slug = %post.slug, "post announced"),
            Err(err) => warn!(slug = %post.slug, "syndication failed: {err}"),
        }
    }
}
