//! Topic sourcing.
//!
//! The pipeline only needs a topic title on demand; where topics come from
//! is not this service's concern. The shipped implementation samples a
//! configured list.

use async_trait::async_trait;
use rand::Rng;

use crate::error::{AppError, Result};
use crate::models::Topic;

#[async_trait]
pub trait TopicSource: Send + Sync {
    async fn random_topic(&self) -> Result<Topic>;
}

pub struct ConfiguredTopics {
    topics: Vec<String>,
}

impl ConfiguredTopics {
    pub fn new(topics: Vec<String>) -> Self {
        Self { topics }
    }
}

#[async_trait]
impl TopicSource for ConfiguredTopics {
    async fn random_topic(&self) -> Result<Topic> {
        if self.topics.is_empty() {
            return Err(AppError::EmptyPool("no topics configured"));
        }

        let index = rand::thread_rng().gen_range(0..self.topics.len());
        Ok(Topic {
            title: self.topics[index].clone(),
        })
    }
}
