//! Content synthesizer - drives the LLM to write one post in an author's
//! voice. Pure generation; persistence belongs to the pipeline.

use std::sync::Arc;

use tracing::debug;

use crate::error::{AppError, Result};
use crate::llm::{ChatModel, ChatRequest};
use crate::models::{Author, PostDraft, Topic};

pub struct ContentSynthesizer {
    model: Arc<dyn ChatModel>,
    model_name: String,
}

impl ContentSynthesizer {
    pub fn new(model: Arc<dyn ChatModel>, model_name: String) -> Self {
        Self { model, model_name }
    }

    /// Produce a structured post draft for the topic, voiced as the author.
    /// The author's creativity level is the sampling temperature.
    pub async fn write(&self, topic: &Topic, author: &Author) -> Result<PostDraft> {
        let system = format!(
            "You are a tech blog writer named {}. Your writing style is {}. \
             Your personality traits are {}. And you are an expert in areas like {}.",
            author.name,
            author.writing_style,
            author.personality_traits.join(", "),
            author.areas_of_expertise.join(", "),
        );

        let user = format!(
            "Write a blog post about a topic in technology related to {}.\n\
             \n\
             The response must be a JSON object with title, content, categories and summary properties.\n\
             The title should be a catchy title.\n\
             The content should be a well-structured blog post in markdown with headings and subheadings.\n\
             The blog should be informative and engaging, around 500 words.\n\
             The categories property should be an array of categories the blog belongs to.\n\
             The summary should be no more than 50 words.",
            topic.title,
        );

        debug!(topic = %topic.title, author = %author.name, "requesting post draft");

        let raw = self
            .model
            .chat(ChatRequest {
                model: self.model_name.clone(),
                system,
                user,
                temperature: Some(author.creativity_level as f32),
            })
            .await?;

        parse_draft(&raw)
    }
}

/// Parse and shape-check the completion text. A well-formed JSON document
/// with missing or mis-typed fields is just as malformed as non-JSON.
fn parse_draft(raw: &str) -> Result<PostDraft> {
    let draft: PostDraft = serde_json::from_str(raw)
        .map_err(|e| AppError::MalformedGeneration(format!("post draft: {e}")))?;

    if draft.title.trim().is_empty() {
        return Err(AppError::MalformedGeneration(
            "post draft: empty title".to_string(),
        ));
    }
    if draft.categories.is_empty() {
        return Err(AppError::MalformedGeneration(
            "post draft: empty categories".to_string(),
        ));
    }

    Ok(draft)
}
