//! Persona synthesizer - invents fictional AI authors.

use std::sync::Arc;

use rand::Rng;
use tracing::debug;

use crate::error::{AppError, Result};
use crate::llm::{ChatModel, ChatRequest};
use crate::models::{Author, NewAuthor, PersonaDraft};
use crate::services::authors::AuthorDirectory;
use crate::services::slug::slugify;

pub struct PersonaSynthesizer {
    model: Arc<dyn ChatModel>,
    model_name: String,
    directory: Arc<AuthorDirectory>,
}

impl PersonaSynthesizer {
    pub fn new(
        model: Arc<dyn ChatModel>,
        model_name: String,
        directory: Arc<AuthorDirectory>,
    ) -> Self {
        Self {
            model,
            model_name,
            directory,
        }
    }

    /// Invent and persist one AI persona. Name collisions with existing
    /// authors are avoided through the prompt only; the slug constraint in
    /// the store is the backstop.
    pub async fn generate<R: Rng + Send>(&self, rng: &mut R) -> Result<Author> {
        // Exclusion set needs fresh data, not a cached snapshot.
        let existing = self.directory.list_fresh().await?;
        let taken_names: Vec<String> = existing
            .iter()
            .map(|author| author.name.to_lowercase())
            .collect();

        let system =
            "You are an AI that generates fictional personas for blog authors.".to_string();

        let mut user = "Create a detailed fictional persona for an AI-generated blog author.\n\
             \n\
             The persona should include the following details:\n\
             - Name\n\
             - Writing Style (e.g., sarcastic, poetic, formal)\n\
             - Personality Traits (3-5 adjectives)\n\
             - Areas of Expertise (3-5 topics)\n\
             - A one-line author bio\n\
             - gender - male or female\n\
             \n\
             The response must be a JSON object with the following fields as an example -\n\
             {\n\
             \"name\": \"John Doe\",\n\
             \"writingStyle\": \"sarcastic\",\n\
             \"personalityTraits\": [\"witty\", \"humorous\", \"insightful\"],\n\
             \"areasOfExpertise\": [\"technology\", \"lifestyle\", \"travel\"],\n\
             \"authorBio\": \"John Doe is a tech enthusiast who loves to explore the world.\",\n\
             \"gender\": \"male\"\n\
             }\n\
             \n\
             The persona should be unique and engaging, suitable for a blog that covers a \
             variety of topics related to technology."
            .to_string();

        if !taken_names.is_empty() {
            user.push_str(&format!(
                "\nMake sure the name is not already taken by an existing author. \
                 The existing authors are {}.",
                taken_names.join(", ")
            ));
        }

        let raw = self
            .model
            .chat(ChatRequest {
                model: self.model_name.clone(),
                system,
                user,
                temperature: None,
            })
            .await?;

        let draft = parse_persona(&raw)?;
        debug!(name = %draft.name, "persona draft parsed");

        let new = NewAuthor {
            slug: slugify(&draft.name),
            profile_picture_url: profile_picture_url(&draft.gender, rng),
            creativity_level: random_creativity_level(rng),
            name: draft.name,
            email: None,
            writing_style: draft.writing_style,
            personality_traits: draft.personality_traits,
            areas_of_expertise: draft.areas_of_expertise,
            bio: draft.author_bio,
            is_human: false,
        };

        self.directory.create_generated(new).await
    }
}

fn parse_persona(raw: &str) -> Result<PersonaDraft> {
    let draft: PersonaDraft = serde_json::from_str(raw)
        .map_err(|e| AppError::MalformedGeneration(format!("persona draft: {e}")))?;

    if draft.name.trim().is_empty() {
        return Err(AppError::MalformedGeneration(
            "persona draft: empty name".to_string(),
        ));
    }

    Ok(draft)
}

/// Placeholder-avatar URL. "male" maps to the "men" category, anything else
/// to "women"; the index is uniform in [0, 49]. No validation that the URL
/// resolves.
fn profile_picture_url<R: Rng>(gender: &str, rng: &mut R) -> String {
    let category = if gender.eq_ignore_ascii_case("male") {
        "men"
    } else {
        "women"
    };
    let index = rng.gen_range(0..50);

    format!("https://randomuser.me/api/portraits/{category}/{index}.jpg")
}

/// Uniform draw from the eight creativity buckets {0.1, 0.2, ..., 0.8}.
fn random_creativity_level<R: Rng>(rng: &mut R) -> f64 {
    f64::from(rng.gen_range(0..8) + 1) / 10.0
}
