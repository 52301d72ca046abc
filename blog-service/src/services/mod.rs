//! Business logic layer.

pub mod authors;
pub mod persona;
pub mod pipeline;
pub mod posts;
pub mod slug;
pub mod syndication;
pub mod topics;
pub mod writer;

pub use authors::AuthorDirectory;
pub use persona::PersonaSynthesizer;
pub use pipeline::GenerationPipeline;
pub use posts::PostService;
pub use slug::SlugAllocator;
pub use syndication::{Syndicator, WebhookNotifier};
pub use topics::{ConfiguredTopics, TopicSource};
pub use writer::ContentSynthesizer;
