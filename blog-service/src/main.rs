use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use sqlx::postgres::PgPoolOptions;
use tracing::info;
use tracing_subscriber::EnvFilter;

use blog_service::config::Config;
use blog_service::db::{AuthorStore, PgAuthorStore, PgPostStore, PostStore};
use blog_service::jobs::blog_generator::start_blog_generator;
use blog_service::llm::{ChatModel, OpenAiClient, OpenAiConfig};
use blog_service::services::{
    AuthorDirectory, ConfiguredTopics, ContentSynthesizer, GenerationPipeline,
    PersonaSynthesizer, SlugAllocator, Syndicator, TopicSource, WebhookNotifier,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;

    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .acquire_timeout(Duration::from_secs(config.database.acquire_timeout_secs))
        .connect(&config.database.url)
        .await
        .context("failed to connect to PostgreSQL")?;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("failed to run migrations")?;

    let author_store: Arc<dyn AuthorStore> = Arc::new(PgAuthorStore::new(pool.clone()));
    let post_store: Arc<dyn PostStore> = Arc::new(PgPostStore::new(pool.clone()));

    let directory = Arc::new(AuthorDirectory::new(
        author_store,
        Duration::from_secs(config.generator.author_cache_ttl_secs),
    ));

    let chat: Arc<dyn ChatModel> = Arc::new(OpenAiClient::new(OpenAiConfig {
        base_url: config.llm.base_url.clone(),
        api_key: config.llm.api_key.clone(),
        timeout_secs: config.llm.timeout_secs,
    })?);

    let personas = Arc::new(PersonaSynthesizer::new(
        chat.clone(),
        config.llm.persona_model.clone(),
        directory.clone(),
    ));
    let writer = ContentSynthesizer::new(chat, config.llm.writer_model.clone());

    let allocator = SlugAllocator::new(post_store.clone(), config.generator.slug_max_attempts);
    let topics: Arc<dyn TopicSource> =
        Arc::new(ConfiguredTopics::new(config.generator.topics.clone()));
    let syndicator: Arc<dyn Syndicator> = Arc::new(WebhookNotifier::new(&config.syndication)?);

    let pipeline = Arc::new(GenerationPipeline::new(
        topics,
        directory.clone(),
        writer,
        allocator,
        post_store,
        syndicator,
        config.generator.publish_max_retries,
    ));

    tokio::spawn(start_blog_generator(
        pipeline,
        personas,
        directory,
        Duration::from_secs(config.generator.interval_secs),
        config.generator.min_authors,
    ));

    info!("blog-service started");

    tokio::signal::ctrl_c()
        .await
        .context("failed to listen for shutdown signal")?;
    info!("shutting down");

    Ok(())
}
