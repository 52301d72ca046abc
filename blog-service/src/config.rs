//! Configuration management for the blog service.
//!
//! All configuration is environment-sourced; `.env` loading happens in the
//! binary before `Config::from_env` runs.

use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Database configuration
    pub database: DatabaseConfig,
    /// LLM API configuration
    pub llm: LlmConfig,
    /// Syndication webhook configuration
    pub syndication: SyndicationConfig,
    /// Generation pipeline configuration
    pub generator: GeneratorConfig,
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// PostgreSQL connection URL
    pub url: String,
    /// Max connections in pool
    pub max_connections: u32,
    /// Pool acquire timeout in seconds
    pub acquire_timeout_secs: u64,
}

/// LLM API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// OpenAI-compatible API base URL
    pub base_url: String,
    /// API key, sent as a Bearer token when non-empty
    pub api_key: String,
    /// Model used for post content generation
    pub writer_model: String,
    /// Model used for persona generation
    pub persona_model: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

/// Syndication webhook configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyndicationConfig {
    /// Webhook endpoint; announcements are skipped when unset
    pub webhook_url: Option<String>,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

/// Generation pipeline configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Seconds between scheduled generation runs
    pub interval_secs: u64,
    /// AI author pool is seeded up to this size before a run
    pub min_authors: usize,
    /// Author directory cache TTL in seconds
    pub author_cache_ttl_secs: u64,
    /// Cap on slug candidates scanned per allocation
    pub slug_max_attempts: u32,
    /// Cap on insert retries after slug conflicts
    pub publish_max_retries: u32,
    /// Topic pool for generation runs
    pub topics: Vec<String>,
}

const DEFAULT_TOPICS: &[&str] = &[
    "artificial intelligence",
    "cloud computing",
    "cybersecurity",
    "web development",
    "open source software",
];

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, String> {
        Ok(Config {
            database: DatabaseConfig {
                url: std::env::var("DATABASE_URL")
                    .map_err(|_| "DATABASE_URL environment variable not set".to_string())?,
                max_connections: env_or("DATABASE_MAX_CONNECTIONS", 10),
                acquire_timeout_secs: env_or("DATABASE_ACQUIRE_TIMEOUT_SECS", 10),
            },
            llm: LlmConfig {
                base_url: std::env::var("OPENAI_BASE_URL")
                    .unwrap_or_else(|_| "https://api.openai.com/v1".to_string()),
                api_key: std::env::var("OPENAI_API_KEY")
                    .map_err(|_| "OPENAI_API_KEY environment variable not set".to_string())?,
                writer_model: std::env::var("LLM_WRITER_MODEL")
                    .unwrap_or_else(|_| "gpt-4.1-nano".to_string()),
                persona_model: std::env::var("LLM_PERSONA_MODEL")
                    .unwrap_or_else(|_| "gpt-3.5-turbo".to_string()),
                timeout_secs: env_or("LLM_TIMEOUT_SECS", 120),
            },
            syndication: SyndicationConfig {
                webhook_url: std::env::var("SYNDICATION_WEBHOOK_URL").ok(),
                timeout_secs: env_or("SYNDICATION_TIMEOUT_SECS", 10),
            },
            generator: GeneratorConfig {
                interval_secs: env_or("GENERATOR_INTERVAL_SECS", 6 * 60 * 60),
                min_authors: env_or("GENERATOR_MIN_AUTHORS", 3),
                author_cache_ttl_secs: env_or("AUTHOR_CACHE_TTL_SECS", 21_600),
                slug_max_attempts: env_or("SLUG_MAX_ATTEMPTS", 50),
                publish_max_retries: env_or("PUBLISH_MAX_RETRIES", 5),
                topics: std::env::var("BLOG_TOPICS")
                    .map(|raw| parse_topics(&raw))
                    .unwrap_or_else(|_| {
                        DEFAULT_TOPICS.iter().map(|t| t.to_string()).collect()
                    }),
            },
        })
    }
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn parse_topics(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect()
}
