//! Blog generation service library.
//!
//! Invents fictional author personas, has an LLM write posts in their
//! voices, persists them under collision-safe slugs, and announces new
//! posts to a syndication endpoint. HTTP routing, page templates and
//! authentication live outside this crate and consume it through the
//! service types.
//!
//! # Modules
//!
//! - `cache`: in-process TTL cache for the author directory
//! - `config`: environment-sourced configuration
//! - `db`: store traits and PostgreSQL repositories
//! - `error`: error taxonomy and `Result` alias
//! - `jobs`: interval-scheduled generation loop
//! - `llm`: OpenAI-compatible chat-completions client
//! - `models`: persisted entities and LLM structured-output shapes
//! - `services`: author directory, synthesizers, slug allocation,
//!   publication reads, syndication, and the generation pipeline

pub mod cache;
pub mod config;
pub mod db;
pub mod error;
pub mod jobs;
pub mod llm;
pub mod models;
pub mod services;

pub use config::Config;
pub use error::{AppError, Result};
