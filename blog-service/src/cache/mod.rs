//! In-process caching for the author directory.

mod author_cache;

pub use author_cache::AuthorCache;
