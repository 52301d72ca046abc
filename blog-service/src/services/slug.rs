//! Slug derivation and allocation.

use std::sync::Arc;

use crate::db::PostStore;
use crate::error::{AppError, Result};

/// Lowercase a title into a URL-safe slug: ASCII alphanumerics survive,
/// runs of whitespace and separators collapse into single dashes, anything
/// else is dropped.
pub fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut pending_dash = false;

    for ch in input.chars() {
        let lower = ch.to_ascii_lowercase();
        if lower.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(lower);
        } else if ch.is_whitespace() || ch == '-' || ch == '_' {
            pending_dash = true;
        }
    }

    slug
}

/// Allocates a unique slug for a post title.
///
/// The scan over `slug_exists` is only a fast path: two concurrent runs can
/// both see the same candidate as free. The database UNIQUE constraint is
/// the real guard; on insert conflict the publisher re-allocates. The scan
/// is capped so pathological collision patterns cannot loop forever.
pub struct SlugAllocator {
    store: Arc<dyn PostStore>,
    max_attempts: u32,
}

impl SlugAllocator {
    pub fn new(store: Arc<dyn PostStore>, max_attempts: u32) -> Self {
        Self {
            store,
            max_attempts,
        }
    }

    /// First free candidate among `base`, `base-1`, `base-2`, ...
    pub async fn allocate(&self, title: &str) -> Result<String> {
        let base = slugify(title);
        let base = if base.is_empty() {
            "post".to_string()
        } else {
            base
        };

        let mut candidate = base.clone();
        let mut counter: u32 = 1;

        while self.store.slug_exists(&candidate).await? {
            if counter > self.max_attempts {
                return Err(AppError::Conflict(format!(
                    "no free slug for '{base}' within {} candidates",
                    self.max_attempts
                )));
            }
            candidate = format!("{base}-{counter}");
            counter += 1;
        }

        Ok(candidate)
    }
}
