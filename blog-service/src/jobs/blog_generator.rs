//! Scheduled blog generation job.
//!
//! Runs the generation pipeline on a fixed interval. This loop is the
//! orchestrator boundary from the error-handling contract: every failure is
//! reduced to a logged event and the next cycle proceeds, so overlapping or
//! repeated scheduling can never crash the host process.

use std::sync::Arc;
use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::time::sleep;
use tracing::{error, info, warn};

use crate::services::authors::AuthorDirectory;
use crate::services::persona::PersonaSynthesizer;
use crate::services::pipeline::GenerationPipeline;

pub async fn start_blog_generator(
    pipeline: Arc<GenerationPipeline>,
    personas: Arc<PersonaSynthesizer>,
    directory: Arc<AuthorDirectory>,
    interval: Duration,
    min_authors: usize,
) {
    info!(
        interval_secs = interval.as_secs(),
        min_authors, "starting blog generator background job"
    );

    loop {
        sleep(interval).await;

        let cycle_start = Instant::now();
        let mut rng = StdRng::from_entropy();

        seed_author_pool(&personas, &directory, min_authors, &mut rng).await;

        match pipeline.run_once(&mut rng).await {
            Ok(post) => {
                info!(
                    slug = %post.slug,
                    duration_ms = cycle_start.elapsed().as_millis(),
                    "generation cycle published post"
                );
            }
            Err(e) => {
                error!(
                    error = %e,
                    duration_ms = cycle_start.elapsed().as_millis(),
                    "generation cycle failed"
                );
            }
        }
    }
}

/// Top the AI author pool up to the configured minimum so a fresh deployment
/// does not starve on an empty pool. Seeding failures are logged; the
/// generation attempt still runs against whatever pool exists.
async fn seed_author_pool(
    personas: &PersonaSynthesizer,
    directory: &AuthorDirectory,
    min_authors: usize,
    rng: &mut StdRng,
) {
    let current = match directory.ai_pool_size().await {
        Ok(count) => count,
        Err(e) => {
            warn!(error = %e, "could not check author pool size");
            return;
        }
    };

    for _ in current..min_authors {
        match personas.generate(rng).await {
            Ok(author) => info!(name = %author.name, "seeded new author persona"),
            Err(e) => {
                warn!(error = %e, "author seeding failed");
                break;
            }
        }
    }
}
