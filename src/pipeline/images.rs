//! Bulk image generation over per-goal prompt records.
//!
//! Two policies over the same contract: sequential (one remote call at a
//! time, kind to upstream rate limits) and parallel (all at once behind a
//! semaphore cap). Both return exactly one slot per input record, `None`
//! where generation failed, and report progress as a percentage after each
//! completion.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use futures::future::join_all;
use serde::Serialize;
use tokio::sync::Semaphore;

use crate::llm::{GenerativeProvider, InlineImage};
use crate::prompts::tables::size_guidance;
use crate::prompts::types::{GoalId, GoalPrompt};

/// Cap on in-flight remote calls for the parallel policy.
pub const MAX_PARALLEL_IMAGES: usize = 4;

/// Progress callback, invoked with a 0-100 percentage after each
/// completed (or failed) item.
pub type ProgressFn<'a> = dyn Fn(f64) + Send + Sync + 'a;

/// One generated board image, tied back to its goal.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedImage {
    pub goal_id: GoalId,
    pub image: InlineImage,
    /// Display quote carried alongside, never rendered into the pixels.
    pub quote: String,
}

/// Append the board-size orientation guidance after a blank line.
pub fn with_size_guidance(prompt: &str, size: &str) -> String {
    format!("{}\n\n{}", prompt, size_guidance(size))
}

async fn generate_one(
    provider: &dyn GenerativeProvider,
    model: &str,
    record: &GoalPrompt,
    size: &str,
) -> Option<GeneratedImage> {
    let prompt = with_size_guidance(&record.prompt, size);
    match provider.generate_image(model, &prompt).await {
        Ok(image) => Some(GeneratedImage {
            goal_id: record.goal_id.clone(),
            image,
            quote: record.quote.clone(),
        }),
        Err(error) => {
            tracing::error!(%error, goal_id = %record.goal_id, "Image generation failed");
            None
        }
    }
}

/// Generate goal images one at a time.
///
/// The slow, rate-limit-friendly policy: each remote call completes before
/// the next is issued, and `on_progress` fires with
/// `(completed / total) * 100` after every item, failed ones included.
pub async fn generate_goal_images(
    provider: &dyn GenerativeProvider,
    model: &str,
    records: &[GoalPrompt],
    size: &str,
    on_progress: &ProgressFn<'_>,
) -> Vec<Option<GeneratedImage>> {
    let total = records.len();
    let mut results = Vec::with_capacity(total);

    for (completed, record) in records.iter().enumerate() {
        results.push(generate_one(provider, model, record, size).await);
        on_progress(((completed + 1) as f64 / total as f64) * 100.0);
    }

    results
}

/// Generate goal images concurrently, capped by a semaphore.
///
/// Faster than the sequential policy but more likely to trip upstream rate
/// limits. Output order matches input order regardless of completion
/// order; progress fires per completion.
pub async fn generate_goal_images_parallel(
    provider: &dyn GenerativeProvider,
    model: &str,
    records: &[GoalPrompt],
    size: &str,
    on_progress: &ProgressFn<'_>,
) -> Vec<Option<GeneratedImage>> {
    let total = records.len();
    let semaphore = Arc::new(Semaphore::new(MAX_PARALLEL_IMAGES));
    let completed = AtomicUsize::new(0);

    let tasks = records.iter().map(|record| {
        let semaphore = Arc::clone(&semaphore);
        let completed = &completed;
        async move {
            // Semaphore closed is unreachable; treat it as a skipped slot.
            let Ok(_permit) = semaphore.acquire().await else {
                return None;
            };
            let result = generate_one(provider, model, record, size).await;
            let done = completed.fetch_add(1, Ordering::Relaxed) + 1;
            on_progress((done as f64 / total as f64) * 100.0);
            result
        }
    });

    join_all(tasks).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_guidance_appended_after_blank_line() {
        let prompt = with_size_guidance("A mountain at dawn.", "mobile");
        assert!(prompt.starts_with("A mountain at dawn.\n\n"));
        assert!(prompt.ends_with("suitable for a phone wallpaper."));
    }

    #[test]
    fn test_unknown_size_passes_through() {
        assert_eq!(
            with_size_guidance("A lake.", "square"),
            "A lake.\n\nsquare"
        );
    }
}
