//! Generation pipelines: prompt, remote call, parse, validate, fall back.
//!
//! Each pipeline is a three-tier resolution tried in order: the primary
//! generate-and-validate path, a lenient secondary generation with a lower
//! acceptance bar, and static literal content. Every tier either produces
//! a usable collection or passes to the next, so a pipeline never fails —
//! quality degrades, availability does not.
//!
//! The distinction the HTTP layer cares about is carried by [`Resolved`]:
//! content produced without a primary remote error (even if validation
//! pushed it onto fallback content) versus content substituted after the
//! remote call itself failed.

pub mod images;
pub mod questions;
pub mod quotes;

pub use images::{
    generate_goal_images, generate_goal_images_parallel, with_size_guidance, GeneratedImage,
};
pub use questions::generate_questions;
pub use quotes::{generate_individual_quotes, generate_themed_quotes, generate_vision_quotes};

/// Outcome of a resolution pipeline.
///
/// `Generated` content may still be fallback material (validation failures
/// resolve within the pipeline); `Fallback` means the primary remote call
/// errored and carries the error message for the response body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolved<T> {
    /// Produced without a primary remote error.
    Generated(T),
    /// Substituted after the primary remote call failed.
    Fallback { content: T, error: String },
}

impl<T> Resolved<T> {
    /// The content regardless of how it was resolved.
    pub fn content(&self) -> &T {
        match self {
            Resolved::Generated(content) => content,
            Resolved::Fallback { content, .. } => content,
        }
    }

    /// True when the primary remote call succeeded.
    pub fn is_generated(&self) -> bool {
        matches!(self, Resolved::Generated(_))
    }
}
