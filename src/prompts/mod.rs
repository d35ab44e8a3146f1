//! Prompt construction
//!
//! Templates are Handlebars documents rendered with the user's goal,
//! the prior checklist items, and the host's in-chat file listing.
//! Rendering is pure: identical inputs always produce identical
//! prompt strings.

mod embedded;
mod loader;

pub use loader::{PromptContext, PromptLoader};
