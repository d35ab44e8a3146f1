//! Coder and HostUi trait definitions
//!
//! The original design probed the host object for methods before each
//! call and degraded silently when one was missing. Here the required
//! capabilities are a compile-time contract: anything passed to an
//! agent must implement these traits in full.

use async_trait::async_trait;
use std::path::PathBuf;

use super::error::HostError;
use super::types::Message;

/// The external conversational coding agent
///
/// `run` is a blocking request/response: it returns once the host has
/// a reply, after which the updated conversation is readable through
/// `messages`. Cancellation and timeouts, if any, belong to the host.
#[async_trait]
pub trait Coder: Send {
    /// Submit a prompt and block until the host has replied
    async fn run(&mut self, prompt: &str) -> Result<(), HostError>;

    /// Ordered, role-tagged conversation history
    fn messages(&self) -> Vec<Message>;

    /// Files currently visible to the host, in chat order
    fn open_files(&self) -> Vec<PathBuf>;

    /// Add a file to the chat set (the set is add-only from this side)
    fn add_open_file(&mut self, path: PathBuf);
}

/// Host UI channel for user-visible output and confirmation
///
/// All calls are fire-and-forget from the agent's perspective.
pub trait HostUi: Send + Sync {
    /// Ask the user a yes/no question
    fn confirm(&self, question: &str) -> bool;

    /// Report an error to the user
    fn error(&self, message: &str);

    /// Report a warning to the user
    fn warning(&self, message: &str);

    /// Report an informational message to the user
    fn info(&self, message: &str);
}
