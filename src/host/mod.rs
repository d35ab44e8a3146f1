//! Host collaborator boundary
//!
//! The host is the conversational coding agent that owns model
//! invocation, conversation history, and the set of files in chat.
//! This crate never implements the model side; it talks to the host
//! through the [`Coder`] and [`HostUi`] traits.

mod console;
mod error;
mod traits;
mod types;

pub use console::ConsoleUi;
pub use error::HostError;
pub use traits::{Coder, HostUi};
pub use types::{Message, Role, last_assistant};
