//! planstorm - checklist session agents for AI pair-programming hosts
//!
//! Two thin session-tracking agents, brainstorm and plan, that append
//! markdown checklist items to an append-only session log and build
//! prompt strings for an externally-owned conversational coder. All
//! substantive work happens on the host side; this crate only
//! persists and reformats text the host supplies.
//!
//! # Core Concepts
//!
//! - **Append-only logs**: session files gain a header once and grow
//!   monotonically; nothing here rewrites or reorders them
//! - **Host owns the model**: the coder is reached through the
//!   [`host::Coder`] trait; this crate never invokes a model itself
//! - **One agent, two profiles**: brainstorm and plan are the same
//!   flow under different [`session::SessionProfile`] settings
//!
//! # Modules
//!
//! - [`session`] - session log, reply extraction, and the agent flow
//! - [`prompts`] - Handlebars prompt templates and rendering
//! - [`host`] - collaborator traits and message types
//! - [`config`] - configuration types and loading
//! - [`cli`] - command-line interface
//!
//! # Known limitation
//!
//! Appends are plain unlocked writes; concurrent invocations against
//! the same log path may interleave.

pub mod cli;
pub mod config;
pub mod host;
pub mod prompts;
pub mod session;

// Re-export commonly used types
pub use config::{BrainstormConfig, Config, PlanConfig};
pub use host::{Coder, ConsoleUi, HostError, HostUi, Message, Role, last_assistant};
pub use prompts::{PromptContext, PromptLoader};
pub use session::{ChecklistAgent, RunOutcome, SessionError, SessionLog, SessionProfile, extract_items};
