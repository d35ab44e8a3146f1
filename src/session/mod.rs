//! Checklist sessions
//!
//! One generic session component covers both agents: brainstorming and
//! planning differ only in log path, headers, item prefix, and whether
//! replies are mined for items and confirmed with the user. The
//! [`SessionProfile`] captures those knobs; [`ChecklistAgent`] runs the
//! flow against a host [`crate::host::Coder`].

mod agent;
mod error;
mod extract;
mod log;

pub use agent::{ChecklistAgent, RunOutcome, SessionProfile};
pub use error::SessionError;
pub use extract::extract_items;
pub use log::SessionLog;
