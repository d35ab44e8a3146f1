//! Host error types

use thiserror::Error;

/// Errors surfaced by the host collaborator
#[derive(Debug, Error)]
pub enum HostError {
    #[error("Coder run failed: {0}")]
    RunFailed(String),

    #[error("Coder is unavailable: {0}")]
    Unavailable(String),
}
