//! Session log error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while touching a session log file
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Failed to create session directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write session log {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read session log {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
