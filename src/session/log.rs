//! SessionLog - append-only markdown checklist file
//!
//! A session log is a markdown file with a title and section header
//! written once on creation, followed by checklist lines in append
//! order. The file is never rewritten or reordered. Concurrent writers
//! against the same path are not supported; appends are plain
//! unlocked writes.

use std::fs::{self, OpenOptions};
use std::io::Write as IoWrite;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::error::SessionError;

/// Append-only checklist session log
#[derive(Debug, Clone)]
pub struct SessionLog {
    /// Log file path, injected at construction
    path: PathBuf,

    /// Title line written on first use (`# <title>`)
    title: String,

    /// Section header label (`## <label> 1 - <timestamp>`)
    section_label: String,

    /// Checklist line prefix, e.g. `- [ ] Idea:` or `- [ ]`
    item_prefix: String,
}

impl SessionLog {
    /// Create a session log handle (no file I/O happens here)
    pub fn new(
        path: impl Into<PathBuf>,
        title: impl Into<String>,
        section_label: impl Into<String>,
        item_prefix: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            title: title.into(),
            section_label: section_label.into(),
            item_prefix: item_prefix.into(),
        }
    }

    /// Log file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Checklist line prefix
    pub fn item_prefix(&self) -> &str {
        &self.item_prefix
    }

    /// Ensure the log file exists, writing the header on first use
    ///
    /// Returns `true` if the file was created, `false` if it already
    /// existed. The header is written at most once; calling this again
    /// never duplicates it.
    pub fn ensure_started(&self) -> Result<bool, SessionError> {
        self.ensure_started_at(&timestamp())
    }

    /// Like `ensure_started`, with an explicit header timestamp
    ///
    /// Lets callers announce the same timestamp that lands in the
    /// header instead of computing a second one.
    pub fn ensure_started_at(&self, timestamp: &str) -> Result<bool, SessionError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| SessionError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        if self.path.exists() {
            debug!(path = %self.path.display(), "session log already exists");
            return Ok(false);
        }

        let header = format!("# {}\n\n## {} 1 - {}\n", self.title, self.section_label, timestamp);
        fs::write(&self.path, header).map_err(|source| SessionError::Write {
            path: self.path.clone(),
            source,
        })?;

        debug!(path = %self.path.display(), "session log created");
        Ok(true)
    }

    /// Append one checklist item as `<prefix> <text>\n`
    ///
    /// Creates the file (with header) first if it is absent.
    pub fn append(&self, text: &str) -> Result<(), SessionError> {
        if !self.path.exists() {
            self.ensure_started()?;
        }

        let mut file = OpenOptions::new()
            .append(true)
            .open(&self.path)
            .map_err(|source| SessionError::Write {
                path: self.path.clone(),
                source,
            })?;

        writeln!(file, "{} {}", self.item_prefix, text).map_err(|source| SessionError::Write {
            path: self.path.clone(),
            source,
        })?;

        debug!(path = %self.path.display(), "appended checklist item");
        Ok(())
    }

    /// Read the full log contents, `None` if the file does not exist
    ///
    /// Reading never creates the file.
    pub fn read(&self) -> Result<Option<String>, SessionError> {
        if !self.path.exists() {
            return Ok(None);
        }

        fs::read_to_string(&self.path)
            .map(Some)
            .map_err(|source| SessionError::Read {
                path: self.path.clone(),
                source,
            })
    }

    /// Read only the checklist lines, joined with newlines
    ///
    /// Lines are retained when their trimmed form starts with the item
    /// prefix. Returns `None` if the file is absent or no line matches,
    /// so headers and prose never feed back into prompts.
    pub fn read_items(&self) -> Result<Option<String>, SessionError> {
        let Some(content) = self.read()? else {
            return Ok(None);
        };

        let items: Vec<&str> = content
            .lines()
            .filter(|line| line.trim_start().starts_with(&self.item_prefix))
            .collect();

        if items.is_empty() {
            Ok(None)
        } else {
            Ok(Some(items.join("\n")))
        }
    }
}

/// Session header timestamp, local time
pub(crate) fn timestamp() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}
