//! ChecklistAgent - the brainstorm/plan session flow
//!
//! One component covers both agents. A [`SessionProfile`] selects the
//! log file, header wording, checklist prefix, and whether host
//! replies are mined for items and confirmed with the user before
//! being persisted.
//!
//! Failure policy at this boundary: every failure is reported through
//! [`HostUi`] and the operation returns a plain outcome. Nothing here
//! panics or propagates an error into the host process.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{info, warn};

use crate::host::{Coder, HostUi, last_assistant};
use crate::prompts::{PromptContext, PromptLoader};

use super::extract::extract_items;
use super::log::{SessionLog, timestamp};

/// Configuration of one checklist session variant
#[derive(Debug, Clone)]
pub struct SessionProfile {
    /// Display name used in host-facing messages ("Brainstorm", "Planning")
    pub display: String,

    /// Prompt template name
    pub template: String,

    /// Session log file path, relative to the project directory
    pub log_path: PathBuf,

    /// Log title line
    pub title: String,

    /// Log section header label
    pub section_label: String,

    /// Checklist line prefix
    pub item_prefix: String,

    /// Mine the host reply for checklist items after a run
    pub extract_items: bool,

    /// Ask the user before persisting each extracted item
    pub confirm_items: bool,
}

impl SessionProfile {
    /// The brainstorm variant: `- [ ] Idea:` lines, extraction and
    /// per-item confirmation on.
    pub fn brainstorm() -> Self {
        Self {
            display: "Brainstorm".to_string(),
            template: "brainstorm".to_string(),
            log_path: PathBuf::from(".aider/brainstorm/history.md"),
            title: "Brainstorm Session History".to_string(),
            section_label: "Session".to_string(),
            item_prefix: "- [ ] Idea:".to_string(),
            extract_items: true,
            confirm_items: true,
        }
    }

    /// The plan variant: bare `- [ ]` bullets, no extraction by
    /// default (the reply stays in the host conversation only).
    pub fn plan() -> Self {
        Self {
            display: "Planning".to_string(),
            template: "plan".to_string(),
            log_path: PathBuf::from(".aider/plans/history.md"),
            title: "Project Plan History".to_string(),
            section_label: "Version".to_string(),
            item_prefix: "- [ ]".to_string(),
            extract_items: false,
            confirm_items: false,
        }
    }
}

/// Outcome of one `run` invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The operation stopped before or at the coder call; the reason
    /// was reported through the host UI.
    Aborted,
    /// The prompt was submitted and extraction is disabled for this
    /// profile; the reply lives in the host conversation.
    Submitted,
    /// The reply contained no checklist lines (reported as a warning).
    NothingExtracted,
    /// Items were extracted and processed.
    Completed { accepted: usize, declined: usize },
}

/// Drives a checklist session against a host coder
pub struct ChecklistAgent {
    profile: SessionProfile,
    log: SessionLog,
    prompts: PromptLoader,
    ui: Arc<dyn HostUi>,
}

impl ChecklistAgent {
    /// Create an agent from an explicit profile
    pub fn new(profile: SessionProfile, prompts: PromptLoader, ui: Arc<dyn HostUi>) -> Self {
        let log = SessionLog::new(
            profile.log_path.clone(),
            profile.title.clone(),
            profile.section_label.clone(),
            profile.item_prefix.clone(),
        );
        Self {
            profile,
            log,
            prompts,
            ui,
        }
    }

    /// Brainstorm agent with default profile, rooted at the current directory
    pub fn brainstorm(ui: Arc<dyn HostUi>) -> Self {
        Self::new(SessionProfile::brainstorm(), PromptLoader::new("."), ui)
    }

    /// Plan agent with default profile, rooted at the current directory
    pub fn plan(ui: Arc<dyn HostUi>) -> Self {
        Self::new(SessionProfile::plan(), PromptLoader::new("."), ui)
    }

    /// The underlying session log
    pub fn log(&self) -> &SessionLog {
        &self.log
    }

    /// The profile this agent runs with
    pub fn profile(&self) -> &SessionProfile {
        &self.profile
    }

    /// Ensure the session log exists and announce the session
    ///
    /// Idempotent for file content; the status message is emitted on
    /// every call.
    pub fn start_session(&self) -> bool {
        // One timestamp for both the header and the announcement
        let now = timestamp();
        match self.log.ensure_started_at(&now) {
            Ok(_) => {
                self.ui
                    .info(&format!("{} session started at {}", self.profile.display, now));
                true
            }
            Err(e) => {
                self.ui.error(&format!(
                    "Error starting {} session: {}",
                    self.profile.display.to_lowercase(),
                    e
                ));
                false
            }
        }
    }

    /// Append one item to the session log
    pub fn add_item(&self, text: &str) -> bool {
        match self.log.append(text) {
            Ok(()) => true,
            Err(e) => {
                self.ui.error(&format!("Error adding session item: {}", e));
                false
            }
        }
    }

    /// Prior checklist lines from the log, `None` when there are none
    ///
    /// Read errors are reported and treated as an absent log.
    pub fn session_content(&self) -> Option<String> {
        match self.log.read_items() {
            Ok(content) => content,
            Err(e) => {
                self.ui.error(&format!("Error reading session log: {}", e));
                None
            }
        }
    }

    /// Render the full prompt that `run` would submit for a goal
    ///
    /// Prior items come from the session log (read errors reported and
    /// treated as absent); `files` stand in for the host's in-chat
    /// file listing.
    pub fn render_prompt(&self, goal: &str, files: &[PathBuf]) -> eyre::Result<String> {
        let existing_items = self.session_content().unwrap_or_default();
        let file_context = files
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join("\n");

        self.prompts.render(
            &self.profile.template,
            &PromptContext::new(goal, existing_items, file_context),
        )
    }

    /// Add a file to the host chat set
    ///
    /// The chat set is add-only from this side; files show up in the
    /// prompt's file context on the next run.
    pub fn add_file(&self, coder: &mut dyn Coder, path: PathBuf) {
        coder.add_open_file(path.clone());
        self.ui.info(&format!("Added {} to the chat", path.display()));
    }

    /// Run one prompt/response round against the host coder
    ///
    /// Builds the full prompt from the goal, prior items, and the
    /// host's in-chat file listing, submits it, and (when the profile
    /// asks for it) extracts, confirms, and persists checklist items
    /// from the reply.
    pub async fn run(&self, coder: &mut dyn Coder, prompt: &str) -> RunOutcome {
        if prompt.trim().is_empty() {
            self.ui.error(&format!(
                "Please provide a {} prompt",
                self.profile.display.to_lowercase()
            ));
            return RunOutcome::Aborted;
        }

        let files = coder.open_files();
        let full_prompt = match self.render_prompt(prompt, &files) {
            Ok(p) => p,
            Err(e) => {
                self.ui.error(&format!("Error building prompt: {}", e));
                return RunOutcome::Aborted;
            }
        };

        info!(agent = %self.profile.template, "submitting prompt to coder");
        if let Err(e) = coder.run(&full_prompt).await {
            self.ui.error(&format!("Coder call failed: {}", e));
            return RunOutcome::Aborted;
        }

        if !self.profile.extract_items {
            return RunOutcome::Submitted;
        }

        let messages = coder.messages();
        let Some(reply) = last_assistant(&messages) else {
            warn!(agent = %self.profile.template, "no assistant message after run");
            self.ui.warning("No assistant reply found");
            return RunOutcome::NothingExtracted;
        };

        let items = extract_items(&reply.content, &self.profile.item_prefix);
        if items.is_empty() {
            self.ui.warning("No checklist items found in the reply");
            return RunOutcome::NothingExtracted;
        }

        let mut accepted = 0;
        let mut declined = 0;
        for item in items {
            if self.profile.confirm_items && !self.ui.confirm(&format!("Add to session log? {}", item)) {
                declined += 1;
                continue;
            }
            if self.add_item(&item) {
                accepted += 1;
            }
        }

        self.ui.info(&format!(
            "Added {} item(s) to {}",
            accepted,
            self.log.path().display()
        ));
        RunOutcome::Completed { accepted, declined }
    }
}
