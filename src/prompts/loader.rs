//! Prompt loader
//!
//! Loads prompt templates from an override directory or falls back to
//! the embedded defaults, then renders them with Handlebars.

use std::path::{Path, PathBuf};

use eyre::{Result, eyre};
use handlebars::Handlebars;
use serde::Serialize;
use tracing::debug;

use super::embedded;

/// Context for rendering prompt templates
///
/// Empty strings render as the template's "nothing yet" fallbacks.
#[derive(Debug, Clone, Serialize)]
pub struct PromptContext {
    /// The user's free-text goal
    pub goal: String,
    /// Prior checklist lines from the session log
    pub existing_items: String,
    /// Listing of files currently in the host chat
    pub file_context: String,
}

impl PromptContext {
    pub fn new(goal: impl Into<String>, existing_items: impl Into<String>, file_context: impl Into<String>) -> Self {
        Self {
            goal: goal.into(),
            existing_items: existing_items.into(),
            file_context: file_context.into(),
        }
    }
}

/// Loads and renders prompt templates
pub struct PromptLoader {
    /// Handlebars template engine
    hbs: Handlebars<'static>,
    /// User override directory (e.g. `.planstorm/prompts/`)
    override_dir: Option<PathBuf>,
}

impl PromptLoader {
    /// Create a loader rooted at the project directory
    ///
    /// Override templates live in `<project>/.planstorm/prompts/<name>.pmt`.
    pub fn new(project_dir: impl AsRef<Path>) -> Self {
        let override_dir = project_dir.as_ref().join(".planstorm/prompts");
        Self {
            hbs: Handlebars::new(),
            override_dir: if override_dir.exists() { Some(override_dir) } else { None },
        }
    }

    /// Create a loader that only uses embedded templates
    pub fn embedded_only() -> Self {
        Self {
            hbs: Handlebars::new(),
            override_dir: None,
        }
    }

    /// Load a template by name, override file first, embedded fallback
    fn load_template(&self, name: &str) -> Result<String> {
        if let Some(ref dir) = self.override_dir {
            let path = dir.join(format!("{}.pmt", name));
            if path.exists() {
                debug!("loading prompt from override: {:?}", path);
                return std::fs::read_to_string(&path)
                    .map_err(|e| eyre!("Failed to read prompt override {}: {}", path.display(), e));
            }
        }

        if let Some(content) = embedded::get_embedded(name) {
            debug!("using embedded prompt: {}", name);
            return Ok(content.to_string());
        }

        Err(eyre!("Prompt template not found: {}", name))
    }

    /// Render a template with the given context
    pub fn render(&self, template_name: &str, context: &PromptContext) -> Result<String> {
        let template = self.load_template(template_name)?;

        self.hbs
            .render_template(&template, context)
            .map_err(|e| eyre!("Failed to render template {}: {}", template_name, e))
    }
}
