//! Integration tests for the checklist session agents
//!
//! The host coder and UI are scripted fakes: the coder returns a
//! canned reply, the UI records everything reported to it and answers
//! confirmations from a script.

use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use planstorm::host::{Coder, HostError, HostUi, Message};
use planstorm::prompts::PromptLoader;
use planstorm::session::{ChecklistAgent, RunOutcome, SessionProfile};

/// Coder fake that replies with a fixed assistant message
struct ScriptedCoder {
    reply: Option<String>,
    fail: bool,
    files: Vec<PathBuf>,
    history: Vec<Message>,
    submitted: Vec<String>,
}

impl ScriptedCoder {
    fn replying(reply: &str) -> Self {
        Self {
            reply: Some(reply.to_string()),
            fail: false,
            files: Vec::new(),
            history: Vec::new(),
            submitted: Vec::new(),
        }
    }

    fn failing() -> Self {
        Self {
            reply: None,
            fail: true,
            files: Vec::new(),
            history: Vec::new(),
            submitted: Vec::new(),
        }
    }

    fn with_files(mut self, files: &[&str]) -> Self {
        self.files = files.iter().map(PathBuf::from).collect();
        self
    }
}

#[async_trait]
impl Coder for ScriptedCoder {
    async fn run(&mut self, prompt: &str) -> Result<(), HostError> {
        self.submitted.push(prompt.to_string());
        if self.fail {
            return Err(HostError::RunFailed("scripted failure".to_string()));
        }
        self.history.push(Message::user(prompt));
        if let Some(reply) = &self.reply {
            self.history.push(Message::assistant(reply.clone()));
        }
        Ok(())
    }

    fn messages(&self) -> Vec<Message> {
        self.history.clone()
    }

    fn open_files(&self) -> Vec<PathBuf> {
        self.files.clone()
    }

    fn add_open_file(&mut self, path: PathBuf) {
        self.files.push(path);
    }
}

/// HostUi fake that records reports and answers confirms from a script
#[derive(Default)]
struct RecordingUi {
    confirm_answers: Mutex<VecDeque<bool>>,
    questions: Mutex<Vec<String>>,
    errors: Mutex<Vec<String>>,
    warnings: Mutex<Vec<String>>,
    infos: Mutex<Vec<String>>,
}

impl RecordingUi {
    fn answering(answers: &[bool]) -> Arc<Self> {
        let ui = Self::default();
        *ui.confirm_answers.lock().unwrap() = answers.iter().copied().collect();
        Arc::new(ui)
    }

    fn errors(&self) -> Vec<String> {
        self.errors.lock().unwrap().clone()
    }

    fn warnings(&self) -> Vec<String> {
        self.warnings.lock().unwrap().clone()
    }
}

impl HostUi for RecordingUi {
    fn confirm(&self, question: &str) -> bool {
        self.questions.lock().unwrap().push(question.to_string());
        self.confirm_answers.lock().unwrap().pop_front().unwrap_or(true)
    }

    fn error(&self, message: &str) {
        self.errors.lock().unwrap().push(message.to_string());
    }

    fn warning(&self, message: &str) {
        self.warnings.lock().unwrap().push(message.to_string());
    }

    fn info(&self, message: &str) {
        self.infos.lock().unwrap().push(message.to_string());
    }
}

fn brainstorm_agent(dir: &Path, ui: Arc<RecordingUi>) -> ChecklistAgent {
    let mut profile = SessionProfile::brainstorm();
    profile.log_path = dir.join(".aider/brainstorm/history.md");
    ChecklistAgent::new(profile, PromptLoader::embedded_only(), ui)
}

fn plan_agent(dir: &Path, ui: Arc<RecordingUi>) -> ChecklistAgent {
    let mut profile = SessionProfile::plan();
    profile.log_path = dir.join(".aider/plans/history.md");
    ChecklistAgent::new(profile, PromptLoader::embedded_only(), ui)
}

#[tokio::test]
async fn test_brainstorm_appends_confirmed_ideas() {
    let temp = tempfile::tempdir().unwrap();
    let ui = RecordingUi::answering(&[true, true]);
    let agent = brainstorm_agent(temp.path(), ui.clone());

    let mut coder = ScriptedCoder::replying(
        "- [ ] Idea: Add caching\nSome commentary\n- [ ] Idea: Improve logging",
    );

    let outcome = agent.run(&mut coder, "make it faster").await;
    assert_eq!(outcome, RunOutcome::Completed { accepted: 2, declined: 0 });

    let content = fs::read_to_string(agent.log().path()).unwrap();
    assert!(content.starts_with("# Brainstorm Session History"));
    let items: Vec<&str> = content.lines().filter(|l| l.starts_with("- [ ] Idea:")).collect();
    assert_eq!(items, vec!["- [ ] Idea: Add caching", "- [ ] Idea: Improve logging"]);
}

#[tokio::test]
async fn test_blank_ideas_are_dropped() {
    let temp = tempfile::tempdir().unwrap();
    let ui = RecordingUi::answering(&[]);
    let agent = brainstorm_agent(temp.path(), ui);

    let mut coder = ScriptedCoder::replying(
        "- [ ] Idea: Add caching\nNot an idea\n- [ ] Idea:   \n- [ ] Idea: Improve logging",
    );

    let outcome = agent.run(&mut coder, "robustness").await;
    assert_eq!(outcome, RunOutcome::Completed { accepted: 2, declined: 0 });

    let content = fs::read_to_string(agent.log().path()).unwrap();
    assert!(content.contains("- [ ] Idea: Add caching\n"));
    assert!(content.contains("- [ ] Idea: Improve logging\n"));
    // The blank one never made it in
    assert_eq!(content.matches("- [ ] Idea:").count(), 2);
}

#[tokio::test]
async fn test_confirmation_gating() {
    let temp = tempfile::tempdir().unwrap();
    let ui = RecordingUi::answering(&[true, false, true]);
    let agent = brainstorm_agent(temp.path(), ui.clone());

    let mut coder =
        ScriptedCoder::replying("- [ ] Idea: keep me\n- [ ] Idea: skip me\n- [ ] Idea: keep me too");

    let outcome = agent.run(&mut coder, "prompt").await;
    assert_eq!(outcome, RunOutcome::Completed { accepted: 2, declined: 1 });

    let content = fs::read_to_string(agent.log().path()).unwrap();
    assert!(content.contains("keep me"));
    assert!(content.contains("keep me too"));
    assert!(!content.contains("skip me"));
    assert_eq!(ui.questions.lock().unwrap().len(), 3);
}

#[tokio::test]
async fn test_empty_prompt_guard() {
    let temp = tempfile::tempdir().unwrap();
    let ui = RecordingUi::answering(&[]);
    let agent = brainstorm_agent(temp.path(), ui.clone());

    let mut coder = ScriptedCoder::replying("- [ ] Idea: never seen");

    assert_eq!(agent.run(&mut coder, "").await, RunOutcome::Aborted);
    assert_eq!(agent.run(&mut coder, "   ").await, RunOutcome::Aborted);

    // No coder call, no file writes
    assert!(coder.submitted.is_empty());
    assert!(!agent.log().path().exists());
    assert_eq!(ui.errors().len(), 2);
}

#[tokio::test]
async fn test_coder_failure_aborts() {
    let temp = tempfile::tempdir().unwrap();
    let ui = RecordingUi::answering(&[]);
    let agent = brainstorm_agent(temp.path(), ui.clone());

    let mut coder = ScriptedCoder::failing();

    let outcome = agent.run(&mut coder, "prompt").await;
    assert_eq!(outcome, RunOutcome::Aborted);
    assert!(!agent.log().path().exists());
    assert!(ui.errors().iter().any(|e| e.contains("scripted failure")));
}

#[tokio::test]
async fn test_no_matching_lines_warns() {
    let temp = tempfile::tempdir().unwrap();
    let ui = RecordingUi::answering(&[]);
    let agent = brainstorm_agent(temp.path(), ui.clone());

    let mut coder = ScriptedCoder::replying("Here are my thoughts, in prose.");

    let outcome = agent.run(&mut coder, "prompt").await;
    assert_eq!(outcome, RunOutcome::NothingExtracted);
    assert!(!agent.log().path().exists());
    assert_eq!(ui.warnings().len(), 1);
}

#[tokio::test]
async fn test_prior_items_feed_back_without_headers() {
    let temp = tempfile::tempdir().unwrap();
    let ui = RecordingUi::answering(&[]);
    let agent = brainstorm_agent(temp.path(), ui);

    assert!(agent.add_item("Lazy-load config"));

    let mut coder = ScriptedCoder::replying("- [ ] Idea: something new").with_files(&["src/main.rs"]);
    agent.run(&mut coder, "startup time").await;

    let submitted = &coder.submitted[0];
    assert!(submitted.contains("- [ ] Idea: Lazy-load config"));
    assert!(submitted.contains("src/main.rs"));
    // Only checklist lines feed back, never the log header
    assert!(!submitted.contains("# Brainstorm Session History"));
}

#[tokio::test]
async fn test_add_file_reaches_prompt_context() {
    let temp = tempfile::tempdir().unwrap();
    let ui = RecordingUi::answering(&[]);
    let agent = brainstorm_agent(temp.path(), ui);

    let mut coder = ScriptedCoder::replying("- [ ] Idea: anything");
    agent.add_file(&mut coder, PathBuf::from("src/lib.rs"));
    agent.run(&mut coder, "context check").await;

    assert!(coder.submitted[0].contains("src/lib.rs"));
}

#[tokio::test]
async fn test_plan_run_submits_without_extraction() {
    let temp = tempfile::tempdir().unwrap();
    let ui = RecordingUi::answering(&[]);
    let agent = plan_agent(temp.path(), ui);

    let mut coder = ScriptedCoder::replying("- [ ] Set up CI\n- [ ] Write docs");

    let outcome = agent.run(&mut coder, "ship v1").await;
    assert_eq!(outcome, RunOutcome::Submitted);

    // The reply stays in the host conversation; nothing is persisted
    assert!(!agent.log().path().exists());
    assert!(coder.submitted[0].contains("Let's create a project plan for: ship v1"));
}

#[tokio::test]
async fn test_plan_with_extraction_enabled() {
    let temp = tempfile::tempdir().unwrap();
    let ui = RecordingUi::answering(&[]);

    let mut profile = SessionProfile::plan();
    profile.log_path = temp.path().join(".aider/plans/history.md");
    profile.extract_items = true;
    let agent = ChecklistAgent::new(profile, PromptLoader::embedded_only(), ui);

    let mut coder = ScriptedCoder::replying("- [ ] Set up CI\nprose\n- [ ] Write docs");

    let outcome = agent.run(&mut coder, "ship v1").await;
    assert_eq!(outcome, RunOutcome::Completed { accepted: 2, declined: 0 });

    let content = fs::read_to_string(agent.log().path()).unwrap();
    assert!(content.starts_with("# Project Plan History"));
    assert!(content.contains("- [ ] Set up CI\n"));
    assert!(content.contains("- [ ] Write docs\n"));
}

#[tokio::test]
async fn test_start_session_is_idempotent() {
    let temp = tempfile::tempdir().unwrap();
    let ui = RecordingUi::answering(&[]);
    let agent = brainstorm_agent(temp.path(), ui.clone());

    assert!(agent.start_session());
    let first = fs::read_to_string(agent.log().path()).unwrap();

    assert!(agent.start_session());
    let second = fs::read_to_string(agent.log().path()).unwrap();

    assert_eq!(first.len(), second.len());
    // The status message is emitted on both calls
    assert_eq!(ui.infos.lock().unwrap().len(), 2);
}

#[tokio::test]
async fn test_unreadable_log_is_reported_and_treated_as_absent() {
    let temp = tempfile::tempdir().unwrap();
    let ui = RecordingUi::answering(&[true]);

    // A directory at the log path makes every read fail
    let mut profile = SessionProfile::brainstorm();
    profile.log_path = temp.path().join(".aider/brainstorm/history.md");
    fs::create_dir_all(&profile.log_path).unwrap();
    let agent = ChecklistAgent::new(profile, PromptLoader::embedded_only(), ui.clone());

    let mut coder = ScriptedCoder::replying("- [ ] Idea: Add caching");
    let outcome = agent.run(&mut coder, "speed").await;

    // The run still completes; the read failure was reported and the
    // log treated as absent in the prompt
    assert_eq!(outcome, RunOutcome::Completed { accepted: 0, declined: 0 });
    assert!(coder.submitted[0].contains("No previous ideas yet."));
    assert!(ui.errors().iter().any(|e| e.contains("Error reading session log")));
}

#[tokio::test]
async fn test_failed_appends_are_not_counted_as_accepted() {
    let temp = tempfile::tempdir().unwrap();
    let ui = RecordingUi::answering(&[true, true]);

    // A directory at the log path makes every append fail too
    let mut profile = SessionProfile::brainstorm();
    profile.log_path = temp.path().join(".aider/brainstorm/history.md");
    fs::create_dir_all(&profile.log_path).unwrap();
    let agent = ChecklistAgent::new(profile, PromptLoader::embedded_only(), ui.clone());

    let mut coder = ScriptedCoder::replying("- [ ] Idea: first\n- [ ] Idea: second");
    let outcome = agent.run(&mut coder, "speed").await;

    // Both items were confirmed but neither could be persisted
    assert_eq!(outcome, RunOutcome::Completed { accepted: 0, declined: 0 });
    assert!(ui.errors().iter().any(|e| e.contains("Error adding session item")));
    assert!(ui.infos.lock().unwrap().iter().any(|m| m.starts_with("Added 0 item(s)")));
}

#[tokio::test]
async fn test_start_announces_the_header_timestamp() {
    let temp = tempfile::tempdir().unwrap();
    let ui = RecordingUi::answering(&[]);
    let agent = brainstorm_agent(temp.path(), ui.clone());

    assert!(agent.start_session());

    let content = fs::read_to_string(agent.log().path()).unwrap();
    let header_ts = content
        .lines()
        .find_map(|l| l.strip_prefix("## Session 1 - "))
        .unwrap();

    // The announced time is the one written to the header
    let infos = ui.infos.lock().unwrap();
    assert_eq!(infos[0], format!("Brainstorm session started at {}", header_ts));
}

#[tokio::test]
async fn test_render_prompt_matches_submitted_prompt() {
    let temp = tempfile::tempdir().unwrap();
    let ui = RecordingUi::answering(&[]);
    let agent = brainstorm_agent(temp.path(), ui);

    assert!(agent.add_item("prior idea"));

    let files = vec![PathBuf::from("src/main.rs")];
    let rendered = agent.render_prompt("speed", &files).unwrap();

    let mut coder = ScriptedCoder::replying("- [ ] Idea: x").with_files(&["src/main.rs"]);
    agent.run(&mut coder, "speed").await;

    assert_eq!(rendered, coder.submitted[0]);
}

#[tokio::test]
async fn test_uses_last_assistant_message() {
    let temp = tempfile::tempdir().unwrap();
    let ui = RecordingUi::answering(&[]);
    let agent = brainstorm_agent(temp.path(), ui);

    let mut coder = ScriptedCoder::replying("- [ ] Idea: from the latest reply");
    // Stale history from an earlier exchange
    coder.history.push(Message::assistant("- [ ] Idea: from an old reply"));

    let outcome = agent.run(&mut coder, "prompt").await;
    assert_eq!(outcome, RunOutcome::Completed { accepted: 1, declined: 0 });

    let content = fs::read_to_string(agent.log().path()).unwrap();
    assert!(content.contains("from the latest reply"));
    assert!(!content.contains("from an old reply"));
}
