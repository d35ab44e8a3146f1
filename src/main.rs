//! planstorm CLI entry point
//!
//! Coder-free session log operations; the AI-driven flows live in the
//! library and require a host coder.

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use eyre::{Context, Result};
use tracing::info;

use planstorm::cli::{AgentKind, Cli, Command};
use planstorm::config::Config;
use planstorm::host::{ConsoleUi, HostUi};
use planstorm::prompts::PromptLoader;
use planstorm::session::{ChecklistAgent, SessionProfile};

fn setup_logging(verbose: bool) -> Result<()> {
    // Diagnostics go to a log file; stdout/stderr belong to the host UI
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("planstorm")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let level = if verbose { tracing::Level::DEBUG } else { tracing::Level::INFO };
    let log_file = fs::File::create(log_dir.join("planstorm.log")).context("Failed to create log file")?;

    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_ansi(false)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    info!("Logging initialized (verbose: {})", verbose);
    Ok(())
}

fn profile_for(config: &Config, agent: AgentKind) -> SessionProfile {
    match agent {
        AgentKind::Brainstorm => config.brainstorm_profile(),
        AgentKind::Plan => config.plan_profile(),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose).context("Failed to setup logging")?;

    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    let ui = Arc::new(ConsoleUi::new());

    match cli.command {
        Command::Start { agent } => {
            let agent = ChecklistAgent::new(profile_for(&config, agent), PromptLoader::new("."), ui.clone());
            if !agent.start_session() {
                std::process::exit(1);
            }
        }
        Command::Add { agent, text } => {
            let agent = ChecklistAgent::new(profile_for(&config, agent), PromptLoader::new("."), ui.clone());
            if !agent.add_item(&text) {
                std::process::exit(1);
            }
        }
        Command::Show { agent, full } => {
            let agent = ChecklistAgent::new(profile_for(&config, agent), PromptLoader::new("."), ui.clone());
            let content = if full {
                match agent.log().read() {
                    Ok(content) => content,
                    Err(e) => {
                        ui.error(&format!("Error reading session log: {}", e));
                        std::process::exit(1);
                    }
                }
            } else {
                agent.session_content()
            };
            match content {
                Some(content) => println!("{}", content),
                None => println!("(no session recorded yet)"),
            }
        }
        Command::Prompt { agent, goal, files } => {
            let agent = ChecklistAgent::new(profile_for(&config, agent), PromptLoader::new("."), ui.clone());
            let prompt = agent.render_prompt(&goal, &files).context("Failed to render prompt")?;
            println!("{}", prompt);
        }
    }

    Ok(())
}
