//! CLI command definitions
//!
//! Only coder-free operations are exposed here: starting a session,
//! adding items by hand, showing the log, and printing the rendered
//! prompt. The AI round-trip needs a host [`crate::host::Coder`] and
//! is driven through the library API.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// planstorm - checklist session agents for AI pair-programming hosts
#[derive(Parser)]
#[command(
    name = "planstorm",
    about = "Brainstorm and plan session logs for AI pair-programming hosts",
    version
)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true, help = "Path to config file")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Which session agent a command targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AgentKind {
    Brainstorm,
    Plan,
}

/// CLI subcommands
#[derive(Subcommand)]
pub enum Command {
    /// Start a session (creates the log file with its header)
    Start {
        /// Which agent's session to start
        #[arg(value_enum)]
        agent: AgentKind,
    },

    /// Append an item to a session log
    Add {
        /// Which agent's log to append to
        #[arg(value_enum)]
        agent: AgentKind,

        /// Item text
        text: String,
    },

    /// Show the checklist items recorded so far
    Show {
        /// Which agent's log to show
        #[arg(value_enum)]
        agent: AgentKind,

        /// Print the whole file instead of just the checklist lines
        #[arg(long)]
        full: bool,
    },

    /// Print the prompt that would be submitted for a goal
    Prompt {
        /// Which agent's template to render
        #[arg(value_enum)]
        agent: AgentKind,

        /// The goal to embed in the prompt
        goal: String,

        /// Files to list as chat context
        #[arg(long = "file")]
        files: Vec<PathBuf>,
    },
}
