//! Console HostUi implementation
//!
//! Used by the CLI for coder-free operations. Reports go to
//! stdout/stderr and confirmation reads one line from stdin.

use std::io::{self, BufRead, Write as IoWrite};

use tracing::debug;

use super::traits::HostUi;

/// HostUi backed by the terminal
#[derive(Debug, Default)]
pub struct ConsoleUi;

impl ConsoleUi {
    pub fn new() -> Self {
        Self
    }
}

impl HostUi for ConsoleUi {
    fn confirm(&self, question: &str) -> bool {
        print!("{} [y/N] ", question);
        if io::stdout().flush().is_err() {
            return false;
        }

        let stdin = io::stdin();
        let answer = match stdin.lock().lines().next() {
            Some(Ok(line)) => line,
            // EOF or read failure counts as a decline
            _ => return false,
        };

        debug!(answer = %answer, "ConsoleUi::confirm");
        matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
    }

    fn error(&self, message: &str) {
        eprintln!("error: {}", message);
    }

    fn warning(&self, message: &str) {
        eprintln!("warning: {}", message);
    }

    fn info(&self, message: &str) {
        println!("{}", message);
    }
}
