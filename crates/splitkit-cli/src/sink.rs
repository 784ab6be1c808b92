//! Terminal notification sink

use owo_colors::OwoColorize;
use splitkit_engine::{NotificationSink, Severity};

/// Prints notifications to stderr and remembers whether any was an error
#[derive(Debug, Default)]
pub struct TerminalSink {
    errors: usize,
}

impl TerminalSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn had_error(&self) -> bool {
        self.errors > 0
    }
}

impl NotificationSink for TerminalSink {
    fn notify(&mut self, title: &str, message: &str, severity: Severity) {
        match severity {
            Severity::Success => eprintln!("{} {message}", title.green().bold()),
            Severity::Error => {
                self.errors += 1;
                eprintln!("{} {message}", title.red().bold());
            }
        }
    }
}
