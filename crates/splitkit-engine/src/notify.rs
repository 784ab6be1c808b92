//! User-facing notifications
//!
//! The engine reports outcomes as `(title, message, severity)` through a
//! [`NotificationSink`]; how they are shown is up to the host.

use std::fmt;

/// Notification severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Success,
    Error,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single toast-style message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub message: String,
    pub severity: Severity,
}

impl Notification {
    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            severity: Severity::Success,
        }
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            severity: Severity::Error,
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    /// Deliver to `sink`
    pub fn send(&self, sink: &mut dyn NotificationSink) {
        sink.notify(&self.title, &self.message, self.severity);
    }
}

/// Receives notifications
pub trait NotificationSink {
    fn notify(&mut self, title: &str, message: &str, severity: Severity);
}

/// Collects notifications in order
impl NotificationSink for Vec<Notification> {
    fn notify(&mut self, title: &str, message: &str, severity: Severity) {
        self.push(Notification {
            title: title.to_string(),
            message: message.to_string(),
            severity,
        });
    }
}

/// Messages the session reports
pub mod messages {
    use super::Notification;

    pub fn split_input_required() -> Notification {
        Notification::error("Input Required", "Paste an HTML file to begin.")
    }

    pub fn split_done() -> Notification {
        Notification::success("Success", "File split and auto-linked.")
    }

    pub fn split_failed() -> Notification {
        Notification::error("Error", "Invalid HTML document.")
    }

    pub fn combine_html_missing() -> Notification {
        Notification::error("Missing HTML", "HTML body is required.")
    }

    pub fn combine_done() -> Notification {
        Notification::success("Success", "Components combined.")
    }

    pub fn combine_failed() -> Notification {
        Notification::error("Error", "Failed to generate file.")
    }

    pub fn cleared() -> Notification {
        Notification::success("Cleared", "All fields reset.")
    }

    pub fn saved(filename: &str) -> Notification {
        Notification::success("Download", format!("File saved as {filename}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_tags() {
        assert_eq!(Severity::Success.to_string(), "success");
        assert_eq!(Severity::Error.as_str(), "error");
    }

    #[test]
    fn test_vec_sink_collects_in_order() {
        let mut sink: Vec<Notification> = Vec::new();
        messages::split_done().send(&mut sink);
        messages::saved("index.html").send(&mut sink);

        assert_eq!(sink.len(), 2);
        assert_eq!(sink[0].title, "Success");
        assert_eq!(sink[1].message, "File saved as index.html");
        assert!(!sink[1].is_error());
    }
}
