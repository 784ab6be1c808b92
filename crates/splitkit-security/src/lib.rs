//! splitkit Security
//!
//! Neutralizes active content in untrusted HTML before it is combined.
//!
//! Features:
//! - Tree-based sanitizer with a configurable drop policy
//! - URL scheme checks for `javascript:`, `vbscript:` and HTML `data:` URLs
//! - XSS pattern detection for diagnostics

pub mod xss_protection;

pub use xss_protection::{InputSanitizer, SanitizeOptions, Sanitizer, SanitizerConfig, XssDetector};

/// Sanitizer error
#[derive(Debug, thiserror::Error)]
pub enum SanitizeError {
    #[error("failed to parse input for sanitizing: {0}")]
    Parse(#[from] splitkit_html::ParseError),

    #[error("failed to rewrite sanitized tree: {0}")]
    Tree(#[from] splitkit_dom::DomError),
}
