//! splitkit Engine
//!
//! Splits one HTML document into HTML, CSS and JS text, and combines
//! HTML, CSS and JS text back into one document.
//!
//! Both directions are stateless parse-transform-serialize passes:
//!
//! ```
//! let parts = splitkit_engine::split(
//!     "<html><head><style>p{}</style></head><body><script>go()</script></body></html>",
//! ).unwrap();
//! assert_eq!(parts.css, "p{}");
//! assert_eq!(parts.js, "go()");
//!
//! let html = splitkit_engine::combine(&parts.html, &parts.css, &parts.js).unwrap();
//! assert!(html.starts_with("<!DOCTYPE html>\n"));
//! ```

mod blocks;
mod combine;
mod config;
mod doctype;
mod error;
pub mod notify;
mod session;
mod split;

pub use combine::Combiner;
pub use config::{Config, ConfigError};
pub use doctype::{DOCTYPE_LINE, ensure_doctype};
pub use error::{FailureCause, FailureKind, TransformError};
pub use notify::{Notification, NotificationSink, Severity};
pub use session::{CombinePanes, Download, Mode, Session, SplitPanes};
pub use split::{SplitOutput, Splitter};

/// Engine version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// File the split CSS is linked as. Fixed, not configurable.
pub const STYLE_FILENAME: &str = "style.css";

/// File the split JS is linked as. Fixed, not configurable.
pub const SCRIPT_FILENAME: &str = "script.js";

/// Split a document with the default [`Splitter`]
pub fn split(html: &str) -> Result<SplitOutput, TransformError> {
    Splitter::new().split(html)
}

/// Combine with the default [`Combiner`] (sanitizer enabled)
pub fn combine(html: &str, css: &str, js: &str) -> Result<String, TransformError> {
    Combiner::new().combine(html, css, js)
}
