//! Session state
//!
//! Explicit state for a front end driving the engine: which mode is active,
//! the status line, and the text panes of each mode. The transformations
//! themselves stay stateless; the session only stores their inputs and
//! outputs and turns outcomes into notifications.

use crate::notify::{NotificationSink, messages};
use crate::{Combiner, Config, Splitter};

/// Active mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Split,
    Combine,
}

/// Text panes of the split mode
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitPanes {
    pub input: String,
    pub html_out: String,
    pub css_out: String,
    pub js_out: String,
}

/// Text panes of the combine mode
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CombinePanes {
    pub html_in: String,
    pub css_in: String,
    pub js_in: String,
    pub out: String,
}

/// A combined document ready to be saved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download<'a> {
    pub filename: &'a str,
    pub content: &'a str,
}

/// Front-end session
#[derive(Debug)]
pub struct Session {
    mode: Mode,
    status: String,
    pub split: SplitPanes,
    pub combine: CombinePanes,
    splitter: Splitter,
    combiner: Combiner,
    download_filename: String,
}

impl Session {
    pub fn new(config: &Config) -> Self {
        Self {
            mode: Mode::Split,
            status: String::new(),
            split: SplitPanes::default(),
            combine: CombinePanes::default(),
            splitter: Splitter::new(),
            combiner: config.combiner(),
            download_filename: config.download_filename.clone(),
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Current status line
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Switch to `mode`; switching to the active mode does nothing
    pub fn switch_mode(&mut self, mode: Mode) {
        if self.mode == mode {
            return;
        }
        self.mode = mode;
        self.status = match mode {
            Mode::Split => "Mode: Splitter",
            Mode::Combine => "Mode: Combiner",
        }
        .to_string();
    }

    /// Split `split.input` into the output panes.
    ///
    /// Outputs are only written on success. Returns whether it succeeded.
    pub fn process_split(&mut self, sink: &mut dyn NotificationSink) -> bool {
        if self.split.input.trim().is_empty() {
            messages::split_input_required().send(sink);
            return false;
        }

        match self.splitter.split(&self.split.input) {
            Ok(out) => {
                self.split.html_out = out.html;
                self.split.css_out = out.css;
                self.split.js_out = out.js;
                self.status = "Split complete".to_string();
                messages::split_done().send(sink);
                true
            }
            Err(err) => {
                tracing::warn!(error = %err, cause = %err.cause(), "split failed");
                messages::split_failed().send(sink);
                false
            }
        }
    }

    /// Empty every split pane
    pub fn clear_split(&mut self, sink: &mut dyn NotificationSink) {
        self.split = SplitPanes::default();
        self.status = "Workspace cleared".to_string();
        messages::cleared().send(sink);
    }

    /// Combine the combine input panes into `combine.out`.
    ///
    /// The output is only written on success. Returns whether it succeeded.
    pub fn process_combine(&mut self, sink: &mut dyn NotificationSink) -> bool {
        if self.combine.html_in.trim().is_empty() {
            messages::combine_html_missing().send(sink);
            return false;
        }

        let CombinePanes {
            html_in,
            css_in,
            js_in,
            ..
        } = &self.combine;
        match self.combiner.combine(html_in, css_in, js_in) {
            Ok(html) => {
                self.combine.out = html;
                self.status = "Combine complete".to_string();
                messages::combine_done().send(sink);
                true
            }
            Err(err) => {
                tracing::warn!(error = %err, cause = %err.cause(), "combine failed");
                messages::combine_failed().send(sink);
                false
            }
        }
    }

    /// Filename the HTML document is saved under
    pub fn download_filename(&self) -> &str {
        &self.download_filename
    }

    /// The combined document under the configured filename, if there is one
    pub fn combined_download(&self) -> Option<Download<'_>> {
        if self.combine.out.trim().is_empty() {
            return None;
        }
        Some(Download {
            filename: &self.download_filename,
            content: &self.combine.out,
        })
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}
