//! XSS Protection & Sanitization
//!
//! Tree-based HTML sanitization and script injection detection.

use std::collections::HashSet;

use serde::Deserialize;
use splitkit_dom::{Attribute, Document, NodeData, NodeId};
use splitkit_html::HtmlSerializer;
use url::Url;

use crate::SanitizeError;

/// Options for a single sanitize call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SanitizeOptions {
    /// Return the full document (DOCTYPE, `html`, `head`, `body`) instead of
    /// the inner HTML of `body`
    pub whole_document: bool,
}

impl SanitizeOptions {
    pub const WHOLE_DOCUMENT: Self = Self { whole_document: true };
    pub const FRAGMENT: Self = Self { whole_document: false };
}

/// Something that can neutralize active content in HTML text
pub trait InputSanitizer {
    fn sanitize(&self, input: &str, options: SanitizeOptions) -> Result<String, SanitizeError>;
}

/// Sanitizer configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SanitizerConfig {
    /// Elements removed together with their subtree
    pub drop_elements: HashSet<String>,
    /// Attributes always removed (event handlers `on*` are always removed too)
    pub drop_attributes: HashSet<String>,
    /// Attributes holding URLs; removed when the URL is script-capable
    pub url_attributes: HashSet<String>,
    pub allow_comments: bool,
}

impl Default for SanitizerConfig {
    fn default() -> Self {
        let set = |items: &[&str]| -> HashSet<String> {
            items.iter().map(|s| s.to_string()).collect()
        };
        Self {
            // Active content
            drop_elements: set(&[
                "script", "iframe", "frame", "frameset", "object", "embed", "applet", "base",
            ]),
            drop_attributes: set(&["formaction", "srcdoc"]),
            url_attributes: set(&[
                "href", "src", "action", "xlink:href", "poster", "background", "cite",
            ]),
            allow_comments: false,
        }
    }
}

/// What to do with one node
enum Verdict {
    Keep,
    Drop,
    FilterAttributes,
}

/// HTML sanitizer
#[derive(Debug, Clone)]
pub struct Sanitizer {
    config: SanitizerConfig,
    detector: XssDetector,
}

impl Sanitizer {
    pub fn new(config: SanitizerConfig) -> Self {
        Self {
            config,
            detector: XssDetector::new(),
        }
    }

    pub fn default_safe() -> Self {
        Self::new(SanitizerConfig::default())
    }

    pub fn config(&self) -> &SanitizerConfig {
        &self.config
    }

    /// Strip active content from a parsed document in place.
    /// Returns how many nodes and attributes were removed.
    pub fn clean(&self, document: &mut Document) -> Result<usize, SanitizeError> {
        let tree = document.tree_mut();
        // Template contents are sanitized as well
        let ids: Vec<NodeId> = tree.descendants(tree.root()).map(|(id, _)| id).collect();
        let mut removed = 0;

        for id in ids {
            if !tree.is_attached(id) {
                continue;
            }
            let verdict = match tree.get(id).map(|node| &node.data) {
                Some(NodeData::Comment(_)) if !self.config.allow_comments => Verdict::Drop,
                Some(NodeData::Element(elem)) => {
                    if self.config.drop_elements.contains(&elem.local.to_ascii_lowercase()) {
                        tracing::debug!(element = %elem.local, "dropping active element");
                        Verdict::Drop
                    } else {
                        Verdict::FilterAttributes
                    }
                }
                _ => Verdict::Keep,
            };

            match verdict {
                Verdict::Keep => {}
                Verdict::Drop => {
                    tree.detach(id)?;
                    removed += 1;
                }
                Verdict::FilterAttributes => {
                    if let Some(elem) = tree.element_mut(id) {
                        let before = elem.attrs.len();
                        elem.attrs.retain(|attr| self.is_attribute_allowed(attr));
                        removed += before - elem.attrs.len();
                    }
                }
            }
        }

        Ok(removed)
    }

    fn is_attribute_allowed(&self, attr: &Attribute) -> bool {
        let name = attr.name.to_ascii_lowercase();
        if name.starts_with("on") || self.config.drop_attributes.contains(&name) {
            tracing::debug!(attribute = %name, "dropping attribute");
            return false;
        }
        if self.config.url_attributes.contains(&name) && is_script_url(&attr.value) {
            tracing::debug!(attribute = %name, "dropping script URL");
            return false;
        }
        true
    }
}

impl Default for Sanitizer {
    fn default() -> Self {
        Self::default_safe()
    }
}

impl InputSanitizer for Sanitizer {
    fn sanitize(&self, input: &str, options: SanitizeOptions) -> Result<String, SanitizeError> {
        if self.detector.detect(input) {
            tracing::debug!("input contains script-like markup");
        }

        let mut document = splitkit_html::parse(input)?;
        let removed = self.clean(&mut document)?;
        if removed > 0 {
            tracing::info!(removed, "sanitizer removed active content");
        }

        let serializer = HtmlSerializer::new();
        Ok(if options.whole_document {
            serializer.serialize_document(&document)
        } else {
            serializer.serialize_inner(document.tree(), document.body())
        })
    }
}

/// True for URLs that execute script or load an HTML document inline
fn is_script_url(value: &str) -> bool {
    // Browsers ignore embedded whitespace and control characters in schemes
    let compact: String = value
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_control())
        .collect();

    match Url::parse(&compact) {
        Ok(url) => match url.scheme() {
            "javascript" | "vbscript" => true,
            "data" => url.path().to_ascii_lowercase().starts_with("text/html"),
            _ => false,
        },
        Err(_) => false,
    }
}

/// XSS pattern detector
#[derive(Debug, Clone)]
pub struct XssDetector {
    patterns: Vec<String>,
}

impl XssDetector {
    pub fn new() -> Self {
        Self {
            patterns: vec![
                "<script".into(),
                "javascript:".into(),
                "onerror=".into(),
                "onload=".into(),
                "onclick=".into(),
                "onmouseover=".into(),
                "eval(".into(),
                "expression(".into(),
            ],
        }
    }

    pub fn detect(&self, input: &str) -> bool {
        let lower = input.to_lowercase();
        self.patterns.iter().any(|p| lower.contains(p.as_str()))
    }
}

impl Default for XssDetector {
    fn default() -> Self {
        Self::new()
    }
}
