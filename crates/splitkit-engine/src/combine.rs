//! Combiner: HTML + CSS + JS in, one document out

use std::borrow::Cow;
use std::fmt;

use splitkit_dom::{Document, NodeId};
use splitkit_html::{HtmlParser, HtmlSerializer};
use splitkit_security::{InputSanitizer, SanitizeOptions, Sanitizer};

use crate::blocks::{
    self, is_link_reference, is_script_block, is_script_reference, is_style_block,
};
use crate::{FailureCause, TransformError, ensure_doctype};

/// Inlines CSS and JS into a document, replacing `style.css` / `script.js`
/// references.
///
/// Running the combiner on its own output with the same CSS and JS gives
/// the same document again: stale references and previously inlined copies
/// of the same text are removed before injecting.
pub struct Combiner {
    parser: HtmlParser,
    serializer: HtmlSerializer,
    sanitizer: Option<Box<dyn InputSanitizer>>,
}

impl Combiner {
    /// Combiner sanitizing input with the default policy
    pub fn new() -> Self {
        Self::with_sanitizer(Sanitizer::default_safe())
    }

    pub fn with_sanitizer(sanitizer: impl InputSanitizer + 'static) -> Self {
        Self {
            parser: HtmlParser::new(),
            serializer: HtmlSerializer::new(),
            sanitizer: Some(Box::new(sanitizer)),
        }
    }

    /// Combiner that parses the HTML input as given
    pub fn without_sanitizer() -> Self {
        Self {
            parser: HtmlParser::new(),
            serializer: HtmlSerializer::new(),
            sanitizer: None,
        }
    }

    pub fn has_sanitizer(&self) -> bool {
        self.sanitizer.is_some()
    }

    /// Combine `html` with optional `css` and `js` into one document.
    ///
    /// Blank `html` is a parse failure; blank `css` / `js` inject nothing.
    pub fn combine(&self, html: &str, css: &str, js: &str) -> Result<String, TransformError> {
        if html.trim().is_empty() {
            return Err(TransformError::parse(FailureCause::EmptyInput));
        }
        let css = normalize_newlines(css.trim());
        let js = normalize_newlines(js.trim());

        let input = self.sanitize(html)?;
        let mut document = self
            .parser
            .parse(&input)
            .map_err(TransformError::generation)?;

        let mut stale = blocks::find_blocks(&document, "link", is_link_reference);
        stale.extend(blocks::find_blocks(&document, "script", is_script_reference));
        if !css.is_empty() {
            stale.extend(inline_copies(&document, "style", &css));
        }
        if !js.is_empty() {
            stale.extend(inline_copies(&document, "script", &js));
        }
        tracing::debug!(removed = stale.len(), "removing stale references");
        for id in stale {
            document.tree_mut().detach(id)?;
        }

        if !css.is_empty() {
            let head = document.head();
            blocks::append_inline_block(&mut document, head, "style", &css)?;
        }
        if !js.is_empty() {
            let body = document.body();
            blocks::append_inline_block(&mut document, body, "script", &js)?;
        }

        let html = ensure_doctype(
            self.serializer
                .serialize_outer(document.tree(), document.document_element()),
        );
        tracing::debug!(bytes = html.len(), "combine complete");
        Ok(html)
    }

    fn sanitize<'a>(&self, html: &'a str) -> Result<Cow<'a, str>, TransformError> {
        match &self.sanitizer {
            Some(sanitizer) => sanitizer
                .sanitize(html, SanitizeOptions::WHOLE_DOCUMENT)
                .map(Cow::Owned)
                .map_err(TransformError::generation),
            None => {
                tracing::debug!("no sanitizer configured, using raw input");
                Ok(Cow::Borrowed(html))
            }
        }
    }
}

impl Default for Combiner {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Combiner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Combiner")
            .field("sanitizer", &self.has_sanitizer())
            .finish()
    }
}

/// `\r\n` and lone `\r` as `\n`, matching what the parser does to the
/// document text
fn normalize_newlines(text: &str) -> Cow<'_, str> {
    if text.contains('\r') {
        Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(text)
    }
}

/// Inline `<style>` / executable `<script>` blocks whose trimmed text is `text`
fn inline_copies(document: &Document, tag: &str, text: &str) -> Vec<NodeId> {
    let tree = document.tree();
    let candidates = match tag {
        "script" => blocks::find_blocks(document, tag, is_script_block),
        _ => blocks::find_blocks(document, tag, is_style_block),
    };
    candidates
        .into_iter()
        .filter(|&id| tree.text_content(id).trim() == text)
        .collect()
}
