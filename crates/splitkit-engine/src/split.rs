//! Splitter: one document in, HTML + CSS + JS out

use splitkit_dom::{Document, ElementData};
use splitkit_html::{HtmlParser, HtmlSerializer};

use crate::blocks::{self, is_script_block, is_style_block};
use crate::{FailureCause, TransformError, ensure_doctype};

/// Separator between concatenated blocks
const BLOCK_SEPARATOR: &str = "\n\n";

/// Result of a split
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitOutput {
    /// Residual document, auto-linked, with DOCTYPE
    pub html: String,
    /// Every inline stylesheet, trimmed, blank-line separated
    pub css: String,
    /// Every inline executable script, trimmed, blank-line separated
    pub js: String,
}

/// Moves inline `<style>` and `<script>` content out of a document
#[derive(Debug, Default, Clone, Copy)]
pub struct Splitter {
    parser: HtmlParser,
    serializer: HtmlSerializer,
}

impl Splitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Split `html` into its markup, stylesheet and script.
    ///
    /// Scripts with a `src` attribute or a structured-data type stay in the
    /// document. A `style.css` link and a `script.js` reference are added
    /// only when the matching output is non-empty.
    pub fn split(&self, html: &str) -> Result<SplitOutput, TransformError> {
        if html.trim().is_empty() {
            return Err(TransformError::parse(FailureCause::EmptyInput));
        }

        let mut document = self.parser.parse(html).map_err(TransformError::parse)?;

        let css = extract(&mut document, "style", is_style_block)?;
        let js = extract(&mut document, "script", is_script_block)?;

        let css = css.trim();
        let js = js.trim();
        if !css.is_empty() {
            blocks::append_link_reference(&mut document)?;
        }
        if !js.is_empty() {
            blocks::append_script_reference(&mut document)?;
        }

        let html = ensure_doctype(
            self.serializer
                .serialize_outer(document.tree(), document.document_element()),
        );
        tracing::debug!(
            html = html.len(),
            css = css.len(),
            js = js.len(),
            "split complete"
        );

        Ok(SplitOutput {
            html,
            css: css.to_string(),
            js: js.to_string(),
        })
    }
}

/// Detach every matching block, returning their trimmed text joined by
/// [`BLOCK_SEPARATOR`] (a trailing separator included)
fn extract(
    document: &mut Document,
    tag: &str,
    filter: impl Fn(&ElementData) -> bool,
) -> Result<String, TransformError> {
    let ids = blocks::find_blocks(document, tag, filter);
    let mut text = String::new();

    for &id in &ids {
        text.push_str(document.tree().text_content(id).trim());
        text.push_str(BLOCK_SEPARATOR);
        document.tree_mut().detach(id)?;
    }

    tracing::debug!(tag, blocks = ids.len(), "extracted inline blocks");
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FailureKind;

    #[test]
    fn test_split_basic() {
        let input = "<html><head><style>body{color:red}</style></head>\
                     <body><script>console.log(1)</script></body></html>";
        let out = Splitter::new().split(input).unwrap();

        assert_eq!(out.css, "body{color:red}");
        assert_eq!(out.js, "console.log(1)");
        assert_eq!(
            out.html,
            "<!DOCTYPE html>\n<html><head><link rel=\"stylesheet\" href=\"style.css\"></head><body><script src=\"script.js\"></script></body></html>"
        );
    }

    #[test]
    fn test_split_blank_input() {
        for input in ["", "   \n\t"] {
            let err = Splitter::new().split(input).unwrap_err();
            assert_eq!(err.kind(), FailureKind::Parse);
            assert!(matches!(err.cause(), FailureCause::EmptyInput));
        }
    }

    #[test]
    fn test_split_without_blocks_adds_no_links() {
        let out = Splitter::new().split("<p>plain</p>").unwrap();
        assert_eq!(out.css, "");
        assert_eq!(out.js, "");
        assert_eq!(
            out.html,
            "<!DOCTYPE html>\n<html><head></head><body><p>plain</p></body></html>"
        );
    }

    #[test]
    fn test_whitespace_only_blocks_are_removed_without_link() {
        let out = Splitter::new()
            .split("<head><style>  \n </style></head><body><script> </script></body>")
            .unwrap();
        assert_eq!(out.css, "");
        assert_eq!(out.js, "");
        assert!(!out.html.contains("<style"));
        assert!(!out.html.contains("<script"));
        assert!(!out.html.contains("<link"));
    }

    #[test]
    fn test_multiple_blocks_concatenated_in_order() {
        let out = Splitter::new()
            .split(
                "<head><style> a{} </style><style>b{}</style></head>\
                 <body><style>c{}</style><script>one()</script><p>x</p><script>\n two()\n</script></body>",
            )
            .unwrap();
        assert_eq!(out.css, "a{}\n\nb{}\n\nc{}");
        assert_eq!(out.js, "one()\n\ntwo()");
        assert_eq!(out.html.matches("<link").count(), 1);
        assert_eq!(out.html.matches("<script").count(), 1);
    }
}
