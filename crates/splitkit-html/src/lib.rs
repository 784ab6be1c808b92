//! splitkit HTML Parser
//!
//! Lenient HTML5 parsing built on html5ever, converted into the arena
//! tree from `splitkit-dom`, plus the matching serializer.

mod parser;
mod serializer;

pub use parser::HtmlParser;
pub use serializer::HtmlSerializer;
pub use splitkit_dom::{Document, DomTree, Node, NodeId};

/// Parse an HTML string into a Document
pub fn parse(html: &str) -> Result<Document, ParseError> {
    HtmlParser::new().parse(html)
}

/// Serialize a document to the outer HTML of its `<html>` element.
/// The DOCTYPE is not part of the output.
pub fn serialize(document: &Document) -> String {
    HtmlSerializer::new().serialize_outer(document.tree(), document.document_element())
}

/// Parse error
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("failed to read HTML input: {0}")]
    Io(#[from] std::io::Error),

    #[error("parsed document has no <{0}> element")]
    MissingElement(&'static str),

    #[error("failed to build document tree: {0}")]
    Tree(#[from] splitkit_dom::DomError),
}
