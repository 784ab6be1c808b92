//! HTML5 Parser implementation
//!
//! Uses html5ever's RcDom and converts it to our arena tree.

use html5ever::QualName;
use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData as RcNodeData, RcDom};
use splitkit_dom::{Document, DomTree, ElementData, Namespace, NodeId};

use crate::ParseError;

const XML_NS: &str = "http://www.w3.org/XML/1998/namespace";
const XMLNS_NS: &str = "http://www.w3.org/2000/xmlns/";
const XLINK_NS: &str = "http://www.w3.org/1999/xlink";

/// HTML5 parser
#[derive(Debug, Clone, Copy)]
pub struct HtmlParser;

impl HtmlParser {
    /// Create a new HTML parser
    pub fn new() -> Self {
        Self
    }

    /// Parse HTML string into a Document.
    ///
    /// Malformed markup is recovered the way browsers do; the result always
    /// has `html`, `head` and `body` unless the tree conversion itself failed.
    pub fn parse(&self, html: &str) -> Result<Document, ParseError> {
        tracing::debug!(bytes = html.len(), "parsing HTML document");

        let dom = parse_document(RcDom::default(), Default::default())
            .from_utf8()
            .read_from(&mut html.as_bytes())?;

        let mut tree = DomTree::new();
        let root = tree.root();
        self.convert_children(&dom.document, &mut tree, root)?;

        let document = Document::from_tree(tree);
        for (name, id) in [
            ("html", document.document_element()),
            ("head", document.head()),
            ("body", document.body()),
        ] {
            if !id.is_valid() {
                return Err(ParseError::MissingElement(name));
            }
        }

        tracing::debug!(nodes = document.tree().len(), "parsed document");
        Ok(document)
    }

    fn convert_children(
        &self,
        handle: &Handle,
        tree: &mut DomTree,
        parent: NodeId,
    ) -> Result<(), ParseError> {
        for child in handle.children.borrow().iter() {
            self.convert_node(child, tree, parent)?;
        }
        Ok(())
    }

    /// Convert an RcDom node (and its subtree) under `parent`
    fn convert_node(
        &self,
        handle: &Handle,
        tree: &mut DomTree,
        parent: NodeId,
    ) -> Result<(), ParseError> {
        match &handle.data {
            RcNodeData::Document => {
                self.convert_children(handle, tree, parent)?;
            }
            RcNodeData::Doctype {
                name,
                public_id,
                system_id,
            } => {
                let id = tree.create_doctype(name, public_id, system_id);
                tree.append_child(parent, id)?;
            }
            RcNodeData::Text { contents } => {
                let id = tree.create_text(&contents.borrow());
                tree.append_child(parent, id)?;
            }
            RcNodeData::Comment { contents } => {
                let id = tree.create_comment(contents);
                tree.append_child(parent, id)?;
            }
            RcNodeData::Element {
                name,
                attrs,
                template_contents,
                ..
            } => {
                let namespace = Namespace::from_url(&name.ns);
                let mut elem = ElementData::with_namespace(namespace, &name.local);
                for attr in attrs.borrow().iter() {
                    elem.set_attr(&attribute_name(&attr.name), attr.value.to_string());
                }

                let id = tree.create_element_with(elem);
                tree.append_child(parent, id)?;

                // Template children live in a separate fragment
                match template_contents.borrow().as_ref() {
                    Some(contents) => self.convert_children(contents, tree, id)?,
                    None => self.convert_children(handle, tree, id)?,
                }
            }
            RcNodeData::ProcessingInstruction { .. } => {
                // HTML has no processing instructions; the tokenizer turns
                // them into comments, so nothing reaches here in practice.
            }
        }
        Ok(())
    }
}

impl Default for HtmlParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Serialized attribute name, with the prefix foreign content requires
fn attribute_name(name: &QualName) -> String {
    let local: &str = &name.local;
    match &*name.ns {
        XML_NS => format!("xml:{local}"),
        XMLNS_NS if local == "xmlns" => local.to_string(),
        XMLNS_NS => format!("xmlns:{local}"),
        XLINK_NS => format!("xlink:{local}"),
        _ => local.to_string(),
    }
}
