//! DOM Node - typed node variants
//!
//! A node is its link set (parent, children, siblings) plus [`NodeData`].
//! Links are [`NodeId`]s into the owning [`DomTree`](crate::DomTree).

use crate::NodeId;

/// DOM Node - Core structure
#[derive(Debug, Clone)]
pub struct Node {
    /// Parent node (NONE if root or detached)
    pub parent: NodeId,
    /// First child
    pub first_child: NodeId,
    /// Last child (for O(1) append)
    pub last_child: NodeId,
    /// Previous sibling
    pub prev_sibling: NodeId,
    /// Next sibling
    pub next_sibling: NodeId,
    /// Node-specific data
    pub data: NodeData,
}

impl Node {
    /// Create an unlinked node around `data`
    pub fn new(data: NodeData) -> Self {
        Self {
            parent: NodeId::NONE,
            first_child: NodeId::NONE,
            last_child: NodeId::NONE,
            prev_sibling: NodeId::NONE,
            next_sibling: NodeId::NONE,
            data,
        }
    }

    /// Create a document node
    pub fn document() -> Self {
        Self::new(NodeData::Document)
    }

    /// Create a new element node
    pub fn element(data: ElementData) -> Self {
        Self::new(NodeData::Element(data))
    }

    /// Create a new text node
    pub fn text(content: String) -> Self {
        Self::new(NodeData::Text(TextData { content }))
    }

    /// Create a new comment node
    pub fn comment(content: String) -> Self {
        Self::new(NodeData::Comment(content))
    }

    /// Check if this is an element
    #[inline]
    pub fn is_element(&self) -> bool {
        matches!(self.data, NodeData::Element(_))
    }

    /// Check if this is text
    #[inline]
    pub fn is_text(&self) -> bool {
        matches!(self.data, NodeData::Text(_))
    }

    /// Get element data if this is an element
    #[inline]
    pub fn as_element(&self) -> Option<&ElementData> {
        match &self.data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Get mutable element data
    #[inline]
    pub fn as_element_mut(&mut self) -> Option<&mut ElementData> {
        match &mut self.data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Get text content if this is a text node
    #[inline]
    pub fn as_text(&self) -> Option<&str> {
        match &self.data {
            NodeData::Text(t) => Some(&t.content),
            _ => None,
        }
    }

    /// True for an HTML element with the given local name
    #[inline]
    pub fn is_html_element(&self, local: &str) -> bool {
        self.as_element().is_some_and(|e| e.is_html(local))
    }
}

/// Node-specific data
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeData {
    /// Document root
    Document,
    /// DOCTYPE
    Doctype {
        name: String,
        public_id: String,
        system_id: String,
    },
    /// Element
    Element(ElementData),
    /// Text content
    Text(TextData),
    /// Comment
    Comment(String),
}

/// Element namespace
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Namespace {
    Html,
    Svg,
    MathMl,
    Other(String),
}

impl Namespace {
    pub const HTML_URL: &'static str = "http://www.w3.org/1999/xhtml";
    pub const SVG_URL: &'static str = "http://www.w3.org/2000/svg";
    pub const MATHML_URL: &'static str = "http://www.w3.org/1998/Math/MathML";

    /// Map a namespace URL to a variant
    pub fn from_url(url: &str) -> Self {
        match url {
            Self::HTML_URL | "" => Self::Html,
            Self::SVG_URL => Self::Svg,
            Self::MATHML_URL => Self::MathMl,
            other => Self::Other(other.to_string()),
        }
    }
}

/// Element-specific data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementData {
    /// Namespace of the element
    pub namespace: Namespace,
    /// Local tag name, lowercase for HTML elements
    pub local: String,
    /// Attributes in source order
    pub attrs: Vec<Attribute>,
    /// Children of a `<template>` are its template contents, which
    /// document queries do not descend into.
    pub template: bool,
}

impl ElementData {
    /// New HTML element
    pub fn new(local: &str) -> Self {
        Self::with_namespace(Namespace::Html, local)
    }

    pub fn with_namespace(namespace: Namespace, local: &str) -> Self {
        let template = namespace == Namespace::Html && local == "template";
        Self {
            namespace,
            local: local.to_string(),
            attrs: Vec::new(),
            template,
        }
    }

    /// True for an HTML element named `local`
    #[inline]
    pub fn is_html(&self, local: &str) -> bool {
        self.namespace == Namespace::Html && self.local == local
    }

    /// Get an attribute value
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }

    /// Whether the attribute is present (any value)
    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.iter().any(|a| a.name == name)
    }

    /// Set an attribute, replacing an existing value in place
    pub fn set_attr(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        if let Some(attr) = self.attrs.iter_mut().find(|a| a.name == name) {
            attr.value = value;
            return;
        }
        self.attrs.push(Attribute {
            name: name.to_string(),
            value,
        });
    }

    /// Remove an attribute, returning its old value
    pub fn remove_attr(&mut self, name: &str) -> Option<String> {
        let idx = self.attrs.iter().position(|a| a.name == name)?;
        Some(self.attrs.remove(idx).value)
    }
}

/// Text node data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextData {
    pub content: String,
}

/// Attribute. `name` is the serialized qualified name (`xlink:href`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_attr_replaces() {
        let mut elem = ElementData::new("link");
        elem.set_attr("rel", "stylesheet");
        elem.set_attr("href", "a.css");
        elem.set_attr("href", "style.css");

        assert_eq!(elem.attrs.len(), 2);
        assert_eq!(elem.get_attr("href"), Some("style.css"));
        assert_eq!(elem.attrs[0].name, "rel");
    }

    #[test]
    fn test_remove_attr() {
        let mut elem = ElementData::new("script");
        elem.set_attr("src", "x.js");
        assert_eq!(elem.remove_attr("src").as_deref(), Some("x.js"));
        assert!(!elem.has_attr("src"));
        assert_eq!(elem.remove_attr("src"), None);
    }

    #[test]
    fn test_template_flag() {
        assert!(ElementData::new("template").template);
        assert!(!ElementData::with_namespace(Namespace::Svg, "template").template);
        assert!(!ElementData::new("div").template);
    }

    #[test]
    fn test_namespace_from_url() {
        assert_eq!(Namespace::from_url(Namespace::HTML_URL), Namespace::Html);
        assert_eq!(Namespace::from_url(Namespace::SVG_URL), Namespace::Svg);
        assert!(matches!(Namespace::from_url("urn:x"), Namespace::Other(_)));
    }
}
