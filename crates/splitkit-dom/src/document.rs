//! Document - High-level document API

use crate::{DomResult, DomTree, NodeId};

/// HTML Document
#[derive(Debug, Clone)]
pub struct Document {
    /// The DOM tree
    pub tree: DomTree,
    /// Cached reference to <html> element
    html_element: NodeId,
    /// Cached reference to <head> element
    head_element: NodeId,
    /// Cached reference to <body> element
    body_element: NodeId,
}

impl Document {
    /// Create a document with an empty `html`/`head`/`body` skeleton
    pub fn new() -> DomResult<Self> {
        let mut tree = DomTree::new();

        let html = tree.create_element("html");
        let head = tree.create_element("head");
        let body = tree.create_element("body");

        tree.append_child(tree.root(), html)?;
        tree.append_child(html, head)?;
        tree.append_child(html, body)?;

        Ok(Self {
            tree,
            html_element: html,
            head_element: head,
            body_element: body,
        })
    }

    /// Wrap a tree built elsewhere (e.g. by the parser) and locate its
    /// structural elements
    pub fn from_tree(tree: DomTree) -> Self {
        let mut doc = Self {
            tree,
            html_element: NodeId::NONE,
            head_element: NodeId::NONE,
            body_element: NodeId::NONE,
        };
        doc.finalize();
        doc
    }

    /// Find the `<html>`, `<head>` and `<body>` elements. A frameset
    /// document's `<frameset>` stands in for `<body>`.
    pub fn finalize(&mut self) {
        let tree = &self.tree;
        let html = tree
            .children(tree.root())
            .find(|(_, node)| node.is_html_element("html"))
            .map_or(NodeId::NONE, |(id, _)| id);

        let child = |name: &str| {
            tree.children(html)
                .find(|(_, node)| node.is_html_element(name))
                .map_or(NodeId::NONE, |(id, _)| id)
        };
        let head = child("head");
        let body = match child("body") {
            id if id.is_valid() => id,
            _ => child("frameset"),
        };

        tracing::trace!(?html, ?head, ?body, "document structure located");
        self.html_element = html;
        self.head_element = head;
        self.body_element = body;
    }

    /// Get <html> element
    pub fn document_element(&self) -> NodeId {
        self.html_element
    }

    /// Get <head> element
    pub fn head(&self) -> NodeId {
        self.head_element
    }

    /// Get <body> element
    pub fn body(&self) -> NodeId {
        self.body_element
    }

    /// Every attached HTML element named `local`, in document order.
    /// Template contents are not searched.
    pub fn elements_by_tag(&self, local: &str) -> Vec<NodeId> {
        self.tree
            .descendants(self.tree.root())
            .skip_template_contents()
            .filter(|(_, node)| node.is_html_element(local))
            .map(|(id, _)| id)
            .collect()
    }

    /// Attached elements with local name `local` in any namespace, so
    /// `style` also finds `<svg><style>`. Template contents are skipped.
    pub fn elements_by_local_name(&self, local: &str) -> Vec<NodeId> {
        self.tree
            .descendants(self.tree.root())
            .skip_template_contents()
            .filter(|(_, node)| node.as_element().is_some_and(|e| e.local == local))
            .map(|(id, _)| id)
            .collect()
    }

    /// Document title text, trimmed
    pub fn title(&self) -> String {
        self.elements_by_tag("title")
            .first()
            .map(|&id| self.tree.text_content(id).trim().to_string())
            .unwrap_or_default()
    }

    /// Access the DOM tree
    pub fn tree(&self) -> &DomTree {
        &self.tree
    }

    /// Access the DOM tree mutably
    pub fn tree_mut(&mut self) -> &mut DomTree {
        &mut self.tree
    }
}
