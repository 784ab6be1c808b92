//! splitkit DOM - Document Object Model
//!
//! Arena-backed document tree used by the splitter and combiner.
//! Nodes are addressed by [`NodeId`] and linked through parent/sibling ids,
//! so a subtree can be detached or re-attached without moving memory.

mod document;
mod node;
mod operations;
mod tree;

pub use document::Document;
pub use node::{Attribute, ElementData, Namespace, Node, NodeData, TextData};
pub use operations::{DomError, DomResult};
pub use tree::{Children, Descendants, DomTree};

/// Node identifier (index into arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Root (document) node ID
    pub const ROOT: NodeId = NodeId(0);
    /// Sentinel for "no node"
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Whether this id refers to a node at all
    #[inline]
    pub fn is_valid(self) -> bool {
        self != Self::NONE
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::NONE
    }
}
