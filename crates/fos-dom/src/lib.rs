//! fOS DOM - Document Object Model
//!
//! Memory-efficient, arena-backed DOM tree. Serves as the host tree that
//! `fos-vdom` reconciles against: nodes are addressed by [`NodeId`] indices,
//! so handles never own the nodes they point at.

mod node;
mod tree;
mod operations;
mod dom_events;
mod mutation;

pub use node::{Node, NodeData, ElementData, TextData, Attribute, StyleProperty, RegisteredListener};
pub use tree::{DomTree, Children};
pub use operations::{DomError, DomResult};
pub use dom_events::{DomEvent, EventListener};
pub use mutation::{MutationRecord, MutationType};

/// Node identifier (index into arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Root (document) node ID
    pub const ROOT: NodeId = NodeId(0);

    /// Sentinel for "no node" in sibling/parent links
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Check if this ID refers to a node
    #[inline]
    pub fn is_valid(self) -> bool {
        self != Self::NONE
    }

    /// Arena index
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Convert a link to an `Option`
    #[inline]
    pub(crate) fn some(self) -> Option<NodeId> {
        self.is_valid().then_some(self)
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}
