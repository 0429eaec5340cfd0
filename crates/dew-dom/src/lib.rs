//! Live DOM tree for the dew renderer.
//!
//! Nodes live in a flat arena owned by [`DomTree`] and refer to each other
//! through [`NodeId`] indices, so subtrees can be spliced and discarded
//! without reference counting. A [`Document`] wraps one tree and adds the
//! document-level queries and event dispatch that renderers work against.

pub mod attributes;
pub mod document;
pub mod forms;
pub mod listeners;
pub mod node;
pub mod serialize;
pub mod tree;

pub use attributes::{Attr, AttrMap};
pub use document::Document;
pub use forms::{InputSelection, SelectionDirection};
pub use listeners::{Event, EventHandler, ListenerSet};
pub use node::{ElementData, Node, NodeData, TextData};
pub use serialize::{escape_html, serialize, serialize_children};
pub use tree::{DomError, DomResult, DomTree};

/// Index of a node in the document tree arena.
///
/// Ids are never reused within a tree and stay valid until the node is
/// dropped with its tree. The all-ones value is reserved as the "no node"
/// sentinel for sibling and parent links.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// The document node every tree is created with.
    pub const ROOT: NodeId = NodeId(0);

    /// Sentinel for absent parent/sibling links.
    pub(crate) const NONE: NodeId = NodeId(u32::MAX);

    pub(crate) fn is_valid(self) -> bool {
        self != NodeId::NONE
    }

    /// Raw arena index, mainly useful for debug output.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_is_first_slot() {
        assert_eq!(NodeId::ROOT.index(), 0);
    }

    #[test]
    fn sentinel_is_not_valid() {
        assert!(!NodeId::NONE.is_valid());
        assert!(NodeId::ROOT.is_valid());
    }
}
