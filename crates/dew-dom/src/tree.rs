//! Arena tree and structural operations.
//!
//! All structure lives in sibling/parent links on the nodes themselves.
//! Operations validate ids before touching links, so a stale [`NodeId`]
//! surfaces as [`DomError::NotFound`] instead of corrupting the tree.

use tracing::trace;

use crate::NodeId;
use crate::listeners::EventHandler;
use crate::node::{ElementData, Node, NodeData, TextData};

/// Errors raised by tree operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    #[error("node not found")]
    NotFound,
    #[error("node is not a child of the given parent")]
    NotAChild,
    #[error("operation would make a node its own ancestor")]
    HierarchyRequest,
    #[error("operation does not apply to this node type")]
    InvalidNodeType,
}

pub type DomResult<T> = Result<T, DomError>;

/// Flat arena of nodes. Slot zero is always the document node.
#[derive(Debug)]
pub struct DomTree {
    nodes: Vec<Node>,
}

impl DomTree {
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new(NodeData::Document)],
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0 as usize)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0 as usize)
    }

    fn node(&self, id: NodeId) -> DomResult<&Node> {
        self.get(id).ok_or(DomError::NotFound)
    }

    fn node_mut(&mut self, id: NodeId) -> DomResult<&mut Node> {
        self.get_mut(id).ok_or(DomError::NotFound)
    }

    fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    // === Node creation ===

    pub fn create_element(&mut self, tag: &str) -> NodeId {
        let id = self.push(Node::new(NodeData::Element(ElementData::new(tag))));
        trace!(tag, id = id.index(), "create element");
        id
    }

    pub fn create_text(&mut self, content: &str) -> NodeId {
        self.push(Node::new(NodeData::Text(TextData::new(content))))
    }

    // === Link accessors ===

    pub fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        let parent = self.get(id)?.parent;
        parent.is_valid().then_some(parent)
    }

    pub fn first_child_of(&self, id: NodeId) -> Option<NodeId> {
        let child = self.get(id)?.first_child;
        child.is_valid().then_some(child)
    }

    pub fn last_child_of(&self, id: NodeId) -> Option<NodeId> {
        let child = self.get(id)?.last_child;
        child.is_valid().then_some(child)
    }

    pub fn next_sibling_of(&self, id: NodeId) -> Option<NodeId> {
        let sibling = self.get(id)?.next_sibling;
        sibling.is_valid().then_some(sibling)
    }

    pub fn prev_sibling_of(&self, id: NodeId) -> Option<NodeId> {
        let sibling = self.get(id)?.prev_sibling;
        sibling.is_valid().then_some(sibling)
    }

    /// Iterates over the children of `id` in document order.
    pub fn children(&self, id: NodeId) -> Children<'_> {
        Children {
            tree: self,
            next: self.get(id).map(|n| n.first_child).unwrap_or(NodeId::NONE),
        }
    }

    /// Snapshot of the child list, safe to hold across mutations.
    pub fn child_ids(&self, id: NodeId) -> Vec<NodeId> {
        self.children(id).collect()
    }

    pub fn child_count(&self, id: NodeId) -> usize {
        self.children(id).count()
    }

    // === Node kind helpers ===

    pub fn is_element(&self, id: NodeId) -> bool {
        self.get(id).is_some_and(Node::is_element)
    }

    pub fn is_text(&self, id: NodeId) -> bool {
        self.get(id).is_some_and(Node::is_text)
    }

    /// Tag of the element at `id`, or `None` for non-elements.
    pub fn tag(&self, id: NodeId) -> Option<&str> {
        self.get(id)?.as_element().map(|e| e.tag.as_str())
    }

    /// Content of the text node at `id`, or `None` for non-text nodes.
    pub fn text(&self, id: NodeId) -> Option<&str> {
        self.get(id)?.as_text().map(|t| t.content.as_str())
    }

    pub fn set_text(&mut self, id: NodeId, content: &str) -> DomResult<()> {
        match &mut self.node_mut(id)?.data {
            NodeData::Text(text) => {
                text.content = content.to_string();
                Ok(())
            }
            _ => Err(DomError::InvalidNodeType),
        }
    }

    // === Attributes ===

    pub fn attr(&self, id: NodeId, name: &str) -> Option<&str> {
        self.get(id)?.as_element()?.get_attr(name)
    }

    pub fn attrs(&self, id: NodeId) -> Option<&crate::AttrMap> {
        self.get(id)?.as_element().map(|e| &e.attrs)
    }

    pub fn set_attr(&mut self, id: NodeId, name: &str, value: &str) -> DomResult<()> {
        self.node_mut(id)?
            .as_element_mut()
            .ok_or(DomError::InvalidNodeType)?
            .set_attr(name, value);
        Ok(())
    }

    pub fn remove_attr(&mut self, id: NodeId, name: &str) -> DomResult<bool> {
        Ok(self
            .node_mut(id)?
            .as_element_mut()
            .ok_or(DomError::InvalidNodeType)?
            .attrs
            .remove(name))
    }

    // === Listeners ===

    pub fn add_listener(&mut self, id: NodeId, event: &str, handler: EventHandler) -> DomResult<()> {
        self.node_mut(id)?
            .as_element_mut()
            .ok_or(DomError::InvalidNodeType)?
            .add_listener(event, handler);
        Ok(())
    }

    pub fn clear_listeners(&mut self, id: NodeId) -> DomResult<()> {
        self.node_mut(id)?
            .as_element_mut()
            .ok_or(DomError::InvalidNodeType)?
            .listeners
            .clear();
        Ok(())
    }

    /// Cloned handlers registered on `id` for `event`. Empty for
    /// non-elements.
    pub fn handlers_for(&self, id: NodeId, event: &str) -> Vec<EventHandler> {
        self.get(id)
            .and_then(Node::as_element)
            .map(|e| e.listeners.handlers_for(event))
            .unwrap_or_default()
    }

    pub fn listener_count(&self, id: NodeId) -> usize {
        self.get(id)
            .and_then(Node::as_element)
            .map(|e| e.listeners.count())
            .unwrap_or(0)
    }

    // === Structural operations ===

    /// Unlinks `id` from its parent. A node without a parent is left
    /// untouched.
    pub fn detach(&mut self, id: NodeId) -> DomResult<()> {
        let (parent, prev, next) = {
            let node = self.node(id)?;
            (node.parent, node.prev_sibling, node.next_sibling)
        };
        if !parent.is_valid() {
            return Ok(());
        }
        if prev.is_valid() {
            self.node_mut(prev)?.next_sibling = next;
        } else {
            self.node_mut(parent)?.first_child = next;
        }
        if next.is_valid() {
            self.node_mut(next)?.prev_sibling = prev;
        } else {
            self.node_mut(parent)?.last_child = prev;
        }
        let node = self.node_mut(id)?;
        node.parent = NodeId::NONE;
        node.prev_sibling = NodeId::NONE;
        node.next_sibling = NodeId::NONE;
        Ok(())
    }

    /// Appends `child` as the last child of `parent`, detaching it from
    /// any previous position first.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> DomResult<()> {
        self.node(child)?;
        self.check_insertion(parent, child)?;
        self.detach(child)?;
        let last = self.node(parent)?.last_child;
        if last.is_valid() {
            self.node_mut(last)?.next_sibling = child;
        } else {
            self.node_mut(parent)?.first_child = child;
        }
        {
            let node = self.node_mut(child)?;
            node.parent = parent;
            node.prev_sibling = last;
            node.next_sibling = NodeId::NONE;
        }
        self.node_mut(parent)?.last_child = child;
        Ok(())
    }

    /// Inserts `new` before `reference` under `parent`. With no
    /// reference this appends.
    pub fn insert_before(
        &mut self,
        parent: NodeId,
        new: NodeId,
        reference: Option<NodeId>,
    ) -> DomResult<()> {
        let Some(reference) = reference else {
            return self.append_child(parent, new);
        };
        if new == reference {
            return Ok(());
        }
        self.node(new)?;
        if self.node(reference)?.parent != parent {
            return Err(DomError::NotAChild);
        }
        self.check_insertion(parent, new)?;
        self.detach(new)?;
        let prev = self.node(reference)?.prev_sibling;
        if prev.is_valid() {
            self.node_mut(prev)?.next_sibling = new;
        } else {
            self.node_mut(parent)?.first_child = new;
        }
        {
            let node = self.node_mut(new)?;
            node.parent = parent;
            node.prev_sibling = prev;
            node.next_sibling = reference;
        }
        self.node_mut(reference)?.prev_sibling = new;
        Ok(())
    }

    /// Removes `child` from `parent`. The subtree stays in the arena,
    /// detached.
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> DomResult<()> {
        if self.node(child)?.parent != parent {
            return Err(DomError::NotAChild);
        }
        self.detach(child)
    }

    /// Swaps `old` for `new` in `old`'s position under `parent`.
    pub fn replace_child(&mut self, parent: NodeId, new: NodeId, old: NodeId) -> DomResult<()> {
        if new == old {
            return Ok(());
        }
        if self.node(old)?.parent != parent {
            return Err(DomError::NotAChild);
        }
        self.insert_before(parent, new, Some(old))?;
        self.detach(old)
    }

    /// Replaces `old` with `new` wherever `old` sits. Returns `false`
    /// without touching anything when `old` has no parent.
    pub fn replace_in_parent(&mut self, old: NodeId, new: NodeId) -> DomResult<bool> {
        let parent = self.node(old)?.parent;
        if !parent.is_valid() {
            return Ok(false);
        }
        self.replace_child(parent, new, old)?;
        Ok(true)
    }

    /// Deep-copies the subtree rooted at `id` in `source` into this
    /// tree, returning the new root. Attributes come along; listeners do
    /// not, since handlers are bound to their own document.
    pub fn adopt_subtree(&mut self, source: &DomTree, id: NodeId) -> DomResult<NodeId> {
        let src = source.node(id)?;
        let new_id = match &src.data {
            NodeData::Document => return Err(DomError::InvalidNodeType),
            NodeData::Element(element) => {
                let new_id = self.create_element(&element.tag);
                for attr in element.attrs.iter() {
                    self.set_attr(new_id, &attr.name, &attr.value)?;
                }
                new_id
            }
            NodeData::Text(text) => self.create_text(&text.content),
        };
        let mut child = source.first_child_of(id);
        while let Some(current) = child {
            let adopted = self.adopt_subtree(source, current)?;
            self.append_child(new_id, adopted)?;
            child = source.next_sibling_of(current);
        }
        Ok(new_id)
    }

    /// Insertion target must be able to hold children, and must not sit
    /// inside the subtree being inserted.
    fn check_insertion(&self, parent: NodeId, child: NodeId) -> DomResult<()> {
        if self.node(parent)?.is_text() {
            return Err(DomError::InvalidNodeType);
        }
        if parent == child {
            return Err(DomError::HierarchyRequest);
        }
        let mut ancestor = self.node(parent)?.parent;
        while ancestor.is_valid() {
            if ancestor == child {
                return Err(DomError::HierarchyRequest);
            }
            ancestor = self.node(ancestor)?.parent;
        }
        Ok(())
    }
}

impl Default for DomTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over the children of one node.
pub struct Children<'a> {
    tree: &'a DomTree,
    next: NodeId,
}

impl Iterator for Children<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        if !self.next.is_valid() {
            return None;
        }
        let current = self.next;
        self.next = self
            .tree
            .get(current)
            .map(|n| n.next_sibling)
            .unwrap_or(NodeId::NONE);
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    fn tree_with_children(count: usize) -> (DomTree, NodeId, Vec<NodeId>) {
        let mut tree = DomTree::new();
        let parent = tree.create_element("div");
        tree.append_child(NodeId::ROOT, parent).unwrap();
        let children: Vec<NodeId> = (0..count)
            .map(|i| {
                let child = tree.create_text(&format!("child {i}"));
                tree.append_child(parent, child).unwrap();
                child
            })
            .collect();
        (tree, parent, children)
    }

    #[test]
    fn append_preserves_order() {
        let (tree, parent, children) = tree_with_children(3);
        assert_eq!(tree.child_ids(parent), children);
        assert_eq!(tree.first_child_of(parent), Some(children[0]));
        assert_eq!(tree.last_child_of(parent), Some(children[2]));
        assert_eq!(tree.parent_of(children[1]), Some(parent));
    }

    #[test]
    fn remove_child_unlinks() {
        let (mut tree, parent, children) = tree_with_children(3);
        tree.remove_child(parent, children[1]).unwrap();
        assert_eq!(tree.child_ids(parent), vec![children[0], children[2]]);
        assert_eq!(tree.parent_of(children[1]), None);
        assert_eq!(tree.next_sibling_of(children[0]), Some(children[2]));
        assert_eq!(tree.prev_sibling_of(children[2]), Some(children[0]));
    }

    #[test]
    fn remove_child_rejects_foreign_parent() {
        let (mut tree, _, children) = tree_with_children(1);
        let other = tree.create_element("span");
        assert_eq!(
            tree.remove_child(other, children[0]),
            Err(DomError::NotAChild)
        );
    }

    #[test]
    fn insert_before_places_correctly() {
        let (mut tree, parent, children) = tree_with_children(2);
        let middle = tree.create_text("middle");
        tree.insert_before(parent, middle, Some(children[1])).unwrap();
        assert_eq!(tree.child_ids(parent), vec![children[0], middle, children[1]]);
        let front = tree.create_text("front");
        tree.insert_before(parent, front, Some(children[0])).unwrap();
        assert_eq!(tree.first_child_of(parent), Some(front));
    }

    #[test]
    fn replace_child_keeps_position() {
        let (mut tree, parent, children) = tree_with_children(3);
        let replacement = tree.create_element("span");
        tree.replace_child(parent, replacement, children[1]).unwrap();
        assert_eq!(
            tree.child_ids(parent),
            vec![children[0], replacement, children[2]]
        );
        assert_eq!(tree.parent_of(children[1]), None);
    }

    #[test]
    fn replace_in_parent_reports_detached() {
        let (mut tree, parent, children) = tree_with_children(1);
        let fresh = tree.create_element("span");
        assert_eq!(tree.replace_in_parent(children[0], fresh), Ok(true));
        assert_eq!(tree.child_ids(parent), vec![fresh]);

        let orphan = tree.create_element("p");
        let other = tree.create_element("em");
        assert_eq!(tree.replace_in_parent(orphan, other), Ok(false));
    }

    #[test]
    fn append_moves_between_parents() {
        let mut tree = DomTree::new();
        let a = tree.create_element("div");
        let b = tree.create_element("div");
        let child = tree.create_text("x");
        tree.append_child(a, child).unwrap();
        tree.append_child(b, child).unwrap();
        assert_eq!(tree.child_ids(a), Vec::<NodeId>::new());
        assert_eq!(tree.child_ids(b), vec![child]);
    }

    #[test]
    fn detach_without_parent_is_noop() {
        let mut tree = DomTree::new();
        let lone = tree.create_element("div");
        assert_eq!(tree.detach(lone), Ok(()));
        assert_eq!(tree.detach(lone), Ok(()));
    }

    #[test]
    fn cycle_insertion_rejected() {
        let mut tree = DomTree::new();
        let outer = tree.create_element("div");
        let inner = tree.create_element("span");
        tree.append_child(outer, inner).unwrap();
        assert_eq!(
            tree.append_child(inner, outer),
            Err(DomError::HierarchyRequest)
        );
        assert_eq!(tree.append_child(outer, outer), Err(DomError::HierarchyRequest));
    }

    #[test]
    fn text_nodes_cannot_hold_children() {
        let mut tree = DomTree::new();
        let text = tree.create_text("leaf");
        let child = tree.create_element("div");
        assert_eq!(
            tree.append_child(text, child),
            Err(DomError::InvalidNodeType)
        );
    }

    #[test]
    fn set_text_only_on_text_nodes() {
        let mut tree = DomTree::new();
        let text = tree.create_text("old");
        tree.set_text(text, "new").unwrap();
        assert_eq!(tree.text(text), Some("new"));

        let element = tree.create_element("div");
        assert_eq!(tree.set_text(element, "x"), Err(DomError::InvalidNodeType));
    }

    #[test]
    fn attrs_only_on_elements() {
        let mut tree = DomTree::new();
        let element = tree.create_element("input");
        tree.set_attr(element, "type", "text").unwrap();
        assert_eq!(tree.attr(element, "type"), Some("text"));
        assert!(tree.remove_attr(element, "type").unwrap());

        let text = tree.create_text("x");
        assert_eq!(
            tree.set_attr(text, "id", "a"),
            Err(DomError::InvalidNodeType)
        );
        assert_eq!(tree.attr(text, "id"), None);
    }

    #[test]
    fn listeners_register_and_clear() {
        let mut tree = DomTree::new();
        let button = tree.create_element("button");
        tree.add_listener(button, "click", Rc::new(|_, _| {})).unwrap();
        tree.add_listener(button, "click", Rc::new(|_, _| {})).unwrap();
        assert_eq!(tree.listener_count(button), 2);
        assert_eq!(tree.handlers_for(button, "click").len(), 2);
        tree.clear_listeners(button).unwrap();
        assert_eq!(tree.listener_count(button), 0);
    }

    #[test]
    fn adopt_subtree_copies_structure() {
        let mut source = DomTree::new();
        let root = source.create_element("div");
        source.set_attr(root, "class", "outer").unwrap();
        let span = source.create_element("span");
        source.set_attr(span, "id", "inner").unwrap();
        let text = source.create_text("hello");
        source.append_child(root, span).unwrap();
        source.append_child(span, text).unwrap();
        source
            .add_listener(root, "click", Rc::new(|_, _| {}))
            .unwrap();

        let mut target = DomTree::new();
        let adopted = target.adopt_subtree(&source, root).unwrap();
        assert_eq!(target.tag(adopted), Some("div"));
        assert_eq!(target.attr(adopted, "class"), Some("outer"));
        let adopted_span = target.first_child_of(adopted).unwrap();
        assert_eq!(target.tag(adopted_span), Some("span"));
        assert_eq!(target.attr(adopted_span, "id"), Some("inner"));
        let adopted_text = target.first_child_of(adopted_span).unwrap();
        assert_eq!(target.text(adopted_text), Some("hello"));
        // Handlers stay with the source document.
        assert_eq!(target.listener_count(adopted), 0);
    }

    #[test]
    fn operations_on_missing_nodes_fail() {
        let mut tree = DomTree::new();
        let ghost = NodeId(999);
        assert_eq!(tree.detach(ghost), Err(DomError::NotFound));
        assert_eq!(tree.set_attr(ghost, "a", "b"), Err(DomError::NotFound));
        assert_eq!(tree.set_text(ghost, "x"), Err(DomError::NotFound));
        assert!(tree.handlers_for(ghost, "click").is_empty());
    }
}
