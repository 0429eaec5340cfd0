//! Document: one tree plus document-level queries and event dispatch.

use tracing::trace;

use crate::NodeId;
use crate::listeners::{Event, EventHandler};
use crate::tree::{DomError, DomResult, DomTree};

/// A live document. Owns the arena and is the handle event handlers
/// receive, so a handler can read and rewrite the page it runs in.
#[derive(Debug, Default)]
pub struct Document {
    tree: DomTree,
}

impl Document {
    pub fn new() -> Self {
        Self {
            tree: DomTree::new(),
        }
    }

    /// The document node above `<html>`.
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    pub fn tree(&self) -> &DomTree {
        &self.tree
    }

    pub fn tree_mut(&mut self) -> &mut DomTree {
        &mut self.tree
    }

    /// First element in document order whose `id` attribute equals `id`.
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.find_by_id(NodeId::ROOT, id)
    }

    fn find_by_id(&self, parent: NodeId, id: &str) -> Option<NodeId> {
        for child in self.tree.children(parent) {
            if self.tree.attr(child, "id") == Some(id) {
                return Some(child);
            }
            if let Some(found) = self.find_by_id(child, id) {
                return Some(found);
            }
        }
        None
    }

    /// The `<body>` element, if the document has one.
    pub fn body(&self) -> Option<NodeId> {
        self.find_by_tag(NodeId::ROOT, "body")
    }

    fn find_by_tag(&self, parent: NodeId, tag: &str) -> Option<NodeId> {
        for child in self.tree.children(parent) {
            if self.tree.tag(child) == Some(tag) {
                return Some(child);
            }
            if let Some(found) = self.find_by_tag(child, tag) {
                return Some(found);
            }
        }
        None
    }

    /// Dispatches `event` against `target` and bubbles it toward the
    /// root, invoking listeners in registration order at each step.
    /// Returns how many handlers ran.
    ///
    /// The handler chain is snapshotted per element before invocation,
    /// so handlers may re-render, detach nodes, or swap listeners
    /// without affecting the in-flight dispatch at that element.
    pub fn dispatch(&mut self, target: NodeId, event: &str) -> DomResult<usize> {
        if self.tree.get(target).is_none() {
            return Err(DomError::NotFound);
        }
        trace!(event, target = target.index(), "dispatch");
        let fired = Event::new(event, target);
        let mut invoked = 0;
        let mut current = Some(target);
        while let Some(element) = current {
            let next = self.tree.parent_of(element);
            let handlers: Vec<EventHandler> = self.tree.handlers_for(element, event);
            for handler in handlers {
                handler(self, &fired);
                invoked += 1;
            }
            if fired.propagation_stopped() {
                break;
            }
            current = next;
        }
        Ok(invoked)
    }
}
