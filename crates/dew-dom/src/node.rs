//! Node storage: the per-slot payload of the arena.

use crate::NodeId;
use crate::attributes::AttrMap;
use crate::listeners::{EventHandler, ListenerSet};

/// One slot in the arena: tree links plus the node payload.
#[derive(Debug)]
pub struct Node {
    pub(crate) parent: NodeId,
    pub(crate) first_child: NodeId,
    pub(crate) last_child: NodeId,
    pub(crate) prev_sibling: NodeId,
    pub(crate) next_sibling: NodeId,
    pub data: NodeData,
}

impl Node {
    pub(crate) fn new(data: NodeData) -> Self {
        Self {
            parent: NodeId::NONE,
            first_child: NodeId::NONE,
            last_child: NodeId::NONE,
            prev_sibling: NodeId::NONE,
            next_sibling: NodeId::NONE,
            data,
        }
    }

    pub fn is_element(&self) -> bool {
        matches!(self.data, NodeData::Element(_))
    }

    pub fn is_text(&self) -> bool {
        matches!(self.data, NodeData::Text(_))
    }

    pub fn as_element(&self) -> Option<&ElementData> {
        match &self.data {
            NodeData::Element(element) => Some(element),
            _ => None,
        }
    }

    pub fn as_element_mut(&mut self) -> Option<&mut ElementData> {
        match &mut self.data {
            NodeData::Element(element) => Some(element),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&TextData> {
        match &self.data {
            NodeData::Text(text) => Some(text),
            _ => None,
        }
    }
}

/// What a node is: the document root, an element, or a text run.
#[derive(Debug)]
pub enum NodeData {
    /// Synthetic root above `<html>`. Exactly one per tree, at slot zero.
    Document,
    Element(ElementData),
    Text(TextData),
}

/// Element payload: tag, attributes, and attached listeners.
#[derive(Debug, Default)]
pub struct ElementData {
    pub tag: String,
    pub attrs: AttrMap,
    pub listeners: ListenerSet,
}

impl ElementData {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            attrs: AttrMap::new(),
            listeners: ListenerSet::new(),
        }
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name)
    }

    pub fn set_attr(&mut self, name: &str, value: &str) {
        self.attrs.set(name, value);
    }

    pub fn add_listener(&mut self, event: &str, handler: EventHandler) {
        self.listeners.add(event, handler);
    }
}

/// Text payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextData {
    pub content: String,
}

impl TextData {
    pub fn new(content: &str) -> Self {
        Self {
            content: content.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_node_accessors() {
        let node = Node::new(NodeData::Element(ElementData::new("div")));
        assert!(node.is_element());
        assert!(!node.is_text());
        assert_eq!(node.as_element().map(|e| e.tag.as_str()), Some("div"));
        assert!(node.as_text().is_none());
    }

    #[test]
    fn text_node_accessors() {
        let node = Node::new(NodeData::Text(TextData::new("hello")));
        assert!(node.is_text());
        assert_eq!(node.as_text().map(|t| t.content.as_str()), Some("hello"));
        assert!(node.as_element().is_none());
    }

    #[test]
    fn element_attr_roundtrip() {
        let mut element = ElementData::new("input");
        element.set_attr("type", "text");
        assert_eq!(element.get_attr("type"), Some("text"));
        assert_eq!(element.get_attr("value"), None);
    }
}
