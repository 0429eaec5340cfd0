//! Single-line text input widget.

use std::cell::Cell;
use std::rc::Rc;

use dew_dom::{Document, NodeId};
use dew_vdom::{Props, VNode, el};

/// A text input. The live node is captured through the ref callback
/// when the tree is rendered or hydrated; until then reads return
/// empty and writes do nothing.
pub struct TextBox {
    input: Rc<Cell<Option<NodeId>>>,
}

impl TextBox {
    pub fn new() -> Self {
        Self {
            input: Rc::new(Cell::new(None)),
        }
    }

    /// Current value with surrounding whitespace trimmed.
    pub fn text(&self, doc: &Document) -> String {
        self.input
            .get()
            .and_then(|id| doc.tree().attr(id, "value"))
            .map(|value| value.trim().to_string())
            .unwrap_or_default()
    }

    /// Replaces the current value, as typing would.
    pub fn set_text(&self, doc: &mut Document, value: &str) {
        if let Some(id) = self.input.get() {
            let _ = doc.tree_mut().set_attr(id, "value", value);
        }
    }

    /// Adds `text` to the end of the current value.
    pub fn append(&self, doc: &mut Document, text: &str) {
        if let Some(id) = self.input.get() {
            let value = doc.tree().attr(id, "value").unwrap_or_default().to_string();
            let _ = doc.tree_mut().set_attr(id, "value", &format!("{value}{text}"));
        }
    }

    pub fn clear(&self, doc: &mut Document) {
        self.set_text(doc, "");
    }

    pub fn render(&self) -> VNode {
        let input = Rc::clone(&self.input);
        el(
            "input",
            Props::new()
                .node_ref(move |_, id| input.set(Some(id)))
                .attr("type", "text")
                .attr("placeholder", "Type text here...")
                .style("padding: 8px; flex: 1; border: 1px solid #ddd;"),
            vec![],
        )
    }
}

impl Default for TextBox {
    fn default() -> Self {
        Self::new()
    }
}
