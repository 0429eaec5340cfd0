//! Multi-line output widget with caret tracking.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use dew_dom::{Document, InputSelection, NodeId};
use dew_vdom::{Props, VNode, el};

/// A read-mostly textarea that accumulates submitted lines. Text is
/// inserted at the tracked caret, which then collapses past the
/// insertion, so successive appends land in document order.
pub struct TextArea {
    area: Rc<Cell<Option<NodeId>>>,
    selection: Rc<RefCell<InputSelection>>,
}

impl TextArea {
    pub fn new() -> Self {
        Self {
            area: Rc::new(Cell::new(None)),
            selection: Rc::new(RefCell::new(InputSelection::new())),
        }
    }

    /// Full contents, empty until the tree has been rendered.
    pub fn text(&self, doc: &Document) -> String {
        self.area
            .get()
            .and_then(|id| doc.tree().attr(id, "value"))
            .unwrap_or_default()
            .to_string()
    }

    /// Inserts `text` at the caret and collapses the caret past it.
    pub fn append(&self, doc: &mut Document, text: &str) {
        let Some(id) = self.area.get() else {
            return;
        };
        let value = doc
            .tree()
            .attr(id, "value")
            .unwrap_or_default()
            .to_string();

        // Clamp the caret to the value and back off to a boundary so
        // the splice never lands inside a multi-byte character.
        let mut at = self.selection.borrow().start.min(value.len());
        while at > 0 && !value.is_char_boundary(at) {
            at -= 1;
        }

        let updated = format!("{}{}{}", &value[..at], text, &value[at..]);
        let _ = doc.tree_mut().set_attr(id, "value", &updated);
        self.selection.borrow_mut().collapse_to(at + text.len());
    }

    pub fn clear(&self, doc: &mut Document) {
        if let Some(id) = self.area.get() {
            let _ = doc.tree_mut().set_attr(id, "value", "");
        }
        self.selection.borrow_mut().collapse_to(0);
    }

    pub fn set_caret(&self, position: usize) {
        self.selection.borrow_mut().collapse_to(position);
    }

    pub fn selection(&self) -> InputSelection {
        *self.selection.borrow()
    }

    pub fn render(&self) -> VNode {
        let area = Rc::clone(&self.area);
        el(
            "textarea",
            Props::new()
                .node_ref(move |_, id| area.set(Some(id)))
                .attr("placeholder", "Your text will appear here...")
                .style(
                    "padding: 8px; width: 100%; height: 150px; border: 1px solid #ddd; \
                     margin-top: 10px; resize: vertical;",
                ),
            vec![],
        )
    }
}

impl Default for TextArea {
    fn default() -> Self {
        Self::new()
    }
}
