//! Toolbar widget exposing a click event.

use dew_vdom::{Props, VNode, el};

use crate::events::{EventEmitter, Subscription};

/// A single-button toolbar. DOM clicks on the button are re-fired
/// through an [`EventEmitter`] so panels can subscribe without
/// touching the underlying listener plumbing.
pub struct Toolbar {
    click: EventEmitter<()>,
}

impl Toolbar {
    pub fn new() -> Self {
        Self {
            click: EventEmitter::new(),
        }
    }

    pub fn on_did_click(
        &self,
        listener: impl Fn(&mut dew_dom::Document, &()) + 'static,
    ) -> Subscription<()> {
        self.click.on(listener)
    }

    pub fn dispose(&self) {
        self.click.dispose();
    }

    pub fn render(&self) -> VNode {
        let click = self.click.clone();
        el(
            "button",
            Props::new()
                .on("click", move |doc, _| click.fire(doc, &()))
                .style(
                    "padding: 8px 16px; background: #0078d4; color: white; border: none; \
                     border-radius: 4px; cursor: pointer; font-size: 14px; \
                     transition: background 0.2s;",
                ),
            vec!["Add".into()],
        )
    }
}

impl Default for Toolbar {
    fn default() -> Self {
        Self::new()
    }
}
