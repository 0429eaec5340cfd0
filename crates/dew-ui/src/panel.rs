//! Panel composing the input, toolbar and output widgets.

use std::rc::Rc;

use dew_vdom::{Component, Props, VNode, el};
use tracing::debug;

use crate::events::Disposable;
use crate::text_area::TextArea;
use crate::text_box::TextBox;
use crate::toolbar::Toolbar;

/// The editor surface: a text box and an Add button on one row, with
/// a textarea below collecting submitted lines. Clicking Add moves the
/// trimmed text box contents into the textarea and clears the box;
/// empty input is ignored.
pub struct Panel {
    text_box: Rc<TextBox>,
    text_area: Rc<TextArea>,
    toolbar: Toolbar,
    subscriptions: Vec<Box<dyn Disposable>>,
}

impl Panel {
    pub fn new() -> Self {
        let text_box = Rc::new(TextBox::new());
        let text_area = Rc::new(TextArea::new());
        let toolbar = Toolbar::new();

        let input = Rc::clone(&text_box);
        let output = Rc::clone(&text_area);
        let subscription = toolbar.on_did_click(move |doc, _| {
            let text = input.text(doc);
            if text.is_empty() {
                debug!("ignoring empty submission");
                return;
            }
            output.append(doc, &format!("{text}\n"));
            input.clear(doc);
        });

        Self {
            text_box,
            text_area,
            toolbar,
            subscriptions: vec![Box::new(subscription)],
        }
    }

    pub fn text_box(&self) -> &TextBox {
        &self.text_box
    }

    pub fn text_area(&self) -> &TextArea {
        &self.text_area
    }
}

impl Default for Panel {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for Panel {
    fn render(&self) -> VNode {
        el(
            "div",
            Props::new().style("padding: 20px; max-width: 600px; margin: auto;"),
            vec![
                el(
                    "div",
                    Props::new().style("display: flex; gap: 10px; align-items: start;"),
                    vec![self.text_box.render().into(), self.toolbar.render().into()],
                )
                .into(),
                self.text_area.render().into(),
            ],
        )
    }

    fn dispose(&mut self) {
        for subscription in &mut self.subscriptions {
            subscription.dispose();
        }
        self.subscriptions.clear();
        self.toolbar.dispose();
    }
}
