//! Application root.

use dew_vdom::{ComponentRef, Props, VNode, comp};

use crate::panel::Panel;

/// Top of the widget tree. Rendering it yields a [`Panel`] wrapped in
/// a component node, so the same tree serves string rendering, live
/// rendering and hydration.
pub struct App;

impl App {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self) -> VNode {
        comp(
            ComponentRef::stateful(|_, _| Panel::new()),
            Props::new(),
            vec![],
        )
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
