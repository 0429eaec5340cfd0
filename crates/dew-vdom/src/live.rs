//! Live rendering: building real DOM nodes from a virtual tree.

use tracing::debug;

use dew_dom::{Document, NodeId};

use crate::RenderError;
use crate::component::resolve;
use crate::node::{PropValue, StyleValue, VElement, VNode};

/// Builds a live subtree for `node` in `doc` and returns its root. The
/// result is detached; the caller decides where to attach it.
pub fn render(node: &VNode, doc: &mut Document) -> Result<NodeId, RenderError> {
    match node {
        VNode::Text(text) => Ok(doc.tree_mut().create_text(text)),
        VNode::Component(_) => {
            let resolved = resolve(node.clone())?;
            render(&resolved, doc)
        }
        VNode::Element(element) => render_element(element, doc),
    }
}

fn render_element(element: &VElement, doc: &mut Document) -> Result<NodeId, RenderError> {
    let id = doc.tree_mut().create_element(&element.tag);
    for (name, value) in element.props.iter() {
        match value {
            PropValue::Ref(callback) => callback(doc, id),
            PropValue::Handler(handler) if name.starts_with("on") => {
                let event = name[2..].to_ascii_lowercase();
                doc.tree_mut().add_listener(id, &event, handler.clone())?;
            }
            PropValue::Handler(_) => {
                debug!(name, "handler bound to a non-event property, skipping");
            }
            PropValue::Style(StyleValue::Text(css)) => {
                doc.tree_mut().set_attr(id, "style", css)?;
            }
            // Style strings only in this path. Map-valued styles are
            // merged by the hydrator; here they are dropped.
            PropValue::Style(StyleValue::Map(_)) => {
                debug!(tag = %element.tag, "map-valued style ignored by the live renderer");
            }
            PropValue::Str(text) => {
                let attr_name = if name == "className" { "class" } else { name };
                doc.tree_mut().set_attr(id, attr_name, text)?;
            }
            PropValue::Num(number) => {
                let attr_name = if name == "className" { "class" } else { name };
                doc.tree_mut().set_attr(id, attr_name, &number.to_string())?;
            }
        }
    }
    for child in &element.children {
        let child_id = render(child, doc)?;
        doc.tree_mut().append_child(id, child_id)?;
    }
    Ok(id)
}
