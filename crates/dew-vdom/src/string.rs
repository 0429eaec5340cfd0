//! Server-side string rendering.

use dew_dom::escape_html;

use crate::RenderError;
use crate::component::resolve;
use crate::node::{PropValue, VElement, VNode};

/// Tags emitted as `<tag ... />` with children discarded.
pub const SELF_CLOSING_TAGS: [&str; 6] = ["img", "input", "br", "hr", "meta", "link"];

/// Serializes a virtual tree to HTML text.
///
/// Handler and ref properties have no markup form and are skipped;
/// hydration reattaches them on the client. Text and attribute values
/// are entity-escaped.
pub fn render_to_string(node: &VNode) -> Result<String, RenderError> {
    let mut out = String::with_capacity(256);
    write_node(node, &mut out)?;
    Ok(out)
}

fn write_node(node: &VNode, out: &mut String) -> Result<(), RenderError> {
    match node {
        VNode::Text(text) => out.push_str(&escape_html(text)),
        VNode::Component(_) => {
            let resolved = resolve(node.clone())?;
            write_node(&resolved, out)?;
        }
        VNode::Element(element) => write_element(element, out)?,
    }
    Ok(())
}

fn write_element(element: &VElement, out: &mut String) -> Result<(), RenderError> {
    out.push('<');
    out.push_str(&element.tag);
    for (name, value) in element.props.iter() {
        if name.starts_with("on") {
            continue;
        }
        let text = match value {
            PropValue::Str(text) => text.clone(),
            PropValue::Num(number) => number.to_string(),
            PropValue::Style(style) => style.css_text(),
            PropValue::Handler(_) | PropValue::Ref(_) => continue,
        };
        let attr_name = if name == "className" { "class" } else { name };
        out.push(' ');
        out.push_str(attr_name);
        out.push_str("=\"");
        out.push_str(&escape_html(&text));
        out.push('"');
    }
    if SELF_CLOSING_TAGS.contains(&element.tag.as_str()) {
        out.push_str(" />");
        return Ok(());
    }
    out.push('>');
    for child in &element.children {
        write_node(child, out)?;
    }
    out.push_str("</");
    out.push_str(&element.tag);
    out.push('>');
    Ok(())
}
