//! HTML serialization of live trees.

use crate::NodeId;
use crate::document::Document;
use crate::node::NodeData;
use crate::tree::{DomError, DomResult};

/// Elements serialized without a closing tag.
pub const VOID_ELEMENTS: [&str; 13] = [
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Escapes text for safe placement in HTML content or attribute values.
pub fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Serializes the node at `id` and its subtree to HTML.
pub fn serialize(doc: &Document, id: NodeId) -> DomResult<String> {
    let mut out = String::with_capacity(256);
    write_node(doc, id, &mut out)?;
    Ok(out)
}

/// Serializes only the children of `id`, concatenated in order. Useful
/// for the document node and for inner-HTML style output.
pub fn serialize_children(doc: &Document, id: NodeId) -> DomResult<String> {
    let mut out = String::with_capacity(256);
    for child in doc.tree().child_ids(id) {
        write_node(doc, child, &mut out)?;
    }
    Ok(out)
}

fn write_node(doc: &Document, id: NodeId, out: &mut String) -> DomResult<()> {
    let node = doc.tree().get(id).ok_or(DomError::NotFound)?;
    match &node.data {
        NodeData::Document => {
            for child in doc.tree().child_ids(id) {
                write_node(doc, child, out)?;
            }
        }
        NodeData::Text(text) => out.push_str(&escape_html(&text.content)),
        NodeData::Element(element) => {
            out.push('<');
            out.push_str(&element.tag);
            for attr in element.attrs.iter() {
                out.push(' ');
                out.push_str(&attr.name);
                out.push_str("=\"");
                out.push_str(&escape_html(&attr.value));
                out.push('"');
            }
            out.push('>');
            if VOID_ELEMENTS.contains(&element.tag.as_str()) {
                return Ok(());
            }
            for child in doc.tree().child_ids(id) {
                write_node(doc, child, out)?;
            }
            out.push_str("</");
            out.push_str(&element.tag);
            out.push('>');
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_all_special_characters() {
        assert_eq!(
            escape_html(r#"<a href="x">&'"#),
            "&lt;a href=&quot;x&quot;&gt;&amp;&#x27;"
        );
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn serializes_nested_elements() {
        let mut doc = Document::new();
        let root = doc.root();
        let div = doc.tree_mut().create_element("div");
        doc.tree_mut().set_attr(div, "class", "box").unwrap();
        let span = doc.tree_mut().create_element("span");
        let text = doc.tree_mut().create_text("hi");
        doc.tree_mut().append_child(root, div).unwrap();
        doc.tree_mut().append_child(div, span).unwrap();
        doc.tree_mut().append_child(span, text).unwrap();

        assert_eq!(
            serialize(&doc, div).unwrap(),
            r#"<div class="box"><span>hi</span></div>"#
        );
    }

    #[test]
    fn void_elements_have_no_closing_tag() {
        let mut doc = Document::new();
        let input = doc.tree_mut().create_element("input");
        doc.tree_mut().set_attr(input, "type", "text").unwrap();
        assert_eq!(serialize(&doc, input).unwrap(), r#"<input type="text">"#);

        let br = doc.tree_mut().create_element("br");
        assert_eq!(serialize(&doc, br).unwrap(), "<br>");
    }

    #[test]
    fn attribute_order_is_preserved() {
        let mut doc = Document::new();
        let el = doc.tree_mut().create_element("a");
        doc.tree_mut().set_attr(el, "href", "/x").unwrap();
        doc.tree_mut().set_attr(el, "target", "_blank").unwrap();
        assert_eq!(
            serialize(&doc, el).unwrap(),
            r#"<a href="/x" target="_blank"></a>"#
        );
    }

    #[test]
    fn text_content_is_escaped() {
        let mut doc = Document::new();
        let p = doc.tree_mut().create_element("p");
        let text = doc.tree_mut().create_text("1 < 2 & 3 > 2");
        doc.tree_mut().append_child(p, text).unwrap();
        assert_eq!(
            serialize(&doc, p).unwrap(),
            "<p>1 &lt; 2 &amp; 3 &gt; 2</p>"
        );
    }

    #[test]
    fn serialize_children_skips_the_node_itself() {
        let mut doc = Document::new();
        let div = doc.tree_mut().create_element("div");
        let a = doc.tree_mut().create_text("a");
        let b = doc.tree_mut().create_element("b");
        doc.tree_mut().append_child(div, a).unwrap();
        doc.tree_mut().append_child(div, b).unwrap();
        assert_eq!(serialize_children(&doc, div).unwrap(), "a<b></b>");
    }
}
