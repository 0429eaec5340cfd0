//! html5ever-backed parser.

use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom as rcdom;
use rcdom::{Handle, RcDom};
use tracing::debug;

use dew_dom::{Document, DomTree, NodeId};

/// Parses HTML strings into [`Document`]s.
///
/// html5ever recovers from malformed markup the way browsers do, so
/// parsing never fails; the worst input still yields a document with
/// the standard `html`/`head`/`body` scaffolding.
#[derive(Debug, Default)]
pub struct HtmlParser;

impl HtmlParser {
    pub fn new() -> Self {
        Self
    }

    /// Parses a complete HTML document.
    pub fn parse(&self, html: &str) -> Document {
        debug!(bytes = html.len(), "parsing html document");
        let dom = parse_document(RcDom::default(), Default::default())
            .from_utf8()
            .read_from(&mut html.as_bytes())
            .expect("reading from an in-memory string cannot fail");

        let mut document = Document::new();
        let root = document.root();
        convert_children(&dom.document, document.tree_mut(), root);
        debug!(nodes = document.tree().len(), "parsed html document");
        document
    }
}

/// Parses an HTML snippet as body content and returns the containing
/// document. The snippet's top-level nodes become the children of
/// [`Document::body`].
pub fn parse_body_fragment(html: &str) -> Document {
    let wrapped = format!("<!DOCTYPE html><html><head></head><body>{html}</body></html>");
    HtmlParser::new().parse(&wrapped)
}

fn convert_children(handle: &Handle, tree: &mut DomTree, parent: NodeId) {
    for child in handle.children.borrow().iter() {
        convert_node(child, tree, parent);
    }
}

fn convert_node(handle: &Handle, tree: &mut DomTree, parent: NodeId) {
    match &handle.data {
        rcdom::NodeData::Document => convert_children(handle, tree, parent),
        rcdom::NodeData::Element { name, attrs, .. } => {
            let id = tree.create_element(&name.local);
            for attr in attrs.borrow().iter() {
                let _ = tree.set_attr(id, &attr.name.local, &attr.value);
            }
            let _ = tree.append_child(parent, id);
            convert_children(handle, tree, id);
        }
        rcdom::NodeData::Text { contents } => {
            let text = contents.borrow();
            if !text.trim().is_empty() {
                let id = tree.create_text(&text);
                let _ = tree.append_child(parent, id);
            }
        }
        // Comments, doctypes, and processing instructions are dropped.
        _ => {}
    }
}
