//! Hydration: patching an existing live subtree to match a virtual
//! tree.
//!
//! The walk reuses live nodes wherever tags line up, touching only
//! attributes and text that actually differ. Listeners are the one
//! exception: every visited element gets its listener set rebuilt from
//! the new property bag, with no equality short-circuit, so handlers
//! closed over stale state never survive a pass.

use tracing::{debug, error};

use dew_dom::{Document, NodeId};

use crate::RenderError;
use crate::component::resolve;
use crate::live::render;
use crate::node::{PropValue, RefCallback, StyleValue, VElement, VNode, join_css};

/// Reconciles `container` and its subtree against `node`.
///
/// Any error during the walk falls back to discarding `container` and
/// swapping in a freshly rendered tree; errors are logged, never
/// propagated. A container without a parent cannot be swapped and is
/// left as-is.
pub fn hydrate(node: &VNode, doc: &mut Document, container: NodeId) {
    if let Err(walk_error) = hydrate_node(node, doc, container) {
        error!(%walk_error, "hydration failed, replacing the container subtree");
        match render(node, doc) {
            Ok(fresh) => match doc.tree_mut().replace_in_parent(container, fresh) {
                Ok(true) => {}
                Ok(false) => debug!("container has no parent, replacement not attached"),
                Err(swap_error) => {
                    error!(%swap_error, "could not swap the replacement subtree in")
                }
            },
            Err(render_error) => error!(%render_error, "replacement render failed"),
        }
    }
}

fn hydrate_node(node: &VNode, doc: &mut Document, container: NodeId) -> Result<(), RenderError> {
    match node {
        VNode::Text(expected) => {
            if doc.tree().is_text(container) {
                if doc.tree().text(container) != Some(expected.as_str()) {
                    doc.tree_mut().set_text(container, expected)?;
                }
            } else {
                let fresh = doc.tree_mut().create_text(expected);
                doc.tree_mut().replace_in_parent(container, fresh)?;
            }
            Ok(())
        }
        VNode::Component(_) => {
            let resolved = resolve(node.clone())?;
            hydrate_node(&resolved, doc, container)
        }
        VNode::Element(element) => {
            let tag_matches = doc
                .tree()
                .tag(container)
                .is_some_and(|tag| tag.eq_ignore_ascii_case(&element.tag));
            if !tag_matches {
                let fresh = render(node, doc)?;
                doc.tree_mut().replace_in_parent(container, fresh)?;
                return Ok(());
            }
            update_props(element, doc, container)?;
            reconcile_children(&element.children, doc, container)
        }
    }
}

/// Applies the new property bag to a tag-matched element. Attribute
/// writes are skipped when the value is already current; the listener
/// set is rebuilt unconditionally; the ref callback runs last.
fn update_props(element: &VElement, doc: &mut Document, id: NodeId) -> Result<(), RenderError> {
    doc.tree_mut().clear_listeners(id)?;
    let mut deferred_ref: Option<&RefCallback> = None;
    for (name, value) in element.props.iter() {
        match value {
            PropValue::Ref(callback) => deferred_ref = Some(callback),
            PropValue::Handler(handler) if name.starts_with("on") => {
                let event = name[2..].to_ascii_lowercase();
                doc.tree_mut().add_listener(id, &event, handler.clone())?;
            }
            PropValue::Handler(_) => {
                debug!(name, "handler bound to a non-event property, skipping");
            }
            PropValue::Style(StyleValue::Text(css)) => {
                if doc.tree().attr(id, "style") != Some(css.as_str()) {
                    doc.tree_mut().set_attr(id, "style", css)?;
                }
            }
            PropValue::Style(StyleValue::Map(pairs)) => merge_style(doc, id, pairs)?,
            PropValue::Str(text) => {
                let attr_name = if name == "className" { "class" } else { name };
                if doc.tree().attr(id, attr_name) != Some(text.as_str()) {
                    doc.tree_mut().set_attr(id, attr_name, text)?;
                }
            }
            PropValue::Num(number) => {
                let attr_name = if name == "className" { "class" } else { name };
                let text = number.to_string();
                if doc.tree().attr(id, attr_name) != Some(text.as_str()) {
                    doc.tree_mut().set_attr(id, attr_name, &text)?;
                }
            }
        }
    }
    if let Some(callback) = deferred_ref {
        callback(doc, id);
    }
    Ok(())
}

/// Merges map entries onto the current style attribute. Declarations
/// absent from the new map are kept, so stale style properties persist
/// across hydration passes.
fn merge_style(doc: &mut Document, id: NodeId, pairs: &[(String, String)]) -> Result<(), RenderError> {
    let current = doc.tree().attr(id, "style").unwrap_or("").to_string();
    let mut declarations = parse_style(&current);
    for (name, value) in pairs {
        match declarations.iter_mut().find(|(existing, _)| existing == name) {
            Some(declaration) => declaration.1 = value.clone(),
            None => declarations.push((name.clone(), value.clone())),
        }
    }
    let merged = join_css(&declarations);
    if merged != current {
        doc.tree_mut().set_attr(id, "style", &merged)?;
    }
    Ok(())
}

fn parse_style(css: &str) -> Vec<(String, String)> {
    css.split(';')
        .filter_map(|declaration| {
            let (name, value) = declaration.split_once(':')?;
            let name = name.trim();
            (!name.is_empty()).then(|| (name.to_string(), value.trim().to_string()))
        })
        .collect()
}

/// Walks the new children against the existing child list position by
/// position: surplus live children are removed, surplus new children
/// are rendered fresh and appended, and shared positions recurse.
fn reconcile_children(
    children: &[VNode],
    doc: &mut Document,
    parent: NodeId,
) -> Result<(), RenderError> {
    let existing = doc.tree().child_ids(parent);
    let shared = children.len().min(existing.len());
    for (child, &live) in children.iter().zip(&existing) {
        hydrate_node(child, doc, live)?;
    }
    for &surplus in &existing[shared..] {
        doc.tree_mut().remove_child(parent, surplus)?;
    }
    for child in &children[shared..] {
        let fresh = render(child, doc)?;
        doc.tree_mut().append_child(parent, fresh)?;
    }
    Ok(())
}
