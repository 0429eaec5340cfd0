//! Replacing an element's content with parsed markup.

use dew_dom::{Document, DomError, DomResult, NodeId};

use crate::parser::parse_body_fragment;

/// Parses `html` and installs it as the entire content of `mount`,
/// discarding whatever children the element had.
///
/// The markup is parsed into a scratch document and deep-copied across,
/// so `html` may be any body-level fragment.
pub fn set_inner_html(doc: &mut Document, mount: NodeId, html: &str) -> DomResult<()> {
    if !doc.tree().is_element(mount) {
        return Err(DomError::InvalidNodeType);
    }
    let fragment = parse_body_fragment(html);
    let body = fragment.body().ok_or(DomError::NotFound)?;

    for child in doc.tree().child_ids(mount) {
        doc.tree_mut().remove_child(mount, child)?;
    }
    for source_child in fragment.tree().child_ids(body) {
        let adopted = doc.tree_mut().adopt_subtree(fragment.tree(), source_child)?;
        doc.tree_mut().append_child(mount, adopted)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use dew_dom::serialize;

    #[test]
    fn replaces_existing_content() {
        let mut doc = parse_body_fragment(r#"<div id="app"><p>old</p></div>"#);
        let mount = doc.get_element_by_id("app").unwrap();
        set_inner_html(&mut doc, mount, "<span>new</span>").unwrap();
        assert_eq!(
            serialize(&doc, mount).unwrap(),
            r#"<div id="app"><span>new</span></div>"#
        );
    }

    #[test]
    fn rejects_text_targets() {
        let mut doc = parse_body_fragment("<p>text</p>");
        let body = doc.body().unwrap();
        let p = doc.tree().first_child_of(body).unwrap();
        let text = doc.tree().first_child_of(p).unwrap();
        assert_eq!(
            set_inner_html(&mut doc, text, "<b>x</b>"),
            Err(DomError::InvalidNodeType)
        );
    }
}
