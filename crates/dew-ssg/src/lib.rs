//! Pre-renders virtual trees into HTML page templates.
//!
//! A template is an ordinary HTML file carrying an empty mount element
//! (by convention `<div id="app">`). Generation parses the template,
//! renders the tree to markup, splices it into the mount and writes the
//! whole page back out. The emitted markup is what the client later
//! hydrates.

use std::path::Path;

use dew_dom::{DomError, serialize_children};
use dew_html::{HtmlParser, set_inner_html};
use dew_vdom::{RenderError, VNode, render_to_string};
use tracing::{debug, info};

#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("template has no element with id \"{0}\"")]
    MountMissing(String),
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error(transparent)]
    Dom(#[from] DomError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Renders `tree` into the template's mount element and returns the
/// resulting page, doctype included.
pub fn generate_page(template: &str, mount_id: &str, tree: &VNode) -> Result<String, GenerateError> {
    let mut doc = HtmlParser::new().parse(template);
    let mount = doc
        .get_element_by_id(mount_id)
        .ok_or_else(|| GenerateError::MountMissing(mount_id.to_string()))?;

    let markup = render_to_string(tree)?;
    debug!(bytes = markup.len(), mount_id, "splicing rendered markup");
    set_inner_html(&mut doc, mount, &markup)?;

    let page = serialize_children(&doc, doc.root())?;
    Ok(format!("<!DOCTYPE html>\n{page}"))
}

/// Reads the template at `template`, generates the page and writes it
/// to `out`, creating parent directories as needed.
pub fn generate_to_file(
    template: &Path,
    out: &Path,
    mount_id: &str,
    tree: &VNode,
) -> Result<(), GenerateError> {
    let template_html = std::fs::read_to_string(template)?;
    let page = generate_page(&template_html, mount_id, tree)?;

    if let Some(parent) = out.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(out, &page)?;
    info!(out = %out.display(), bytes = page.len(), "page written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use dew_vdom::{Props, el};

    use super::*;

    #[test]
    fn missing_mount_is_an_error() {
        let tree = el("p", Props::new(), vec![]);
        let result = generate_page("<html><body></body></html>", "app", &tree);
        assert!(matches!(result, Err(GenerateError::MountMissing(id)) if id == "app"));
    }

    #[test]
    fn mount_contents_are_replaced() {
        let template = "<html><body><div id=\"app\">old</div></body></html>";
        let tree = el("p", Props::new(), vec!["fresh".into()]);
        let page = generate_page(template, "app", &tree).unwrap();
        assert!(page.starts_with("<!DOCTYPE html>\n"));
        assert!(page.contains("<div id=\"app\"><p>fresh</p></div>"));
        assert!(!page.contains("old"));
    }
}
