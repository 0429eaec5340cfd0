//! Example: Server-rendered editor brought to life by hydration

use dew_dom::{Document, NodeId, serialize};
use dew_html::parse_body_fragment;
use dew_ui::{App, Panel};
use dew_vdom::{Component, hydrate, render_to_string};

fn find_first(doc: &Document, start: NodeId, tag: &str) -> Option<NodeId> {
    if doc.tree().tag(start) == Some(tag) {
        return Some(start);
    }
    for child in doc.tree().child_ids(start) {
        if let Some(found) = find_first(doc, child, tag) {
            return Some(found);
        }
    }
    None
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Server: render the app to plain markup
    let markup = render_to_string(&App::new().render()).unwrap();
    println!("--- server markup ---");
    println!("{markup}");

    // Client: parse the served page, then hydrate a panel onto it
    let page = format!("<div id=\"app\">{markup}</div>");
    let mut doc = parse_body_fragment(&page);
    let mount = doc.get_element_by_id("app").unwrap();
    let pre_rendered = doc.tree().first_child_of(mount).unwrap();

    let panel = Panel::new();
    hydrate(&panel.render(), &mut doc, pre_rendered);

    // Simulate the user typing and clicking Add
    let button = find_first(&doc, pre_rendered, "button").unwrap();
    for line in ["hello", "world"] {
        panel.text_box().set_text(&mut doc, line);
        doc.dispatch(button, "click").unwrap();
    }

    println!("--- textarea after two submissions ---");
    println!("{}", panel.text_area().text(&doc));
    println!("--- hydrated page ---");
    println!("{}", serialize(&doc, mount).unwrap());
}
