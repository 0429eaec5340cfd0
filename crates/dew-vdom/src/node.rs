//! The virtual node data model.
//!
//! Trees are plain values: cloning shares closures through `Rc` and
//! copies everything else. Construction flattens nested child lists and
//! drops empty slots, so renderers never see a null child.

use std::fmt;
use std::rc::Rc;

use dew_dom::{Document, Event, EventHandler, NodeId};

use crate::component::ComponentRef;

/// Callback receiving the live node realized for an element, together
/// with the document it lives in.
pub type RefCallback = Rc<dyn Fn(&mut Document, NodeId)>;

/// One node in a virtual tree.
#[derive(Debug, Clone)]
pub enum VNode {
    Text(String),
    Element(VElement),
    Component(VComponent),
}

impl VNode {
    pub fn text(value: impl Into<String>) -> Self {
        VNode::Text(value.into())
    }

    /// Tag of an element node, `None` otherwise.
    pub fn tag(&self) -> Option<&str> {
        match self {
            VNode::Element(element) => Some(&element.tag),
            _ => None,
        }
    }
}

/// An intrinsic element: tag, property bag, and children.
#[derive(Debug, Clone)]
pub struct VElement {
    pub tag: String,
    pub props: Props,
    pub children: Vec<VNode>,
}

/// A component reference awaiting resolution.
#[derive(Debug, Clone)]
pub struct VComponent {
    pub component: ComponentRef,
    pub props: Props,
    pub children: Vec<VNode>,
}

/// Builds an element node. Children are flattened and empty slots
/// dropped.
pub fn el(tag: impl Into<String>, props: Props, children: Vec<Child>) -> VNode {
    VNode::Element(VElement {
        tag: tag.into(),
        props,
        children: flatten(children),
    })
}

/// Builds a component node for later resolution.
pub fn comp(component: ComponentRef, props: Props, children: Vec<Child>) -> VNode {
    VNode::Component(VComponent {
        component,
        props,
        children: flatten(children),
    })
}

fn flatten(children: Vec<Child>) -> Vec<VNode> {
    let mut flat = Vec::with_capacity(children.len());
    push_flat(children, &mut flat);
    flat
}

fn push_flat(children: Vec<Child>, out: &mut Vec<VNode>) {
    for child in children {
        match child {
            Child::Node(node) => out.push(node),
            Child::Many(nested) => push_flat(nested, out),
            Child::None => {}
        }
    }
}

/// A child slot as written at a construction site: a node, a nested
/// list, or nothing.
#[derive(Debug, Clone)]
pub enum Child {
    Node(VNode),
    Many(Vec<Child>),
    None,
}

impl From<VNode> for Child {
    fn from(node: VNode) -> Self {
        Child::Node(node)
    }
}

impl From<&str> for Child {
    fn from(text: &str) -> Self {
        Child::Node(VNode::text(text))
    }
}

impl From<String> for Child {
    fn from(text: String) -> Self {
        Child::Node(VNode::Text(text))
    }
}

impl From<i64> for Child {
    fn from(value: i64) -> Self {
        Child::Node(VNode::Text(value.to_string()))
    }
}

impl From<f64> for Child {
    fn from(value: f64) -> Self {
        Child::Node(VNode::Text(value.to_string()))
    }
}

impl From<Vec<Child>> for Child {
    fn from(children: Vec<Child>) -> Self {
        Child::Many(children)
    }
}

impl<T: Into<Child>> From<Option<T>> for Child {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(inner) => inner.into(),
            None => Child::None,
        }
    }
}

/// A property value. Strings and numbers become attributes; the other
/// variants carry renderer-specific behavior.
#[derive(Clone)]
pub enum PropValue {
    Str(String),
    Num(f64),
    Style(StyleValue),
    Handler(EventHandler),
    Ref(RefCallback),
}

impl fmt::Debug for PropValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropValue::Str(value) => f.debug_tuple("Str").field(value).finish(),
            PropValue::Num(value) => f.debug_tuple("Num").field(value).finish(),
            PropValue::Style(value) => f.debug_tuple("Style").field(value).finish(),
            PropValue::Handler(_) => f.write_str("Handler(..)"),
            PropValue::Ref(_) => f.write_str("Ref(..)"),
        }
    }
}

/// The `style` property: either precomposed CSS text or a property map.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleValue {
    Text(String),
    Map(Vec<(String, String)>),
}

impl StyleValue {
    /// CSS text form: maps flatten to `name:value` pairs joined by `;`.
    pub fn css_text(&self) -> String {
        match self {
            StyleValue::Text(css) => css.clone(),
            StyleValue::Map(pairs) => join_css(pairs),
        }
    }
}

pub(crate) fn join_css(pairs: &[(String, String)]) -> String {
    pairs
        .iter()
        .map(|(name, value)| format!("{name}:{value}"))
        .collect::<Vec<_>>()
        .join(";")
}

/// Insertion-ordered property bag.
///
/// Renderers walk properties in the order they were set, which keeps
/// serialized attribute order deterministic.
#[derive(Clone, Default)]
pub struct Props {
    entries: Vec<(String, PropValue)>,
}

impl Props {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `name`, replacing in place when it is already present.
    pub fn set(&mut self, name: impl Into<String>, value: PropValue) {
        let name = name.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Builder form of [`Props::set`].
    pub fn with(mut self, name: impl Into<String>, value: PropValue) -> Self {
        self.set(name, value);
        self
    }

    /// String attribute.
    pub fn attr(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.with(name, PropValue::Str(value.into()))
    }

    /// Numeric attribute, stringified at render time.
    pub fn num(self, name: impl Into<String>, value: f64) -> Self {
        self.with(name, PropValue::Num(value))
    }

    /// The `className` property.
    pub fn class(self, value: impl Into<String>) -> Self {
        self.with("className", PropValue::Str(value.into()))
    }

    /// The `style` property as precomposed CSS text.
    pub fn style(self, css: impl Into<String>) -> Self {
        self.with("style", PropValue::Style(StyleValue::Text(css.into())))
    }

    /// The `style` property as a name/value map.
    pub fn styles(self, pairs: &[(&str, &str)]) -> Self {
        let pairs = pairs
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect();
        self.with("style", PropValue::Style(StyleValue::Map(pairs)))
    }

    /// Registers a handler under `on<event>`.
    pub fn on(self, event: &str, handler: impl Fn(&mut Document, &Event) + 'static) -> Self {
        let name = format!("on{}", event.to_ascii_lowercase());
        self.with(name, PropValue::Handler(Rc::new(handler)))
    }

    /// The `ref` callback, invoked with the realized live node.
    pub fn node_ref(self, callback: impl Fn(&mut Document, NodeId) + 'static) -> Self {
        self.with("ref", PropValue::Ref(Rc::new(callback)))
    }

    pub fn get(&self, name: &str) -> Option<&PropValue> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value)
    }

    /// Properties in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropValue)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for Props {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
