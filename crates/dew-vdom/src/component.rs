//! Components and their resolution into concrete nodes.
//!
//! A component is either a plain render function or a factory producing
//! a stateful instance. The distinction is an explicit tag chosen at the
//! construction site; nothing is inferred from the callable itself.

use std::fmt;
use std::rc::Rc;

use crate::RenderError;
use crate::node::{Props, VNode};

/// A stateful UI piece. Instances are created by their factory during
/// resolution, render once, and are dropped; long-lived instances are
/// owned by the application, which calls [`Component::dispose`] when it
/// tears them down.
pub trait Component {
    fn render(&self) -> VNode;

    /// Releases subscriptions and other held resources. Safe to call
    /// more than once.
    fn dispose(&mut self) {}
}

/// How a component node produces output.
#[derive(Clone)]
pub enum ComponentRef {
    /// A render function called directly with the node's props and
    /// children.
    Stateless(Rc<dyn Fn(&Props, &[VNode]) -> VNode>),
    /// A factory producing an instance whose `render` supplies the
    /// output.
    Stateful(Rc<dyn Fn(&Props, &[VNode]) -> Box<dyn Component>>),
}

impl ComponentRef {
    pub fn stateless(render: impl Fn(&Props, &[VNode]) -> VNode + 'static) -> Self {
        ComponentRef::Stateless(Rc::new(render))
    }

    pub fn stateful<C, F>(factory: F) -> Self
    where
        C: Component + 'static,
        F: Fn(&Props, &[VNode]) -> C + 'static,
    {
        ComponentRef::Stateful(Rc::new(move |props, children| {
            Box::new(factory(props, children))
        }))
    }
}

impl fmt::Debug for ComponentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComponentRef::Stateless(_) => f.write_str("Stateless(..)"),
            ComponentRef::Stateful(_) => f.write_str("Stateful(..)"),
        }
    }
}

/// Upper bound on component-returning-component chains. Trees this deep
/// are runaway recursion, not UI.
pub(crate) const MAX_RESOLVE_DEPTH: usize = 64;

/// Resolves component indirections until an element or text node
/// remains.
///
/// Stateful components are instantiated fresh on every resolution and
/// rendered exactly once; the instance is dropped afterwards. State
/// that must outlive a render pass belongs in application-owned
/// components, reached through their closures.
pub fn resolve(mut node: VNode) -> Result<VNode, RenderError> {
    let mut depth = 0;
    loop {
        match node {
            VNode::Component(vcomp) => {
                if depth >= MAX_RESOLVE_DEPTH {
                    return Err(RenderError::ResolveDepthExceeded(MAX_RESOLVE_DEPTH));
                }
                depth += 1;
                node = match &vcomp.component {
                    ComponentRef::Stateless(render) => render(&vcomp.props, &vcomp.children),
                    ComponentRef::Stateful(factory) => {
                        factory(&vcomp.props, &vcomp.children).render()
                    }
                };
            }
            resolved => return Ok(resolved),
        }
    }
}
