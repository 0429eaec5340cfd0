//! Virtual nodes and the renderers that realize them.
//!
//! A tree of [`VNode`]s describes what should appear on screen. Three
//! consumers walk such trees:
//!
//! - [`render_to_string`] serializes to HTML for server-side output,
//! - [`render`] builds live nodes in a [`dew_dom::Document`],
//! - [`hydrate`] patches an existing live subtree in place, reusing
//!   pre-rendered markup wherever tags line up.
//!
//! Components are opaque to all three: they are resolved to element or
//! text nodes first, then rendered like anything else.
//!
//! The `style` property is deliberately asymmetric. The string renderer
//! flattens map-valued styles to CSS text; the live renderer applies
//! style strings verbatim and drops maps; the hydrator accepts both,
//! merging map entries onto the current style attribute without
//! removing declarations the new value no longer mentions. Callers who
//! want uniform behavior across all three paths should pass style
//! strings.

pub mod component;
pub mod hydrate;
pub mod live;
pub mod node;
pub mod string;

pub use component::{Component, ComponentRef, resolve};
pub use hydrate::hydrate;
pub use live::render;
pub use node::{Child, Props, PropValue, RefCallback, StyleValue, VComponent, VElement, VNode, comp, el};
pub use string::{SELF_CLOSING_TAGS, render_to_string};

use dew_dom::DomError;

/// Errors surfaced while rendering or hydrating a tree.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("dom operation failed: {0}")]
    Dom(#[from] DomError),
    #[error("component resolution exceeded {0} levels")]
    ResolveDepthExceeded(usize),
}
