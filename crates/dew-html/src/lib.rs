//! HTML parsing for dew documents.
//!
//! Wraps html5ever's tokenizer and tree builder and converts the result
//! into the arena-backed [`dew_dom::Document`]. Parsing is lossy on
//! purpose: comments, doctypes, and whitespace-only text runs are
//! dropped, since the renderer never produces or consumes them.

pub mod parser;
pub mod splice;

pub use parser::{HtmlParser, parse_body_fragment};
pub use splice::set_inner_html;
