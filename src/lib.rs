//! # innertext
//!
//! Visible-text extraction for HTML-like document trees: given a parsed tree
//! of elements, text, and comments, compute the plain-text result a browser
//! would expose as the element's `innerText` — CSS white-space collapsing,
//! block-level line breaks, table row and cell separators, and
//! hidden-content suppression included.
//!
//! The engine never parses markup and never mutates its input; it consumes a
//! caller-owned [`Node`] tree (the serde representation matches the hast
//! JSON shape) and returns a single `String`.
//!
//! ## Quick Start
//!
//! ```rust
//! use innertext::{extract_text, Node};
//!
//! let doc = Node::root(vec![
//!     Node::element("p", vec![Node::text("Hello")]),
//!     Node::element("p", vec![Node::text("World")]),
//! ]);
//!
//! assert_eq!(extract_text(&doc), "Hello\n\nWorld");
//! ```
//!
//! ## Behavior notes
//!
//! - Required line breaks between blocks merge by maximum, never by sum:
//!   two adjacent paragraphs are separated by exactly two newlines.
//! - `pre` (without `wrap`), `pre-wrap`, and `nowrap` subtrees preserve
//!   their text verbatim.
//! - Segment breaks always convert to a space when collapsible; the
//!   East-Asian-width suppression rules are deliberately not implemented.

mod collapse;
mod collect;
mod error;
mod normalize;
mod repeat;
mod tags;
mod title;

/// Sibling search in document order.
pub mod find;

/// The document tree data model.
pub mod node;

/// Node-matching selectors.
pub mod selector;

/// White-space mode resolution.
pub mod whitespace;

// Public API - re-exports
pub use error::{Error, Result};
pub use find::{find_after, Position};
pub use node::{is_truthy, Node};
pub use repeat::{repeat, RepeatCache};
pub use selector::Selector;
pub use title::hoist_title;
pub use whitespace::WhiteSpace;

/// Computes the rendered text content of a node.
///
/// Implements the `innerText` collection steps as if the node were rendered
/// by a CSS-supporting user agent: not-rendered elements (hidden attribute,
/// `script`/`style` and friends, closed `dialog`) contribute nothing,
/// block-level elements contribute required line breaks, non-terminal table
/// rows and cells contribute separators, and text is collapsed according to
/// its effective white-space mode.
///
/// Extraction is total: malformed trees degrade gracefully (missing children
/// are treated as empty, unknown node kinds are inert) and the call always
/// returns a string.
///
/// # Example
///
/// ```rust
/// use innertext::{extract_text, Node};
///
/// let div = Node::root(vec![Node::element(
///     "div",
///     vec![Node::text("A"), Node::element("br", vec![]), Node::text("B")],
/// )]);
/// assert_eq!(extract_text(&div), "A\nB");
/// ```
#[must_use]
pub fn extract_text(node: &Node) -> String {
    collect::to_text(node)
}
