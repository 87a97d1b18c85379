//! White-space mode resolution.
//!
//! The effective `white-space` handling for an element's descendants is a
//! pure function of the tag, a couple of properties, and the mode inherited
//! from the ancestor. It is recursion state, never stored on the tree.

use crate::node::{is_truthy, Node};

/// The CSS white-space handling modes the engine distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WhiteSpace {
    /// Collapse runs of white space and convert segment breaks to spaces.
    #[default]
    Normal,
    /// Preserve everything verbatim.
    Pre,
    /// Preserve verbatim but allow wrapping.
    PreWrap,
    /// Collapse like normal, but forbid wrapping.
    NoWrap,
}

impl WhiteSpace {
    /// Resolves the effective mode for `node`'s descendants given the mode
    /// inherited from its ancestor.
    ///
    /// Void elements never have text, so `nobr`/`wbr` resetting to `normal`
    /// is irrelevant and not modelled.
    #[must_use]
    pub fn infer(node: &Node, inherited: WhiteSpace) -> WhiteSpace {
        match node.tag() {
            Some("listing" | "plaintext" | "xmp") => WhiteSpace::Pre,
            Some("nobr") => WhiteSpace::NoWrap,
            Some("pre") => {
                if node.property("wrap").is_some_and(is_truthy) {
                    WhiteSpace::PreWrap
                } else {
                    WhiteSpace::Pre
                }
            }
            Some("td" | "th") => {
                if node.property("noWrap").is_some_and(is_truthy) {
                    WhiteSpace::NoWrap
                } else {
                    inherited
                }
            }
            Some("textarea") => WhiteSpace::PreWrap,
            _ => inherited,
        }
    }
}
