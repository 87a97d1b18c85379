//! Heading-to-title hoisting.
//!
//! The one consumer the extraction engine feeds directly: copy the visible
//! text of a document's leading level-1 heading into a metadata slot and
//! remove the heading from the tree. This is the only operation in the crate
//! that mutates its input.

use crate::collect::to_text;
use crate::node::Node;

/// Hoists a leading `h1` into `title`.
///
/// A single leading comment node is skipped as a metadata block. If the next
/// top-level child is an `h1` element, its extracted text is written into
/// `title` unless the slot is already populated, and the heading is removed
/// from the tree either way. Returns true when a heading was removed.
pub fn hoist_title(root: &mut Node, title: &mut Option<String>) -> bool {
    let Some(children) = root.children_mut() else {
        return false;
    };

    let index = usize::from(matches!(children.first(), Some(Node::Comment { .. })));
    let Some(child) = children.get(index) else {
        return false;
    };

    if child.tag() != Some("h1") {
        return false;
    }

    if title.is_none() {
        *title = Some(to_text(child));
    }
    children.remove(index);
    true
}
