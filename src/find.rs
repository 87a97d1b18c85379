//! Sibling search in document order.
//!
//! Answers "does a later sibling of this kind exist" questions, which drive
//! the trailing separators for table rows and cells: only non-terminal
//! rows/cells get one.

use crate::error::{Error, Result};
use crate::node::Node;
use crate::selector::Selector;

/// Where to start a sibling search: a numeric child index, or a child node
/// resolved to its index by identity.
#[derive(Debug, Clone, Copy)]
pub enum Position<'a> {
    /// An index into the parent's children.
    Index(usize),
    /// A reference to one of the parent's children.
    Child(&'a Node),
}

impl From<usize> for Position<'_> {
    fn from(index: usize) -> Self {
        Position::Index(index)
    }
}

impl<'a> From<&'a Node> for Position<'a> {
    fn from(child: &'a Node) -> Self {
        Position::Child(child)
    }
}

/// Finds the first child of `parent` strictly after `from`, in document
/// order, matched by `selector`.
///
/// # Errors
///
/// Returns [`Error::InvalidParent`] if `parent` cannot contain children, and
/// [`Error::InvalidIndex`] if a child reference is not found in the parent.
pub fn find_after<'a>(
    parent: &'a Node,
    from: Position<'_>,
    selector: &Selector,
) -> Result<Option<&'a Node>> {
    if !parent.has_child_container() {
        return Err(Error::InvalidParent(
            "expected a root or element parent node".to_owned(),
        ));
    }

    let index = match from {
        Position::Index(index) => index,
        Position::Child(child) => parent
            .children()
            .iter()
            .position(|sibling| std::ptr::eq(sibling, child))
            .ok_or_else(|| {
                Error::InvalidIndex("expected index or child node of parent".to_owned())
            })?,
    };

    Ok(next_match(parent, index, selector))
}

/// Infallible scan used internally once the index is known to be valid.
pub(crate) fn next_match<'a>(
    parent: &'a Node,
    index: usize,
    selector: &Selector,
) -> Option<&'a Node> {
    parent
        .children()
        .iter()
        .enumerate()
        .skip(index + 1)
        .find(|(i, child)| selector.matches_at(child, Some(*i), Some(parent)))
        .map(|(_, child)| child)
}
