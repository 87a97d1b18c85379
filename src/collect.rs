//! The inner-text collection walk.
//!
//! A faithful implementation of the `innerText` getter from the HTML
//! standard, acting as if the tree were rendered by a CSS-supporting user
//! agent. Each node contributes literal text, a required line break count, a
//! tab (table-cell separator), or nothing at all; the flattened item list is
//! then normalized into the final string.

use crate::collapse::collapse_text;
use crate::find::next_match;
use crate::node::Node;
use crate::normalize::{normalize, Item};
use crate::tags::{BLOCK_OR_CAPTION, BR, CELL, NOT_RENDERED, PARAGRAPH, ROW};
use crate::whitespace::WhiteSpace;

/// Transient recursion state threaded down the walk.
///
/// Descendants only ever ask whether a break is guaranteed on a given side,
/// so the break context carries plain booleans.
#[derive(Debug, Clone, Copy)]
struct Context {
    white_space: WhiteSpace,
    /// A line break is guaranteed before this node's content.
    break_before: bool,
    /// A line break is guaranteed after this node's content.
    break_after: bool,
}

/// The prefix/suffix contribution of an element, decided by a mutually
/// exclusive priority order.
#[derive(Debug, Clone, Copy)]
enum Suffix {
    /// A hard, non-mergeable newline string item (`br`, non-terminal rows).
    Hard,
    /// A required line break count merged by maximum in the normalizer.
    Required(usize),
}

/// Computes the rendered text content of `node`.
///
/// The tree is read-only input; all intermediate state is function-local, so
/// concurrent callers may extract from the same tree freely.
pub(crate) fn to_text(node: &Node) -> String {
    // Text and comments at the top level are treated as isolated runs with
    // normal white space: no siblings, breaks asserted on both sides.
    if let Node::Text { value } | Node::Comment { value } = node {
        return collapse_text(value, true, true);
    }

    let children = node.children();
    let block = BLOCK_OR_CAPTION.matches(node);
    let white_space = WhiteSpace::infer(node, WhiteSpace::Normal);

    let mut items: Vec<Item> = Vec::new();
    for (index, child) in children.iter().enumerate() {
        let context = Context {
            white_space,
            break_before: if index == 0 { block } else { false },
            break_after: match children.get(index + 1) {
                Some(next) => BR.matches(next),
                None => block,
            },
        };
        items.extend(inner_text_collection(child, index, node, context));
    }

    normalize(&items)
}

/// One step of the inner text collection: dispatch on the node kind.
fn inner_text_collection(node: &Node, index: usize, parent: &Node, context: Context) -> Vec<Item> {
    match node {
        Node::Element { .. } => collect_element(node, index, parent, context),
        Node::Text { value } => {
            let text = if context.white_space == WhiteSpace::Normal {
                collapse_text(value, context.break_before, context.break_after)
            } else {
                // pre, pre-wrap, and nowrap preserve the value verbatim.
                value.clone()
            };
            vec![Item::Text(text)]
        }
        _ => Vec::new(),
    }
}

/// Collects a rendered element: children first, then the cell separator,
/// then the prefix/suffix required breaks.
fn collect_element(node: &Node, index: usize, parent: &Node, context: Context) -> Vec<Item> {
    let mut items: Vec<Item> = Vec::new();

    if NOT_RENDERED.matches(node) {
        return items;
    }

    let white_space = WhiteSpace::infer(node, context.white_space);
    let children = node.children();
    let mut prefix: Option<usize> = None;
    let mut suffix: Option<Suffix> = None;

    // Prefix/suffix priority order; first match wins.
    if BR.matches(node) {
        suffix = Some(Suffix::Hard);
    } else if ROW.matches(node) && next_match(parent, index, &ROW).is_some() {
        // A table row that is not the last row of its enclosing group ends
        // with a line feed. Later siblings only; no thead/tbody row model.
        suffix = Some(Suffix::Hard);
    } else if PARAGRAPH.matches(node) {
        prefix = Some(2);
        suffix = Some(Suffix::Required(2));
    } else if BLOCK_OR_CAPTION.matches(node) {
        prefix = Some(1);
        suffix = Some(Suffix::Required(1));
    }

    for (child_index, child) in children.iter().enumerate() {
        let child_context = Context {
            white_space,
            break_before: child_index == 0 && prefix.is_some(),
            break_after: match children.get(child_index + 1) {
                Some(next) => BR.matches(next),
                None => suffix.is_some(),
            },
        };
        items.extend(inner_text_collection(child, child_index, node, child_context));
    }

    // A table cell that is not the last cell of its row gets a trailing tab.
    if CELL.matches(node) && next_match(parent, index, &CELL).is_some() {
        items.push(Item::Text("\t".to_owned()));
    }

    if let Some(count) = prefix {
        items.insert(0, Item::Break(count));
    }
    match suffix {
        Some(Suffix::Hard) => items.push(Item::Text("\n".to_owned())),
        Some(Suffix::Required(count)) => items.push(Item::Break(count)),
        None => {}
    }

    items
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_level_text_is_collapsed_as_isolated() {
        assert_eq!(to_text(&Node::text("  a   b  ")), "a b");
    }

    #[test]
    fn top_level_comment_is_collapsed_as_isolated() {
        assert_eq!(to_text(&Node::comment(" note ")), "note");
    }

    #[test]
    fn nested_comments_contribute_nothing() {
        let root = Node::root(vec![Node::element(
            "p",
            vec![Node::text("a"), Node::comment("gone"), Node::text("b")],
        )]);
        assert_eq!(to_text(&root), "ab");
    }

    #[test]
    fn unknown_node_kinds_contribute_nothing() {
        let root = Node::root(vec![Node::Other, Node::text("kept")]);
        assert_eq!(to_text(&root), "kept");
    }

    #[test]
    fn br_emits_a_hard_newline() {
        let root = Node::root(vec![Node::element(
            "div",
            vec![Node::text("A"), Node::element("br", vec![]), Node::text("B")],
        )]);
        assert_eq!(to_text(&root), "A\nB");
    }

    #[test]
    fn text_before_br_drops_trailing_space() {
        let root = Node::root(vec![Node::element(
            "div",
            vec![Node::text("a "), Node::element("br", vec![]), Node::text(" b")],
        )]);
        // The break after "a " is asserted by the br; the space before "b"
        // has no break before it and survives as a single space.
        assert_eq!(to_text(&root), "a\n b");
    }

    #[test]
    fn empty_paragraph_still_separates_text() {
        let root = Node::root(vec![
            Node::text("a"),
            Node::element("p", vec![]),
            Node::text("b"),
        ]);
        assert_eq!(to_text(&root), "a\n\nb");
    }

    #[test]
    fn extraction_does_not_mutate_the_tree() {
        let root = Node::root(vec![Node::element("p", vec![Node::text(" x ")])]);
        let before = root.clone();
        let _ = to_text(&root);
        assert_eq!(root, before);
    }
}
