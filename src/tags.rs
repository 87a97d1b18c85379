//! Tag catalogs and the selectors built from them.
//!
//! All selectors are resolved once at startup using `LazyLock` and reused
//! across every tree walk.

use std::sync::LazyLock;

use crate::node::{is_truthy, Node};
use crate::selector::Selector;

/// Elements that contribute no visible text regardless of their children.
/// From the HTML hidden-elements list, plus `noscript` since we act as if
/// scripting is supported. Void elements are omitted as they have no text.
pub static HIDDEN_TAGS: [&str; 10] = [
    "datalist", "head", "noembed", "noframes", "rp", "script", "style", "template", "title",
    "noscript",
];

/// Tags whose used `display` is block-level or `table-caption` under the
/// user-agent style sheet.
pub static BLOCK_OR_CAPTION_TAGS: [&str; 39] = [
    "caption", // `table-caption`
    // Page
    "html", "body",
    // Flow content
    "address", "blockquote", "center", "dialog", "div", "figure", "figcaption", "footer", "form",
    "header", "hr", "legend", "listing", "main", "p", "plaintext", "pre", "xmp",
    // Sections and headings
    "article", "aside", "h1", "h2", "h3", "h4", "h5", "h6", "hgroup", "nav", "section",
    // Lists
    "dir", "dd", "dl", "dt", "menu", "ol", "ul",
];

/// Matches `br` line-break elements.
pub static BR: LazyLock<Selector> = LazyLock::new(|| Selector::tag("br"));

/// Matches `p` paragraph elements.
pub static PARAGRAPH: LazyLock<Selector> = LazyLock::new(|| Selector::tag("p"));

/// Matches table cells.
pub static CELL: LazyLock<Selector> = LazyLock::new(|| Selector::any_tag(&["th", "td"]));

/// Matches table rows.
pub static ROW: LazyLock<Selector> = LazyLock::new(|| Selector::tag("tr"));

/// Matches elements that are not being rendered: the fixed hidden-tag set,
/// anything with a truthy `hidden` property, and `dialog` without `open`.
pub static NOT_RENDERED: LazyLock<Selector> = LazyLock::new(|| {
    let mut selectors: Vec<Selector> = HIDDEN_TAGS.iter().map(|tag| Selector::tag(tag)).collect();
    selectors.push(Selector::Test(is_hidden));
    selectors.push(Selector::Test(is_closed_dialog));
    Selector::AnyOf(selectors)
});

/// Matches block-level-or-caption elements.
pub static BLOCK_OR_CAPTION: LazyLock<Selector> =
    LazyLock::new(|| Selector::any_tag(&BLOCK_OR_CAPTION_TAGS));

fn is_hidden(node: &Node, _index: Option<usize>, _parent: Option<&Node>) -> bool {
    node.property("hidden").is_some_and(is_truthy)
}

fn is_closed_dialog(node: &Node, _index: Option<usize>, _parent: Option<&Node>) -> bool {
    node.tag() == Some("dialog") && !node.property("open").is_some_and(is_truthy)
}
