//! Required-line-break normalization.
//!
//! The collector produces a flat list of [`Item`]s: literal strings and
//! required break counts. This pass drops empty strings, trims break runs at
//! the edges, collapses interior runs to `max(counts)` newlines, and joins
//! the rest into the final string.

use crate::repeat::RepeatCache;

/// One unit of collected output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Item {
    /// A literal string; empty strings are filtered here.
    Text(String),
    /// A required line break count. Adjacent counts merge by maximum.
    Break(usize),
}

/// Flattens an item list into the final extracted string.
pub(crate) fn normalize(items: &[Item]) -> String {
    // Unset until the first text item, so leading break runs are dropped;
    // trailing runs accumulate but are never flushed.
    let mut pending: Option<usize> = None;
    let mut result = String::new();
    let mut cache = RepeatCache::new();

    for item in items {
        match item {
            Item::Break(count) => {
                if let Some(current) = pending {
                    if *count > current {
                        pending = Some(*count);
                    }
                }
            }
            Item::Text(text) if !text.is_empty() => {
                if let Some(count) = pending.take() {
                    if count > 0 {
                        result.push_str(&cache.repeat("\n", count));
                    }
                }
                pending = Some(0);
                result.push_str(text);
            }
            Item::Text(_) => {}
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(value: &str) -> Item {
        Item::Text(value.to_owned())
    }

    #[test]
    fn interior_runs_merge_by_maximum() {
        let items = [text("a"), Item::Break(1), Item::Break(2), Item::Break(1), text("b")];
        assert_eq!(normalize(&items), "a\n\nb");
    }

    #[test]
    fn leading_and_trailing_runs_are_dropped() {
        let items = [Item::Break(2), text("a"), Item::Break(2)];
        assert_eq!(normalize(&items), "a");
    }

    #[test]
    fn empty_strings_do_not_flush_pending_breaks() {
        let items = [text("a"), Item::Break(1), text(""), Item::Break(2), text("b")];
        assert_eq!(normalize(&items), "a\n\nb");
    }

    #[test]
    fn literal_newlines_pass_through_unmerged() {
        // A hard newline is a string item, not a break count.
        let items = [text("a"), text("\n"), text("b")];
        assert_eq!(normalize(&items), "a\nb");
    }

    #[test]
    fn only_breaks_produce_nothing() {
        let items = [Item::Break(2), Item::Break(1)];
        assert_eq!(normalize(&items), "");
    }

    #[test]
    fn adjacent_text_concatenates_directly() {
        let items = [text("a"), text("b")];
        assert_eq!(normalize(&items), "ab");
    }
}
