//! CSS segment-break collapsing for text nodes.
//!
//! Implements white-space phase-1 processing for `white-space: normal` text:
//! bidi-control characters are ignored, tab/space runs collapse, runs
//! adjacent to a segment break are removed, and the break itself converts to
//! a space unless a zero-width space absorbs it.
//!
//! East-Asian-width segment-break suppression is deliberately not
//! implemented; a collapsible segment break always converts to a space.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

/// Bidi_Control code points: ALM, LRM, RLM, LRE-RLO, LRI-PDI.
static BIDI_CONTROLS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\u{061C}\u{200E}\u{200F}\u{202A}-\u{202E}\u{2066}-\u{2069}]")
        .expect("BIDI_CONTROLS regex")
});

/// Runs of collapsible horizontal white space.
static TABS_OR_SPACES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\t ]+").expect("TABS_OR_SPACES regex"));

const ZWSP: char = '\u{200B}';

/// Collapses a raw text value under `white-space: normal`.
///
/// `break_before`/`break_after` assert that a line break is already
/// guaranteed on that side of the node; white space trimmed at such an edge
/// vanishes instead of leaving a collapsed space behind.
pub(crate) fn collapse_text(value: &str, break_before: bool, break_after: bool) -> String {
    let stripped = BIDI_CONTROLS.replace_all(value, "");

    // A line feed at the very end terminates its segment without opening a
    // trailing empty one.
    let mut segments: Vec<&str> = stripped.split('\n').collect();
    if stripped.ends_with('\n') {
        segments.pop();
    }

    let last = segments.len().saturating_sub(1);
    let lines: Vec<String> = segments
        .iter()
        .enumerate()
        .map(|(index, segment)| {
            // Interior segment boundaries count as asserted breaks; only the
            // outer edges see the caller's context.
            trim_and_collapse(
                segment,
                if index == 0 { break_before } else { true },
                if index == last { break_after } else { true },
            )
        })
        .collect();

    // Each collapsible segment break converts to a space, unless the
    // character on either side of it is a zero-width space, which absorbs
    // the break. Empty segments are skipped and never force a join.
    let mut result = String::new();
    let mut previous: Option<&str> = None;
    for line in &lines {
        if line.is_empty() {
            continue;
        }
        if let Some(prev) = previous {
            let absorbed = prev.ends_with(ZWSP) || line.starts_with(ZWSP);
            if !absorbed {
                result.push(' ');
            }
        }
        result.push_str(line);
        previous = Some(line);
    }

    result
}

/// Removes tab/space runs adjacent to the segment edges and collapses
/// interior runs to a single space.
///
/// A removed edge run still materializes as one space when the matching
/// `break_*` flag is unset, because no line break will separate this text
/// from its neighbor.
fn trim_and_collapse(value: &str, break_before: bool, break_after: bool) -> String {
    let mut parts: Vec<&str> = Vec::new();
    let mut start = 0;
    let mut end = 0;

    while start < value.len() {
        let run = TABS_OR_SPACES.find_at(value, start);
        end = run.map_or(value.len(), |m| m.start());

        // Leading white space with no break before it: keep a placeholder
        // that the join below turns into a single space.
        if start == 0 && end == 0 && run.is_some() && !break_before {
            parts.push("");
        }

        if start != end {
            parts.push(&value[start..end]);
        }

        start = run.map_or(end, |m| m.end());
    }

    // Trailing white space with no break after it, same placeholder trick.
    if start != end && !break_after {
        parts.push("");
    }

    parts.join(" ")
}
